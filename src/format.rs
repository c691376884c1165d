use std::io::{self, Write};

use crate::record::ModuleRecord;

/// Minimum width every column is left-padded to.
const COLUMN_WIDTH: usize = 17;

/// Display-time divisor for the size column; stored sizes stay in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Bytes,
    Kilobytes,
    Megabytes,
}

impl SizeUnit {
    pub fn divisor(self) -> u64 {
        match self {
            SizeUnit::Bytes => 1,
            SizeUnit::Kilobytes => 1024,
            SizeUnit::Megabytes => 1_048_576,
        }
    }
}

/// Render the header plus one line per record, four left-aligned
/// columns. `status` and `load_address` are never shown.
pub fn write_table<W: Write>(
    out: &mut W,
    records: &[ModuleRecord],
    unit: SizeUnit,
) -> io::Result<()> {
    writeln!(
        out,
        "{:<w$}{:<w$}{:<w$}{:<w$}",
        "Module",
        "Size",
        "NumUsers",
        "Users",
        w = COLUMN_WIDTH
    )?;
    for record in records {
        writeln!(
            out,
            "{:<w$}{:<w$}{:<w$}{:<w$}",
            record.name,
            record.size / unit.divisor(),
            record.user_count,
            record.users,
            w = COLUMN_WIDTH
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisors() {
        assert_eq!(SizeUnit::Bytes.divisor(), 1);
        assert_eq!(SizeUnit::Kilobytes.divisor(), 1024);
        assert_eq!(SizeUnit::Megabytes.divisor(), 1_048_576);
    }
}
