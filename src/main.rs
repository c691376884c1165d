use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use elsmod::{
    load_modules, sort_records, write_table, SizeUnit, SortDirection, SortField, SortSelection,
    MODULES_PATH,
};

// sysexits(3) codes, kept for script compatibility
const EX_USAGE: u8 = 64;
const EX_IOERR: u8 = 74;

#[derive(Parser, Debug)]
#[command(
    name = "elsmod",
    version,
    about = "List loaded kernel modules, sorted",
    args_override_self = true
)]
struct Opts {
    /// Sort field
    #[arg(short = 'f', value_enum, default_value = "n", value_name = "FIELD")]
    field: FieldCode,
    /// Sort direction
    #[arg(short = 'o', value_enum, default_value = "a", value_name = "ORDER")]
    order: OrderCode,
    /// Display units for the size column
    #[arg(short = 'u', value_enum, default_value = "b", value_name = "UNIT")]
    unit: UnitCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FieldCode {
    /// module name
    #[value(name = "n")]
    Name,
    /// size in bytes
    #[value(name = "s")]
    Size,
    /// number of users
    #[value(name = "u")]
    Users,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderCode {
    /// ascending
    #[value(name = "a")]
    Ascending,
    /// descending
    #[value(name = "d")]
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UnitCode {
    /// bytes
    #[value(name = "b")]
    Bytes,
    /// kilobytes
    #[value(name = "k")]
    Kilobytes,
    /// megabytes
    #[value(name = "m")]
    Megabytes,
}

impl From<FieldCode> for SortField {
    fn from(code: FieldCode) -> Self {
        match code {
            FieldCode::Name => SortField::Name,
            FieldCode::Size => SortField::Size,
            FieldCode::Users => SortField::UserCount,
        }
    }
}

impl From<OrderCode> for SortDirection {
    fn from(code: OrderCode) -> Self {
        match code {
            OrderCode::Ascending => SortDirection::Ascending,
            OrderCode::Descending => SortDirection::Descending,
        }
    }
}

impl From<UnitCode> for SizeUnit {
    fn from(code: UnitCode) -> Self {
        match code {
            UnitCode::Bytes => SizeUnit::Bytes,
            UnitCode::Kilobytes => SizeUnit::Kilobytes,
            UnitCode::Megabytes => SizeUnit::Megabytes,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Usage goes to stderr in every case; only the table touches stdout.
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(err) => {
            eprint!("{err}");
            return ExitCode::from(parse_error_status(&err));
        }
    };

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("elsmod: {err:#}");
            ExitCode::from(EX_IOERR)
        }
    }
}

// Help and version requests exit clean; any other parse failure is a
// usage error.
fn parse_error_status(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => EX_USAGE,
    }
}

fn run(opts: &Opts) -> Result<()> {
    let selection = SortSelection {
        field: opts.field.into(),
        direction: opts.order.into(),
    };
    let mut records = load_modules(Path::new(MODULES_PATH))?;
    tracing::debug!(count = records.len(), ?selection, "parsed module table");
    sort_records(&mut records, selection);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, &records, opts.unit.into())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_name_ascending_bytes() {
        let opts = Opts::try_parse_from(["elsmod"]).unwrap();
        assert_eq!(opts.field, FieldCode::Name);
        assert_eq!(opts.order, OrderCode::Ascending);
        assert_eq!(opts.unit, UnitCode::Bytes);
    }

    #[test]
    fn last_repeated_flag_wins() {
        let opts = Opts::try_parse_from(["elsmod", "-f", "s", "-f", "u"]).unwrap();
        assert_eq!(opts.field, FieldCode::Users);

        let opts = Opts::try_parse_from(["elsmod", "-o", "d", "-o", "a"]).unwrap();
        assert_eq!(opts.order, OrderCode::Ascending);
    }

    #[test]
    fn unknown_value_or_flag_is_a_parse_error() {
        assert!(Opts::try_parse_from(["elsmod", "-f", "x"]).is_err());
        assert!(Opts::try_parse_from(["elsmod", "-u", "g"]).is_err());
        assert!(Opts::try_parse_from(["elsmod", "-z"]).is_err());
    }

    #[test]
    fn help_and_version_exit_clean() {
        let err = Opts::try_parse_from(["elsmod", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse_error_status(&err), 0);

        let err = Opts::try_parse_from(["elsmod", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert_eq!(parse_error_status(&err), 0);
    }

    #[test]
    fn bad_values_and_flags_map_to_usage_status() {
        let err = Opts::try_parse_from(["elsmod", "-f", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(parse_error_status(&err), EX_USAGE);

        let err = Opts::try_parse_from(["elsmod", "-z"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(parse_error_status(&err), EX_USAGE);
    }

    #[test]
    fn codes_map_onto_selection() {
        assert_eq!(SortField::from(FieldCode::Users), SortField::UserCount);
        assert_eq!(SortDirection::from(OrderCode::Descending), SortDirection::Descending);
        assert_eq!(SizeUnit::from(UnitCode::Megabytes).divisor(), 1_048_576);
    }
}
