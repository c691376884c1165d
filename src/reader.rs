use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::record::ModuleRecord;

/// Where the kernel exposes the loaded-module table.
pub const MODULES_PATH: &str = "/proc/modules";

// TODO figure out where these rows come from; until then they are
// dropped unconditionally.
const SENTINEL_NAME: &str = "(OE)";

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("{path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read records until the stream ends or a line stops matching the
/// six-field shape. A malformed line ends reading quietly; everything
/// parsed before it is kept. The live pseudo-file can trail off
/// mid-record, so a bad line is end-of-input, not an error.
pub fn read_records<R: BufRead>(reader: R) -> Vec<ModuleRecord> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let Ok(line) = line else { break };
        let Some(record) = ModuleRecord::parse_line(&line) else { break };
        if record.name == SENTINEL_NAME {
            continue;
        }
        records.push(record);
    }
    records
}

/// Open the module table and parse it in one pass. The handle is scoped
/// to this call and closed on every path out.
pub fn load_modules(path: &Path) -> Result<Vec<ModuleRecord>, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    Ok(read_records(BufReader::new(file)))
}
