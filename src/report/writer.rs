use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::extract::FrequencyMap;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(windows)]
const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_TERMINATOR: &str = "\n";

/// Write a frequency map as flat text, one `"<tag>: <count>"` line per
/// entry, in the map's iteration order.
///
/// No header, no footer, no atomic-replace step: a failure mid-write may
/// leave a partially written file behind.
pub fn write_report(path: &Path, tags: &FrequencyMap) -> Result<(), ReportError> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);

    for (tag, count) in tags.iter() {
        write!(writer, "{tag}: {count}{LINE_TERMINATOR}")?;
    }

    writer.flush()?;
    Ok(())
}
