use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::common::LINE_ENDING;
use crate::error::{Error, Result};

const OUTPUT_BUF_SIZE: usize = 64 * 1024;

/// Write `records` to `path`, one per line, replacing any existing file.
/// The file is flushed and closed before this returns.
pub fn write_records<S: AsRef<str>>(records: &[S], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::write(path, e))?;
    let mut out = BufWriter::with_capacity(OUTPUT_BUF_SIZE, file);
    write_records_to(records, &mut out)
        .and_then(|()| out.flush())
        .map_err(|e| Error::write(path, e))?;
    info!(path = %path.display(), records = records.len(), "wrote sorted list");
    Ok(())
}

/// Write `records` to `out`, each followed by the platform line ending.
pub fn write_records_to<S: AsRef<str>>(records: &[S], out: &mut impl Write) -> io::Result<()> {
    for record in records {
        out.write_all(record.as_ref().as_bytes())?;
        out.write_all(LINE_ENDING)?;
    }
    Ok(())
}
