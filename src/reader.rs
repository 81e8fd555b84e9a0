use tbl::Result;

use std::{fs::File, path::PathBuf};

use csv::{Reader, ReaderBuilder, Trim};

/// Script rows may leave any column empty, so the reader must tolerate short rows
pub fn build_csv_reader(filepath: PathBuf) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .comment(Some(b'#'))
        .from_path(filepath)?;

    Ok(reader)
}
