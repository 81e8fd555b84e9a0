use tbl::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("Script not found: {0}")]
    FileNotFound(String),
}

/// Parses the input arguments, requiring exactly one argument: the operation script path
pub fn parse_input_arg() -> Result<PathBuf> {
    let mut args = env::args().skip(1);

    let filename = args.next().ok_or_else(|| {
        InputArgsError::Parse("First argument must be the operation script.".to_string())
    })?;

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!("Unexpected argument: {extra}")))?
    }

    let path = fs::canonicalize(&filename).with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(path)
}
