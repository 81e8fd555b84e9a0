use tbl::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Rejected operations are reported at this level, so they show up unless `RUST_LOG` says otherwise
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(DEFAULT_LEVEL)
        .env()
        .init()?;

    Ok(())
}
