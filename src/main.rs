mod args;
mod config;
mod reader;
mod writer;

use tbl::{input::InputEvent, services::BankService, Result};

use std::io;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let mut bank = tbl::build_bank_service();

    process_script(&mut bank)?;

    log::debug!("Process complete. Beginning report...");

    writer::write_report(&bank, &mut io::stdout().lock())?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the operation script and apply every row to the bank
fn process_script(bank: &mut BankService) -> Result {
    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let mut rdr = reader::build_csv_reader(input_path)?;

    log::debug!("Deserializing reader...");
    for (row, record) in rdr.deserialize::<InputEvent>().enumerate() {
        log::debug!("Parsing row {row} into InputEvent: {record:?}");
        let input_event = match record {
            Ok(input_event) => input_event,
            Err(e) => {
                log::warn!("Skipping row {row}: {e}");
                continue;
            }
        };

        let operation = match input_event.parse_operation() {
            Ok(operation) => operation,
            Err(e) => {
                log::warn!("Skipping row {row}: {e}");
                continue;
            }
        };

        if let Err(e) = bank.apply(operation) {
            log::warn!("Rejected row {row}: {e}");
        }
    }

    Ok(())
}
