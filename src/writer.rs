use tbl::services::BankService;
use tbl::Result;

use std::io::Write;

/// Writes every client with its history, then every account, then the account count
pub fn write_report(bank: &BankService, out: &mut impl Write) -> Result {
    for client in bank.clients() {
        log::debug!("Reporting client {}", client.id());

        writeln!(out, "{client}")?;
        for entry in client.history() {
            writeln!(out, "{entry}")?;
        }
    }

    for account in bank.accounts() {
        log::debug!("Reporting account {}", account.code());

        writeln!(out, "{}", bank.describe_account(account.code())?)?;
    }

    writeln!(out, "{}", bank.describe_account_count())?;

    out.flush()?;

    Ok(())
}
