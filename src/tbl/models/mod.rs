mod account;
mod client;
mod history;

pub use account::{display_account_count, Account, AccountDisplay, AccountError};
pub use client::{Client, ClientError, TransferReceipt};
pub use history::{HistoryKind, HistoryRecord, HistorySink};
