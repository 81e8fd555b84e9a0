use crate::Money;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Deposit,
    Withdraw,
    Transfer,
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let title = match self {
            HistoryKind::Deposit => "Deposit",
            HistoryKind::Withdraw => "Withdraw",
            HistoryKind::Transfer => "Transfer",
        };

        f.write_str(title)
    }
}

/// Immutable log entry describing one completed operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub kind: HistoryKind,
    pub amount: Money,
    pub balance_after: Money,
}

impl HistoryRecord {
    pub fn new(kind: HistoryKind, amount: Money, balance_after: Money) -> Self {
        Self {
            kind,
            amount,
            balance_after,
        }
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} DA. Balance after: {} DA",
            self.kind, self.amount, self.balance_after
        )
    }
}

/// Anything able to receive history records, such as the owner of a transfer's recipient account
pub trait HistorySink {
    fn record(&mut self, entry: HistoryRecord);
}

impl HistorySink for Vec<HistoryRecord> {
    fn record(&mut self, entry: HistoryRecord) {
        self.push(entry);
    }
}
