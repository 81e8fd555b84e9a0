use super::{Account, HistoryKind, HistoryRecord, HistorySink};

use crate::ids::{AccountCode, ClientId};
use crate::{Money, Result};

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Deposit amount must be positive: {0} DA")]
    NonPositiveDeposit(Money),

    #[error("Withdrawal amount must be positive: {0} DA")]
    NonPositiveWithdrawal(Money),

    #[error("Transfer amount must be positive: {0} DA")]
    NonPositiveTransfer(Money),

    #[error("Insufficient balance on account {0}: {1} DA available, {2} DA requested")]
    InsufficientBalance(AccountCode, Money, Money),

    #[error("Insufficient balance for transfer from account {0}: {1} DA available, {2} DA requested")]
    InsufficientBalanceForTransfer(AccountCode, Money, Money),
}

/// Outcome of a completed transfer. The sender's record is already in the sender's history,
/// the recipient's record still has to be handed to whoever owns the recipient account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub sender: HistoryRecord,
    pub recipient: HistoryRecord,
    pub recipient_owner: ClientId,
}

impl TransferReceipt {
    pub fn deliver(&self, sink: &mut dyn HistorySink) {
        sink.record(self.recipient.clone());
    }
}

/// Bank customer: identity, tracked accounts and an append-only history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    cin: String,
    first_name: String,
    last_name: String,
    phone: String,
    accounts: Vec<AccountCode>,
    history: Vec<HistoryRecord>,
}

impl Client {
    pub fn new(
        id: ClientId,
        cin: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            cin: cin.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: String::new(),
            accounts: vec![],
            history: vec![],
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn cin(&self) -> &str {
        &self.cin
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn accounts(&self) -> &[AccountCode] {
        &self.accounts
    }

    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// Creates an account owned by this client under a freshly allocated `code`
    pub fn open_account(&mut self, code: AccountCode) -> Account {
        let account = Account::new(code, self.id);
        self.track(code);

        log::debug!("Client {} opened account {code}", self.id);

        account
    }

    /// Tracks an externally created account. Ownership is left as it is.
    pub fn register_account(&mut self, account: &Account) {
        self.track(account.code());
    }

    pub fn deposit_to_account(&mut self, account: &mut Account, amount: Money) -> Result<HistoryRecord> {
        if !amount.is_positive() {
            Err(ClientError::NonPositiveDeposit(amount))?
        }

        account.credit(amount)?;

        if account.owner() == self.id {
            self.track(account.code());
        }

        Ok(self.append(HistoryKind::Deposit, amount, account.balance()))
    }

    pub fn withdraw_from_account(
        &mut self,
        account: &mut Account,
        amount: Money,
    ) -> Result<HistoryRecord> {
        if !amount.is_positive() {
            Err(ClientError::NonPositiveWithdrawal(amount))?
        }

        if account.balance() < amount {
            Err(ClientError::InsufficientBalance(
                account.code(),
                account.balance(),
                amount,
            ))?
        }

        account.debit(amount)?;

        Ok(self.append(HistoryKind::Withdraw, amount, account.balance()))
    }

    /// Moves `amount` from `from` into `to` and records it in this client's history.
    ///
    /// The recipient side of the history is returned in the receipt rather than written
    /// here, since the recipient account may belong to any client (including this one).
    pub fn transfer(
        &mut self,
        from: &mut Account,
        to: &mut Account,
        amount: Money,
    ) -> Result<TransferReceipt> {
        if !amount.is_positive() {
            Err(ClientError::NonPositiveTransfer(amount))?
        }

        if from.balance() < amount {
            Err(ClientError::InsufficientBalanceForTransfer(
                from.code(),
                from.balance(),
                amount,
            ))?
        }

        from.transfer_to(to, amount)?;

        let sender = self.append(HistoryKind::Transfer, amount, from.balance());
        let recipient = HistoryRecord::new(HistoryKind::Transfer, amount, to.balance());

        Ok(TransferReceipt {
            sender,
            recipient,
            recipient_owner: to.owner(),
        })
    }

    /// One line per history record, oldest first
    pub fn display_history(&self) -> String {
        self.history
            .iter()
            .map(HistoryRecord::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn track(&mut self, code: AccountCode) {
        if !self.accounts.contains(&code) {
            self.accounts.push(code);
        }
    }

    fn append(&mut self, kind: HistoryKind, amount: Money, balance_after: Money) -> HistoryRecord {
        let entry = HistoryRecord::new(kind, amount, balance_after);
        self.history.push(entry.clone());

        log::debug!("Client {} recorded: {entry}", self.id);

        entry
    }
}

impl HistorySink for Client {
    fn record(&mut self, entry: HistoryRecord) {
        log::debug!("Client {} received: {entry}", self.id);
        self.history.push(entry);
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CIN: {}, Name: {} {}, Tel: {}, ID: {}",
            self.cin, self.first_name, self.last_name, self.phone, self.id
        )
    }
}
