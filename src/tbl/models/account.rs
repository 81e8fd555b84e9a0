use super::Client;

use crate::ids::{AccountCode, ClientId};
use crate::{Money, Result};

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Insufficient balance on account {0}: cannot debit {2} DA from {1} DA")]
    InsufficientFunds(AccountCode, Money, Money),
}

/// Balance-holding ledger entry. The owner is fixed at construction and stored by id only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    code: AccountCode,
    balance: Money,
    owner: ClientId,
}

impl Account {
    pub fn new(code: AccountCode, owner: ClientId) -> Self {
        Self {
            code,
            balance: Money::ZERO,
            owner,
        }
    }

    pub fn code(&self) -> AccountCode {
        self.code
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn owner(&self) -> ClientId {
        self.owner
    }

    /// Increases the balance. The amount is not validated here.
    pub fn credit(&mut self, amount: Money) -> Result {
        self.balance.add(&amount)
    }

    /// Decreases the balance, provided it covers `amount`
    pub fn debit(&mut self, amount: Money) -> Result {
        self.ensure_covers(amount)?;

        self.balance.sub(&amount)
    }

    /// Moves `amount` from this account into `recipient`. Either both balances change or
    /// neither does.
    pub fn transfer_to(&mut self, recipient: &mut Account, amount: Money) -> Result {
        self.ensure_covers(amount)?;

        let mut sender_balance = self.balance;
        let mut recipient_balance = recipient.balance;

        sender_balance.sub(&amount)?;
        recipient_balance.add(&amount)?;

        self.balance = sender_balance;
        recipient.balance = recipient_balance;

        log::debug!(
            "Moved {amount} DA from account {} to account {}",
            self.code,
            recipient.code
        );

        Ok(())
    }

    /// Three-line report, resolved against the owning client for its name
    pub fn display<'a>(&'a self, owner: &'a Client) -> AccountDisplay<'a> {
        AccountDisplay {
            account: self,
            owner,
        }
    }

    fn ensure_covers(&self, amount: Money) -> Result {
        if self.balance < amount {
            Err(AccountError::InsufficientFunds(
                self.code,
                self.balance,
                amount,
            ))?
        }

        Ok(())
    }
}

pub struct AccountDisplay<'a> {
    account: &'a Account,
    owner: &'a Client,
}

impl fmt::Display for AccountDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Account Code: {}", self.account.code)?;
        writeln!(f, "Owner: {}", self.owner.full_name())?;
        write!(f, "Balance: {} DA", self.account.balance)
    }
}

/// Class-level count line for a registry that has created `count` accounts
pub fn display_account_count(count: usize) -> String {
    format!("Total accounts created: {count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_CODE: AccountCode = AccountCode(7);
    const OTHER_CODE: AccountCode = AccountCode(8);

    const SOME_OWNER: ClientId = ClientId(1);
    const OTHER_OWNER: ClientId = ClientId(2);

    const SOME_AMOUNT: Money = Money::from_whole(500);
    const OTHER_AMOUNT: Money = Money(1_505_000);

    fn build_account(code: AccountCode, owner: ClientId, balance: Money) -> Account {
        let mut account = Account::new(code, owner);
        account.credit(balance).unwrap();
        account
    }

    #[test]
    fn new_account_is_empty() {
        let account = Account::new(SOME_CODE, SOME_OWNER);

        assert_eq!(account.code(), SOME_CODE);
        assert_eq!(account.owner(), SOME_OWNER);
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn credit() {
        let mut account = Account::new(SOME_CODE, SOME_OWNER);

        account.credit(SOME_AMOUNT).unwrap();
        assert_eq!(account.balance(), Money::from_whole(500));

        account.credit(OTHER_AMOUNT).unwrap();
        assert_eq!(account.balance(), Money(6_505_000));
    }

    #[test]
    fn credit_overflow_leaves_balance() {
        let mut account = build_account(SOME_CODE, SOME_OWNER, Money::MAX);

        assert!(account.credit(Money(1)).is_err());
        assert_eq!(account.balance(), Money::MAX);
    }

    #[test]
    fn debit() {
        let mut account = build_account(SOME_CODE, SOME_OWNER, SOME_AMOUNT);

        account.debit(OTHER_AMOUNT).unwrap();
        assert_eq!(account.balance(), Money(3_495_000));

        account.debit(Money(3_495_000)).unwrap();
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn debit_insufficient_funds() {
        let mut account = build_account(SOME_CODE, SOME_OWNER, OTHER_AMOUNT);

        let err = account.debit(SOME_AMOUNT).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AccountError>(),
            Some(AccountError::InsufficientFunds(SOME_CODE, OTHER_AMOUNT, SOME_AMOUNT))
        ));
        assert_eq!(account.balance(), OTHER_AMOUNT);
    }

    #[test]
    fn debit_then_credit_restores_balance() {
        for amount in [Money(1), OTHER_AMOUNT, SOME_AMOUNT] {
            let mut account = build_account(SOME_CODE, SOME_OWNER, SOME_AMOUNT);

            account.debit(amount).unwrap();
            account.credit(amount).unwrap();

            assert_eq!(account.balance(), SOME_AMOUNT);
        }
    }

    #[test]
    fn transfer_to_conserves_money() {
        let mut sender = build_account(SOME_CODE, SOME_OWNER, SOME_AMOUNT);
        let mut recipient = build_account(OTHER_CODE, OTHER_OWNER, OTHER_AMOUNT);

        let total_before = sender.balance().0 + recipient.balance().0;

        sender
            .transfer_to(&mut recipient, Money::from_whole(150))
            .unwrap();

        assert_eq!(sender.balance(), Money::from_whole(350));
        assert_eq!(recipient.balance(), Money(3_005_000));
        assert_eq!(sender.balance().0 + recipient.balance().0, total_before);
    }

    #[test]
    fn transfer_to_insufficient_funds_changes_nothing() {
        let mut sender = build_account(SOME_CODE, SOME_OWNER, OTHER_AMOUNT);
        let mut recipient = build_account(OTHER_CODE, OTHER_OWNER, Money::ZERO);

        let err = sender.transfer_to(&mut recipient, SOME_AMOUNT).unwrap_err();

        assert!(err.downcast_ref::<AccountError>().is_some());
        assert_eq!(sender.balance(), OTHER_AMOUNT);
        assert_eq!(recipient.balance(), Money::ZERO);
    }

    #[test]
    fn transfer_to_recipient_overflow_changes_nothing() {
        let mut sender = build_account(SOME_CODE, SOME_OWNER, SOME_AMOUNT);
        let mut recipient = build_account(OTHER_CODE, OTHER_OWNER, Money::MAX);

        assert!(sender.transfer_to(&mut recipient, SOME_AMOUNT).is_err());

        assert_eq!(sender.balance(), SOME_AMOUNT);
        assert_eq!(recipient.balance(), Money::MAX);
    }

    #[test]
    fn display() {
        let owner = Client::new(SOME_OWNER, "AB123", "Amine", "Kaci");
        let account = build_account(SOME_CODE, SOME_OWNER, OTHER_AMOUNT);

        assert_eq!(
            account.display(&owner).to_string(),
            "Account Code: 7\nOwner: Amine Kaci\nBalance: 150.5 DA"
        );
    }

    #[test]
    fn account_count() {
        assert_eq!(display_account_count(3), "Total accounts created: 3");
    }
}
