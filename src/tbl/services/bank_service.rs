use crate::ids::{AccountCode, ClientId, Sequence};
use crate::models::{
    display_account_count, Account, Client, HistoryRecord, HistorySink, TransferReceipt,
};
use crate::operation::Operation;
use crate::{Money, Result};

use std::collections::HashMap;

use thiserror::Error;

pub type ClientDataStore = HashMap<ClientId, Client>;
pub type AccountDataStore = HashMap<AccountCode, Account>;

#[derive(Error, Debug)]
pub enum BankServiceError {
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountCode),

    #[error("Cannot transfer from account {0} to itself")]
    SameAccountTransfer(AccountCode),
}

/// Owns every client and account, and allocates their identifiers
#[derive(Debug, Default)]
pub struct BankService {
    clients: ClientDataStore,
    accounts: AccountDataStore,
    client_ids: Sequence<ClientId>,
    account_codes: Sequence<AccountCode>,
}

impl BankService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sequences(
        client_ids: Sequence<ClientId>,
        account_codes: Sequence<AccountCode>,
    ) -> Self {
        Self {
            client_ids,
            account_codes,
            ..Self::default()
        }
    }

    pub fn register_client(
        &mut self,
        cin: &str,
        first_name: &str,
        last_name: &str,
        phone: &str,
    ) -> Result<ClientId> {
        let id = self.client_ids.next_id()?;

        let mut client = Client::new(id, cin, first_name, last_name);
        client.set_phone(phone);

        log::debug!("Registered client: {client}");

        self.clients.insert(id, client);

        Ok(id)
    }

    pub fn set_phone(&mut self, client_id: ClientId, phone: &str) -> Result {
        self.find_client_mut(client_id)?.set_phone(phone);

        Ok(())
    }

    /// Opens a new account owned and tracked by `client_id`
    pub fn open_account(&mut self, client_id: ClientId) -> Result<AccountCode> {
        let client = self
            .clients
            .get_mut(&client_id)
            .ok_or(BankServiceError::ClientNotFound(client_id))?;

        let code = self.account_codes.next_id()?;
        let account = client.open_account(code);

        self.accounts.insert(code, account);

        Ok(code)
    }

    /// Creates an account owned by `owner` without tracking it on the owner's side
    pub fn create_account(&mut self, owner: ClientId) -> Result<AccountCode> {
        if !self.clients.contains_key(&owner) {
            Err(BankServiceError::ClientNotFound(owner))?
        }

        let code = self.account_codes.next_id()?;
        self.accounts.insert(code, Account::new(code, owner));

        log::debug!("Created account {code} for client {owner}");

        Ok(code)
    }

    pub fn register_account(&mut self, client_id: ClientId, code: AccountCode) -> Result {
        let account = self
            .accounts
            .get(&code)
            .ok_or(BankServiceError::AccountNotFound(code))?;
        let client = self
            .clients
            .get_mut(&client_id)
            .ok_or(BankServiceError::ClientNotFound(client_id))?;

        client.register_account(account);

        Ok(())
    }

    pub fn deposit(
        &mut self,
        client_id: ClientId,
        code: AccountCode,
        amount: Money,
    ) -> Result<HistoryRecord> {
        let client = self
            .clients
            .get_mut(&client_id)
            .ok_or(BankServiceError::ClientNotFound(client_id))?;
        let account = self
            .accounts
            .get_mut(&code)
            .ok_or(BankServiceError::AccountNotFound(code))?;

        client.deposit_to_account(account, amount)
    }

    pub fn withdraw(
        &mut self,
        client_id: ClientId,
        code: AccountCode,
        amount: Money,
    ) -> Result<HistoryRecord> {
        let client = self
            .clients
            .get_mut(&client_id)
            .ok_or(BankServiceError::ClientNotFound(client_id))?;
        let account = self
            .accounts
            .get_mut(&code)
            .ok_or(BankServiceError::AccountNotFound(code))?;

        client.withdraw_from_account(account, amount)
    }

    /// Transfers between two distinct accounts on behalf of `client_id`, then hands the
    /// recipient's record to the recipient account's owner.
    pub fn transfer(
        &mut self,
        client_id: ClientId,
        from: AccountCode,
        to: AccountCode,
        amount: Money,
    ) -> Result<TransferReceipt> {
        if from == to {
            Err(BankServiceError::SameAccountTransfer(from))?
        }

        let client = self
            .clients
            .get_mut(&client_id)
            .ok_or(BankServiceError::ClientNotFound(client_id))?;

        let [from_account, to_account] = self.accounts.get_disjoint_mut([&from, &to]);
        let from_account = from_account.ok_or(BankServiceError::AccountNotFound(from))?;
        let to_account = to_account.ok_or(BankServiceError::AccountNotFound(to))?;

        let receipt = client.transfer(from_account, to_account, amount)?;

        match self.history_sink(receipt.recipient_owner) {
            Some(sink) => receipt.deliver(sink),
            None => log::debug!(
                "Recipient owner {} cannot receive history, skipping record",
                receipt.recipient_owner
            ),
        }

        Ok(receipt)
    }

    pub fn apply(&mut self, operation: Operation) -> Result {
        log::debug!("Applying operation: {operation:?}");

        match operation {
            Operation::RegisterClient {
                cin,
                first_name,
                last_name,
                phone,
            } => {
                self.register_client(&cin, &first_name, &last_name, &phone)?;
            }
            Operation::SetPhone { client, phone } => self.set_phone(client, &phone)?,
            Operation::OpenAccount { client } => {
                self.open_account(client)?;
            }
            Operation::CreateAccount { owner } => {
                self.create_account(owner)?;
            }
            Operation::RegisterAccount { client, account } => {
                self.register_account(client, account)?
            }
            Operation::Deposit {
                client,
                account,
                amount,
            } => {
                self.deposit(client, account, amount)?;
            }
            Operation::Withdraw {
                client,
                account,
                amount,
            } => {
                self.withdraw(client, account, amount)?;
            }
            Operation::Transfer {
                client,
                from,
                to,
                amount,
            } => {
                self.transfer(client, from, to, amount)?;
            }
        }

        Ok(())
    }

    pub fn client(&self, client_id: ClientId) -> Option<&Client> {
        self.clients.get(&client_id)
    }

    pub fn account(&self, code: AccountCode) -> Option<&Account> {
        self.accounts.get(&code)
    }

    /// Clients in id order
    pub fn clients(&self) -> Vec<&Client> {
        let mut clients = self.clients.values().collect::<Vec<_>>();
        clients.sort_by_key(|client| client.id());
        clients
    }

    /// Accounts in code order
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts = self.accounts.values().collect::<Vec<_>>();
        accounts.sort_by_key(|account| account.code());
        accounts
    }

    pub fn accounts_created(&self) -> usize {
        self.account_codes.issued()
    }

    pub fn describe_client(&self, client_id: ClientId) -> Result<String> {
        Ok(self.find_client(client_id)?.to_string())
    }

    pub fn describe_history(&self, client_id: ClientId) -> Result<String> {
        Ok(self.find_client(client_id)?.display_history())
    }

    pub fn describe_account(&self, code: AccountCode) -> Result<String> {
        let account = self
            .accounts
            .get(&code)
            .ok_or(BankServiceError::AccountNotFound(code))?;
        let owner = self.find_client(account.owner())?;

        Ok(account.display(owner).to_string())
    }

    pub fn describe_account_count(&self) -> String {
        display_account_count(self.accounts_created())
    }

    fn history_sink(&mut self, client_id: ClientId) -> Option<&mut dyn HistorySink> {
        self.clients
            .get_mut(&client_id)
            .map(|client| client as &mut dyn HistorySink)
    }

    fn find_client(&self, client_id: ClientId) -> Result<&Client> {
        let client = self
            .clients
            .get(&client_id)
            .ok_or(BankServiceError::ClientNotFound(client_id))?;

        Ok(client)
    }

    fn find_client_mut(&mut self, client_id: ClientId) -> Result<&mut Client> {
        let client = self
            .clients
            .get_mut(&client_id)
            .ok_or(BankServiceError::ClientNotFound(client_id))?;

        Ok(client)
    }
}
