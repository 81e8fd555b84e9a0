use crate::ids::{AccountCode, ClientId};
use crate::operation::Operation;
use crate::Money;
use crate::Result;

use serde::Deserialize;

use thiserror::Error;

/// Represents one row of an operation script
#[derive(Deserialize, Debug, Clone, Default)]
pub struct InputEvent {
    #[serde(rename = "type")]
    pub typ: InputEventType,

    pub client: Option<u32>,
    pub account: Option<u32>,
    pub to: Option<u32>,
    pub amount: Option<String>,
    pub cin: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputEventType {
    #[default]
    Client,
    Phone,
    Open,
    Create,
    Register,
    Deposit,
    Withdraw,
    Transfer,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input event: {0} value missing from {1:?} row: {2:?}")]
    MissingField(&'static str, InputEventType, InputEvent),

    #[error("Error parsing input event: invalid amount in {0:?} row: {1}")]
    InvalidAmount(InputEventType, anyhow::Error),
}

impl InputEvent {
    pub fn parse_operation(self) -> Result<Operation> {
        let operation = match self.typ {
            InputEventType::Client => Operation::RegisterClient {
                cin: self.text("cin", &self.cin)?,
                first_name: self.text("first_name", &self.first_name)?,
                last_name: self.text("last_name", &self.last_name)?,
                phone: self.phone.clone().unwrap_or_default(),
            },
            InputEventType::Phone => Operation::SetPhone {
                client: self.client_id()?,
                phone: self.phone.clone().unwrap_or_default(),
            },
            InputEventType::Open => Operation::OpenAccount {
                client: self.client_id()?,
            },
            InputEventType::Create => Operation::CreateAccount {
                owner: self.client_id()?,
            },
            InputEventType::Register => Operation::RegisterAccount {
                client: self.client_id()?,
                account: self.account_code()?,
            },
            InputEventType::Deposit => Operation::Deposit {
                client: self.client_id()?,
                account: self.account_code()?,
                amount: self.amount()?,
            },
            InputEventType::Withdraw => Operation::Withdraw {
                client: self.client_id()?,
                account: self.account_code()?,
                amount: self.amount()?,
            },
            InputEventType::Transfer => Operation::Transfer {
                client: self.client_id()?,
                from: self.account_code()?,
                to: AccountCode(self.required("to", self.to)?),
                amount: self.amount()?,
            },
        };

        Ok(operation)
    }

    fn client_id(&self) -> Result<ClientId> {
        Ok(ClientId(self.required("client", self.client)?))
    }

    fn account_code(&self) -> Result<AccountCode> {
        Ok(AccountCode(self.required("account", self.account)?))
    }

    /// Amounts are parsed but not range checked; non-positive values are refused by the client
    fn amount(&self) -> Result<Money> {
        let amount = self.text("amount", &self.amount)?;

        let amount =
            Money::parse(&amount).map_err(|e| InputParseError::InvalidAmount(self.typ, e))?;

        Ok(amount)
    }

    fn text(&self, field: &'static str, value: &Option<String>) -> Result<String> {
        match value {
            Some(value) if !value.is_empty() => Ok(value.clone()),
            _ => Err(InputParseError::MissingField(field, self.typ, self.clone()).into()),
        }
    }

    fn required<T>(&self, field: &'static str, value: Option<T>) -> Result<T> {
        let value =
            value.ok_or_else(|| InputParseError::MissingField(field, self.typ, self.clone()))?;

        Ok(value)
    }
}
