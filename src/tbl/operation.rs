use crate::ids::{AccountCode, ClientId};
use crate::Money;

/// A requested change to the bank, addressed by client ids and account codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    RegisterClient {
        cin: String,
        first_name: String,
        last_name: String,
        phone: String,
    },
    SetPhone {
        client: ClientId,
        phone: String,
    },
    OpenAccount {
        client: ClientId,
    },
    CreateAccount {
        owner: ClientId,
    },
    RegisterAccount {
        client: ClientId,
        account: AccountCode,
    },
    Deposit {
        client: ClientId,
        account: AccountCode,
        amount: Money,
    },
    Withdraw {
        client: ClientId,
        account: AccountCode,
        amount: Money,
    },
    Transfer {
        client: ClientId,
        from: AccountCode,
        to: AccountCode,
        amount: Money,
    },
}
