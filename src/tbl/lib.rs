pub mod ids;
pub mod input;
pub mod models;
mod money;
pub mod operation;
mod result;
pub mod services;

pub use money::{Money, MoneyError};
pub use result::Result;

pub fn build_bank_service() -> services::BankService {
    return services::BankService::new();
}
