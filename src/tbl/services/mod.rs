mod bank_service;

pub use bank_service::{AccountDataStore, BankService, BankServiceError, ClientDataStore};
