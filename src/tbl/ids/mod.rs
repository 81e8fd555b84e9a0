mod account_code;
mod client_id;
mod sequence;

pub use account_code::AccountCode;
pub use client_id::ClientId;
pub use sequence::{Sequence, SequenceError};
