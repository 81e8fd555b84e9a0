use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountCode(pub u32);

impl fmt::Display for AccountCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl From<u32> for AccountCode {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
