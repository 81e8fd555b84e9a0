use crate::Result;

use std::marker::PhantomData;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Identifier sequence exhausted after {0}")]
    Exhausted(u32),
}

/// Hands out strictly increasing identifiers, starting at 1 unless told otherwise.
///
/// Each registry owns its own sequence, so identifiers are never reused within it and
/// creation stays deterministic for tests.
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    next: u32,
    issued: usize,
    _id: PhantomData<T>,
}

impl<T: From<u32>> Sequence<T> {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u32) -> Self {
        Self {
            next: first,
            issued: 0,
            _id: PhantomData,
        }
    }

    pub fn next_id(&mut self) -> Result<T> {
        let id = self.next;

        self.next = id.checked_add(1).ok_or(SequenceError::Exhausted(id))?;
        self.issued += 1;

        Ok(T::from(id))
    }

    /// Number of identifiers handed out so far
    pub fn issued(&self) -> usize {
        self.issued
    }
}

impl<T: From<u32>> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}
