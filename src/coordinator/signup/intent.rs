use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum SignupIntent {
    /// The current step's screen submitted a value.
    Advance(String),
}

impl Intent for SignupIntent {}
