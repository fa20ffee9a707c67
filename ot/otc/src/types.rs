//! Inputs and outputs of the protocol: the receiver's choice and the sender's messages.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, MESSAGE_LEN};

/// The receiver's selection bit, either 0 or 1.
///
/// A `Choice` can only be constructed from a valid bit, so every operation accepting
/// `impl TryInto<Choice>` validates its input before touching any key material.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Choice(u8);

impl Choice {
    /// Choice of the first message.
    pub const ZERO: Self = Choice(0);
    /// Choice of the second message.
    pub const ONE: Self = Choice(1);

    /// Returns the choice as a bit.
    pub fn bit(&self) -> u8 {
        self.0
    }

    /// Returns the index of the chosen message.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

// The choice is the receiver's secret.
impl fmt::Debug for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Choice { ... }")
    }
}

impl From<bool> for Choice {
    fn from(bit: bool) -> Self {
        Choice(bit as u8)
    }
}

impl From<Choice> for u8 {
    fn from(choice: Choice) -> Self {
        choice.0
    }
}

impl From<Choice> for subtle::Choice {
    fn from(choice: Choice) -> Self {
        subtle::Choice::from(choice.0)
    }
}

macro_rules! impl_choice_try_from_int {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Choice {
                type Error = Error;

                fn try_from(bit: $ty) -> Result<Self, Error> {
                    match bit {
                        0 => Ok(Choice::ZERO),
                        1 => Ok(Choice::ONE),
                        _ => Err(Error::InvalidValue("choice must be 0 or 1".to_string())),
                    }
                }
            }
        )*
    };
}

impl_choice_try_from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

fn choice_from_text() -> Error {
    Error::InvalidInput("choice must be an integer".to_string())
}

// Text is never a bit, even when it spells one.
impl TryFrom<&str> for Choice {
    type Error = Error;

    fn try_from(_: &str) -> Result<Self, Error> {
        Err(choice_from_text())
    }
}

impl TryFrom<String> for Choice {
    type Error = Error;

    fn try_from(_: String) -> Result<Self, Error> {
        Err(choice_from_text())
    }
}

/// A fixed-length message transferred by the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message([u8; MESSAGE_LEN]);

impl Message {
    /// Returns the message bytes.
    pub fn as_bytes(&self) -> &[u8; MESSAGE_LEN] {
        &self.0
    }

    /// Returns the message bytes by value.
    pub fn to_bytes(self) -> [u8; MESSAGE_LEN] {
        self.0
    }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; MESSAGE_LEN]> for Message {
    fn from(bytes: [u8; MESSAGE_LEN]) -> Self {
        Message(bytes)
    }
}

impl From<Message> for [u8; MESSAGE_LEN] {
    fn from(message: Message) -> Self {
        message.0
    }
}

impl TryFrom<&[u8]> for Message {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        <[u8; MESSAGE_LEN]>::try_from(bytes)
            .map(Message)
            .map_err(|_| {
                Error::InvalidValue(format!(
                    "each message must be of length {MESSAGE_LEN}, got {}",
                    bytes.len()
                ))
            })
    }
}

impl TryFrom<Vec<u8>> for Message {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Error> {
        Message::try_from(bytes.as_slice())
    }
}

impl TryFrom<&Vec<u8>> for Message {
    type Error = Error;

    fn try_from(bytes: &Vec<u8>) -> Result<Self, Error> {
        Message::try_from(bytes.as_slice())
    }
}

fn message_from_text() -> Error {
    Error::InvalidInput("each message must be a byte string".to_string())
}

// Messages are raw bytes. Text is rejected whatever it encodes.
impl TryFrom<&str> for Message {
    type Error = Error;

    fn try_from(_: &str) -> Result<Self, Error> {
        Err(message_from_text())
    }
}

impl TryFrom<String> for Message {
    type Error = Error;

    fn try_from(_: String) -> Result<Self, Error> {
        Err(message_from_text())
    }
}
