//! One-round 1-out-of-2 oblivious transfer over the [Ristretto](https://ristretto.group) group.
//!
//! A [`Sender`] holds two 16-byte messages and a [`Receiver`] holds a choice bit. After a single
//! round trip the receiver learns the chosen message and nothing about the other one, while the
//! sender learns nothing about the choice.
//!
//! ```
//! use otc::{Receiver, Sender};
//!
//! let sender = Sender::default();
//! let receiver = Receiver::default();
//!
//! // The sender publishes its public key, the receiver answers with a query.
//! let query = receiver.query(&sender.public_key(), 1).unwrap();
//!
//! // The sender encrypts both messages under keys derived from the query.
//! let (zero, one) = sender
//!     .reply(&query, [123u8; 16], [234u8; 16])
//!     .unwrap()
//!     .into_pair();
//!
//! // The receiver can only decrypt the message it chose.
//! let message = receiver.elect(&sender.public_key(), 1, &zero, &one).unwrap();
//! assert_eq!(message.to_bytes(), [234u8; 16]);
//! ```
//!
//! This crate does not do any I/O: every value exchanged between the parties has a fixed-width
//! byte encoding (see [`msgs`]) and can be carried over any channel.
//!
//! # ⚠️ Warning ⚠️
//!
//! The protocol is only secure against semi-honest parties. Neither party proves that it
//! followed the protocol.

#![deny(missing_docs, unreachable_pub, unused_must_use)]
#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod cipher;
mod config;
mod error;
mod keys;
pub mod msgs;
mod receiver;
mod sender;
pub mod types;

pub use config::{
    ReceiverConfig, ReceiverConfigBuilder, ReceiverConfigBuilderError, SenderConfig,
    SenderConfigBuilder, SenderConfigBuilderError,
};
pub use error::{Error, ErrorKind};
pub use keys::KeyPair;
pub use msgs::{Ciphertext, PublicKey, Query, SenderPayload};
pub use receiver::{Election, Receiver};
pub use sender::Sender;
pub use types::{Choice, Message};

use curve25519_dalek::ristretto::RistrettoPoint;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Length of a message in bytes.
pub const MESSAGE_LEN: usize = 16;
/// Length of an encrypted message on the wire in bytes.
pub const CIPHERTEXT_LEN: usize = 32;
/// Length of an encoded group element or scalar in bytes.
pub const POINT_LEN: usize = 32;
/// Length of a branch key in bytes.
pub const KEY_LEN: usize = 32;

/// Hashes a ristretto point to a symmetric key.
pub(crate) fn hash_point(point: &RistrettoPoint) -> Zeroizing<[u8; KEY_LEN]> {
    let digest = Sha256::digest(point.compress().as_bytes());
    Zeroizing::new(digest.into())
}
