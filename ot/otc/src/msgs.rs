//! Values exchanged between the sender and the receiver.
//!
//! Every value has a fixed-width byte encoding, so the transcript can be carried over any
//! channel without additional framing. All types also implement serde's traits.

use curve25519_dalek::{
    ristretto::{CompressedRistretto, RistrettoPoint},
    traits::IsIdentity,
};
use serde::{Deserialize, Serialize};
use subtle::ConditionallySelectable;

use crate::{Error, CIPHERTEXT_LEN, POINT_LEN};

fn decode_point(bytes: &[u8], what: &str) -> Result<RistrettoPoint, Error> {
    let compressed = CompressedRistretto::from_slice(bytes).map_err(|_| {
        Error::InvalidValue(format!(
            "{what} must be {POINT_LEN} bytes, got {}",
            bytes.len()
        ))
    })?;

    compressed
        .decompress()
        .ok_or_else(|| Error::InvalidValue(format!("{what} is not a valid ristretto point")))
}

/// A party's public key, `g^x` for its secret key `x`.
///
/// The sender transmits its public key once and may reuse it across any number of transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey(RistrettoPoint);

impl PublicKey {
    /// Returns the underlying group element.
    pub fn as_point(&self) -> &RistrettoPoint {
        &self.0
    }

    /// Returns the canonical 32-byte encoding.
    pub fn to_bytes(self) -> [u8; POINT_LEN] {
        self.0.compress().to_bytes()
    }

    /// Returns whether this key is the identity element.
    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }
}

impl From<RistrettoPoint> for PublicKey {
    fn from(point: RistrettoPoint) -> Self {
        PublicKey(point)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        decode_point(bytes, "public key").map(PublicKey)
    }
}

/// The receiver's blinded choice `B`.
///
/// `B = g^b` for choice 0 and `B = A * g^b` for choice 1, where `A` is the sender's public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query(RistrettoPoint);

impl Query {
    /// Returns the underlying group element.
    pub fn as_point(&self) -> &RistrettoPoint {
        &self.0
    }

    /// Returns the canonical 32-byte encoding.
    pub fn to_bytes(self) -> [u8; POINT_LEN] {
        self.0.compress().to_bytes()
    }

    /// Returns whether this query is the identity element.
    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }
}

impl From<RistrettoPoint> for Query {
    fn from(point: RistrettoPoint) -> Self {
        Query(point)
    }
}

impl TryFrom<&[u8]> for Query {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        decode_point(bytes, "query").map(Query)
    }
}

/// An encrypted message: the 16-byte authentication tag followed by the 16-byte ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext([u8; CIPHERTEXT_LEN]);

impl Ciphertext {
    /// Returns the wire bytes.
    pub fn as_bytes(&self) -> &[u8; CIPHERTEXT_LEN] {
        &self.0
    }

    /// Returns the wire bytes by value.
    pub fn to_bytes(self) -> [u8; CIPHERTEXT_LEN] {
        self.0
    }
}

impl From<[u8; CIPHERTEXT_LEN]> for Ciphertext {
    fn from(bytes: [u8; CIPHERTEXT_LEN]) -> Self {
        Ciphertext(bytes)
    }
}

impl TryFrom<&[u8]> for Ciphertext {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        <[u8; CIPHERTEXT_LEN]>::try_from(bytes)
            .map(Ciphertext)
            .map_err(|_| {
                Error::InvalidValue(format!(
                    "ciphertext must be {CIPHERTEXT_LEN} bytes, got {}",
                    bytes.len()
                ))
            })
    }
}

impl ConditionallySelectable for Ciphertext {
    fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
        let mut bytes = [0u8; CIPHERTEXT_LEN];
        for (out, (a, b)) in bytes.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
            *out = u8::conditional_select(a, b, choice);
        }
        Ciphertext(bytes)
    }
}

/// The sender's reply: one ciphertext per message, in message order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderPayload {
    /// The ciphertexts of message 0 and message 1.
    pub ciphertexts: [Ciphertext; 2],
}

impl SenderPayload {
    /// Returns the ciphertexts as an ordered pair.
    pub fn into_pair(self) -> (Ciphertext, Ciphertext) {
        let [zero, one] = self.ciphertexts;
        (zero, one)
    }
}

impl From<(Ciphertext, Ciphertext)> for SenderPayload {
    fn from((zero, one): (Ciphertext, Ciphertext)) -> Self {
        SenderPayload {
            ciphertexts: [zero, one],
        }
    }
}

impl From<SenderPayload> for (Ciphertext, Ciphertext) {
    fn from(payload: SenderPayload) -> Self {
        payload.into_pair()
    }
}
