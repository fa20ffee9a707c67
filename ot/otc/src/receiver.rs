use std::fmt;

use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar, traits::Identity};
use subtle::ConditionallySelectable;
use zeroize::Zeroizing;

use crate::{
    cipher, hash_point,
    keys::KeyPair,
    msgs::{Ciphertext, PublicKey, Query, SenderPayload},
    types::{Choice, Message},
    Error, ReceiverConfig, KEY_LEN,
};

/// An oblivious transfer receiver.
///
/// The receiver holds one key pair and is otherwise stateless: [`Receiver::query`] and
/// [`Receiver::elect`] can be called any number of times, once each per transfer. The caller
/// must pass the same choice to both calls of a transfer, or use [`Receiver::choose`] which
/// carries the choice from the query to the election.
#[derive(Debug, Default)]
pub struct Receiver {
    config: ReceiverConfig,
    keys: KeyPair,
}

impl Receiver {
    /// Creates a new receiver with a fresh key pair.
    ///
    /// # Arguments
    ///
    /// * `config` - The receiver's configuration
    pub fn new(config: ReceiverConfig) -> Self {
        Self::from_key_pair(config, KeyPair::new())
    }

    /// Creates a new receiver with a key pair generated from the provided RNG seed.
    ///
    /// # Arguments
    ///
    /// * `config` - The receiver's configuration
    /// * `seed` - The RNG seed
    pub fn new_with_seed(config: ReceiverConfig, seed: [u8; 32]) -> Self {
        Self::from_key_pair(config, KeyPair::from_seed(seed))
    }

    /// Creates a new receiver from an existing key pair.
    pub fn from_key_pair(config: ReceiverConfig, keys: KeyPair) -> Self {
        Self { config, keys }
    }

    /// Returns the receiver's configuration.
    pub fn config(&self) -> &ReceiverConfig {
        &self.config
    }

    /// Returns the receiver's key pair.
    pub fn key_pair(&self) -> &KeyPair {
        &self.keys
    }

    /// Returns the receiver's public key `g^b`.
    pub fn public_key(&self) -> PublicKey {
        self.keys.public_key()
    }

    /// Builds the query for a transfer, blinding the receiver's choice.
    ///
    /// # Arguments
    ///
    /// * `sender_public` - The sender's public key `A`.
    /// * `choice` - The index of the message to receive, 0 or 1.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all, err)
    )]
    pub fn query<C>(&self, sender_public: &PublicKey, choice: C) -> Result<Query, Error>
    where
        C: TryInto<Choice>,
        Error: From<C::Error>,
    {
        self.query_choice(sender_public, choice.try_into()?)
    }

    /// Decrypts the message chosen at the time of the query.
    ///
    /// # Arguments
    ///
    /// * `sender_public` - The sender's public key `A`.
    /// * `choice` - The choice passed to [`Receiver::query`] for this transfer.
    /// * `ciphertext_zero` - The sender's ciphertext of message 0.
    /// * `ciphertext_one` - The sender's ciphertext of message 1.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all, err)
    )]
    pub fn elect<C>(
        &self,
        sender_public: &PublicKey,
        choice: C,
        ciphertext_zero: &Ciphertext,
        ciphertext_one: &Ciphertext,
    ) -> Result<Message, Error>
    where
        C: TryInto<Choice>,
        Error: From<C::Error>,
    {
        self.elect_choice(
            sender_public,
            choice.try_into()?,
            ciphertext_zero,
            ciphertext_one,
        )
    }

    /// Decrypts the chosen message from the sender's payload.
    ///
    /// Same as [`Receiver::elect`] with the payload's ciphertexts.
    pub fn elect_payload<C>(
        &self,
        sender_public: &PublicKey,
        choice: C,
        payload: &SenderPayload,
    ) -> Result<Message, Error>
    where
        C: TryInto<Choice>,
        Error: From<C::Error>,
    {
        let [zero, one] = &payload.ciphertexts;
        self.elect_choice(sender_public, choice.try_into()?, zero, one)
    }

    /// Builds the query for a transfer and returns an [`Election`] bound to the same choice.
    ///
    /// # Arguments
    ///
    /// * `sender_public` - The sender's public key `A`.
    /// * `choice` - The index of the message to receive, 0 or 1.
    pub fn choose<C>(
        &self,
        sender_public: &PublicKey,
        choice: C,
    ) -> Result<(Query, Election<'_>), Error>
    where
        C: TryInto<Choice>,
        Error: From<C::Error>,
    {
        let choice = choice.try_into()?;
        let query = self.query_choice(sender_public, choice)?;

        Ok((
            query,
            Election {
                receiver: self,
                sender_public: *sender_public,
                choice,
            },
        ))
    }

    fn query_choice(&self, sender_public: &PublicKey, choice: Choice) -> Result<Query, Error> {
        self.check_sender_key(sender_public)?;

        let query = blind_choice(self.keys.public(), sender_public.as_point(), choice);

        #[cfg(feature = "tracing")]
        tracing::trace!("built query");

        Ok(query)
    }

    fn elect_choice(
        &self,
        sender_public: &PublicKey,
        choice: Choice,
        ciphertext_zero: &Ciphertext,
        ciphertext_one: &Ciphertext,
    ) -> Result<Message, Error> {
        self.check_sender_key(sender_public)?;

        let key = compute_decryption_key(self.keys.secret(), sender_public.as_point());
        let ciphertext =
            Ciphertext::conditional_select(ciphertext_zero, ciphertext_one, choice.into());

        cipher::decrypt(&key, &ciphertext)
    }

    fn check_sender_key(&self, sender_public: &PublicKey) -> Result<(), Error> {
        if self.config.identity_check() && sender_public.is_identity() {
            return Err(Error::InvalidValue(
                "sender public key must not be the identity element".to_string(),
            ));
        }

        Ok(())
    }
}

/// A pending transfer whose query has been sent, bound to the choice that built it.
pub struct Election<'a> {
    receiver: &'a Receiver,
    sender_public: PublicKey,
    choice: Choice,
}

impl Election<'_> {
    /// Decrypts the chosen message from the sender's reply to this election's query.
    pub fn elect(self, payload: &SenderPayload) -> Result<Message, Error> {
        let [zero, one] = &payload.ciphertexts;
        self.receiver
            .elect_choice(&self.sender_public, self.choice, zero, one)
    }
}

impl fmt::Debug for Election<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Election")
            .field("sender_public", &self.sender_public)
            .finish_non_exhaustive()
    }
}

/// Computes the blinded choice `B`.
///
/// if c = 0: B = g^b
/// if c = 1: B = A * g^b
///
/// `A` is selected against the identity in constant time so both choices perform the same
/// group operations.
fn blind_choice(
    receiver_public: &RistrettoPoint,
    sender_public: &RistrettoPoint,
    choice: Choice,
) -> Query {
    let blind =
        RistrettoPoint::conditional_select(&RistrettoPoint::identity(), sender_public, choice.into());

    Query::from(receiver_public + blind)
}

/// Computes the decryption key `H(A^b)`, which equals the branch key of the chosen message.
fn compute_decryption_key(
    private_key: &Scalar,
    sender_public: &RistrettoPoint,
) -> Zeroizing<[u8; KEY_LEN]> {
    hash_point(&(private_key * sender_public))
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::constants::RISTRETTO_BASEPOINT_TABLE;

    #[test]
    fn test_blind_choice() {
        let sender = KeyPair::from_seed([0u8; 32]);
        let receiver = KeyPair::from_seed([1u8; 32]);

        let zero = blind_choice(receiver.public(), sender.public(), Choice::ZERO);
        let one = blind_choice(receiver.public(), sender.public(), Choice::ONE);

        assert_eq!(zero.as_point(), receiver.public());
        assert_eq!(*one.as_point(), sender.public() + receiver.public());
    }

    #[test]
    fn test_decryption_key_is_shared_secret() {
        let sender = KeyPair::from_seed([0u8; 32]);
        let receiver = KeyPair::from_seed([1u8; 32]);

        let key = compute_decryption_key(receiver.secret(), sender.public());
        let shared = &(sender.secret() * receiver.secret()) * RISTRETTO_BASEPOINT_TABLE;

        assert_eq!(*key, *hash_point(&shared));
    }

    #[test]
    fn test_election_debug_hides_choice() {
        let sender = KeyPair::from_seed([0u8; 32]);
        let receiver = Receiver::new_with_seed(ReceiverConfig::default(), [1u8; 32]);

        let (_, zero) = receiver.choose(&sender.public_key(), 0).unwrap();
        let (_, one) = receiver.choose(&sender.public_key(), 1).unwrap();

        assert_eq!(format!("{zero:?}"), format!("{one:?}"));
    }
}
