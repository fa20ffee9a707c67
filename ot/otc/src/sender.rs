use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};
use zeroize::Zeroizing;

use crate::{
    cipher, hash_point,
    keys::KeyPair,
    msgs::{PublicKey, Query, SenderPayload},
    types::Message,
    Error, SenderConfig, KEY_LEN,
};

/// An oblivious transfer sender.
///
/// The sender holds one key pair. Its public key may be published once and reused to answer
/// queries from any number of receivers.
#[derive(Debug, Default)]
pub struct Sender {
    config: SenderConfig,
    keys: KeyPair,
}

impl Sender {
    /// Creates a new sender with a fresh key pair.
    ///
    /// # Arguments
    ///
    /// * `config` - The sender's configuration
    pub fn new(config: SenderConfig) -> Self {
        Self::from_key_pair(config, KeyPair::new())
    }

    /// Creates a new sender with a key pair generated from the provided RNG seed.
    ///
    /// # Arguments
    ///
    /// * `config` - The sender's configuration
    /// * `seed` - The RNG seed
    pub fn new_with_seed(config: SenderConfig, seed: [u8; 32]) -> Self {
        Self::from_key_pair(config, KeyPair::from_seed(seed))
    }

    /// Creates a new sender from an existing key pair.
    pub fn from_key_pair(config: SenderConfig, keys: KeyPair) -> Self {
        Self { config, keys }
    }

    /// Returns the sender's configuration.
    pub fn config(&self) -> &SenderConfig {
        &self.config
    }

    /// Returns the sender's key pair.
    pub fn key_pair(&self) -> &KeyPair {
        &self.keys
    }

    /// Returns the sender's public key `A = g^a`.
    pub fn public_key(&self) -> PublicKey {
        self.keys.public_key()
    }

    /// Encrypts both messages so that the receiver can only decrypt the one it chose.
    ///
    /// # Arguments
    ///
    /// * `query` - The receiver's query `B`.
    /// * `data_zero` - The message at index 0.
    /// * `data_one` - The message at index 1.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all, err)
    )]
    pub fn reply<M0, M1>(
        &self,
        query: &Query,
        data_zero: M0,
        data_one: M1,
    ) -> Result<SenderPayload, Error>
    where
        M0: TryInto<Message>,
        M1: TryInto<Message>,
        Error: From<M0::Error> + From<M1::Error>,
    {
        let data_zero = data_zero.try_into()?;
        let data_one = data_one.try_into()?;

        if self.config.identity_check() && query.is_identity() {
            return Err(Error::InvalidValue(
                "query must not be the identity element".to_string(),
            ));
        }

        let [k0, k1] =
            compute_encryption_keys(self.keys.secret(), self.keys.public(), query.as_point());

        #[cfg(feature = "tracing")]
        tracing::trace!("derived branch keys");

        Ok(SenderPayload {
            ciphertexts: [
                cipher::encrypt(&k0, &data_zero),
                cipher::encrypt(&k1, &data_one),
            ],
        })
    }
}

/// Computes the branch keys for both messages.
///
/// * `k0 = H(B^a)`
/// * `k1 = H((B / A)^a)`
///
/// If the receiver chose 0 then `B = g^b` and `k0 = H(g^ab)`, while `k1` is unrelated to any
/// value the receiver knows. If it chose 1 then `B = A * g^b`, so `k1 = H(g^ab)` and `k0` is
/// the unrelated one.
///
/// # Arguments
///
/// * `private_key` - The sender's private key `a`.
/// * `public_key` - The sender's public key `A`.
/// * `blinded_choice` - The receiver's query `B`.
fn compute_encryption_keys(
    private_key: &Scalar,
    public_key: &RistrettoPoint,
    blinded_choice: &RistrettoPoint,
) -> [Zeroizing<[u8; KEY_LEN]>; 2] {
    let k0 = hash_point(&(private_key * blinded_choice));
    let k1 = hash_point(&(private_key * (blinded_choice - public_key)));

    [k0, k1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::constants::RISTRETTO_BASEPOINT_TABLE;

    fn shared_key(sender: &KeyPair, receiver: &KeyPair) -> [u8; KEY_LEN] {
        *hash_point(&(&(sender.secret() * receiver.secret()) * RISTRETTO_BASEPOINT_TABLE))
    }

    #[test]
    fn test_choice_zero_keys() {
        let sender = KeyPair::from_seed([0u8; 32]);
        let receiver = KeyPair::from_seed([1u8; 32]);

        // B = g^b
        let blinded_choice = *receiver.public();
        let [k0, k1] = compute_encryption_keys(sender.secret(), sender.public(), &blinded_choice);

        assert_eq!(*k0, shared_key(&sender, &receiver));
        assert_ne!(*k1, shared_key(&sender, &receiver));
    }

    #[test]
    fn test_choice_one_keys() {
        let sender = KeyPair::from_seed([0u8; 32]);
        let receiver = KeyPair::from_seed([1u8; 32]);

        // B = A * g^b
        let blinded_choice = sender.public() + receiver.public();
        let [k0, k1] = compute_encryption_keys(sender.secret(), sender.public(), &blinded_choice);

        assert_ne!(*k0, shared_key(&sender, &receiver));
        assert_eq!(*k1, shared_key(&sender, &receiver));
    }
}
