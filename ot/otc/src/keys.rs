use curve25519_dalek::{
    constants::RISTRETTO_BASEPOINT_TABLE, ristretto::RistrettoPoint, scalar::Scalar,
};
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, RngCore, SeedableRng};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{msgs::PublicKey, POINT_LEN};

/// A party's key pair: a secret scalar `x` and the public key `g^x`.
///
/// Both the sender and the receiver own exactly one key pair, generated when the party is
/// created and never modified afterwards. The secret scalar is zeroized on drop.
pub struct KeyPair {
    secret: Scalar,
    public: RistrettoPoint,
}

opaque_debug::implement!(KeyPair);

impl KeyPair {
    /// Generates a fresh key pair from OS entropy.
    pub fn new() -> Self {
        Self::random(&mut ChaCha20Rng::from_entropy())
    }

    /// Generates a key pair from the provided RNG seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - The RNG seed
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self::random(&mut ChaCha20Rng::from_seed(seed))
    }

    /// Generates a key pair using the provided RNG.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let secret = Scalar::random(rng);
        let public = &secret * RISTRETTO_BASEPOINT_TABLE;

        Self { secret, public }
    }

    /// Returns the public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from(self.public)
    }

    /// Returns the canonical 32-byte encoding of the secret scalar.
    pub fn secret_bytes(&self) -> Zeroizing<[u8; POINT_LEN]> {
        Zeroizing::new(self.secret.to_bytes())
    }

    pub(crate) fn secret(&self) -> &Scalar {
        &self.secret
    }

    pub(crate) fn public(&self) -> &RistrettoPoint {
        &self.public
    }
}

impl Default for KeyPair {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl ZeroizeOnDrop for KeyPair {}
