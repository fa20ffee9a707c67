//! Authenticated encryption of messages under branch keys.
//!
//! Messages are encrypted with XChaCha20-Poly1305 under the all-zero nonce [`NONCE`]. Reusing a
//! fixed nonce is sound only because every branch key encrypts exactly one message: each key is
//! derived from a Diffie-Hellman value that is unique to the pair of key pairs and the query, and
//! parties generate fresh key pairs for every run. Since the nonce never varies it is not part of
//! the wire encoding, which keeps ciphertexts at [`CIPHERTEXT_LEN`] bytes.

use chacha20poly1305::{
    aead::{AeadInPlace, KeyInit},
    Key, Tag, XChaCha20Poly1305, XNonce,
};

use crate::{msgs::Ciphertext, types::Message, Error, CIPHERTEXT_LEN, KEY_LEN, MESSAGE_LEN};

/// Length of the XChaCha20-Poly1305 nonce.
pub const NONCE_LEN: usize = 24;

/// Length of the Poly1305 authentication tag.
pub const TAG_LEN: usize = CIPHERTEXT_LEN - MESSAGE_LEN;

/// The fixed nonce used for every encryption.
pub const NONCE: [u8; NONCE_LEN] = [0u8; NONCE_LEN];

/// Encrypts `message` under `key`.
pub fn encrypt(key: &[u8; KEY_LEN], message: &Message) -> Ciphertext {
    let cipher = XChaCha20Poly1305::new(Key::from_slice(key));

    let mut buffer = message.to_bytes();
    // Encryption only fails for plaintexts longer than the keystream.
    let tag = cipher
        .encrypt_in_place_detached(XNonce::from_slice(&NONCE), &[], &mut buffer)
        .expect("message is shorter than the XChaCha20 keystream");

    let mut bytes = [0u8; CIPHERTEXT_LEN];
    bytes[..TAG_LEN].copy_from_slice(&tag);
    bytes[TAG_LEN..].copy_from_slice(&buffer);

    Ciphertext::from(bytes)
}

/// Decrypts `ciphertext` under `key`.
///
/// Returns [`Error::DecryptionFailed`] if the ciphertext does not authenticate under `key`.
pub fn decrypt(key: &[u8; KEY_LEN], ciphertext: &Ciphertext) -> Result<Message, Error> {
    let cipher = XChaCha20Poly1305::new(Key::from_slice(key));

    let (tag, body) = ciphertext.as_bytes().split_at(TAG_LEN);
    let mut buffer = [0u8; MESSAGE_LEN];
    buffer.copy_from_slice(body);

    cipher
        .decrypt_in_place_detached(
            XNonce::from_slice(&NONCE),
            &[],
            &mut buffer,
            Tag::from_slice(tag),
        )
        .map_err(|_| Error::DecryptionFailed)?;

    Ok(Message::from(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_encrypt_decrypt() {
        let key = [42u8; KEY_LEN];
        let message = Message::from([123u8; MESSAGE_LEN]);

        let ciphertext = encrypt(&key, &message);

        assert_ne!(&ciphertext.as_bytes()[TAG_LEN..], message.as_bytes());
        assert_eq!(decrypt(&key, &ciphertext).unwrap(), message);
    }

    #[test]
    fn test_wrong_key_fails() {
        let message = Message::from([123u8; MESSAGE_LEN]);
        let ciphertext = encrypt(&[1u8; KEY_LEN], &message);

        let err = decrypt(&[2u8; KEY_LEN], &ciphertext).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecryptionFailed);
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let key = [42u8; KEY_LEN];
        let ciphertext = encrypt(&key, &Message::from([0u8; MESSAGE_LEN]));

        for idx in [0, TAG_LEN - 1, TAG_LEN, CIPHERTEXT_LEN - 1] {
            let mut bytes = ciphertext.to_bytes();
            bytes[idx] ^= 1;

            let err = decrypt(&key, &Ciphertext::from(bytes)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DecryptionFailed);
        }
    }

    #[test]
    fn test_encryption_is_deterministic() {
        let key = [42u8; KEY_LEN];
        let message = Message::from([7u8; MESSAGE_LEN]);

        assert_eq!(encrypt(&key, &message), encrypt(&key, &message));
    }
}
