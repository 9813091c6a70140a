//! Email-at-Rest Encryption
//!
//! AES-256-GCM cipher for driver email addresses. The stored value is
//! `base64(nonce || ciphertext || tag)` with a fresh random nonce per
//! write, so re-encrypting the same address yields a different column
//! value each time.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ring::aead::{Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM, NONCE_LEN};
use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroize;

use crate::shared::errors::CryptoError;

/// Symmetric cipher for driver email addresses
pub struct EmailCipher {
    key: LessSafeKey,
    rng: SystemRandom,
}

impl EmailCipher {
    /// Create a cipher from a base64-encoded 32-byte key
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKey` if the key is not valid base64 or
    /// is not exactly 32 bytes.
    pub fn from_base64_key(key_b64: &str) -> Result<Self, CryptoError> {
        let mut key_bytes = BASE64
            .decode(key_b64)
            .map_err(|e| CryptoError::InvalidKey(format!("key is not valid base64: {e}")))?;

        if key_bytes.len() != AES_256_GCM.key_len() {
            let got = key_bytes.len();
            key_bytes.zeroize();
            return Err(CryptoError::InvalidKey(format!(
                "key must be {} bytes, got {got}",
                AES_256_GCM.key_len()
            )));
        }

        let unbound = UnboundKey::new(&AES_256_GCM, &key_bytes)
            .map_err(|_| CryptoError::InvalidKey("key rejected by AEAD".to_string()))?;
        key_bytes.zeroize();

        Ok(Self {
            key: LessSafeKey::new(unbound),
            rng: SystemRandom::new(),
        })
    }

    /// Encrypt a plaintext email into its storage representation
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Encrypt` if the system RNG or the seal
    /// operation fails.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        self.rng
            .fill(&mut nonce_bytes)
            .map_err(|_| CryptoError::Encrypt)?;
        let nonce = Nonce::assume_unique_for_key(nonce_bytes);

        let mut in_out = plaintext.as_bytes().to_vec();
        self.key
            .seal_in_place_append_tag(nonce, Aad::empty(), &mut in_out)
            .map_err(|_| CryptoError::Encrypt)?;

        let mut stored = Vec::with_capacity(NONCE_LEN + in_out.len());
        stored.extend_from_slice(&nonce_bytes);
        stored.extend_from_slice(&in_out);

        Ok(BASE64.encode(stored))
    }

    /// Decrypt a storage representation back into the plaintext email
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Decrypt` if the value is malformed, was
    /// encrypted with a different key, or was tampered with.
    pub fn decrypt(&self, stored: &str) -> Result<String, CryptoError> {
        let decoded = BASE64
            .decode(stored)
            .map_err(|e| CryptoError::Decrypt(format!("not valid base64: {e}")))?;

        if decoded.len() <= NONCE_LEN {
            return Err(CryptoError::Decrypt("value too short".to_string()));
        }

        let (nonce_bytes, ciphertext) = decoded.split_at(NONCE_LEN);
        let nonce = Nonce::try_assume_unique_for_key(nonce_bytes)
            .map_err(|_| CryptoError::Decrypt("bad nonce".to_string()))?;

        let mut in_out = ciphertext.to_vec();
        let plaintext = self
            .key
            .open_in_place(nonce, Aad::empty(), &mut in_out)
            .map_err(|_| CryptoError::Decrypt("authentication failed".to_string()))?;

        String::from_utf8(plaintext.to_vec())
            .map_err(|_| CryptoError::Decrypt("plaintext is not utf-8".to_string()))
    }
}
