/*
Copyright 2026 Dispatch SDK Authors

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/
//! # Private keys and key pairs on the SECG curve secp256k1

use super::Address;
use crate::error::Error;
use crate::util::to_arr;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use secp256k1::{All, PublicKey, Secp256k1, SecretKey};
use std::{fmt, str};

/// Private key length in bytes
pub const PRIVATE_KEY_BYTES: usize = 32;

/// How many random values to try before giving up on an entropy source
const GENERATE_ATTEMPTS: usize = 16;

lazy_static! {
    pub(crate) static ref SECP256K1: Secp256k1<All> = Secp256k1::new();
}

/// Private key used as x in an ECDSA signature.
///
/// Doesn't implement `Display` or `Serialize`, and `Debug` output hides the value, so the key
/// doesn't leak into logs or transaction output. Use `to_hex` to export it explicitly.
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct PrivateKey([u8; PRIVATE_KEY_BYTES]);

impl PrivateKey {
    /// Try to convert a byte slice into `PrivateKey`.
    ///
    /// # Arguments
    ///
    /// * `data` - A byte slice with `PRIVATE_KEY_BYTES` length
    pub fn try_from(data: &[u8]) -> Result<Self, Error> {
        if data.len() != PRIVATE_KEY_BYTES {
            return Err(Error::EncodingError(format!(
                "Invalid private key length: {}",
                data.len()
            )));
        }

        Ok(PrivateKey(to_arr(data)))
    }

    /// Key as a secp256k1 scalar, fails if the bytes are not a valid key for the curve
    pub(crate) fn secret_key(&self) -> Result<SecretKey, Error> {
        SecretKey::from_slice(&self.0)
            .map_err(|_| Error::SigningError("Invalid private key".to_string()))
    }

    /// Public key of the current private key
    pub fn public_key(&self) -> Result<PublicKey, Error> {
        Ok(PublicKey::from_secret_key(&SECP256K1, &self.secret_key()?))
    }

    /// Extract `Address` from current private key.
    pub fn to_address(&self) -> Result<Address, Error> {
        Ok(Address::from(self.public_key()?))
    }

    /// Export the key as a plain hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<SecretKey> for PrivateKey {
    fn from(key: SecretKey) -> Self {
        PrivateKey(key.secret_bytes())
    }
}

impl str::FromStr for PrivateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.strip_prefix("0x").unwrap_or(s);
        if value.len() != PRIVATE_KEY_BYTES * 2 {
            return Err(Error::EncodingError(format!(
                "Invalid private key hex length: {}",
                value.len()
            )));
        }

        PrivateKey::try_from(hex::decode(value)?.as_slice())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PrivateKey(<hidden>)")
    }
}

/// Private key together with its public key. The public key is always derived from the private
/// one, so a pair can't be inconsistent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Generate a new key pair with the OS random source (`rand::rngs::OsRng`)
    pub fn generate() -> Result<Self, Error> {
        KeyPair::generate_with(&mut OsRng)
    }

    /// Generate a new key pair with given custom random generator
    pub fn generate_with<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self, Error> {
        let mut seed = [0u8; PRIVATE_KEY_BYTES];
        for _ in 0..GENERATE_ATTEMPTS {
            rng.try_fill_bytes(&mut seed)?;
            // a random 32 byte value is not a valid key with a negligible probability
            if let Ok(key) = SecretKey::from_slice(&seed) {
                let pair = KeyPair::from(key);
                debug!("Key pair generated: {}", pair.address());
                return Ok(pair);
            }
        }
        Err(Error::KeyGenerationError(
            "Random source doesn't produce valid keys".to_string(),
        ))
    }

    /// Restore a key pair from an existing private key
    pub fn from_private_key(key: PrivateKey) -> Result<Self, Error> {
        Ok(KeyPair {
            public_key: key.public_key()?,
            private_key: key,
        })
    }

    /// Private key of the pair
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Public key of the pair
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Address derived from the public key
    pub fn address(&self) -> Address {
        Address::from(self.public_key)
    }
}

impl From<SecretKey> for KeyPair {
    fn from(key: SecretKey) -> Self {
        KeyPair {
            public_key: PublicKey::from_secret_key(&SECP256K1, &key),
            private_key: PrivateKey::from(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::tests::*;
    use rand::{rngs::StdRng, SeedableRng};

    struct ClosedRng;

    impl RngCore for ClosedRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.iter_mut().for_each(|b| *b = 0)
        }

        fn try_fill_bytes(&mut self, _: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source is closed"))
        }
    }

    impl CryptoRng for ClosedRng {}

    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.iter_mut().for_each(|b| *b = 0)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ZeroRng {}

    #[test]
    fn should_convert_into_address() {
        let key = PrivateKey(to_32bytes(
            "0f86ea981203b26b5b8244c8f661e30e5104555068a4bd168d3e3015db9bb25a",
        ));

        assert_eq!(
            key.to_address().unwrap().to_string(),
            "3ed25f42484d517cdfc72cafb7ebc9e8baa52c2c"
        );
    }

    #[test]
    fn should_convert_into_address_2() {
        let key = PrivateKey(to_32bytes(
            "00b413b37c71bfb92719d16e28d7329dea5befa0d0b8190742f89e55617991cf",
        ));

        assert_eq!(
            key.to_address().unwrap().to_string(),
            "3f4e0668c20e100d7c2a27d4b177ac65b2875d26"
        );
    }

    #[test]
    fn should_parse_private_key() {
        let key = "0x0f86ea981203b26b5b8244c8f661e30e5104555068a4bd168d3e3015db9bb25a"
            .parse::<PrivateKey>()
            .unwrap();
        assert_eq!(
            key.to_hex(),
            "0f86ea981203b26b5b8244c8f661e30e5104555068a4bd168d3e3015db9bb25a"
        );
    }

    #[test]
    fn should_not_parse_short_private_key() {
        assert!(matches!(
            "0f86ea981203b26b".parse::<PrivateKey>(),
            Err(Error::EncodingError(_))
        ));
    }

    #[test]
    fn should_hide_key_in_debug() {
        let key = PrivateKey(to_32bytes(
            "0f86ea981203b26b5b8244c8f661e30e5104555068a4bd168d3e3015db9bb25a",
        ));
        let pair = KeyPair::from_private_key(key).unwrap();
        assert!(!format!("{:?}", key).contains("0f86ea98"));
        assert!(!format!("{:?}", pair).contains("0f86ea98"));
    }

    #[test]
    fn should_reject_zero_key() {
        let key = PrivateKey([0u8; PRIVATE_KEY_BYTES]);
        assert!(matches!(
            KeyPair::from_private_key(key),
            Err(Error::SigningError(_))
        ));
    }

    #[test]
    fn should_generate_consistent_pair() {
        let pair = KeyPair::generate().unwrap();
        let restored = KeyPair::from_private_key(*pair.private_key()).unwrap();
        assert_eq!(restored.public_key(), pair.public_key());
        assert_eq!(restored.address(), pair.address());
        assert_eq!(pair.private_key().to_address().unwrap(), pair.address());
    }

    #[test]
    fn should_generate_different_keys() {
        let first = KeyPair::generate().unwrap();
        let second = KeyPair::generate().unwrap();
        assert_ne!(first.private_key(), second.private_key());
        assert_ne!(first.address(), second.address());
    }

    #[test]
    fn should_generate_same_with_same_seed() {
        let first = KeyPair::generate_with(&mut StdRng::seed_from_u64(1975)).unwrap();
        let second = KeyPair::generate_with(&mut StdRng::seed_from_u64(1975)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn should_derive_address_deterministically() {
        let pair = KeyPair::generate().unwrap();
        let first = Address::from_public_key_bytes(&pair.public_key().serialize()).unwrap();
        let second =
            Address::from_public_key_bytes(&pair.public_key().serialize_uncompressed()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, pair.address());
    }

    #[test]
    fn should_fail_without_entropy() {
        assert!(matches!(
            KeyPair::generate_with(&mut ClosedRng),
            Err(Error::KeyGenerationError(_))
        ));
    }

    #[test]
    fn should_fail_when_entropy_gives_invalid_keys() {
        assert!(matches!(
            KeyPair::generate_with(&mut ZeroRng),
            Err(Error::KeyGenerationError(_))
        ));
    }
}
