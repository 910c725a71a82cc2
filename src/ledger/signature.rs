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
//! # Recoverable ECDSA signatures of transaction hashes
//!
//! Signing is deterministic (RFC 6979 nonce, low S), so the same key and hash always give the
//! same signature. The recovery id is stored as is, in the range `0..=3`. Only the low S form
//! is accepted when verifying, so a hash has a single valid signature of a key.

use super::{keypair::SECP256K1, Address, PrivateKey};
use crate::error::Error;
use crate::util::{to_fixed_bytes, TxHash};
use num_bigint::BigInt;
use secp256k1::ecdsa::{self, RecoverableSignature, RecoveryId};
use secp256k1::{Message, PublicKey};
use std::{fmt, str};

/// ECDSA crypto signature length in bytes
pub const ECDSA_SIGNATURE_BYTES: usize = 65;

/// Signature of a transaction hash, serialized as `r || s || v`
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Signature {
    /// ECDSA signature first point (0 < r < secp256k1n)
    pub r: [u8; 32],

    /// ECDSA signature second point (0 < s < secp256k1n ÷ 2 + 1)
    pub s: [u8; 32],

    /// ‘recovery id’, a 1 byte value specifying the sign and finiteness of the curve point
    pub v: u8,
}

impl Signature {
    /// Parse a signature from its wire form, fails if it can't be a signature structurally
    pub fn try_from(data: &[u8]) -> Result<Self, Error> {
        if data.len() != ECDSA_SIGNATURE_BYTES {
            return Err(Error::VerificationError(format!(
                "Invalid signature length: {}",
                data.len()
            )));
        }
        let mut buf = [0u8; ECDSA_SIGNATURE_BYTES];
        buf.copy_from_slice(data);
        let sig = Signature::from(buf);
        sig.recovery_id()?;
        Ok(sig)
    }

    /// Create a signature from `r` and `s` provided as integers, like the output of an external signer
    pub fn from_parts(r: &BigInt, s: &BigInt, v: u8) -> Result<Self, Error> {
        let mut sig = Signature {
            v,
            ..Signature::default()
        };
        sig.r.copy_from_slice(&to_fixed_bytes(r, 32)?);
        sig.s.copy_from_slice(&to_fixed_bytes(s, 32)?);
        Ok(sig)
    }

    /// Wire form `r || s || v`
    pub fn to_bytes(&self) -> [u8; ECDSA_SIGNATURE_BYTES] {
        let mut buf = [0u8; ECDSA_SIGNATURE_BYTES];
        buf[0..32].copy_from_slice(&self.r);
        buf[32..64].copy_from_slice(&self.s);
        buf[64] = self.v;
        buf
    }

    fn recovery_id(&self) -> Result<RecoveryId, Error> {
        RecoveryId::from_i32(i32::from(self.v))
            .map_err(|_| Error::VerificationError(format!("Invalid recovery id: {}", self.v)))
    }

    /// Recover the public key which produced the signature for the `hash`.
    ///
    /// Returns `None` if no key can be recovered, and an error only if the signature bytes are
    /// malformed (invalid recovery id, `r` / `s` out of the curve order, or a high `s`).
    pub fn recover(&self, hash: &TxHash) -> Result<Option<PublicKey>, Error> {
        let mut compact = [0u8; 64];
        compact[0..32].copy_from_slice(&self.r);
        compact[32..64].copy_from_slice(&self.s);
        let mut normalized = ecdsa::Signature::from_compact(&compact)
            .map_err(|e| Error::VerificationError(e.to_string()))?;
        normalized.normalize_s();
        if normalized.serialize_compact() != compact {
            return Err(Error::VerificationError(
                "Signature is not in low S form".to_string(),
            ));
        }
        let sig = RecoverableSignature::from_compact(&compact, self.recovery_id()?)
            .map_err(|e| Error::VerificationError(e.to_string()))?;
        let msg = Message::from_slice(hash).map_err(|e| Error::VerificationError(e.to_string()))?;
        Ok(SECP256K1.recover_ecdsa(&msg, &sig).ok())
    }

    /// Check that the signature of `hash` is made by the key of `expected` address
    pub fn verify(&self, hash: &TxHash, expected: &Address) -> Result<bool, Error> {
        let verified = match self.recover(hash)? {
            Some(key) => Address::from(key) == *expected,
            None => false,
        };
        if !verified {
            debug!("Signature of {} is not made by {}", hash, expected);
        }
        Ok(verified)
    }
}

impl From<[u8; ECDSA_SIGNATURE_BYTES]> for Signature {
    fn from(data: [u8; ECDSA_SIGNATURE_BYTES]) -> Self {
        let mut sign = Signature::default();

        sign.r.copy_from_slice(&data[0..32]);
        sign.s.copy_from_slice(&data[32..64]);
        sign.v = data[64];

        sign
    }
}

impl str::FromStr for Signature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signature::try_from(&hex::decode(s)?)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(self.to_bytes()))
    }
}

impl PrivateKey {
    /// Sign hash (Keccak-256) of a transaction
    pub fn sign_hash(&self, hash: &TxHash) -> Result<Signature, Error> {
        let msg = Message::from_slice(hash).map_err(|e| Error::SigningError(e.to_string()))?;
        let key = self.secret_key()?;

        let (rid, sig) = SECP256K1
            .sign_ecdsa_recoverable(&msg, &key)
            .serialize_compact();

        let mut buf = [0u8; ECDSA_SIGNATURE_BYTES];
        buf[0..64].copy_from_slice(&sig[0..64]);
        buf[64] = rid.to_i32() as u8;

        Ok(Signature::from(buf))
    }
}
