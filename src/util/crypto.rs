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
//! # Crypto util functions

use crate::error::Error;
use crate::util::to_arr;
use sha3::{Digest, Keccak256};
use std::{fmt, ops, str::FromStr};

/// Keccak-256 crypto hash length in bytes
pub const KECCAK256_BYTES: usize = 32;

/// Calculate Keccak-256 crypto hash
pub fn keccak256(data: &[u8]) -> [u8; KECCAK256_BYTES] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    to_arr(hasher.finalize().as_slice())
}

/// Transaction hash, a Keccak-256 digest of the signable transaction encoding
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct TxHash(pub [u8; KECCAK256_BYTES]);

impl TxHash {
    /// Hash of the provided data
    pub fn of(data: &[u8]) -> Self {
        TxHash(keccak256(data))
    }
}

impl ops::Deref for TxHash {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[u8; KECCAK256_BYTES]> for TxHash {
    fn from(bytes: [u8; KECCAK256_BYTES]) -> Self {
        TxHash(bytes)
    }
}

impl FromStr for TxHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = hex::decode(s)?;
        if value.len() != KECCAK256_BYTES {
            return Err(Error::EncodingError(format!(
                "Invalid hash length: {}",
                value.len()
            )));
        }
        Ok(TxHash(to_arr(&value)))
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TxHash({})", hex::encode(self.0))
    }
}
