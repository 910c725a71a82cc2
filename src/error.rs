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
//! # Errors of keys, encoding and transaction signing

use std::{error, fmt};

/// SDK errors. Each one is local to a single operation, nothing is partially applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or oversized numeric / hex input
    EncodingError(String),

    /// Entropy source or key material is not usable to produce a new key
    KeyGenerationError(String),

    /// Private key is malformed, or a produced signature is inconsistent
    SigningError(String),

    /// Structurally malformed signature, or a record that doesn't match its signature
    VerificationError(String),

    /// Invalid combination of transaction fields
    BuildError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::EncodingError(ref str) => write!(f, "Encoding error: {}", str),
            Error::KeyGenerationError(ref str) => write!(f, "Key generation error: {}", str),
            Error::SigningError(ref str) => write!(f, "Signing error: {}", str),
            Error::VerificationError(ref str) => write!(f, "Verification error: {}", str),
            Error::BuildError(ref str) => write!(f, "Transaction build error: {}", str),
        }
    }
}

impl error::Error for Error {}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::EncodingError(err.to_string())
    }
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::KeyGenerationError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::EncodingError(format!("Invalid JSON: {}", err))
    }
}
