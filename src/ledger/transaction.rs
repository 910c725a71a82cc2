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
//! # Ledger transaction
//!
//! A transaction goes through `UnsignedTransaction` -> `HashedTransaction` -> `Transaction`,
//! where only the last one is signed and can be submitted to a node.
//!
//! Signable encoding, all fields are always present and written in this order:
//!
//! ```text
//! type      1 byte
//! from      20 bytes
//! to        var bytes, empty for a contract deployment
//! value     u64 LE
//! code      var bytes
//! method    var bytes (utf-8)
//! time      u64 LE
//! hertz     u64 LE
//! fromName  var bytes (utf-8)
//! toName    var bytes (utf-8)
//! ```
//!
//! where `var bytes` is a 4 byte LE length followed by the data.

use super::{Address, PrivateKey, Signature, TxIntent};
use crate::error::Error;
use crate::util::{u64_to_le_bytes, write_var_bytes, TxHash};
use std::convert::TryFrom;

/// Kind of a transaction, the value is used as is in the signable and wire encodings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Value transfer between two accounts
    TransferTokens = 0,
    /// Contract deployment (no recipient) or invocation (recipient is the contract)
    SmartContract = 1,
}

impl TransactionType {
    /// Value used in the encodings
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for TransactionType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TransactionType::TransferTokens),
            1 => Ok(TransactionType::SmartContract),
            _ => Err(Error::EncodingError(format!(
                "Unsupported transaction type: {}",
                value
            ))),
        }
    }
}

/// Transaction fields, before hash and signature
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsignedTransaction {
    /// Transaction type
    pub tx_type: TransactionType,

    /// Sender
    pub from: Address,

    /// Recipient, or None to deploy a contract
    pub to: Option<Address>,

    /// Transferred amount
    pub value: u64,

    /// Contract bytecode, or a call payload for a contract invocation
    pub code: Vec<u8>,

    /// Invoked contract method
    pub method: String,

    /// Milliseconds since epoch
    pub time: u64,

    /// Fee
    pub hertz: u64,

    /// Display label of the sender
    pub from_name: String,
    /// Display label of the recipient
    pub to_name: String,
}

impl UnsignedTransaction {
    /// Deterministic byte representation of all the signable fields
    pub fn encode_signable(&self) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::with_capacity(96 + self.code.len());
        buf.push(self.tx_type.as_u8());
        buf.extend_from_slice(&self.from);
        match &self.to {
            Some(to) => write_var_bytes(&mut buf, to)?,
            None => write_var_bytes(&mut buf, &[])?,
        }
        buf.extend_from_slice(&u64_to_le_bytes(self.value));
        write_var_bytes(&mut buf, &self.code)?;
        write_var_bytes(&mut buf, self.method.as_bytes())?;
        buf.extend_from_slice(&u64_to_le_bytes(self.time));
        buf.extend_from_slice(&u64_to_le_bytes(self.hertz));
        write_var_bytes(&mut buf, self.from_name.as_bytes())?;
        write_var_bytes(&mut buf, self.to_name.as_bytes())?;
        trace!("Signable transaction encoded into {} bytes", buf.len());
        Ok(buf)
    }

    /// Fail with `BuildError` if the fields don't describe a transfer, a deployment or a
    /// contract call, the same way the builder and the record reader check them
    pub fn check_fields(&self) -> Result<(), Error> {
        TxIntent::from_fields(
            self.tx_type,
            self.to,
            self.value,
            self.code.clone(),
            self.method.clone(),
        )
        .map(|_| ())
    }

    /// Hash of the signable encoding
    pub fn hash(&self) -> Result<TxHash, Error> {
        Ok(TxHash::of(&self.encode_signable()?))
    }

    /// Check the combination of fields and calculate the hash
    pub fn into_hashed(self) -> Result<HashedTransaction, Error> {
        self.check_fields()?;
        let hash = self.hash()?;
        debug!("Transaction hashed: {}", hash);
        Ok(HashedTransaction {
            unsigned: self,
            hash,
        })
    }
}

/// Transaction with a calculated hash, ready to be signed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashedTransaction {
    unsigned: UnsignedTransaction,
    hash: TxHash,
}

impl HashedTransaction {
    /// Hash of the signable fields
    pub fn hash(&self) -> &TxHash {
        &self.hash
    }

    /// Signable fields
    pub fn unsigned(&self) -> &UnsignedTransaction {
        &self.unsigned
    }

    /// Sign with the private key of the sender
    pub fn sign(self, key: &PrivateKey) -> Result<Transaction, Error> {
        if key.to_address()? != self.unsigned.from {
            return Err(Error::SigningError(format!(
                "Private key doesn't belong to {}",
                self.unsigned.from
            )));
        }
        let signature = key.sign_hash(&self.hash)?;
        debug!("Transaction signed: {}", self.hash);
        Ok(Transaction {
            unsigned: self.unsigned,
            hash: self.hash,
            signature,
        })
    }
}

/// Signed transaction. It can't be changed, a retry must build a new transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    unsigned: UnsignedTransaction,
    hash: TxHash,
    signature: Signature,
}

impl Transaction {
    /// Assemble from already checked parts
    pub(crate) fn from_parts(
        unsigned: UnsignedTransaction,
        hash: TxHash,
        signature: Signature,
    ) -> Self {
        Transaction {
            unsigned,
            hash,
            signature,
        }
    }

    /// Hash of the signable fields
    pub fn hash(&self) -> &TxHash {
        &self.hash
    }

    /// Signature of the hash by the sender
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Transaction type
    pub fn tx_type(&self) -> TransactionType {
        self.unsigned.tx_type
    }

    /// Sender
    pub fn from(&self) -> &Address {
        &self.unsigned.from
    }

    /// Recipient, None for a contract deployment
    pub fn to(&self) -> Option<&Address> {
        self.unsigned.to.as_ref()
    }

    /// Transferred amount
    pub fn value(&self) -> u64 {
        self.unsigned.value
    }

    /// Contract code, or call payload
    pub fn code(&self) -> &[u8] {
        &self.unsigned.code
    }

    /// Invoked contract method, empty if not a call
    pub fn method(&self) -> &str {
        &self.unsigned.method
    }

    /// Milliseconds since epoch
    pub fn time(&self) -> u64 {
        self.unsigned.time
    }

    /// Fee
    pub fn hertz(&self) -> u64 {
        self.unsigned.hertz
    }

    /// Display label of the sender
    pub fn from_name(&self) -> &str {
        &self.unsigned.from_name
    }

    /// Display label of the recipient
    pub fn to_name(&self) -> &str {
        &self.unsigned.to_name
    }

    /// Copy of the signable fields, e.g. to build a retry with a new time
    pub fn to_unsigned(&self) -> UnsignedTransaction {
        self.unsigned.clone()
    }

    /// Check that the hash matches the fields and the signature is made by the sender
    pub fn verify(&self) -> Result<bool, Error> {
        if self.unsigned.hash()? != self.hash {
            return Ok(false);
        }
        self.signature.verify(&self.hash, &self.unsigned.from)
    }
}
