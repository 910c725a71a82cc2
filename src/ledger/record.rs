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
//! # JSON record of a signed transaction, as accepted by a node

use super::{Address, Signature, Transaction, TransactionType, UnsignedTransaction};
use crate::error::Error;
use crate::util::{Hex, TxHash};
use std::convert::TryFrom;

/// Transaction as it's sent to a node. Byte fields are lowercase hex without `0x` prefix, an
/// empty `to` means a contract deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Transaction hash, hex
    pub hash: String,
    /// Transaction type, `0` for transfer and `1` for smart contract
    #[serde(rename = "type")]
    pub tx_type: u8,
    /// Sender address, hex
    pub from: String,
    /// Recipient address, hex, or empty for a contract deployment
    pub to: String,
    /// Transferred amount
    pub value: u64,
    /// Contract code or call payload, hex
    pub code: String,
    /// Invoked contract method
    pub method: String,
    /// Milliseconds since epoch
    pub time: u64,
    /// Signature `r || s || v`, hex
    pub signature: String,
    /// Fee
    pub hertz: u64,
    /// Display label of the sender
    pub from_name: String,
    /// Display label of the recipient
    pub to_name: String,
}

impl TransactionRecord {
    /// Serialize into JSON
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from JSON, fields are not verified until converted into a `Transaction`
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&Transaction> for TransactionRecord {
    fn from(tx: &Transaction) -> Self {
        TransactionRecord {
            hash: tx.hash().to_string(),
            tx_type: tx.tx_type().as_u8(),
            from: tx.from().to_string(),
            to: tx.to().map(|to| to.to_string()).unwrap_or_default(),
            value: tx.value(),
            code: Hex::encode(tx.code()),
            method: tx.method().to_string(),
            time: tx.time(),
            signature: tx.signature().to_string(),
            hertz: tx.hertz(),
            from_name: tx.from_name().to_string(),
            to_name: tx.to_name().to_string(),
        }
    }
}

impl Transaction {
    /// Flat record for the wire
    pub fn to_record(&self) -> TransactionRecord {
        TransactionRecord::from(self)
    }

    /// JSON body for submitting the transaction
    pub fn to_json(&self) -> Result<String, Error> {
        self.to_record().to_json()
    }
}

/// Read a transaction received from outside. Accepted only if the hash matches the fields and the
/// signature is made by the sender.
impl TryFrom<TransactionRecord> for Transaction {
    type Error = Error;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let tx_type = TransactionType::try_from(record.tx_type)?;
        let to = if record.to.is_empty() {
            None
        } else {
            Some(record.to.parse::<Address>()?)
        };
        let code = Hex::decode(&record.code)?;

        let unsigned = UnsignedTransaction {
            tx_type,
            from: record.from.parse()?,
            to,
            value: record.value,
            code,
            method: record.method,
            time: record.time,
            hertz: record.hertz,
            from_name: record.from_name,
            to_name: record.to_name,
        };
        // same rules as for a new transaction
        unsigned.check_fields()?;

        let hash: TxHash = record.hash.parse()?;
        let expected = unsigned.hash()?;
        if hash != expected {
            return Err(Error::VerificationError(format!(
                "Hash {} doesn't match transaction fields, expected {}",
                hash, expected
            )));
        }

        let signature: Signature = record.signature.parse()?;
        if !signature.verify(&hash, &unsigned.from)? {
            return Err(Error::VerificationError(format!(
                "Signature of {} isn't made by {}",
                hash, unsigned.from
            )));
        }

        Ok(Transaction::from_parts(unsigned, hash, signature))
    }
}
