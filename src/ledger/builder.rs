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
//! # Build and sign transactions from an intent of the sender

use super::{Account, Address, Transaction, TransactionType, UnsignedTransaction};
use crate::config::Config;
use crate::error::Error;
use chrono::Utc;
use std::convert::TryFrom;

/// What a transaction is supposed to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TxIntent {
    /// Send `value` to `to`
    Transfer {
        /// Recipient
        to: Address,
        /// Transferred amount
        value: u64,
    },

    /// Deploy a contract with `code`, there is no recipient
    Deploy {
        /// Contract bytecode, must not be empty
        code: Vec<u8>,
        /// Amount sent with the deployment
        value: u64,
    },

    /// Call `method` of the contract at `to`, `code` is the call payload
    Invoke {
        /// Contract address
        to: Address,
        /// Call payload
        code: Vec<u8>,
        /// Invoked method, must not be empty
        method: String,
        /// Amount sent with the call
        value: u64,
    },
}

impl TxIntent {
    /// Transfer of `value` tokens to `to`
    pub fn transfer(to: Address, value: u64) -> Self {
        TxIntent::Transfer { to, value }
    }

    /// Deployment of contract `code`, without value
    pub fn deploy(code: Vec<u8>) -> Self {
        TxIntent::Deploy { code, value: 0 }
    }

    /// Call of `method` of the contract at `to`, without value
    pub fn invoke<S: Into<String>>(to: Address, code: Vec<u8>, method: S) -> Self {
        TxIntent::Invoke {
            to,
            code,
            method: method.into(),
            value: 0,
        }
    }

    /// Find the intent of a flat set of transaction fields.
    ///
    /// A smart contract transaction without `method` is a deployment and must not have a
    /// recipient, one with a `method` is an invocation and must have it.
    pub fn from_fields(
        tx_type: TransactionType,
        to: Option<Address>,
        value: u64,
        code: Vec<u8>,
        method: String,
    ) -> Result<Self, Error> {
        let intent = match tx_type {
            TransactionType::TransferTokens => {
                if !code.is_empty() || !method.is_empty() {
                    return Err(Error::BuildError(
                        "Token transfer can't have contract code or method".to_string(),
                    ));
                }
                let to = to.ok_or_else(|| {
                    Error::BuildError("Token transfer requires a recipient".to_string())
                })?;
                TxIntent::Transfer { to, value }
            }
            TransactionType::SmartContract if method.is_empty() => {
                if let Some(to) = to {
                    return Err(Error::BuildError(format!(
                        "Contract deployment can't have a recipient, got {}",
                        to
                    )));
                }
                TxIntent::Deploy { code, value }
            }
            TransactionType::SmartContract => {
                let to = to.ok_or_else(|| {
                    Error::BuildError("Contract invocation requires a recipient".to_string())
                })?;
                TxIntent::Invoke {
                    to,
                    code,
                    method,
                    value,
                }
            }
        };
        intent.validate()?;
        Ok(intent)
    }

    /// Transaction type used in the encoding
    pub fn tx_type(&self) -> TransactionType {
        match self {
            TxIntent::Transfer { .. } => TransactionType::TransferTokens,
            TxIntent::Deploy { .. } | TxIntent::Invoke { .. } => TransactionType::SmartContract,
        }
    }

    fn validate(&self) -> Result<(), Error> {
        match self {
            TxIntent::Deploy { code, .. } if code.is_empty() => Err(Error::BuildError(
                "Contract deployment requires code".to_string(),
            )),
            // an empty method would make it indistinguishable from a deployment
            TxIntent::Invoke { method, .. } if method.is_empty() => Err(Error::BuildError(
                "Contract invocation requires a method".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Builder of a signed `Transaction`
#[derive(Clone, Debug)]
pub struct TransactionBuilder {
    intent: TxIntent,
    config: Config,
    time: Option<u64>,
    hertz: Option<u64>,
    from_name: String,
    to_name: String,
}

impl TransactionBuilder {
    /// Builder with default `Config`, current time and empty names
    pub fn new(intent: TxIntent) -> Self {
        TransactionBuilder {
            intent,
            config: Config::default(),
            time: None,
            hertz: None,
            from_name: String::new(),
            to_name: String::new(),
        }
    }

    /// Builder for a new attempt of an existing transaction. Set a new `time` to get a
    /// different hash.
    pub fn from_transaction(tx: &Transaction) -> Result<Self, Error> {
        let fields = tx.to_unsigned();
        let intent = TxIntent::from_fields(
            fields.tx_type,
            fields.to,
            fields.value,
            fields.code,
            fields.method,
        )?;
        Ok(TransactionBuilder::new(intent)
            .hertz(fields.hertz)
            .from_name(fields.from_name)
            .to_name(fields.to_name))
    }

    /// Use `config` for the defaults
    pub fn with_config(self, config: Config) -> Self {
        TransactionBuilder { config, ..self }
    }

    /// Milliseconds since epoch, current time is used if not set
    pub fn time(self, time: u64) -> Self {
        TransactionBuilder {
            time: Some(time),
            ..self
        }
    }

    /// Fee, the value from `Config` is used if not set
    pub fn hertz(self, hertz: u64) -> Self {
        TransactionBuilder {
            hertz: Some(hertz),
            ..self
        }
    }

    /// Display label of the sender
    pub fn from_name<S: Into<String>>(self, name: S) -> Self {
        TransactionBuilder {
            from_name: name.into(),
            ..self
        }
    }

    /// Display label of the recipient
    pub fn to_name<S: Into<String>>(self, name: S) -> Self {
        TransactionBuilder {
            to_name: name.into(),
            ..self
        }
    }

    /// Transaction fields for the sender `from`, before hashing
    pub fn unsigned(&self, from: &Address) -> Result<UnsignedTransaction, Error> {
        self.intent.validate()?;
        let time = match self.time {
            Some(time) => time,
            None => u64::try_from(Utc::now().timestamp_millis())
                .map_err(|_| Error::BuildError("System time is before epoch".to_string()))?,
        };
        let (to, value, code, method) = match &self.intent {
            TxIntent::Transfer { to, value } => (Some(*to), *value, Vec::new(), String::new()),
            TxIntent::Deploy { code, value } => (None, *value, code.clone(), String::new()),
            TxIntent::Invoke {
                to,
                code,
                method,
                value,
            } => (Some(*to), *value, code.clone(), method.clone()),
        };
        Ok(UnsignedTransaction {
            tx_type: self.intent.tx_type(),
            from: *from,
            to,
            value,
            code,
            method,
            time,
            hertz: self.hertz.unwrap_or(self.config.hertz),
            from_name: self.from_name.clone(),
            to_name: self.to_name.clone(),
        })
    }

    /// Hash and sign with the private key of `from`
    pub fn build(&self, from: &Account) -> Result<Transaction, Error> {
        let key = from.signing_key()?;
        let tx = self.unsigned(from.address())?.into_hashed()?.sign(key)?;
        if self.config.verify_signed && !tx.verify()? {
            return Err(Error::SigningError(format!(
                "Signature of {} doesn't match {}",
                tx.hash(),
                tx.from()
            )));
        }
        Ok(tx)
    }
}

/// Initial transfer of `tokens` to `to`, signed by a throwaway account with time 0
pub fn genesis(to: &Address, tokens: u64) -> Result<Transaction, Error> {
    let from = Account::create()?;
    TransactionBuilder::new(TxIntent::transfer(*to, tokens))
        .time(0)
        .build(&from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::PrivateKey;
    use std::thread;

    const TIME: u64 = 1530000000000;

    fn account() -> Account {
        let key: PrivateKey = "0f86ea981203b26b5b8244c8f661e30e5104555068a4bd168d3e3015db9bb25a"
            .parse()
            .unwrap();
        Account::from_private_key(key).unwrap()
    }

    fn recipient() -> Address {
        "1dcfccb29a15aa5bfb70ce944c745eb421d04bb5".parse().unwrap()
    }

    #[test]
    fn build_transfer() {
        let tx = TransactionBuilder::new(TxIntent::transfer(recipient(), 69))
            .time(TIME)
            .build(&account())
            .unwrap();

        assert_eq!(tx.tx_type(), TransactionType::TransferTokens);
        assert_eq!(tx.from().to_string(), "3ed25f42484d517cdfc72cafb7ebc9e8baa52c2c");
        assert_eq!(tx.to(), Some(&recipient()));
        assert_eq!(tx.value(), 69);
        assert_eq!(
            tx.hash().to_string(),
            "b4b2a726cb7470ff950f05e21e28520672a756dbf7b16144e651ad8f5bc55314"
        );
        assert_eq!(
            tx.signature().to_string(),
            "3e124900c401f18c876dd515946e6c8ea698bdd93290a14e34371d768aa7fb64\
             38bcd5ea61e438aac46310a451e075f1a15391774291a25d79a058dbc50ed1a4\
             00"
        );
        assert!(tx.signature().verify(tx.hash(), tx.from()).unwrap());
    }

    #[test]
    fn build_with_names_and_fee() {
        let tx = TransactionBuilder::new(TxIntent::transfer(recipient(), 69))
            .time(TIME)
            .hertz(21)
            .from_name("alice")
            .to_name("bob")
            .build(&account())
            .unwrap();

        assert_eq!(tx.hertz(), 21);
        assert_eq!(tx.from_name(), "alice");
        assert_eq!(tx.to_name(), "bob");
        assert_eq!(
            tx.hash().to_string(),
            "27dfbd4c93d1bb63f009d6751d60f5cecae76a8589b368a16915f412be0b2b47"
        );
        assert_eq!(
            tx.signature().to_string(),
            "3269142a9d4e7be3c8e0a8aebe692b326c15c10ba8351e2c5908972686dab19f\
             01d8c52883597b37cb27a05ce94a8f2531b6daf2e2d9f257bb12a59ca5910f30\
             00"
        );
    }

    #[test]
    fn use_fee_from_config() {
        let tx = TransactionBuilder::new(TxIntent::transfer(recipient(), 69))
            .with_config(Config::new().with_hertz(21))
            .time(TIME)
            .from_name("alice")
            .to_name("bob")
            .build(&account())
            .unwrap();

        assert_eq!(tx.hertz(), 21);
        assert_eq!(
            tx.hash().to_string(),
            "27dfbd4c93d1bb63f009d6751d60f5cecae76a8589b368a16915f412be0b2b47"
        );
    }

    #[test]
    fn build_deploy() {
        let tx = TransactionBuilder::new(TxIntent::deploy(hex::decode("6060604052").unwrap()))
            .time(TIME)
            .build(&account())
            .unwrap();

        assert_eq!(tx.tx_type(), TransactionType::SmartContract);
        assert_eq!(tx.to(), None);
        assert_eq!(
            tx.hash().to_string(),
            "5bf6610d0a8f8b2be76647f4e402a402f7b2c536fa1fc85bed23f37897557c3a"
        );
        assert_eq!(
            tx.signature().to_string(),
            "adf0277a57c99c19f7393183b3b986bc035ab87fe5c2bc4752968a579c537b3e\
             2acacabf82a33514c58ff4ef9df8a9acbe9ea48832196af0ff56b48a6c90ee7c\
             01"
        );
    }

    #[test]
    fn build_invoke() {
        let tx = TransactionBuilder::new(TxIntent::invoke(
            recipient(),
            hex::decode("c2985578").unwrap(),
            "foo",
        ))
        .time(TIME)
        .build(&account())
        .unwrap();

        assert_eq!(tx.method(), "foo");
        assert_eq!(tx.code(), &[0xc2, 0x98, 0x55, 0x78]);
        assert_eq!(
            tx.hash().to_string(),
            "81c48b111743dee5bb88da078fc07a496946c3c1af594b1b5b4b2ae943c58c9b"
        );
        assert_eq!(
            tx.signature().to_string(),
            "454f68466f80a867376e226c752e1a04aedad7ac71f08c80cc7470ad8797f8dd\
             3c4d0851b1890c3ca583468565879ac8d565b1c8a5d27ca98b93cc645bfd98e8\
             00"
        );
    }

    #[test]
    fn fail_deploy_with_recipient() {
        let act = TxIntent::from_fields(
            TransactionType::SmartContract,
            Some(recipient()),
            0,
            hex::decode("6060604052").unwrap(),
            String::new(),
        );
        assert!(matches!(act, Err(Error::BuildError(_))));
    }

    #[test]
    fn fail_deploy_without_code() {
        let act = TransactionBuilder::new(TxIntent::deploy(vec![]))
            .time(TIME)
            .build(&account());
        assert!(matches!(act, Err(Error::BuildError(_))));
    }

    #[test]
    fn fail_invoke_without_method() {
        let act = TransactionBuilder::new(TxIntent::invoke(recipient(), vec![1], ""))
            .time(TIME)
            .build(&account());
        assert!(matches!(act, Err(Error::BuildError(_))));
    }

    #[test]
    fn fail_invoke_without_recipient() {
        let act = TxIntent::from_fields(
            TransactionType::SmartContract,
            None,
            0,
            vec![1],
            "foo".to_string(),
        );
        assert!(matches!(act, Err(Error::BuildError(_))));
    }

    #[test]
    fn fail_transfer_with_code() {
        let act = TxIntent::from_fields(
            TransactionType::TransferTokens,
            Some(recipient()),
            69,
            vec![1],
            String::new(),
        );
        assert!(matches!(act, Err(Error::BuildError(_))));
    }

    #[test]
    fn fail_transfer_without_recipient() {
        let act = TxIntent::from_fields(
            TransactionType::TransferTokens,
            None,
            69,
            vec![],
            String::new(),
        );
        assert!(matches!(act, Err(Error::BuildError(_))));
    }

    #[test]
    fn classify_fields() {
        assert_eq!(
            TxIntent::from_fields(
                TransactionType::SmartContract,
                None,
                0,
                vec![1],
                String::new()
            )
            .unwrap(),
            TxIntent::deploy(vec![1])
        );
        assert_eq!(
            TxIntent::from_fields(
                TransactionType::SmartContract,
                Some(recipient()),
                0,
                vec![1],
                "foo".to_string()
            )
            .unwrap(),
            TxIntent::invoke(recipient(), vec![1], "foo")
        );
    }

    #[test]
    fn fail_without_private_key() {
        let act = TransactionBuilder::new(TxIntent::transfer(recipient(), 69))
            .time(TIME)
            .build(&Account::watch(*account().address()));
        assert!(matches!(act, Err(Error::BuildError(_))));
    }

    #[test]
    fn use_current_time_by_default() {
        let before = Utc::now().timestamp_millis() as u64;
        let tx = TransactionBuilder::new(TxIntent::transfer(recipient(), 69))
            .build(&account())
            .unwrap();
        assert!(tx.time() >= before);
        assert!(tx.verify().unwrap());
    }

    #[test]
    fn retry_with_new_time() {
        let tx = TransactionBuilder::new(TxIntent::transfer(recipient(), 69))
            .time(TIME)
            .from_name("alice")
            .build(&account())
            .unwrap();

        let retry = TransactionBuilder::from_transaction(&tx)
            .unwrap()
            .time(TIME + 1)
            .build(&account())
            .unwrap();

        assert_ne!(retry.hash(), tx.hash());
        assert_eq!(retry.value(), tx.value());
        assert_eq!(retry.from_name(), "alice");
        assert!(retry.verify().unwrap());

        let same = TransactionBuilder::from_transaction(&tx)
            .unwrap()
            .time(TIME)
            .build(&account())
            .unwrap();
        assert_eq!(same, tx);
    }

    #[test]
    fn create_genesis() {
        let tx = genesis(&recipient(), 1_000_000).unwrap();
        assert_eq!(tx.time(), 0);
        assert_eq!(tx.value(), 1_000_000);
        assert_eq!(tx.to(), Some(&recipient()));
        assert!(tx.verify().unwrap());
    }

    #[test]
    fn build_on_many_threads() {
        let handles: Vec<_> = (0..8u64)
            .map(|i| {
                thread::spawn(move || {
                    let from = Account::create().unwrap();
                    let tx = TransactionBuilder::new(TxIntent::transfer(recipient(), i))
                        .time(TIME)
                        .build(&from)
                        .unwrap();
                    (from, tx)
                })
            })
            .collect();

        for handle in handles {
            let (from, tx) = handle.join().unwrap();
            assert_eq!(tx.from(), from.address());
            assert!(tx.verify().unwrap());
        }
    }
}
