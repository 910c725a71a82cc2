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
//! # Ledger account

use super::{Address, KeyPair, PrivateKey};
use crate::error::Error;

/// Account identity. Only a locally created account has a private key, an account read from a
/// node has only the address. The private key is never serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    address: Address,

    #[serde(skip)]
    private_key: Option<PrivateKey>,
}

impl Account {
    /// Create a new account with a freshly generated key
    pub fn create() -> Result<Self, Error> {
        let pair = KeyPair::generate()?;
        let account = Account::from(&pair);
        debug!("Account created: {}", account.address);
        Ok(account)
    }

    /// Account of an existing private key
    pub fn from_private_key(key: PrivateKey) -> Result<Self, Error> {
        Ok(Account {
            address: key.to_address()?,
            private_key: Some(key),
        })
    }

    /// Account with a key provided separately from its address. The key is not checked here,
    /// but a transaction can't be built if it doesn't match the address.
    pub fn with_private_key(address: Address, key: PrivateKey) -> Self {
        Account {
            address,
            private_key: Some(key),
        }
    }

    /// Account known only by its address
    pub fn watch(address: Address) -> Self {
        Account {
            address,
            private_key: None,
        }
    }

    /// Account address
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Private key, if the account is held locally
    pub fn private_key(&self) -> Option<&PrivateKey> {
        self.private_key.as_ref()
    }

    /// Private key which can sign transactions of the account
    pub fn signing_key(&self) -> Result<&PrivateKey, Error> {
        let key = self.private_key.as_ref().ok_or_else(|| {
            Error::BuildError(format!("No private key for {}", self.address))
        })?;
        let derived = key
            .to_address()
            .map_err(|_| Error::BuildError(format!("Invalid private key for {}", self.address)))?;
        if derived != self.address {
            return Err(Error::BuildError(format!(
                "Private key doesn't belong to {}",
                self.address
            )));
        }
        Ok(key)
    }
}

impl From<&KeyPair> for Account {
    fn from(pair: &KeyPair) -> Self {
        Account {
            address: pair.address(),
            private_key: Some(*pair.private_key()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> PrivateKey {
        "0f86ea981203b26b5b8244c8f661e30e5104555068a4bd168d3e3015db9bb25a"
            .parse()
            .unwrap()
    }

    #[test]
    fn create_with_key() {
        let account = Account::create().unwrap();
        let key = account.private_key().unwrap();
        assert_eq!(&key.to_address().unwrap(), account.address());
        assert!(account.signing_key().is_ok());
    }

    #[test]
    fn from_known_key() {
        let account = Account::from_private_key(key()).unwrap();
        assert_eq!(
            account.address().to_string(),
            "3ed25f42484d517cdfc72cafb7ebc9e8baa52c2c"
        );
    }

    #[test]
    fn serialize_only_address() {
        let account = Account::from_private_key(key()).unwrap();
        let json = serde_json::to_string(&account).unwrap();

        assert_eq!(
            json,
            "{\"address\":\"3ed25f42484d517cdfc72cafb7ebc9e8baa52c2c\"}"
        );
    }

    #[test]
    fn read_from_node_without_key() {
        let json = r#"{
            "address": "1dcfccb29a15aa5bfb70ce944c745eb421d04bb5",
            "name": "",
            "balance": 1000
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();

        assert_eq!(
            account.address().to_string(),
            "1dcfccb29a15aa5bfb70ce944c745eb421d04bb5"
        );
        assert!(account.private_key().is_none());
        assert!(matches!(account.signing_key(), Err(Error::BuildError(_))));
    }

    #[test]
    fn no_signing_key_for_other_address() {
        let account = Account::with_private_key(
            "1dcfccb29a15aa5bfb70ce944c745eb421d04bb5".parse().unwrap(),
            key(),
        );
        assert!(matches!(account.signing_key(), Err(Error::BuildError(_))));
    }

    #[test]
    fn no_signing_key_for_watched() {
        let account = Account::watch("1dcfccb29a15aa5bfb70ce944c745eb421d04bb5".parse().unwrap());
        assert!(matches!(account.signing_key(), Err(Error::BuildError(_))));
    }
}
