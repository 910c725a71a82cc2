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
//! # Accounts, keys and transactions of the Dispatch ledger

mod account;
mod address;
mod builder;
mod keypair;
mod record;
mod signature;
mod transaction;

pub use self::account::Account;
pub use self::address::{Address, ADDRESS_BYTES};
pub use self::builder::{genesis, TransactionBuilder, TxIntent};
pub use self::keypair::{KeyPair, PrivateKey, PRIVATE_KEY_BYTES};
pub use self::record::TransactionRecord;
pub use self::signature::{Signature, ECDSA_SIGNATURE_BYTES};
pub use self::transaction::{
    HashedTransaction, Transaction, TransactionType, UnsignedTransaction,
};
