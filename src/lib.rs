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
//! # Dispatch ledger client library
//!
//! Creates accounts, builds transactions and signs them, so they can be submitted to a Dispatch
//! node. Transport to the node is not included, a signed transaction is serialized with
//! `Transaction::to_json`.

#![deny(missing_docs)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod error;
pub mod ledger;
pub mod util;

pub use self::config::Config;
pub use self::error::Error;
pub use self::ledger::*;
pub use self::util::{Hex, TxHash};

const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

/// Get the current library version.
pub fn version() -> &'static str {
    VERSION.unwrap_or("unknown")
}
