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
//! # Logic to manage configuration parameters

/// Configuration parameters of transaction building
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Fee used when a transaction doesn't specify one
    pub hertz: u64,

    /// Check each produced signature against the sender address before returning a transaction
    pub verify_signed: bool,
}

impl Config {
    /// Configuration with no default fee and verification of signed transactions
    pub fn new() -> Config {
        Config {
            hertz: 0,
            verify_signed: true,
        }
    }

    /// Set fee used when a transaction doesn't specify one
    pub fn with_hertz(self, hertz: u64) -> Config {
        Config { hertz, ..self }
    }

    /// Enable or disable the check of each produced signature
    pub fn with_verify_signed(self, verify_signed: bool) -> Config {
        Config {
            verify_signed,
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
