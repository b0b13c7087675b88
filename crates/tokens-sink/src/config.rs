// Copyright 2024-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Process configuration, read once from the environment at startup and
//! passed into every component that needs it.

use std::str::FromStr;

use substreams_client::StopBlock;

use crate::error::SinkError;

const DEFAULT_ENDPOINT: &str = "https://mainnet.sol.streamingfast.io:443";
const DEFAULT_PACKAGE: &str = "solana-tokens-v0.1.0.spkg";
const DEFAULT_MODULE: &str = "db_out";
const DEFAULT_START_BLOCK: u64 = 200_000_000;
const DEFAULT_STOP_BLOCK: StopBlock = StopBlock::Relative(1_000_000);
const DEFAULT_LOG_EVERY: u64 = 10_000;

#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: String,
    pub package: String,
    pub module: String,
    pub token: String,
    pub start_block: u64,
    pub stop_block: StopBlock,
    pub production_mode: bool,
    /// Promote per-message decode failures to fatal errors.
    pub strict: bool,
    /// Log every Nth block.
    pub log_every: u64,
}

impl Config {
    /// Read the process configuration.
    ///
    /// The API token is required and checked here, before anything touches
    /// the network.
    pub fn from_env() -> Result<Self, SinkError> {
        dotenvy::dotenv().ok();

        let token = match dotenvy::var("SUBSTREAMS_API_TOKEN") {
            Ok(token) if !token.is_empty() => token,
            _ => return Err(SinkError::EnvVarMissing("SUBSTREAMS_API_TOKEN")),
        };

        Ok(Self {
            endpoint: var_or("SUBSTREAMS_ENDPOINT", DEFAULT_ENDPOINT),
            package: var_or("SPKG", DEFAULT_PACKAGE),
            module: var_or("MODULE", DEFAULT_MODULE),
            token,
            start_block: parse_var("START_BLOCK", DEFAULT_START_BLOCK)?,
            stop_block: parse_var("STOP_BLOCK", DEFAULT_STOP_BLOCK)?,
            production_mode: parse_var("PRODUCTION_MODE", true)?,
            strict: parse_var("STRICT", false)?,
            log_every: parse_var("LOG_EVERY", DEFAULT_LOG_EVERY)?,
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    dotenvy::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, SinkError> {
    match dotenvy::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| SinkError::EnvVarInvalid { var: name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-global, so the whole surface is
    // exercised from a single test.
    #[test]
    fn config_comes_from_the_environment() {
        std::env::remove_var("SUBSTREAMS_API_TOKEN");
        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(SinkError::EnvVarMissing("SUBSTREAMS_API_TOKEN"))
        ));

        std::env::set_var("SUBSTREAMS_API_TOKEN", "server_secret");
        let config = Config::from_env().unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.module, "db_out");
        assert_eq!(config.start_block, 200_000_000);
        assert_eq!(config.stop_block, StopBlock::Relative(1_000_000));
        assert!(config.production_mode);
        assert!(!config.strict);
        assert_eq!(config.log_every, 10_000);

        std::env::set_var("STOP_BLOCK", "200000123");
        std::env::set_var("START_BLOCK", "200000000");
        std::env::set_var("STRICT", "true");
        let config = Config::from_env().unwrap();
        assert_eq!(config.stop_block, StopBlock::Absolute(200_000_123));
        assert!(config.strict);

        std::env::set_var("STOP_BLOCK", "not-a-block");
        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(SinkError::EnvVarInvalid { var: "STOP_BLOCK", .. })
        ));

        std::env::remove_var("STOP_BLOCK");
        std::env::remove_var("START_BLOCK");
        std::env::remove_var("STRICT");
        std::env::remove_var("SUBSTREAMS_API_TOKEN");
    }
}
