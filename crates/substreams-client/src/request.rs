// Copyright 2024-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use substreams_protos::{Modules, Package, Request};

use crate::error::ClientError;

/// Where a stream stops, inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopBlock {
    /// An absolute block number.
    Absolute(u64),
    /// An offset added to the start block, the `+1000000` form.
    Relative(u64),
}

impl StopBlock {
    pub fn resolve(&self, start_block: u64) -> u64 {
        match self {
            StopBlock::Absolute(number) => *number,
            StopBlock::Relative(offset) => start_block + offset,
        }
    }
}

impl FromStr for StopBlock {
    type Err = ClientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (parse_from, relative) = match value.strip_prefix('+') {
            Some(rest) => (rest, true),
            None => (value, false),
        };
        let number = parse_from
            .parse::<u64>()
            .map_err(|_| ClientError::Config(format!("invalid stop block `{value}`")))?;
        Ok(match relative {
            true => StopBlock::Relative(number),
            false => StopBlock::Absolute(number),
        })
    }
}

/// An immutable description of one `Stream/Blocks` request.
///
/// Validated against the loaded package when constructed, so a bad module
/// name or range fails before the stream opens rather than mid-stream.
/// Reconnection derives a fresh rpc request carrying the updated cursor;
/// the description itself never changes.
#[derive(Clone, Debug)]
pub struct StreamRequest {
    output_module: String,
    start_block: u64,
    stop_block: u64,
    production_mode: bool,
    cursor: Option<String>,
    modules: Modules,
}

impl StreamRequest {
    pub fn new(
        package: &Package,
        output_module: &str,
        start_block: u64,
        stop_block: StopBlock,
        production_mode: bool,
    ) -> Result<Self, ClientError> {
        let module = package.module(output_module).ok_or_else(|| {
            ClientError::Config(format!(
                "output module `{output_module}` is not present in the package"
            ))
        })?;
        if !module.is_map() {
            return Err(ClientError::Config(format!(
                "output module `{output_module}` is not a map module"
            )));
        }

        let stop_block = stop_block.resolve(start_block);
        if stop_block < start_block {
            return Err(ClientError::Config(format!(
                "stop block {stop_block} precedes start block {start_block}"
            )));
        }

        let modules = package
            .modules
            .clone()
            .ok_or_else(|| ClientError::Config("package declares no modules".to_string()))?;

        Ok(Self {
            output_module: output_module.to_string(),
            start_block,
            stop_block,
            production_mode,
            cursor: None,
            modules,
        })
    }

    /// Resume delivery immediately after `cursor` instead of at the start
    /// block.
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn output_module(&self) -> &str {
        &self.output_module
    }

    pub fn start_block(&self) -> u64 {
        self.start_block
    }

    pub fn stop_block(&self) -> u64 {
        self.stop_block
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// The rpc request for this description. `cursor` overrides the built-in
    /// one; it carries the resume position across reconnections.
    pub(crate) fn to_rpc(&self, cursor: Option<&str>) -> Request {
        Request {
            start_block_num: self.start_block as i64,
            start_cursor: cursor
                .or(self.cursor.as_deref())
                .unwrap_or_default()
                .to_string(),
            stop_block_num: self.stop_block,
            final_blocks_only: false,
            production_mode: self.production_mode,
            output_module: self.output_module.clone(),
            modules: Some(self.modules.clone()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use substreams_protos::{module, Module, Modules, Package};

    use super::*;

    fn tokens_package() -> Package {
        let map = |name: &str, output_type: &str| Module {
            name: name.to_string(),
            kind: Some(module::Kind::KindMap(module::KindMap {
                output_type: output_type.to_string(),
            })),
            ..Default::default()
        };
        let store = Module {
            name: "store_totals".to_string(),
            kind: Some(module::Kind::KindStore(module::KindStore {
                value_type: "bigint".to_string(),
                ..Default::default()
            })),
            ..Default::default()
        };
        Package {
            modules: Some(Modules {
                modules: vec![
                    map("map_block", "proto:sf.solana.spl.token.v1.Events"),
                    map(
                        "db_out",
                        "proto:sf.substreams.sink.database.v1.DatabaseChanges",
                    ),
                    store,
                ],
                binaries: vec![],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn relative_stop_block_resolves_against_start() {
        let package = tokens_package();
        let request = StreamRequest::new(
            &package,
            "db_out",
            200_000_000,
            StopBlock::Relative(1_000_000),
            true,
        )
        .unwrap();
        assert_eq!(request.stop_block(), 201_000_000);
    }

    #[test]
    fn unknown_module_fails_before_streaming() {
        let package = tokens_package();
        let result = StreamRequest::new(&package, "graph_out", 0, StopBlock::Absolute(10), true);
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn store_module_is_rejected_as_output() {
        let package = tokens_package();
        let result =
            StreamRequest::new(&package, "store_totals", 0, StopBlock::Absolute(10), true);
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn absolute_stop_before_start_is_rejected() {
        let package = tokens_package();
        let result =
            StreamRequest::new(&package, "db_out", 100, StopBlock::Absolute(99), true);
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn stop_block_parses_both_forms() {
        assert_eq!("200".parse::<StopBlock>().unwrap(), StopBlock::Absolute(200));
        assert_eq!(
            "+1000000".parse::<StopBlock>().unwrap(),
            StopBlock::Relative(1_000_000)
        );
        assert!("+-3".parse::<StopBlock>().is_err());
        assert!("".parse::<StopBlock>().is_err());
    }

    #[test]
    fn reconnect_cursor_overrides_initial_cursor() {
        let package = tokens_package();
        let request = StreamRequest::new(&package, "db_out", 10, StopBlock::Absolute(20), false)
            .unwrap()
            .with_cursor("initial");
        assert_eq!(request.to_rpc(None).start_cursor, "initial");
        assert_eq!(request.to_rpc(Some("resumed")).start_cursor, "resumed");
    }
}
