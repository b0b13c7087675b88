// Copyright 2024-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::pb::sf::substreams::v1::{module, Clock, Module, Modules, Package};

impl Package {
    /// Modules declared by this package, in declaration order.
    pub fn modules(&self) -> &[Module] {
        self.modules
            .as_ref()
            .map(|modules| modules.modules.as_slice())
            .unwrap_or_default()
    }

    /// Look a module up by its name.
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules().iter().find(|module| module.name == name)
    }
}

impl Modules {
    pub fn get(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|module| module.name == name)
    }
}

impl Module {
    pub fn is_map(&self) -> bool {
        matches!(self.kind, Some(module::Kind::KindMap(_)))
    }

    /// The declared output type of the module, as written in the package.
    ///
    /// Map modules carry their protobuf output type, stores their value type.
    pub fn output_type(&self) -> Option<&str> {
        match self.kind.as_ref()? {
            module::Kind::KindMap(map) => Some(map.output_type.as_str()),
            module::Kind::KindStore(store) => Some(store.value_type.as_str()),
            module::Kind::KindBlockIndex(index) => Some(index.output_type.as_str()),
        }
    }

    /// Fully-qualified protobuf message name of the module output.
    ///
    /// Package manifests prefix message outputs with `proto:`; the prefix is
    /// stripped so the name can be matched against a type registry.
    pub fn output_message_name(&self) -> Option<&str> {
        self.output_type()
            .map(|output| output.strip_prefix("proto:").unwrap_or(output))
    }

    /// Parameter inputs of the module, e.g. `token_contract:<address>`.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().filter_map(|input| {
            match input.input.as_ref()? {
                module::input::Input::Params(params) => Some(params.value.as_str()),
                _ => None,
            }
        })
    }
}

impl Clock {
    /// Unix timestamp of the block, in seconds. Zero when the clock carries
    /// no timestamp.
    pub fn timestamp_seconds(&self) -> i64 {
        self.timestamp
            .as_ref()
            .map(|timestamp| timestamp.seconds)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::pb::sf::substreams::v1::{module, Module, Modules, Package};

    fn map_module(name: &str, output_type: &str) -> Module {
        Module {
            name: name.to_string(),
            kind: Some(module::Kind::KindMap(module::KindMap {
                output_type: output_type.to_string(),
            })),
            ..Default::default()
        }
    }

    fn test_package() -> Package {
        Package {
            modules: Some(Modules {
                modules: vec![
                    map_module("map_block", "proto:sf.solana.spl.token.v1.Events"),
                    map_module(
                        "db_out",
                        "proto:sf.substreams.sink.database.v1.DatabaseChanges",
                    ),
                ],
                binaries: vec![],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn module_lookup_by_name() {
        let package = test_package();
        assert!(package.module("db_out").is_some());
        assert!(package.module("does_not_exist").is_none());
    }

    #[test]
    fn output_message_name_strips_proto_prefix() {
        let package = test_package();
        let module = package.module("db_out").unwrap();
        assert_eq!(
            module.output_message_name(),
            Some("sf.substreams.sink.database.v1.DatabaseChanges")
        );
    }

    #[test]
    fn store_module_is_not_a_map() {
        let module = Module {
            name: "store_totals".to_string(),
            kind: Some(module::Kind::KindStore(module::KindStore {
                update_policy: module::kind_store::UpdatePolicy::Add as i32,
                value_type: "bigint".to_string(),
            })),
            ..Default::default()
        };
        assert!(!module.is_map());
        assert_eq!(module.output_type(), Some("bigint"));
    }
}
