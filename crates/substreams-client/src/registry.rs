// Copyright 2024-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashMap, sync::Arc};

use prost::Message;
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;

type DecodeFn = Arc<dyn Fn(&[u8]) -> Result<Value, ClientError> + Send + Sync>;

/// Immutable dispatch table from fully-qualified protobuf message names to
/// decoders.
///
/// Built once at startup from compiled schema types and shared read-only
/// across the stream's lifetime; lookups fail closed on a miss. Decoding is
/// pure: identical `(registry, payload)` inputs always yield the identical
/// output or the identical error.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    decoders: HashMap<String, DecodeFn>,
}

/// A decoded module output: the payload's message name plus its fields as a
/// structured value.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedOutput {
    pub type_name: String,
    pub fields: Value,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the decoder for `type_name`.
    ///
    /// The key is the bare message name, e.g.
    /// `sf.substreams.sink.database.v1.DatabaseChanges`.
    pub fn register<M>(&mut self, type_name: &str)
    where
        M: Message + Serialize + Default,
    {
        let name = type_name.to_string();
        let decode_name = name.clone();
        self.decoders.insert(
            name,
            Arc::new(move |payload: &[u8]| {
                let message = M::decode(payload).map_err(|err| ClientError::MalformedPayload {
                    type_name: decode_name.clone(),
                    reason: err.to_string(),
                })?;
                serde_json::to_value(&message).map_err(|err| ClientError::MalformedPayload {
                    type_name: decode_name.clone(),
                    reason: err.to_string(),
                })
            }),
        );
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.decoders.contains_key(trim_type_url(type_name))
    }

    /// Resolve `type_url` and decode `payload` against the registered schema.
    ///
    /// Fails with [`ClientError::UnknownType`] when the name is absent from
    /// the registry, and with [`ClientError::MalformedPayload`] when the
    /// bytes do not parse as the identified type.
    pub fn decode(&self, type_url: &str, payload: &[u8]) -> Result<DecodedOutput, ClientError> {
        let type_name = trim_type_url(type_url);
        let decoder = self
            .decoders
            .get(type_name)
            .ok_or_else(|| ClientError::UnknownType(type_name.to_string()))?;
        Ok(DecodedOutput {
            type_name: type_name.to_string(),
            fields: decoder(payload)?,
        })
    }
}

/// `Any` type URLs arrive both bare and host-prefixed
/// (`type.googleapis.com/sf...`); registry keys are always bare.
fn trim_type_url(type_url: &str) -> &str {
    match type_url.rsplit_once('/') {
        Some((_, name)) => name,
        None => type_url,
    }
}

#[cfg(test)]
mod tests {
    use prost::Message;
    use substreams_protos::{sink_database_v1, DatabaseChanges};

    use super::*;

    const DB_CHANGES: &str = "sf.substreams.sink.database.v1.DatabaseChanges";

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register::<DatabaseChanges>(DB_CHANGES);
        registry
    }

    fn transfer_payload() -> Vec<u8> {
        DatabaseChanges {
            table_changes: vec![sink_database_v1::TableChange {
                table: "transfer".to_string(),
                ordinal: 1,
                operation: sink_database_v1::table_change::Operation::Create as i32,
                fields: vec![sink_database_v1::Field {
                    name: "amount".to_string(),
                    new_value: "1000".to_string(),
                    old_value: String::new(),
                }],
                primary_key: Some(sink_database_v1::table_change::PrimaryKey::Pk(
                    "evt_tx:1".to_string(),
                )),
            }],
        }
        .encode_to_vec()
    }

    #[test]
    fn decodes_registered_type() {
        let output = registry().decode(DB_CHANGES, &transfer_payload()).unwrap();
        assert_eq!(output.type_name, DB_CHANGES);
        assert_eq!(
            output.fields["table_changes"][0]["table"],
            serde_json::json!("transfer")
        );
    }

    #[test]
    fn accepts_host_prefixed_type_urls() {
        let url = format!("type.googleapis.com/{DB_CHANGES}");
        let output = registry().decode(&url, &transfer_payload()).unwrap();
        assert_eq!(output.type_name, DB_CHANGES);
    }

    #[test]
    fn decode_is_deterministic() {
        let registry = registry();
        let payload = transfer_payload();
        let first = registry.decode(DB_CHANGES, &payload).unwrap();
        let second = registry.decode(DB_CHANGES, &payload).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.fields.to_string(), second.fields.to_string());
    }

    #[test]
    fn unknown_type_fails_closed() {
        let result = registry().decode("sf.unknown.v1.Message", &transfer_payload());
        assert!(matches!(result, Err(ClientError::UnknownType(name)) if name == "sf.unknown.v1.Message"));
    }

    #[test]
    fn malformed_payload_is_an_error_not_a_partial_result() {
        let result = registry().decode(DB_CHANGES, &[0xff, 0xff, 0xff, 0xff]);
        assert!(matches!(
            result,
            Err(ClientError::MalformedPayload { type_name, .. }) if type_name == DB_CHANGES
        ));
    }
}
