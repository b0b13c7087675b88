// Copyright 2024-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use prost::Message;
use substreams_protos::{Package, ProtosError};

use crate::error::ClientError;

/// Load a compiled Substreams package (`.spkg`) from a local path or an
/// http(s) URL.
///
/// The package is decoded once at startup; its module table backs request
/// validation and its declared output types back the decoder registry.
pub async fn load_package(source: &str) -> Result<Package, ClientError> {
    let bytes = if source.starts_with("http://") || source.starts_with("https://") {
        reqwest::get(source)
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec()
    } else {
        tokio::fs::read(source).await?
    };

    let package = Package::decode(bytes.as_slice()).map_err(ProtosError::from)?;
    if package.modules().is_empty() {
        return Err(ClientError::Config(format!(
            "package `{source}` declares no modules"
        )));
    }
    Ok(package)
}

#[cfg(test)]
mod tests {
    use substreams_protos::{module, Module, Modules};

    use super::*;

    fn encoded_package() -> Vec<u8> {
        Package {
            modules: Some(Modules {
                modules: vec![Module {
                    name: "db_out".to_string(),
                    kind: Some(module::Kind::KindMap(module::KindMap {
                        output_type: "proto:sf.substreams.sink.database.v1.DatabaseChanges"
                            .to_string(),
                    })),
                    ..Default::default()
                }],
                binaries: vec![],
            }),
            ..Default::default()
        }
        .encode_to_vec()
    }

    #[tokio::test]
    async fn loads_package_from_path() {
        let path = std::env::temp_dir().join("tokens-test.spkg");
        tokio::fs::write(&path, encoded_package()).await.unwrap();

        let package = load_package(path.to_str().unwrap()).await.unwrap();
        assert!(package.module("db_out").is_some());

        tokio::fs::remove_file(&path).await.ok();
    }

    #[tokio::test]
    async fn missing_package_file_is_an_error() {
        let result = load_package("/does/not/exist.spkg").await;
        assert!(matches!(result, Err(ClientError::PackageRead(_))));
    }

    #[tokio::test]
    async fn empty_package_is_rejected() {
        let path = std::env::temp_dir().join("empty-test.spkg");
        tokio::fs::write(&path, Package::default().encode_to_vec())
            .await
            .unwrap();

        let result = load_package(path.to_str().unwrap()).await;
        assert!(matches!(result, Err(ClientError::Config(_))));

        tokio::fs::remove_file(&path).await.ok();
    }
}
