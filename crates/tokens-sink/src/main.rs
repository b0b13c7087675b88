// Copyright 2024-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Streams the Solana SPL tokens substream and logs sampled progress.
//!
//! Configuration is environment-only; see [`config::Config`]. On an
//! unrecoverable error the process logs one diagnostic line and exits
//! non-zero.

use std::process::ExitCode;

use substreams_client::{
    load_package, BackoffPolicy, BlockEvent, BlockStream, ClientError, DecodedOutput,
    StreamRequest, SubstreamsEndpoint, TypeRegistry,
};
use substreams_protos::{BlockScopedData, DatabaseChanges, TokenEvents};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod reporter;

use config::Config;
use error::SinkError;
use reporter::ProgressReporter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), SinkError> {
    let config = Config::from_env()?;

    let package = load_package(&config.package).await?;
    let registry = token_registry();

    // Fail fast: the module must exist and its declared output type must be
    // decodable before the stream opens.
    match package
        .module(&config.module)
        .and_then(|module| module.output_message_name())
    {
        Some(type_name) if registry.contains(type_name) => {}
        Some(type_name) => return Err(ClientError::UnknownType(type_name.to_string()).into()),
        None => {
            return Err(ClientError::Config(format!(
                "module `{}` is not present in package `{}`",
                config.module, config.package
            ))
            .into())
        }
    }

    let request = StreamRequest::new(
        &package,
        &config.module,
        config.start_block,
        config.stop_block,
        config.production_mode,
    )?;
    let endpoint = SubstreamsEndpoint::new(&config.endpoint, &config.token)?;

    info!(
        endpoint = %config.endpoint,
        module = %config.module,
        start_block = config.start_block,
        stop_block = request.stop_block(),
        "streaming blocks"
    );

    let (mut blocks, stop) = BlockStream::open(endpoint, request, BackoffPolicy::default());

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, stopping stream");
            stop.stop();
        }
    });

    let mut reporter = ProgressReporter::new(config.log_every);

    while let Some(event) = blocks.next_event().await {
        let event = event?;

        let output = match &event {
            BlockEvent::Data(data) => match decode_output(&registry, data) {
                Ok(output) => Some(output),
                Err(err) if config.strict => return Err(err.into()),
                Err(err) => {
                    warn!(
                        block = data.block_number().unwrap_or_default(),
                        %err,
                        "skipping undecodable payload"
                    );
                    None
                }
            },
            _ => None,
        };

        reporter.on_event(&event, output.as_ref());
    }

    reporter.summarize();

    Ok(())
}

fn decode_output(
    registry: &TypeRegistry,
    data: &BlockScopedData,
) -> Result<DecodedOutput, ClientError> {
    let any = data.map_output()?;
    registry.decode(&any.type_url, &any.value)
}

/// Registry covering the output types the tokens package can emit, built
/// once and shared read-only for the life of the process.
fn token_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<DatabaseChanges>("sf.substreams.sink.database.v1.DatabaseChanges");
    registry.register::<TokenEvents>("sf.solana.spl.token.v1.Events");
    registry
}

#[cfg(test)]
mod tests {
    use prost::Message;
    use substreams_protos::{spl_token_v1, MapModuleOutput};

    use super::*;

    #[test]
    fn registry_covers_both_package_output_types() {
        let registry = token_registry();
        assert!(registry.contains("sf.substreams.sink.database.v1.DatabaseChanges"));
        assert!(registry.contains("sf.solana.spl.token.v1.Events"));
        assert!(!registry.contains("sf.ethereum.type.v2.Block"));
    }

    #[test]
    fn decodes_token_events_from_block_scoped_data() {
        let events = TokenEvents {
            data: vec![spl_token_v1::Event {
                txn_id: "5wJ4".to_string(),
                block_height: 200_000_001,
                block_timestamp: 1_717_000_000,
                block_hash: "9xQe".to_string(),
                instruction_index: 2,
                r#type: Some(spl_token_v1::event::Type::Transfer(spl_token_v1::Transfer {
                    accounts: Some(spl_token_v1::TransferAccounts {
                        source: "src".to_string(),
                        destination: "dst".to_string(),
                        signer: Some(spl_token_v1::Signer {
                            kind: Some(spl_token_v1::signer::Kind::Single(
                                spl_token_v1::SingleSigner {
                                    signer: "authority".to_string(),
                                },
                            )),
                        }),
                        token_mint: None,
                    }),
                    instruction: Some(spl_token_v1::TransferInstruction {
                        amount: 1_000,
                        decimals: None,
                    }),
                })),
            }],
        };

        let data = BlockScopedData {
            output: Some(MapModuleOutput {
                name: "map_block".to_string(),
                map_output: Some(prost_wkt_types::Any {
                    type_url: "type.googleapis.com/sf.solana.spl.token.v1.Events".to_string(),
                    value: events.encode_to_vec(),
                }),
                debug_info: None,
            }),
            ..Default::default()
        };

        let output = decode_output(&token_registry(), &data).unwrap();
        assert_eq!(output.type_name, "sf.solana.spl.token.v1.Events");
        assert_eq!(
            output.fields["data"][0]["type"]["Transfer"]["instruction"]["amount"],
            serde_json::json!(1_000)
        );
    }
}
