// Copyright 2024-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Substreams Client
//!
//! A client for the Substreams `Stream/Blocks` gRPC API: authenticated
//! transport, validated stream requests, a lazy cancellable block stream
//! with cursor-based resumption, and a type registry for decoding
//! self-describing module outputs.
//!
//! ## Streaming module outputs
//!
//! ```ignore
//! use substreams_client::{
//!     load_package, BackoffPolicy, BlockEvent, BlockStream, StopBlock, StreamRequest,
//!     SubstreamsEndpoint,
//! };
//!
//! let package = load_package("solana-tokens-v0.1.0.spkg").await?;
//! let request = StreamRequest::new(
//!     &package,
//!     "db_out",
//!     200_000_000,
//!     StopBlock::Relative(1_000_000),
//!     true,
//! )?;
//! let endpoint = SubstreamsEndpoint::new("https://mainnet.sol.streamingfast.io:443", &token)?;
//!
//! let (mut blocks, stop) = BlockStream::open(endpoint, request, BackoffPolicy::default());
//! while let Some(event) = blocks.next_event().await {
//!     if let BlockEvent::Data(data) = event? {
//!         // Do something with the block-scoped payload.
//!     }
//! }
//! ```

mod backoff;
mod endpoint;
mod error;
mod package;
mod registry;
mod request;
mod stream;

pub use backoff::BackoffPolicy;
pub use endpoint::SubstreamsEndpoint;
pub use error::ClientError;
pub use package::load_package;
pub use registry::{DecodedOutput, TypeRegistry};
pub use request::{StopBlock, StreamRequest};
pub use stream::{BlockEvent, BlockStream, BlockStreamConnector, StopHandle, StreamState};
