//! # Substreams Protocol Buffers in Rust
//!
//! This crate provides Rust implementations of StreamingFast's Substreams
//! protocol buffer definitions, enabling encoding and decoding of the
//! package format, the rpc v2 streaming surface, and the payload schemas
//! produced by the Solana SPL tokens package.
//!
//! ## Usage
//!
//! Check out [`substreams-client`](../substreams_client/index.html) for a
//! high-level client that drives the `Stream/Blocks` call against chain data
//! endpoint providers like Pinax or StreamingFast.

mod error;
mod pb;
mod rpc_v2;
mod substreams_v1;

pub use error::ProtosError;

/// Work with the Substreams package surface: modules, their kinds and
/// declared output types.
pub use substreams_v1::{module, Binary, BlockRef, Clock, Module, Modules, Package};

/// Work with the rpc v2 `Stream/Blocks` call.
pub use rpc_v2::{
    response::Message as ResponseMessage, stream_client::StreamClient, BlockScopedData,
    BlockUndoSignal, MapModuleOutput, ModulesProgress, Request, Response, SessionInit,
};

/// Payload schemas the Solana tokens package produces.
pub use pb::sf::solana::spl::token::v1 as spl_token_v1;
pub use pb::sf::substreams::sink::database::v1 as sink_database_v1;

pub use sink_database_v1::DatabaseChanges;
pub use spl_token_v1::Events as TokenEvents;
