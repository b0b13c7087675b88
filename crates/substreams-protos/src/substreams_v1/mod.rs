//! Substreams package-related data structures and operations.
//!
//! A package bundles the compiled module graph of a substream together with
//! its metadata; consumers look modules up by name before opening a stream.

mod package;

pub use crate::pb::sf::substreams::v1::*;
