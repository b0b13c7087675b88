//! Substreams rpc v2 streaming surface: the `Stream/Blocks` call, its
//! request, and the tagged response union the server replies with.

mod block;

pub use crate::pb::sf::substreams::rpc::v2::*;
