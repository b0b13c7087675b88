// Copyright 2024-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use prost_wkt_types::Any;

use crate::{
    error::ProtosError,
    pb::sf::substreams::{
        rpc::v2::{BlockScopedData, BlockUndoSignal},
        v1::Clock,
    },
};

impl BlockScopedData {
    /// The block clock this payload is scoped to.
    pub fn clock(&self) -> Result<&Clock, ProtosError> {
        self.clock.as_ref().ok_or(ProtosError::NullClock)
    }

    pub fn block_number(&self) -> Result<u64, ProtosError> {
        Ok(self.clock()?.number)
    }

    /// The serialized output of the requested map module, as a
    /// self-describing `Any`.
    pub fn map_output(&self) -> Result<&Any, ProtosError> {
        self.output
            .as_ref()
            .and_then(|output| output.map_output.as_ref())
            .ok_or(ProtosError::NullMapOutput)
    }
}

impl BlockUndoSignal {
    /// The last block that is still valid; everything above it has been
    /// reverted on-chain.
    pub fn last_valid_block_number(&self) -> Result<u64, ProtosError> {
        self.last_valid_block
            .as_ref()
            .map(|block| block.number)
            .ok_or(ProtosError::NullLastValidBlock)
    }
}
