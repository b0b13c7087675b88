// Copyright 2024-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Sampled progress reporting for a running stream.

use std::io::Write;
use std::time::Instant;

use substreams_client::{BlockEvent, ClientError, DecodedOutput};
use tracing::{info, warn};

/// Emits sampled progress lines to stdout and a final throughput summary.
///
/// Reporting is side effect only and must never abort a healthy stream:
/// every internal failure is caught here and logged, never propagated back
/// into the consumer loop.
pub struct ProgressReporter {
    log_every: u64,
    started: Instant,
    blocks: u64,
    undos: u64,
    last_block: Option<u64>,
}

impl ProgressReporter {
    pub fn new(log_every: u64) -> Self {
        Self {
            log_every: log_every.max(1),
            started: Instant::now(),
            blocks: 0,
            undos: 0,
            last_block: None,
        }
    }

    /// Record one stream event.
    pub fn on_event(&mut self, event: &BlockEvent, output: Option<&DecodedOutput>) {
        if let Err(err) = self.report(event, output) {
            warn!(%err, "progress reporting failed");
        }
    }

    /// Log the end-of-run summary: total wall time plus per-block latency,
    /// elapsed time divided by the number of blocks actually processed.
    pub fn summarize(&self) {
        if let Err(err) = self.write_summary() {
            warn!(%err, "summary reporting failed");
        }
    }

    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    pub fn last_block(&self) -> Option<u64> {
        self.last_block
    }

    fn should_log(&self, block_number: u64) -> bool {
        block_number % self.log_every == 0
    }

    fn report(
        &mut self,
        event: &BlockEvent,
        output: Option<&DecodedOutput>,
    ) -> Result<(), crate::error::SinkError> {
        match event {
            BlockEvent::Session(session) => {
                info!(
                    trace_id = %session.trace_id,
                    resolved_start_block = session.resolved_start_block,
                    "session started"
                );
            }
            BlockEvent::Progress(_) => {}
            BlockEvent::Undo(undo) => {
                self.undos += 1;
                warn!(
                    last_valid_block = undo.last_valid_block_number().unwrap_or_default(),
                    "chain reorganization, blocks above the last valid one are rolled back"
                );
            }
            BlockEvent::Data(data) => {
                self.blocks += 1;
                let number = data.block_number().map_err(ClientError::from)?;
                self.last_block = Some(number);
                if self.should_log(number) {
                    let type_name = output
                        .map(|output| output.type_name.as_str())
                        .unwrap_or("unknown");
                    let mut stdout = std::io::stdout().lock();
                    writeln!(stdout, "Received block #{number} ({type_name})")?;
                }
            }
        }
        Ok(())
    }

    fn write_summary(&self) -> std::io::Result<()> {
        let elapsed = self.started.elapsed();
        let total_ms = elapsed.as_secs_f64() * 1_000.0;
        let per_block_ms = match self.blocks {
            0 => 0.0,
            blocks => total_ms / blocks as f64,
        };
        let mut stdout = std::io::stdout().lock();
        writeln!(
            stdout,
            "Time elapsed: {total_ms:.0}ms ({} blocks, {per_block_ms:.4}ms/block)",
            self.blocks
        )?;
        if self.undos > 0 {
            writeln!(stdout, "Chain reorganizations observed: {}", self.undos)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use substreams_protos::{BlockScopedData, Clock};

    use super::*;

    fn data_event(number: u64) -> BlockEvent {
        BlockEvent::Data(BlockScopedData {
            clock: Some(Clock {
                id: format!("block-{number}"),
                number,
                timestamp: None,
            }),
            cursor: number.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn samples_every_nth_block() {
        let reporter = ProgressReporter::new(10_000);
        assert!(reporter.should_log(200_000_000));
        assert!(reporter.should_log(200_010_000));
        assert!(!reporter.should_log(200_000_001));
    }

    #[test]
    fn a_reporting_failure_does_not_block_the_next_event() {
        let mut reporter = ProgressReporter::new(1);

        // No clock on this one: reporting it fails internally.
        reporter.on_event(&BlockEvent::Data(BlockScopedData::default()), None);
        reporter.on_event(&data_event(42), None);

        assert_eq!(reporter.last_block(), Some(42));
    }

    #[test]
    fn counts_processed_blocks() {
        let mut reporter = ProgressReporter::new(u64::MAX);
        for number in 1..=5 {
            reporter.on_event(&data_event(number), None);
        }
        assert_eq!(reporter.blocks(), 5);
        assert_eq!(reporter.last_block(), Some(5));
    }
}
