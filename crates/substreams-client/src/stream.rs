// Copyright 2024-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{
    pin::Pin,
    task::{Context, Poll},
};

use futures::{future::BoxFuture, Stream, StreamExt};
use substreams_protos::{
    BlockScopedData, BlockUndoSignal, ModulesProgress, Request, Response, ResponseMessage,
    SessionInit,
};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::{
    backoff::BackoffPolicy, endpoint::SubstreamsEndpoint, error::ClientError,
    request::StreamRequest,
};

/// Opens one logical server stream per call.
///
/// Implemented by [`SubstreamsEndpoint`] for the real transport and by
/// scripted sources in tests. Reconnection never reuses a stream: resuming
/// means a fresh `open` with the request's cursor moved forward.
pub trait BlockStreamConnector: Send + Sync + 'static {
    type Stream: Stream<Item = Result<Response, tonic::Status>> + Send + Unpin + 'static;

    fn open(&self, request: Request) -> BoxFuture<'_, Result<Self::Stream, ClientError>>;
}

impl BlockStreamConnector for SubstreamsEndpoint {
    type Stream = tonic::codec::Streaming<Response>;

    fn open(&self, request: Request) -> BoxFuture<'_, Result<Self::Stream, ClientError>> {
        Box::pin(self.open_blocks(request))
    }
}

/// One server message, decoded into its variant.
#[derive(Clone, Debug)]
pub enum BlockEvent {
    /// Block-scoped output of the requested module.
    Data(BlockScopedData),
    /// Every block above `last_valid_block` has been reverted on-chain.
    Undo(BlockUndoSignal),
    /// Server-side execution progress, sent while backfilling.
    Progress(ModulesProgress),
    /// First message of every session.
    Session(SessionInit),
}

/// Externally observable session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamState {
    Idle,
    Connecting,
    Streaming,
    /// A recoverable failure occurred; the stream is reopening from the
    /// last acknowledged cursor.
    Reconnecting { attempt: u32 },
    /// The requested range ended, or the caller stopped the stream. Terminal.
    Completed,
    /// Fatal error. Terminal.
    Failed,
}

/// Requests cooperative cancellation of a [`BlockStream`].
///
/// The stream notices the signal at the point where it would demand the next
/// message; an event already handed to the caller is never clawed back.
/// Dropping the handle without stopping lets the stream run to completion.
#[derive(Debug)]
pub struct StopHandle {
    stop: watch::Sender<bool>,
}

impl StopHandle {
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }
}

/// A lazy, forward-only sequence of [`BlockEvent`]s with cursor-based
/// resumption.
///
/// Backpressure is per message: the next server message is not demanded
/// until the previous event has been handed to the caller. A recoverable
/// network failure reopens the stream from the last acknowledged cursor
/// under bounded exponential backoff; the server ending the range is
/// terminal success, not an error.
pub struct BlockStream {
    events: mpsc::Receiver<Result<BlockEvent, ClientError>>,
    state: watch::Receiver<StreamState>,
    cursor: watch::Receiver<Option<String>>,
}

impl BlockStream {
    /// Open the stream described by `request` over `connector`.
    ///
    /// Must be called within a Tokio runtime; the consumer loop runs as its
    /// own task and suspends whenever the caller is not demanding an event.
    pub fn open<C>(
        connector: C,
        request: StreamRequest,
        backoff: BackoffPolicy,
    ) -> (Self, StopHandle)
    where
        C: BlockStreamConnector,
    {
        let (events_tx, events_rx) = mpsc::channel(1);
        let (state_tx, state_rx) = watch::channel(StreamState::Idle);
        let (cursor_tx, cursor_rx) = watch::channel(request.cursor().map(str::to_string));
        let (stop_tx, stop_rx) = watch::channel(false);

        tokio::spawn(drive(
            connector, request, backoff, events_tx, state_tx, cursor_tx, stop_rx,
        ));

        (
            Self {
                events: events_rx,
                state: state_rx,
                cursor: cursor_rx,
            },
            StopHandle { stop: stop_tx },
        )
    }

    /// The next event, or `None` once the stream has terminated.
    pub async fn next_event(&mut self) -> Option<Result<BlockEvent, ClientError>> {
        self.events.recv().await
    }

    pub fn state(&self) -> StreamState {
        self.state.borrow().clone()
    }

    /// Cursor of the last data or undo event handed to the caller;
    /// sufficient to resume delivery at the block right after it.
    pub fn cursor(&self) -> Option<String> {
        self.cursor.borrow().clone()
    }
}

impl Stream for BlockStream {
    type Item = Result<BlockEvent, ClientError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.events.poll_recv(cx)
    }
}

/// Resolves only on an explicit stop; a dropped [`StopHandle`] must not
/// cancel the stream.
async fn stop_requested(stop: &mut watch::Receiver<bool>) {
    if stop.wait_for(|stopped| *stopped).await.is_err() {
        futures::future::pending::<()>().await;
    }
}

async fn drive<C>(
    connector: C,
    request: StreamRequest,
    backoff: BackoffPolicy,
    events: mpsc::Sender<Result<BlockEvent, ClientError>>,
    state: watch::Sender<StreamState>,
    cursor: watch::Sender<Option<String>>,
    mut stop: watch::Receiver<bool>,
) where
    C: BlockStreamConnector,
{
    let mut attempt: u32 = 0;

    'session: loop {
        let _ = state.send(match attempt {
            0 => StreamState::Connecting,
            attempt => StreamState::Reconnecting { attempt },
        });

        let resume = cursor.borrow().clone();
        if let Some(resume_cursor) = resume.as_deref() {
            debug!(cursor = resume_cursor, "opening stream from last cursor");
        }

        let open = tokio::select! {
            _ = stop_requested(&mut stop) => {
                let _ = state.send(StreamState::Completed);
                return;
            }
            open = connector.open(request.to_rpc(resume.as_deref())) => open,
        };

        let mut messages = match open {
            Ok(messages) => messages,
            Err(err) if err.is_retriable() => {
                attempt += 1;
                match backoff.delay(attempt) {
                    Some(delay) => {
                        warn!(%err, attempt, ?delay, "connect failed, retrying");
                        tokio::select! {
                            _ = stop_requested(&mut stop) => {
                                let _ = state.send(StreamState::Completed);
                                return;
                            }
                            _ = tokio::time::sleep(delay) => {}
                        }
                        continue 'session;
                    }
                    None => {
                        let _ = events
                            .send(Err(ClientError::RetriesExhausted {
                                attempts: attempt,
                                source: Box::new(err),
                            }))
                            .await;
                        let _ = state.send(StreamState::Failed);
                        return;
                    }
                }
            }
            Err(err) => {
                let _ = events.send(Err(err)).await;
                let _ = state.send(StreamState::Failed);
                return;
            }
        };

        let _ = state.send(StreamState::Streaming);

        loop {
            // Cancellation is honored here, right before the next message is
            // demanded; in-flight handling of a received message completes.
            let message = tokio::select! {
                _ = stop_requested(&mut stop) => {
                    info!("stop requested, closing stream");
                    let _ = state.send(StreamState::Completed);
                    return;
                }
                message = messages.next() => message,
            };

            match message {
                // Server closed the stream: the requested range is done.
                None => {
                    let _ = state.send(StreamState::Completed);
                    return;
                }
                Some(Err(status)) => {
                    let err = ClientError::from(status);
                    if !err.is_retriable() {
                        let _ = events.send(Err(err)).await;
                        let _ = state.send(StreamState::Failed);
                        return;
                    }
                    attempt += 1;
                    match backoff.delay(attempt) {
                        Some(delay) => {
                            warn!(
                                %err,
                                attempt,
                                ?delay,
                                "stream dropped, reconnecting from last cursor"
                            );
                            let _ = state.send(StreamState::Reconnecting { attempt });
                            tokio::select! {
                                _ = stop_requested(&mut stop) => {
                                    let _ = state.send(StreamState::Completed);
                                    return;
                                }
                                _ = tokio::time::sleep(delay) => {}
                            }
                            continue 'session;
                        }
                        None => {
                            let _ = events
                                .send(Err(ClientError::RetriesExhausted {
                                    attempts: attempt,
                                    source: Box::new(err),
                                }))
                                .await;
                            let _ = state.send(StreamState::Failed);
                            return;
                        }
                    }
                }
                Some(Ok(response)) => {
                    let Some(message) = response.message else {
                        continue;
                    };
                    let (event, acknowledged) = match message {
                        ResponseMessage::BlockScopedData(data) => {
                            let acknowledged = data.cursor.clone();
                            (BlockEvent::Data(data), Some(acknowledged))
                        }
                        ResponseMessage::BlockUndoSignal(undo) => {
                            let acknowledged = undo.last_valid_cursor.clone();
                            (BlockEvent::Undo(undo), Some(acknowledged))
                        }
                        ResponseMessage::Progress(progress) => {
                            (BlockEvent::Progress(progress), None)
                        }
                        ResponseMessage::Session(session) => (BlockEvent::Session(session), None),
                        // Store snapshots only exist in development mode.
                        ResponseMessage::DebugSnapshotData(_)
                        | ResponseMessage::DebugSnapshotComplete(_) => continue,
                    };

                    // A healthy message closes the reconnect window.
                    attempt = 0;

                    if events.send(Ok(event)).await.is_err() {
                        // Caller dropped the stream.
                        return;
                    }
                    if let Some(acknowledged) = acknowledged {
                        let _ = cursor.send(Some(acknowledged));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::VecDeque,
        sync::{
            atomic::{AtomicU32, Ordering},
            Arc, Mutex,
        },
        time::Duration,
    };

    use futures::stream::{self, BoxStream};
    use prost_wkt_types::Any;
    use substreams_protos::{
        module, BlockRef, Clock, MapModuleOutput, Module, Modules, Package,
    };

    use super::*;
    use crate::request::StopBlock;

    fn tokens_package() -> Package {
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
    }

    fn test_request(start: u64, stop: StopBlock) -> StreamRequest {
        StreamRequest::new(&tokens_package(), "db_out", start, stop, true).unwrap()
    }

    fn fast_backoff() -> BackoffPolicy {
        BackoffPolicy {
            max_attempts: 5,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
        }
    }

    fn data_response(number: u64) -> Response {
        Response {
            message: Some(ResponseMessage::BlockScopedData(BlockScopedData {
                output: Some(MapModuleOutput {
                    name: "db_out".to_string(),
                    map_output: Some(Any {
                        type_url: "sf.substreams.sink.database.v1.DatabaseChanges".to_string(),
                        value: vec![],
                    }),
                    debug_info: None,
                }),
                clock: Some(Clock {
                    id: format!("block-{number}"),
                    number,
                    timestamp: None,
                }),
                cursor: number.to_string(),
                ..Default::default()
            })),
        }
    }

    fn undo_response(last_valid: u64) -> Response {
        Response {
            message: Some(ResponseMessage::BlockUndoSignal(BlockUndoSignal {
                last_valid_block: Some(BlockRef {
                    id: format!("block-{last_valid}"),
                    number: last_valid,
                }),
                last_valid_cursor: last_valid.to_string(),
            })),
        }
    }

    /// Serves the requested range lazily, honoring the request cursor the
    /// way the server does: delivery resumes at the block right after it.
    /// Optionally drops the first connection with a transient error after a
    /// given block.
    #[derive(Clone)]
    struct RangeConnector {
        connections: Arc<AtomicU32>,
        drop_after: Option<u64>,
    }

    impl RangeConnector {
        fn new(drop_after: Option<u64>) -> Self {
            Self {
                connections: Arc::new(AtomicU32::new(0)),
                drop_after,
            }
        }
    }

    impl BlockStreamConnector for RangeConnector {
        type Stream = BoxStream<'static, Result<Response, tonic::Status>>;

        fn open(&self, request: Request) -> BoxFuture<'_, Result<Self::Stream, ClientError>> {
            let connection = self.connections.fetch_add(1, Ordering::SeqCst) + 1;
            let first = match request.start_cursor.is_empty() {
                true => request.start_block_num as u64,
                false => request.start_cursor.parse::<u64>().unwrap() + 1,
            };
            let stop = request.stop_block_num;
            let drop_after = self.drop_after.filter(|_| connection == 1);

            Box::pin(async move {
                let session = Response {
                    message: Some(ResponseMessage::Session(SessionInit {
                        trace_id: format!("trace-{connection}"),
                        resolved_start_block: first,
                        ..Default::default()
                    })),
                };
                let last = drop_after.map_or(stop, |after| after.min(stop));
                let body = (first..=last).map(|number| Ok(data_response(number)));
                let tail = drop_after
                    .map(|_| Err(tonic::Status::unavailable("connection reset by peer")));
                Ok(stream::iter(std::iter::once(Ok(session)).chain(body).chain(tail)).boxed())
            })
        }
    }

    /// Plays back one pre-scripted message list per connection and records
    /// the requests it was opened with.
    struct ScriptedConnector {
        requests: Mutex<Vec<Request>>,
        scripts: Mutex<VecDeque<Vec<Result<Response, tonic::Status>>>>,
        hang_at_end: bool,
    }

    impl ScriptedConnector {
        fn new(
            scripts: Vec<Vec<Result<Response, tonic::Status>>>,
            hang_at_end: bool,
        ) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                scripts: Mutex::new(scripts.into()),
                hang_at_end,
            })
        }
    }

    impl BlockStreamConnector for Arc<ScriptedConnector> {
        type Stream = BoxStream<'static, Result<Response, tonic::Status>>;

        fn open(&self, request: Request) -> BoxFuture<'_, Result<Self::Stream, ClientError>> {
            self.requests.lock().unwrap().push(request);
            let script = self.scripts.lock().unwrap().pop_front().unwrap();
            let hang = self.hang_at_end;
            Box::pin(async move {
                let played = stream::iter(script);
                Ok(match hang {
                    true => played.chain(stream::pending()).boxed(),
                    false => played.boxed(),
                })
            })
        }
    }

    /// Fails every connection attempt with a fresh copy of the same error.
    #[derive(Clone)]
    struct FailingConnector {
        connections: Arc<AtomicU32>,
        make_error: fn() -> ClientError,
    }

    impl BlockStreamConnector for FailingConnector {
        type Stream = BoxStream<'static, Result<Response, tonic::Status>>;

        fn open(&self, _request: Request) -> BoxFuture<'_, Result<Self::Stream, ClientError>> {
            self.connections.fetch_add(1, Ordering::SeqCst);
            let err = (self.make_error)();
            Box::pin(async move { Err(err) })
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delivers_the_full_inclusive_range() {
        let connector = RangeConnector::new(None);
        let request = test_request(200_000_000, StopBlock::Relative(1_000_000));
        let (mut blocks, _stop) = BlockStream::open(connector.clone(), request, fast_backoff());

        let mut count = 0u64;
        let mut last = None::<u64>;
        while let Some(event) = blocks.next_event().await {
            match event.unwrap() {
                BlockEvent::Data(data) => {
                    let number = data.block_number().unwrap();
                    match last {
                        Some(last) => assert_eq!(number, last + 1),
                        None => assert_eq!(number, 200_000_000),
                    }
                    last = Some(number);
                    count += 1;
                }
                BlockEvent::Session(_) => {}
                event => panic!("unexpected event: {event:?}"),
            }
        }

        assert_eq!(count, 1_000_001);
        assert_eq!(last, Some(201_000_000));
        assert_eq!(blocks.state(), StreamState::Completed);
        assert_eq!(connector.connections.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn reconnects_from_the_last_acknowledged_cursor() {
        let connector = RangeConnector::new(Some(200_005_000));
        let request = test_request(200_004_990, StopBlock::Absolute(200_005_010));
        let (mut blocks, _stop) = BlockStream::open(connector.clone(), request, fast_backoff());

        let mut numbers = Vec::new();
        while let Some(event) = blocks.next_event().await {
            if let BlockEvent::Data(data) = event.unwrap() {
                numbers.push(data.block_number().unwrap());
            }
        }

        // The first block after the drop is 200_005_001: no duplicate of the
        // last processed block, and no gap.
        let expected: Vec<u64> = (200_004_990..=200_005_010).collect();
        assert_eq!(numbers, expected);
        assert_eq!(connector.connections.load(Ordering::SeqCst), 2);
        assert_eq!(blocks.state(), StreamState::Completed);
        assert_eq!(blocks.cursor(), Some(200_005_010.to_string()));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn stop_terminates_without_further_events() {
        let script = vec![(1..=3u64).map(|n| Ok(data_response(n))).collect()];
        let connector = ScriptedConnector::new(script, true);
        let request = test_request(1, StopBlock::Absolute(1_000));
        let (mut blocks, stop) = BlockStream::open(connector, request, fast_backoff());

        for expected in 1..=3u64 {
            match blocks.next_event().await.unwrap().unwrap() {
                BlockEvent::Data(data) => assert_eq!(data.block_number().unwrap(), expected),
                event => panic!("unexpected event: {event:?}"),
            }
        }

        stop.stop();
        assert!(blocks.next_event().await.is_none());
        assert_eq!(blocks.state(), StreamState::Completed);
    }

    #[tokio::test]
    async fn credential_rejection_is_fatal_and_not_retried() {
        let connector = FailingConnector {
            connections: Arc::new(AtomicU32::new(0)),
            make_error: || ClientError::Auth(tonic::Status::unauthenticated("invalid token")),
        };
        let request = test_request(0, StopBlock::Absolute(10));
        let (mut blocks, _stop) = BlockStream::open(connector.clone(), request, fast_backoff());

        let event = blocks.next_event().await.unwrap();
        assert!(matches!(event, Err(ClientError::Auth(_))));
        assert!(blocks.next_event().await.is_none());
        assert_eq!(blocks.state(), StreamState::Failed);
        assert_eq!(connector.connections.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transient_failures_exhaust_bounded_retries() {
        let connector = FailingConnector {
            connections: Arc::new(AtomicU32::new(0)),
            make_error: || ClientError::Network(tonic::Status::unavailable("endpoint down")),
        };
        let backoff = BackoffPolicy {
            max_attempts: 2,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        };
        let request = test_request(0, StopBlock::Absolute(10));
        let (mut blocks, _stop) = BlockStream::open(connector.clone(), request, backoff);

        let event = blocks.next_event().await.unwrap();
        assert!(matches!(
            event,
            Err(ClientError::RetriesExhausted { attempts: 3, .. })
        ));
        assert!(blocks.next_event().await.is_none());
        assert_eq!(blocks.state(), StreamState::Failed);
        // The first try plus two bounded retries.
        assert_eq!(connector.connections.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn undo_signal_rewinds_the_resume_cursor() {
        let first_connection = vec![
            Ok(data_response(10)),
            Ok(data_response(11)),
            Ok(data_response(12)),
            Ok(undo_response(10)),
            Err(tonic::Status::unavailable("connection reset by peer")),
        ];
        let second_connection = vec![
            Ok(Response {
                message: Some(ResponseMessage::Progress(ModulesProgress::default())),
            }),
            Ok(data_response(11)),
            Ok(data_response(12)),
            Ok(data_response(13)),
        ];
        let connector = ScriptedConnector::new(vec![first_connection, second_connection], false);
        let request = test_request(10, StopBlock::Absolute(13));
        let (mut blocks, _stop) =
            BlockStream::open(Arc::clone(&connector), request, fast_backoff());

        let mut numbers = Vec::new();
        let mut undo_seen = false;
        let mut progress_seen = false;
        while let Some(event) = blocks.next_event().await {
            match event.unwrap() {
                BlockEvent::Data(data) => numbers.push(data.block_number().unwrap()),
                BlockEvent::Undo(undo) => {
                    assert_eq!(undo.last_valid_block_number().unwrap(), 10);
                    undo_seen = true;
                }
                BlockEvent::Progress(_) => progress_seen = true,
                BlockEvent::Session(_) => {}
            }
        }

        assert!(undo_seen);
        assert!(progress_seen);
        // Blocks 11 and 12 are redelivered after the rewind.
        assert_eq!(numbers, vec![10, 11, 12, 11, 12, 13]);

        let requests = connector.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].start_cursor, "");
        assert_eq!(requests[1].start_cursor, "10");
    }
}
