// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::Context;
use std::task::Poll;

use common_exception::ErrorCode;
use common_exception::Result;
use common_infallible::RwLock;
use common_planners::ExecutionPlan;
use common_runtime::Runtime;
use metrics::counter;
use tokio::net::TcpStream;
use tokio::sync::oneshot;

use crate::api::rpc::messages::read_frame;
use crate::api::rpc::messages::write_frame;
use crate::api::rpc::NodeRequest;
use crate::api::rpc::NodeResponse;
use crate::api::rpc::NodeStateRequest;
use crate::blocks::BatchBlock;
use crate::blocks::BlockManagerRef;
use crate::blocks::RowsHandle;
use crate::clusters::Node;
use crate::datastreams::RowCursor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientState {
    Disconnected,
    Connecting,
    Ready,
}

/// Per-node protocol client. Connection state and call outcomes are
/// orthogonal: once `Ready`, a failed call is reported to its caller
/// and the next call simply retries against the same endpoint.
pub struct NodeClient {
    node: Node,
    state: RwLock<ClientState>,
    runtime: Arc<Runtime>,
    blocks: BlockManagerRef,
}

impl NodeClient {
    pub fn create(node: Node, runtime: Arc<Runtime>, blocks: BlockManagerRef) -> NodeClient {
        NodeClient {
            node,
            state: RwLock::new(ClientState::Disconnected),
            runtime,
            blocks,
        }
    }

    pub async fn try_create(
        node: Node,
        runtime: Arc<Runtime>,
        blocks: BlockManagerRef,
    ) -> Result<NodeClient> {
        let client = Self::create(node, runtime, blocks);
        client.connect().await?;
        Ok(client)
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn status(&self) -> ClientState {
        *self.state.read()
    }

    /// Disconnected -> Connecting -> Ready. A later call-level failure
    /// does not leave `Ready`; only an explicit reconnect goes through
    /// this path again.
    pub async fn connect(&self) -> Result<()> {
        *self.state.write() = ClientState::Connecting;

        match TcpStream::connect(&self.node.address).await {
            Ok(_probe) => {
                *self.state.write() = ClientState::Ready;
                Ok(())
            }
            Err(cause) => {
                *self.state.write() = ClientState::Disconnected;
                Err(ErrorCode::TransportError(format!(
                    "Connect to node '{}' ({}) failed: {}",
                    self.node.name, self.node.address, cause
                )))
            }
        }
    }

    fn check_ready(&self) -> Result<()> {
        match self.status() {
            ClientState::Ready => Ok(()),
            state => Err(ErrorCode::NotReadyNode(format!(
                "Node '{}' client is {:?}, expected Ready",
                self.node.name, state
            ))),
        }
    }

    /// Unary liveness call.
    pub async fn echo(&self, name: &str) -> Result<String> {
        self.check_ready()?;
        counter!("quasar.rpc.echo", 1);

        let mut stream = TcpStream::connect(&self.node.address).await?;
        write_frame(&mut stream, &NodeRequest::Echo {
            name: name.to_string(),
        })
        .await?;

        match read_frame::<NodeResponse, _>(&mut stream).await? {
            NodeResponse::Echo(reply) => {
                log::info!("From node server: {}", reply.message);
                Ok(reply.message)
            }
            NodeResponse::Error { code, message } => Err(status_error(code, message)),
            other => Err(unexpected(&other)),
        }
    }

    /// Server-streaming echo: drain replies until the stream ends. A
    /// non-ok tail status is reported, not fatal.
    pub async fn echos(&self, name: &str, count: u32) -> Result<Vec<String>> {
        self.check_ready()?;
        counter!("quasar.rpc.echos", 1);

        let mut stream = TcpStream::connect(&self.node.address).await?;
        write_frame(&mut stream, &NodeRequest::Echos {
            name: name.to_string(),
            count,
        })
        .await?;

        let mut replies = vec![];
        loop {
            match read_frame::<NodeResponse, _>(&mut stream).await? {
                NodeResponse::Echo(reply) => {
                    log::info!("From node server: {}", reply.message);
                    replies.push(reply.message);
                }
                NodeResponse::Done => return Ok(replies),
                NodeResponse::Error { code, message } => {
                    log::error!("RPC failed: code={}, msg={}", code, message);
                    return Err(status_error(code, message));
                }
                other => return Err(unexpected(&other)),
            }
        }
    }

    /// Poll the node's block inventory and fold it into the shared
    /// block catalog. On failure the catalog keeps what it had; stale
    /// but available beats thrown away.
    pub async fn state(&self) -> Result<usize> {
        self.check_ready()?;
        counter!("quasar.rpc.poll", 1);

        let mut stream = TcpStream::connect(&self.node.address).await?;
        write_frame(&mut stream, &NodeRequest::Poll(NodeStateRequest {})).await?;

        match read_frame::<NodeResponse, _>(&mut stream).await? {
            NodeResponse::State(reply) => {
                log::info!("blocks in node '{}': {}", self.node.name, reply.blocks.len());

                let size = reply.blocks.len();
                for info in reply.blocks {
                    self.blocks.add(BatchBlock::create(
                        &info.table,
                        info.id,
                        info.ts,
                        info.te,
                        self.node.clone(),
                        RowsHandle {
                            addr: info.rows_addr,
                            size: info.rows_size,
                        },
                    ));
                }
                Ok(size)
            }
            NodeResponse::Error { code, message } => {
                log::error!("RPC failed: code={}, msg={}", code, message);
                Err(status_error(code, message))
            }
            other => Err(unexpected(&other)),
        }
    }

    /// Dispatch a plan asynchronously. The plan is cloned before the
    /// async boundary, so nothing borrowed from the caller outlives the
    /// call. The returned future resolves to the row cursor, or to a
    /// descriptive failure, never to a partial cursor.
    pub fn execute(&self, plan: &ExecutionPlan) -> RowCursorFuture {
        counter!("quasar.rpc.execute", 1);

        let (tx, rx) = oneshot::channel();
        if let Err(cause) = self.check_ready() {
            let _ = tx.send(Err(cause));
            return RowCursorFuture::create(rx);
        }

        let plan = plan.clone();
        let node = self.node.clone();
        self.runtime.spawn(async move {
            let result = NodeClient::do_execute(node, plan).await;
            let _ = tx.send(result);
        });

        RowCursorFuture::create(rx)
    }

    async fn do_execute(node: Node, plan: ExecutionPlan) -> Result<RowCursor> {
        log::info!("Dispatching to node '{}':\n{:?}", node.name, plan);

        let mut stream = TcpStream::connect(&node.address).await?;
        write_frame(&mut stream, &NodeRequest::Execute { plan }).await?;

        let mut columns = vec![];
        let mut rows = vec![];
        loop {
            match read_frame::<NodeResponse, _>(&mut stream).await? {
                NodeResponse::Rows(batch) => {
                    if columns.is_empty() {
                        columns = batch.columns;
                    }
                    rows.extend(batch.rows);
                }
                NodeResponse::Done => return Ok(RowCursor::create(columns, rows)),
                NodeResponse::Error { code, message } => {
                    return Err(status_error(code, message));
                }
                other => return Err(unexpected(&other)),
            }
        }
    }
}

/// Resolves to the remote call's row cursor. Dropping it abandons the
/// result but does not retract the in-flight call.
pub struct RowCursorFuture {
    inner: oneshot::Receiver<Result<RowCursor>>,
}

impl RowCursorFuture {
    fn create(inner: oneshot::Receiver<Result<RowCursor>>) -> RowCursorFuture {
        RowCursorFuture { inner }
    }
}

impl Future for RowCursorFuture {
    type Output = Result<RowCursor>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.inner).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_dropped)) => Poll::Ready(Err(ErrorCode::TokioError(
                "Execute worker was dropped before completing",
            ))),
            Poll::Pending => Poll::Pending,
        }
    }
}

fn status_error(code: u16, message: String) -> ErrorCode {
    ErrorCode::TransportError(format!("Remote status code={}: {}", code, message))
}

fn unexpected(response: &NodeResponse) -> ErrorCode {
    ErrorCode::UnexpectedResponse(format!("Unexpected reply frame: {:?}", response))
}
