// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::sync::Arc;

use common_exception::ErrorCode;
use common_exception::Result;
use tokio::net::TcpListener;
use tokio::net::TcpStream;

use crate::api::rpc::messages::read_frame;
use crate::api::rpc::messages::write_frame;
use crate::api::rpc::BlockInfo;
use crate::api::rpc::EchoReply;
use crate::api::rpc::NodeRequest;
use crate::api::rpc::NodeResponse;
use crate::api::rpc::NodeStateReply;
use crate::api::rpc::RowBatch;
use crate::blocks::BlockManagerRef;
use crate::clusters::Node;

/// Worker-side endpoint of the coordination protocol. One request per
/// connection; streaming operations answer with payload frames followed
/// by `Done`.
pub struct NodeService {
    node: Node,
    blocks: BlockManagerRef,
}

impl NodeService {
    pub fn create(node: Node, blocks: BlockManagerRef) -> Arc<NodeService> {
        Arc::new(NodeService { node, blocks })
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Accept loop. A connection that fails to parse or answer is
    /// logged and dropped; the service keeps serving.
    pub async fn serve(self: Arc<Self>, listener: TcpListener) {
        loop {
            match listener.accept().await {
                Err(cause) => {
                    log::error!("Accept failed: {}", cause);
                }
                Ok((stream, peer)) => {
                    let service = self.clone();
                    tokio::spawn(async move {
                        if let Err(cause) = service.handle(stream).await {
                            log::error!("Connection from {} failed: {}", peer, cause);
                        }
                    });
                }
            }
        }
    }

    async fn handle(&self, mut stream: TcpStream) -> Result<()> {
        let request = match read_frame::<NodeRequest, _>(&mut stream).await {
            Ok(request) => request,
            Err(cause) => {
                let reply = NodeResponse::Error {
                    code: cause.code(),
                    message: cause.message(),
                };
                write_frame(&mut stream, &reply).await?;
                return Err(cause);
            }
        };

        match request {
            NodeRequest::Echo { name } => {
                let reply = NodeResponse::Echo(EchoReply {
                    message: format!("Hello {}!", name),
                });
                write_frame(&mut stream, &reply).await
            }
            NodeRequest::Echos { name, count } => {
                for index in 0..count {
                    let reply = NodeResponse::Echo(EchoReply {
                        message: format!("Hello {}! ({})", name, index),
                    });
                    write_frame(&mut stream, &reply).await?;
                }
                write_frame(&mut stream, &NodeResponse::Done).await
            }
            NodeRequest::Poll(_) => {
                let blocks = self
                    .blocks
                    .blocks_by_node(&self.node)
                    .into_iter()
                    .map(|block| BlockInfo {
                        table: block.table,
                        id: block.id,
                        ts: block.ts,
                        te: block.te,
                        rows_addr: block.rows.addr,
                        rows_size: block.rows.size,
                    })
                    .collect();

                let reply = NodeResponse::State(NodeStateReply { blocks });
                write_frame(&mut stream, &reply).await
            }
            NodeRequest::Execute { plan } => {
                log::info!("Executing on node '{}':\n{:?}", self.node.name, plan);

                if plan.table.is_empty() {
                    let cause = ErrorCode::BadArguments("Plan must name a table");
                    let reply = NodeResponse::Error {
                        code: cause.code(),
                        message: cause.message(),
                    };
                    return write_frame(&mut stream, &reply).await;
                }

                // the projection frames the (so far empty) row stream;
                // row production belongs to the storage layer behind
                // this endpoint
                let reply = NodeResponse::Rows(RowBatch {
                    columns: plan.fields.clone(),
                    rows: vec![],
                });
                write_frame(&mut stream, &reply).await?;
                write_frame(&mut stream, &NodeResponse::Done).await
            }
        }
    }
}
