// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.


mod messages;
mod node_client;
mod node_server;

pub use messages::BlockInfo;
pub use messages::EchoReply;
pub use messages::NodeRequest;
pub use messages::NodeResponse;
pub use messages::NodeStateReply;
pub use messages::NodeStateRequest;
pub use messages::RowBatch;
pub use node_client::ClientState;
pub use node_client::NodeClient;
pub use node_client::RowCursorFuture;
pub use node_server::NodeService;
