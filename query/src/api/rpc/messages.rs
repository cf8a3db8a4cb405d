// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datavalues::DataValue;
use common_exception::ErrorCode;
use common_exception::Result;
use common_planners::ExecutionPlan;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncRead;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;

// a reply frame larger than this is a protocol violation, not data
const MAX_FRAME_SIZE: usize = 64 * 1024 * 1024;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct NodeStateRequest {}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct EchoReply {
    pub message: String,
}

/// Inventory entry a node reports in a state poll; the owner is the
/// polled node itself, so it is not repeated per entry.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct BlockInfo {
    pub table: String,
    pub id: u64,
    pub ts: i64,
    pub te: i64,
    pub rows_addr: u64,
    pub rows_size: u64,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct NodeStateReply {
    pub blocks: Vec<BlockInfo>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct RowBatch {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<DataValue>>,
}

/// The four remote operations of the coordination protocol.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub enum NodeRequest {
    Echo { name: String },
    Echos { name: String, count: u32 },
    Poll(NodeStateRequest),
    Execute { plan: ExecutionPlan },
}

/// Streaming calls answer with any number of payload frames followed by
/// `Done`; unary calls answer with exactly one payload frame.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub enum NodeResponse {
    Echo(EchoReply),
    State(NodeStateReply),
    Rows(RowBatch),
    Done,
    Error { code: u16, message: String },
}

/// Length-delimited json frame: u32 big-endian byte count, then the
/// encoded message.
pub async fn write_frame<T, W>(writer: &mut W, message: &T) -> Result<()>
where
    T: Serialize,
    W: AsyncWrite + Unpin,
{
    let body = serde_json::to_vec(message)?;
    writer.write_all(&(body.len() as u32).to_be_bytes()).await?;
    writer.write_all(&body).await?;
    writer.flush().await?;
    Ok(())
}

pub async fn read_frame<T, R>(reader: &mut R) -> Result<T>
where
    T: DeserializeOwned,
    R: AsyncRead + Unpin,
{
    let mut len = [0u8; 4];
    reader.read_exact(&mut len).await?;
    let len = u32::from_be_bytes(len) as usize;
    if len > MAX_FRAME_SIZE {
        return Err(ErrorCode::TransportError(format!(
            "Frame of {} bytes exceeds the {} byte limit",
            len, MAX_FRAME_SIZE
        )));
    }

    let mut body = vec![0u8; len];
    reader.read_exact(&mut body).await?;
    Ok(serde_json::from_slice(&body)?)
}
