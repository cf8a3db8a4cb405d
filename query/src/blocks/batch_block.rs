// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use crate::clusters::Node;

/// Opaque reference to a block's row payload: where it lives in the
/// owning node's store and how large it is. The payload itself is never
/// copied through the catalog.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RowsHandle {
    pub addr: u64,
    pub size: u64,
}

/// Descriptor of one immutable, time-ranged unit of stored rows.
/// The window is half-open: [ts, te).
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct BatchBlock {
    pub table: String,
    pub id: u64,
    pub ts: i64,
    pub te: i64,
    pub node: Node,
    pub rows: RowsHandle,
}

impl BatchBlock {
    pub fn create(
        table: &str,
        id: u64,
        ts: i64,
        te: i64,
        node: Node,
        rows: RowsHandle,
    ) -> BatchBlock {
        BatchBlock {
            table: table.to_string(),
            id,
            ts,
            te,
            node,
            rows,
        }
    }

    pub fn overlaps(&self, ts: i64, te: i64) -> bool {
        self.ts < te && ts < self.te
    }
}
