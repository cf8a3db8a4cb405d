// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::collections::HashMap;
use std::sync::Arc;

use common_infallible::RwLock;
use lazy_static::lazy_static;
use metrics::counter;

use crate::blocks::BatchBlock;
use crate::clusters::Node;

/// Process-wide catalog answering who owns which block for which table
/// and time range. Fed by node state polls; readers are planners. The
/// catalog reflects the last successful poll per node, so it is
/// eventually consistent with real node inventory.
pub struct BlockManager {
    blocks: RwLock<HashMap<(String, u64), BatchBlock>>,
}

pub type BlockManagerRef = Arc<BlockManager>;

lazy_static! {
    static ref INSTANCE: BlockManagerRef = Arc::new(BlockManager::create());
}

impl BlockManager {
    /// The shared process-wide instance, created on first use.
    pub fn init() -> BlockManagerRef {
        INSTANCE.clone()
    }

    /// An isolated catalog, for embedding one per node service or test.
    pub fn create() -> BlockManager {
        BlockManager {
            blocks: RwLock::new(HashMap::new()),
        }
    }

    /// Register or replace the descriptor keyed by (table, id). A node's
    /// inventory changes over time, blocks get compacted, rotated or
    /// migrated, so re-adding replaces the prior descriptor whole.
    pub fn add(&self, block: BatchBlock) {
        counter!("quasar.blocks.added", 1);

        let mut blocks = self.blocks.write();
        blocks.insert((block.table.clone(), block.id), block);
    }

    pub fn blocks_by_table(&self, table: &str) -> Vec<BatchBlock> {
        let blocks = self.blocks.read();
        let mut result: Vec<BatchBlock> = blocks
            .values()
            .filter(|block| block.table == table)
            .cloned()
            .collect();
        result.sort_by_key(|block| block.id);
        result
    }

    pub fn blocks_in_range(&self, table: &str, ts: i64, te: i64) -> Vec<BatchBlock> {
        let blocks = self.blocks.read();
        let mut result: Vec<BatchBlock> = blocks
            .values()
            .filter(|block| block.table == table && block.overlaps(ts, te))
            .cloned()
            .collect();
        result.sort_by_key(|block| block.id);
        result
    }

    /// Blocks alive at one point in time.
    pub fn blocks_at(&self, table: &str, time: i64) -> Vec<BatchBlock> {
        self.blocks_in_range(table, time, time + 1)
    }

    pub fn blocks_by_node(&self, node: &Node) -> Vec<BatchBlock> {
        let blocks = self.blocks.read();
        let mut result: Vec<BatchBlock> = blocks
            .values()
            .filter(|block| &block.node == node)
            .cloned()
            .collect();
        result.sort_by(|a, b| (&a.table, a.id).cmp(&(&b.table, b.id)));
        result
    }

    pub fn tables(&self) -> Vec<String> {
        let blocks = self.blocks.read();
        let mut tables: Vec<String> = blocks.keys().map(|(table, _)| table.clone()).collect();
        tables.sort();
        tables.dedup();
        tables
    }

    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }
}
