// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::collections::HashMap;
use std::sync::Arc;

use common_exception::ErrorCode;
use common_exception::Result;
use common_infallible::RwLock;

use crate::blocks::BlockManagerRef;
use crate::catalogs::Table;
use crate::clusters::Node;

/// Metadata boundary: name resolution plus "which nodes currently hold
/// data for this table". How the answers are produced is not the
/// execution core's business.
pub trait Catalog: Send + Sync {
    fn get_table(&self, name: &str) -> Result<Arc<Table>>;

    fn get_table_nodes(
        &self,
        table: &Table,
        predicate: &dyn Fn(&Node) -> bool,
    ) -> Result<Vec<Node>>;
}

/// Catalog over explicitly registered tables; node ownership is
/// answered from the block catalog, so it inherits its eventual
/// consistency.
pub struct MemoryCatalog {
    tables: RwLock<HashMap<String, Arc<Table>>>,
    blocks: BlockManagerRef,
}

impl MemoryCatalog {
    pub fn create(blocks: BlockManagerRef) -> MemoryCatalog {
        MemoryCatalog {
            tables: RwLock::new(HashMap::new()),
            blocks,
        }
    }

    pub fn register_table(&self, table: Table) {
        let mut tables = self.tables.write();
        tables.insert(table.name().to_string(), Arc::new(table));
    }
}

impl Catalog for MemoryCatalog {
    fn get_table(&self, name: &str) -> Result<Arc<Table>> {
        let tables = self.tables.read();
        tables
            .get(name)
            .cloned()
            .ok_or_else(|| ErrorCode::UnknownTable(format!("Unknown table: '{}'", name)))
    }

    fn get_table_nodes(
        &self,
        table: &Table,
        predicate: &dyn Fn(&Node) -> bool,
    ) -> Result<Vec<Node>> {
        let mut nodes: Vec<Node> = vec![];
        for block in self.blocks.blocks_by_table(table.name()) {
            if !nodes.contains(&block.node) && predicate(&block.node) {
                nodes.push(block.node);
            }
        }
        Ok(nodes)
    }
}
