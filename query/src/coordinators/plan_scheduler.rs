// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::collections::HashMap;
use std::sync::Arc;

use common_exception::Result;
use common_infallible::RwLock;
use common_planners::ExecutionPlan;
use common_runtime::Runtime;

use crate::api::rpc::NodeClient;
use crate::api::rpc::RowCursorFuture;
use crate::blocks::BlockManagerRef;
use crate::catalogs::Catalog;
use crate::clusters::Node;

/// Coordinator-side dispatch: resolve the plan's table, find the blocks
/// intersecting its window in the shared catalog, and hand the plan to
/// each owning node's client. A node absent from the catalog simply
/// receives nothing; staleness is the planner's normal weather, not an
/// error.
pub struct PlanScheduler {
    catalog: Arc<dyn Catalog>,
    blocks: BlockManagerRef,
    runtime: Arc<Runtime>,
    clients: RwLock<HashMap<Node, Arc<NodeClient>>>,
}

impl PlanScheduler {
    pub fn create(
        catalog: Arc<dyn Catalog>,
        blocks: BlockManagerRef,
        runtime: Arc<Runtime>,
    ) -> PlanScheduler {
        PlanScheduler {
            catalog,
            blocks,
            runtime,
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Distinct owners of blocks intersecting the plan window, in block
    /// id order of first appearance.
    pub fn nodes_for_plan(&self, plan: &ExecutionPlan) -> Result<Vec<Node>> {
        let table = self.catalog.get_table(&plan.table)?;

        let mut nodes: Vec<Node> = vec![];
        for block in self
            .blocks
            .blocks_in_range(table.name(), plan.window.0, plan.window.1)
        {
            if !nodes.contains(&block.node) {
                nodes.push(block.node);
            }
        }
        Ok(nodes)
    }

    /// Poll one node's inventory into the shared catalog.
    pub async fn poll_node(&self, node: &Node) -> Result<usize> {
        let client = self.client_for(node).await?;
        client.state().await
    }

    /// Dispatch the plan to every owning node; the caller sequences or
    /// joins the returned futures as it sees fit.
    pub async fn schedule(&self, plan: &ExecutionPlan) -> Result<Vec<RowCursorFuture>> {
        let nodes = self.nodes_for_plan(plan)?;

        let mut cursors = Vec::with_capacity(nodes.len());
        for node in nodes {
            let client = self.client_for(&node).await?;
            cursors.push(client.execute(plan));
        }
        Ok(cursors)
    }

    async fn client_for(&self, node: &Node) -> Result<Arc<NodeClient>> {
        if let Some(client) = self.clients.read().get(node) {
            return Ok(client.clone());
        }

        let client = Arc::new(
            NodeClient::try_create(node.clone(), self.runtime.clone(), self.blocks.clone())
                .await?,
        );
        self.clients.write().insert(node.clone(), client.clone());
        Ok(client)
    }
}
