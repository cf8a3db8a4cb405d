// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::sync::Arc;

use common_exception::Result;

use crate::blocks::BatchBlock;
use crate::blocks::BlockManager;
use crate::blocks::RowsHandle;
use crate::clusters::Node;

fn test_node(name: &str) -> Result<Node> {
    Node::try_create(name, "127.0.0.1:9091")
}

fn test_block(table: &str, id: u64, ts: i64, te: i64, node: &Node) -> BatchBlock {
    BatchBlock::create(table, id, ts, te, node.clone(), RowsHandle { addr: 0, size: 0 })
}

#[test]
fn test_add_then_lookup_round_trip() -> Result<()> {
    use pretty_assertions::assert_eq;

    let node = test_node("n1")?;
    let manager = BlockManager::create();

    let block = BatchBlock::create(
        "events",
        7,
        100,
        200,
        node,
        RowsHandle {
            addr: 0xdead,
            size: 4096,
        },
    );
    manager.add(block.clone());

    let found = manager.blocks_in_range("events", 100, 200);
    assert_eq!(found, vec![block]);
    Ok(())
}

#[test]
fn test_re_add_replaces_descriptor() -> Result<()> {
    use pretty_assertions::assert_eq;

    let node = test_node("n1")?;
    let manager = BlockManager::create();

    manager.add(test_block("t", 1, 0, 10, &node));
    manager.add(test_block("t", 1, 10, 20, &node));

    assert_eq!(manager.len(), 1);
    let found = manager.blocks_by_table("t");
    assert_eq!(found[0].ts, 10);
    assert_eq!(found[0].te, 20);
    Ok(())
}

#[test]
fn test_time_range_intersection() -> Result<()> {
    use pretty_assertions::assert_eq;

    let node = test_node("n1")?;
    let manager = BlockManager::create();

    manager.add(test_block("t", 1, 100, 200, &node));
    manager.add(test_block("t", 2, 200, 300, &node));
    manager.add(test_block("t", 3, 50, 100, &node));

    // window ends are exclusive on both sides
    let hits = manager.blocks_in_range("t", 150, 250);
    assert_eq!(hits.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 2]);

    let hits = manager.blocks_at("t", 150);
    assert_eq!(hits.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1]);

    let hits = manager.blocks_at("t", 100);
    assert_eq!(hits.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1]);

    let hits = manager.blocks_in_range("t", 300, 400);
    assert!(hits.is_empty());
    Ok(())
}

#[test]
fn test_lookup_by_node_and_tables() -> Result<()> {
    use pretty_assertions::assert_eq;

    let n1 = test_node("n1")?;
    let n2 = Node::try_create("n2", "127.0.0.1:9092")?;
    let manager = BlockManager::create();

    manager.add(test_block("a", 1, 0, 10, &n1));
    manager.add(test_block("a", 2, 10, 20, &n2));
    manager.add(test_block("b", 1, 0, 10, &n1));

    let owned = manager.blocks_by_node(&n1);
    assert_eq!(owned.len(), 2);
    assert!(owned.iter().all(|b| b.node == n1));

    assert_eq!(manager.tables(), vec!["a".to_string(), "b".to_string()]);
    Ok(())
}

#[test]
fn test_init_returns_shared_instance() {
    let first = BlockManager::init();
    let second = BlockManager::init();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_concurrent_add_and_read() -> Result<()> {
    let node = test_node("n1")?;
    let manager = Arc::new(BlockManager::create());

    let mut handles = vec![];
    for worker in 0..4u64 {
        let manager = manager.clone();
        let node = node.clone();
        handles.push(std::thread::spawn(move || {
            for i in 0..50u64 {
                manager.add(BatchBlock::create(
                    "t",
                    worker * 100 + i,
                    (i as i64) * 10,
                    (i as i64) * 10 + 10,
                    node.clone(),
                    RowsHandle { addr: i, size: 8 },
                ));
                // readers run against the same map while writes land
                let _ = manager.blocks_by_table("t");
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(manager.len(), 200);
    Ok(())
}
