// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datavalues::DataValue;
use futures::StreamExt;

use crate::datastreams::RowCursor;

#[tokio::test]
async fn test_row_cursor_pulls_forward_only() {
    use pretty_assertions::assert_eq;

    let mut cursor = RowCursor::create(
        vec!["id".to_string()],
        vec![
            vec![DataValue::Int64(Some(1))],
            vec![DataValue::Int64(Some(2))],
        ],
    );

    assert_eq!(cursor.columns(), &["id".to_string()]);
    assert_eq!(cursor.len(), 2);

    let first = cursor.next().await;
    assert_eq!(first, Some(vec![DataValue::Int64(Some(1))]));

    let second = cursor.next().await;
    assert_eq!(second, Some(vec![DataValue::Int64(Some(2))]));

    // drained for good
    assert_eq!(cursor.next().await, None);
    assert_eq!(cursor.next().await, None);
}

#[test]
fn test_empty_cursor() {
    let mut cursor = RowCursor::empty();
    assert!(cursor.is_empty());
    assert_eq!(cursor.next_row(), None);
}
