// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::sync::Arc;

use common_datavalues::DataField;
use common_datavalues::DataKind;
use common_datavalues::DataSchemaRefExt;
use common_datavalues::DataValue;
use common_datavalues::MockRowData;
use common_datavalues::RowDataRef;
use common_exception::Result;
use common_functions::scalars::PrefixFunction;
use common_functions::ColumnEval;

use crate::pipelines::FilterTransform;

fn event_row(name: &str) -> RowDataRef {
    Arc::new(MockRowData::create(vec![(
        "event",
        DataValue::Utf8(Some(name.to_string())),
    )]))
}

#[test]
fn test_filter_transform_keeps_matching_rows() -> Result<()> {
    use pretty_assertions::assert_eq;

    let schema = DataSchemaRefExt::create(vec![DataField::new("event", DataKind::Utf8, true)]);
    let column = ColumnEval::<String>::try_create("event", &schema)?;
    let predicate = PrefixFunction::create("p", Box::new(column), "app.");

    let mut transform = FilterTransform::create(Box::new(predicate));
    assert_eq!(transform.name(), "FilterTransform");

    let input = vec![
        event_row("app.start"),
        event_row("sys.boot"),
        event_row("app.stop"),
        // null rows drop out through the validity channel
        Arc::new(MockRowData::create(vec![("event", DataValue::Utf8(None))])) as RowDataRef,
    ];

    let output = transform.execute(input);
    assert_eq!(output.len(), 2);
    Ok(())
}
