// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::sync::Arc;

use common_datavalues::DataField;
use common_datavalues::DataKind;
use common_datavalues::DataSchemaRefExt;
use common_datavalues::DataValue;
use common_datavalues::MockRowData;
use common_exception::Result;

use crate::aggregates::AggregateCountFunction;
use crate::aggregates::AggregateEval;
use crate::aggregates::AggregateMaxFunction;
use crate::aggregates::AggregateMinFunction;
use crate::aggregates::AggregateSumFunction;
use crate::eval::EvalContext;
use crate::ColumnEval;
use crate::ConstEval;

#[test]
fn test_min_merge_laws() {
    use pretty_assertions::assert_eq;

    let min = AggregateMinFunction::create("m", Box::new(ConstEval::create(0i64)));

    let triples: Vec<(i64, i64, i64)> = vec![
        (1, 2, 3),
        (3, 2, 1),
        (7, 7, 7),
        (-5, 0, 5),
        (i64::MAX, i64::MIN, 0),
    ];
    for (a, b, c) in triples {
        // associative
        assert_eq!(
            min.merge(min.merge(a, b), c),
            min.merge(a, min.merge(b, c))
        );
        // commutative
        assert_eq!(min.merge(a, b), min.merge(b, a));
    }

    assert_eq!(min.merge(4, 9), 4);
    assert_eq!(min.kind(), DataKind::Int64);
}

#[test]
fn test_max_and_sum_merge() {
    use pretty_assertions::assert_eq;

    let max = AggregateMaxFunction::create("m", Box::new(ConstEval::create(0i32)));
    assert_eq!(max.merge(4, 9), 9);
    assert_eq!(max.merge(9, 4), 9);

    let sum = AggregateSumFunction::create("s", Box::new(ConstEval::create(0f64)));
    assert_eq!(sum.merge(1.5, 2.5), 4.0);

    let min = AggregateMinFunction::create(
        "m",
        Box::new(ConstEval::create(String::new())),
    );
    assert_eq!(
        min.merge("abc".to_string(), "abd".to_string()),
        "abc".to_string()
    );
}

#[test]
fn test_aggregate_row_contribution() -> Result<()> {
    use pretty_assertions::assert_eq;

    let schema = DataSchemaRefExt::create(vec![DataField::new("v", DataKind::Int64, true)]);
    let column = ColumnEval::<i64>::try_create("v", &schema)?;
    let min = AggregateMinFunction::create("m", Box::new(column));

    let mut ctx = EvalContext::create();
    ctx.reset(Arc::new(MockRowData::create(vec![(
        "v",
        DataValue::Int64(Some(12)),
    )])));

    let mut valid = true;
    assert_eq!(min.eval_row(&mut ctx, &mut valid), 12);
    assert!(valid);

    // null row contributes an invalid value the driver must skip
    ctx.reset(Arc::new(MockRowData::create(vec![(
        "v",
        DataValue::Int64(None),
    )])));
    let mut valid = true;
    min.eval_row(&mut ctx, &mut valid);
    assert!(!valid);

    Ok(())
}

#[test]
fn test_count_valid_rows() -> Result<()> {
    use pretty_assertions::assert_eq;

    let schema = DataSchemaRefExt::create(vec![DataField::new("v", DataKind::Utf8, true)]);
    let column = ColumnEval::<String>::try_create("v", &schema)?;
    let count = AggregateCountFunction::create("c", Box::new(column));

    let mut ctx = EvalContext::create();
    let mut total = 0i64;

    let rows = vec![
        DataValue::Utf8(Some("a".to_string())),
        DataValue::Utf8(None),
        DataValue::Utf8(Some("b".to_string())),
    ];
    for value in rows {
        ctx.reset(Arc::new(MockRowData::create(vec![("v", value)])));
        let mut valid = true;
        let contribution = count.eval_row(&mut ctx, &mut valid);
        assert!(valid);
        total = count.merge(total, contribution);
    }

    assert_eq!(total, 2);
    Ok(())
}
