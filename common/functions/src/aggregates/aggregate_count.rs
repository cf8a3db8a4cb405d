// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use common_datavalues::NativeKind;

use crate::aggregates::AggregateEval;
use crate::eval::EvalContext;
use crate::eval::EvalId;
use crate::eval::ValueEval;

/// Counts valid rows: one per row whose child evaluates valid, zero
/// otherwise. Count itself is never null.
pub struct AggregateCountFunction<T: NativeKind> {
    id: EvalId,
    display_name: String,
    expr: Box<dyn ValueEval<T>>,
}

impl<T: NativeKind> AggregateCountFunction<T> {
    pub fn create(display_name: &str, expr: Box<dyn ValueEval<T>>) -> AggregateCountFunction<T> {
        AggregateCountFunction {
            id: EvalId::next(),
            display_name: display_name.to_string(),
            expr,
        }
    }

    pub fn id(&self) -> EvalId {
        self.id
    }
}

impl<T: NativeKind> AggregateEval for AggregateCountFunction<T> {
    type Store = i64;

    fn name(&self) -> &str {
        &self.display_name
    }

    fn eval_row(&self, ctx: &mut EvalContext, valid: &mut bool) -> i64 {
        let mut row_valid = true;
        ctx.eval(self.expr.as_ref(), &mut row_valid);
        *valid = true;
        match row_valid {
            true => 1,
            false => 0,
        }
    }

    fn merge(&self, old: i64, new: i64) -> i64 {
        old + new
    }
}

impl<T: NativeKind> fmt::Display for AggregateCountFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "count({})", self.expr)
    }
}
