// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use common_datavalues::NativeKind;

use crate::aggregates::AggregateEval;
use crate::eval::EvalContext;
use crate::eval::EvalId;
use crate::eval::ValueEval;

pub struct AggregateMinFunction<T: NativeKind + PartialOrd> {
    id: EvalId,
    display_name: String,
    expr: Box<dyn ValueEval<T>>,
}

impl<T: NativeKind + PartialOrd> AggregateMinFunction<T> {
    pub fn create(display_name: &str, expr: Box<dyn ValueEval<T>>) -> AggregateMinFunction<T> {
        AggregateMinFunction {
            id: EvalId::next(),
            display_name: display_name.to_string(),
            expr,
        }
    }

    pub fn id(&self) -> EvalId {
        self.id
    }
}

impl<T: NativeKind + PartialOrd> AggregateEval for AggregateMinFunction<T> {
    type Store = T;

    fn name(&self) -> &str {
        &self.display_name
    }

    fn eval_row(&self, ctx: &mut EvalContext, valid: &mut bool) -> T {
        ctx.eval(self.expr.as_ref(), valid)
    }

    fn merge(&self, old: T, new: T) -> T {
        if new < old {
            new
        } else {
            old
        }
    }
}

impl<T: NativeKind + PartialOrd> fmt::Display for AggregateMinFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "min({})", self.expr)
    }
}
