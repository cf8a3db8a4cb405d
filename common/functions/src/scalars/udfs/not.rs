// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use crate::eval::EvalContext;
use crate::eval::EvalId;
use crate::eval::ValueEval;

/// Boolean negation over one child evaluator. An invalid child stays
/// invalid, never flipped.
pub struct NotFunction {
    id: EvalId,
    display_name: String,
    expr: Box<dyn ValueEval<bool>>,
}

impl NotFunction {
    pub fn create(display_name: &str, expr: Box<dyn ValueEval<bool>>) -> NotFunction {
        NotFunction {
            id: EvalId::next(),
            display_name: display_name.to_string(),
            expr,
        }
    }
}

impl ValueEval<bool> for NotFunction {
    fn id(&self) -> EvalId {
        self.id
    }

    fn name(&self) -> &str {
        &self.display_name
    }

    fn eval(&self, ctx: &mut EvalContext, valid: &mut bool) -> bool {
        let value = ctx.eval(self.expr.as_ref(), valid);
        if !*valid {
            return false;
        }
        !value
    }
}

impl fmt::Display for NotFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NOT {}", self.expr)
    }
}
