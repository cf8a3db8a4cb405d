// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use common_datavalues::NativeKind;

use crate::eval::EvalContext;
use crate::eval::EvalId;
use crate::eval::ValueEval;

/// Membership of the operand in a fixed literal set, uniform over every
/// native kind. `positive` carries the membership sense: true is IN,
/// false is NOT IN. The set is built once at construction and tested by
/// exact equality; an empty set goes through the same path.
pub struct InFunction<T: NativeKind> {
    id: EvalId,
    display_name: String,
    expr: Box<dyn ValueEval<T>>,
    set: Vec<T>,
    positive: bool,
}

impl<T: NativeKind> InFunction<T> {
    pub fn create(display_name: &str, expr: Box<dyn ValueEval<T>>, set: Vec<T>) -> InFunction<T> {
        Self::create_with_sense(display_name, expr, set, true)
    }

    pub fn create_with_sense(
        display_name: &str,
        expr: Box<dyn ValueEval<T>>,
        set: Vec<T>,
        positive: bool,
    ) -> InFunction<T> {
        InFunction {
            id: EvalId::next(),
            display_name: display_name.to_string(),
            expr,
            set,
            positive,
        }
    }
}

impl<T: NativeKind> ValueEval<bool> for InFunction<T> {
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
        let member = self.set.contains(&value);
        match self.positive {
            true => member,
            false => !member,
        }
    }
}

impl<T: NativeKind> fmt::Display for InFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.positive {
            write!(f, "{} IN (..)", self.expr)
        } else {
            write!(f, "{} NOT IN (..)", self.expr)
        }
    }
}
