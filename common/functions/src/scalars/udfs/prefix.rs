// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use crate::eval::EvalContext;
use crate::eval::EvalId;
use crate::eval::ValueEval;

/// Literal starts-with predicate. The parameter is taken verbatim, a
/// '%' inside it is an ordinary character, never a wildcard.
pub struct PrefixFunction {
    id: EvalId,
    display_name: String,
    expr: Box<dyn ValueEval<String>>,
    prefix: String,
}

impl PrefixFunction {
    pub fn create(
        display_name: &str,
        expr: Box<dyn ValueEval<String>>,
        prefix: &str,
    ) -> PrefixFunction {
        PrefixFunction {
            id: EvalId::next(),
            display_name: display_name.to_string(),
            expr,
            prefix: prefix.to_string(),
        }
    }
}

impl ValueEval<bool> for PrefixFunction {
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
        value.starts_with(&self.prefix)
    }
}

impl fmt::Display for PrefixFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PREFIX({}, '{}')", self.expr, self.prefix)
    }
}
