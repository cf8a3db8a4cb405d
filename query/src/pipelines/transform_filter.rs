// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datavalues::RowDataRef;
use common_functions::EvalContext;
use common_functions::ValueEval;

/// Worker-side row filter: binds each row to its evaluation context in
/// turn and keeps the rows whose predicate evaluates valid and true.
/// One transform per worker thread; the context is reused across rows.
pub struct FilterTransform {
    predicate: Box<dyn ValueEval<bool>>,
    context: EvalContext,
}

impl FilterTransform {
    pub fn create(predicate: Box<dyn ValueEval<bool>>) -> FilterTransform {
        FilterTransform {
            predicate,
            context: EvalContext::create(),
        }
    }

    pub fn name(&self) -> &str {
        "FilterTransform"
    }

    pub fn execute(&mut self, input: Vec<RowDataRef>) -> Vec<RowDataRef> {
        let mut output = Vec::with_capacity(input.len());
        for row in input {
            self.context.reset(row.clone());

            let mut valid = true;
            let keep = self.context.eval(self.predicate.as_ref(), &mut valid);
            // an invalid predicate never selects the row
            if valid && keep {
                output.push(row);
            }
        }
        output
    }
}
