// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::collections::HashMap;

use common_datavalues::DataValue;
use common_datavalues::NativeKind;
use common_datavalues::RowDataRef;

use crate::eval::EvalId;
use crate::eval::ValueEval;

/// Per-row, per-thread evaluation state: the currently bound row plus a
/// memoization cache keyed by evaluator identity. The cache is only
/// meaningful for the row bound by the last `reset`; binding a new row
/// clears it. One context belongs to one worker thread and is reused
/// across rows sequentially.
#[derive(Default)]
pub struct EvalContext {
    row: Option<RowDataRef>,
    cache: HashMap<EvalId, (DataValue, bool)>,
}

impl EvalContext {
    pub fn create() -> EvalContext {
        EvalContext {
            row: None,
            cache: HashMap::new(),
        }
    }

    /// Bind a new current row and invalidate every cached result.
    pub fn reset(&mut self, row: RowDataRef) {
        self.row = Some(row);
        self.cache.clear();
    }

    pub fn row(&self) -> Option<&RowDataRef> {
        self.row.as_ref()
    }

    /// Evaluate through the cache. A sub-expression shared by several
    /// parent expressions (a DAG, not necessarily a tree) is computed
    /// once per bound row regardless of fan-in.
    pub fn eval<T: NativeKind>(&mut self, eval: &dyn ValueEval<T>, valid: &mut bool) -> T {
        if let Some((value, ok)) = self.cache.get(&eval.id()) {
            *valid = *ok;
            return T::from_value(value).unwrap_or_default();
        }

        let mut ok = true;
        let value = eval.eval(self, &mut ok);
        self.cache
            .insert(eval.id(), (value.clone().into_value(), ok));
        *valid = ok;
        value
    }
}
