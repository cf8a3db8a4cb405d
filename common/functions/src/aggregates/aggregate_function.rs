// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use common_datavalues::DataKind;
use common_datavalues::NativeKind;

use crate::eval::EvalContext;

/// An aggregate combinator: a per-row contribution of the store type
/// plus a merge law over it. The merge must be deterministic,
/// associative and commutative, because rows are processed in any order
/// and partial accumulators are merged pairwise across threads and
/// nodes. No cross-row state lives here; the driver that repeatedly
/// applies `merge` owns the accumulator and must not double-count.
pub trait AggregateEval: fmt::Display + Send + Sync {
    type Store: NativeKind;

    fn name(&self) -> &str;

    fn kind(&self) -> DataKind {
        Self::Store::KIND
    }

    /// The contribution of the currently bound row. `valid` follows the
    /// same in/out contract as scalar evaluation; an invalid row
    /// contributes nothing and the driver skips it.
    fn eval_row(&self, ctx: &mut EvalContext, valid: &mut bool) -> Self::Store;

    fn merge(&self, old: Self::Store, new: Self::Store) -> Self::Store;
}
