// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use common_datavalues::DataKind;
use common_datavalues::DataSchema;
use common_datavalues::NativeKind;
use common_exception::ErrorCode;
use common_exception::Result;

use crate::eval::EvalContext;

static NEXT_EVAL_ID: AtomicU64 = AtomicU64::new(0);

/// Stable identity handle for one evaluator instance, allocated at
/// construction. The evaluation cache is keyed by this identity, so two
/// structurally equal evaluators still cache independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EvalId(u64);

impl EvalId {
    pub fn next() -> EvalId {
        EvalId(NEXT_EVAL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The typed, null-aware unit of computation. `valid` is an in/out flag:
/// the caller seeds it true, the implementation sets it false when an
/// operand is null/invalid or the value cannot be produced; the returned
/// value is then meaningless and must not be relied upon. Invalidity is
/// a first-class return channel, never a panic or an error.
pub trait ValueEval<T: NativeKind>: fmt::Display + Send + Sync {
    fn id(&self) -> EvalId;

    fn name(&self) -> &str;

    fn kind(&self) -> DataKind {
        T::KIND
    }

    fn eval(&self, ctx: &mut EvalContext, valid: &mut bool) -> T;
}

/// Fixed-value leaf evaluator, always valid.
pub struct ConstEval<T> {
    id: EvalId,
    value: T,
}

impl<T: NativeKind> ConstEval<T> {
    pub fn create(value: T) -> ConstEval<T> {
        ConstEval {
            id: EvalId::next(),
            value,
        }
    }
}

impl<T: NativeKind> ValueEval<T> for ConstEval<T> {
    fn id(&self) -> EvalId {
        self.id
    }

    fn name(&self) -> &str {
        "literal"
    }

    fn eval(&self, _ctx: &mut EvalContext, _valid: &mut bool) -> T {
        self.value.clone()
    }
}

impl<T: NativeKind> fmt::Display for ConstEval<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Reads one named column from the row bound to the evaluation context.
/// A kind mismatch against the schema is rejected here, at construction,
/// never in the middle of a scan.
#[derive(Debug)]
pub struct ColumnEval<T> {
    id: EvalId,
    column: String,
    marker: PhantomData<T>,
}

impl<T: NativeKind> ColumnEval<T> {
    pub fn try_create(column: &str, schema: &DataSchema) -> Result<ColumnEval<T>> {
        let field = schema.field_with_name(column)?;
        if field.kind() != T::KIND {
            return Err(ErrorCode::IllegalDataType(format!(
                "Column '{}' has kind {}, expression expects {}",
                column,
                field.kind(),
                T::KIND
            )));
        }

        Ok(ColumnEval {
            id: EvalId::next(),
            column: column.to_string(),
            marker: PhantomData,
        })
    }
}

impl<T: NativeKind> ValueEval<T> for ColumnEval<T> {
    fn id(&self) -> EvalId {
        self.id
    }

    fn name(&self) -> &str {
        &self.column
    }

    fn eval(&self, ctx: &mut EvalContext, valid: &mut bool) -> T {
        match ctx.row() {
            None => {
                *valid = false;
                T::default()
            }
            Some(row) => {
                if row.is_null(&self.column) {
                    *valid = false;
                    return T::default();
                }
                T::read_row(row.as_ref(), &self.column)
            }
        }
    }
}

impl<T: NativeKind> fmt::Display for ColumnEval<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.column)
    }
}
