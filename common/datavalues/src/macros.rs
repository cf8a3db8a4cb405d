// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

macro_rules! format_option {
    ($F:expr, $EXPR:expr) => {
        match $EXPR {
            Some(e) => write!($F, "{}", e),
            None => write!($F, "NULL"),
        }
    };
}

macro_rules! typed_data_value_min_max {
    ($LHS:expr, $RHS:expr, $SCALAR:ident, $OP:ident) => {
        Result::Ok(DataValue::$SCALAR(match ($LHS, $RHS) {
            (lhs, None) => *lhs,
            (None, rhs) => *rhs,
            (Some(lhs), Some(rhs)) => Some((*lhs).$OP(*rhs)),
        }))
    };
}

macro_rules! typed_data_value_min_max_string {
    ($LHS:expr, $RHS:expr, $SCALAR:ident, $OP:ident) => {
        Result::Ok(DataValue::$SCALAR(match ($LHS, $RHS) {
            (lhs, None) => lhs.clone(),
            (None, rhs) => rhs.clone(),
            (Some(lhs), Some(rhs)) => Some(lhs.clone().$OP(rhs.clone())),
        }))
    };
}

macro_rules! typed_data_value_add {
    ($LHS:expr, $RHS:expr, $SCALAR:ident) => {
        Result::Ok(DataValue::$SCALAR(match ($LHS, $RHS) {
            (lhs, None) => *lhs,
            (None, rhs) => *rhs,
            (Some(lhs), Some(rhs)) => Some(*lhs + *rhs),
        }))
    };
}
