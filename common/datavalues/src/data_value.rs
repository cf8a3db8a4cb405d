// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use crate::DataKind;

/// A specific value of a data kind. Every variant carries an Option,
/// None means null for that kind.
#[derive(serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub enum DataValue {
    Boolean(Option<bool>),
    Int8(Option<i8>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Utf8(Option<String>),
}

impl DataValue {
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            DataValue::Boolean(None)
                | DataValue::Int8(None)
                | DataValue::Int16(None)
                | DataValue::Int32(None)
                | DataValue::Int64(None)
                | DataValue::Float32(None)
                | DataValue::Float64(None)
                | DataValue::Utf8(None)
        )
    }

    pub fn kind(&self) -> DataKind {
        match self {
            DataValue::Boolean(_) => DataKind::Boolean,
            DataValue::Int8(_) => DataKind::Int8,
            DataValue::Int16(_) => DataKind::Int16,
            DataValue::Int32(_) => DataKind::Int32,
            DataValue::Int64(_) => DataKind::Int64,
            DataValue::Float32(_) => DataKind::Float32,
            DataValue::Float64(_) => DataKind::Float64,
            DataValue::Utf8(_) => DataKind::Utf8,
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_null() {
            return write!(f, "NULL");
        }
        match self {
            DataValue::Boolean(v) => format_option!(f, v),
            DataValue::Int8(v) => format_option!(f, v),
            DataValue::Int16(v) => format_option!(f, v),
            DataValue::Int32(v) => format_option!(f, v),
            DataValue::Int64(v) => format_option!(f, v),
            DataValue::Float32(v) => format_option!(f, v),
            DataValue::Float64(v) => format_option!(f, v),
            DataValue::Utf8(v) => format_option!(f, v),
        }
    }
}

impl fmt::Debug for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
