// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use crate::DataKind;
use crate::DataValue;
use crate::RowData;

/// Compile-time link between a Rust native type and its data kind.
/// Evaluators are instantiated per native type so the per-row hot path
/// never inspects kinds at runtime.
pub trait NativeKind:
    Clone + Default + PartialEq + fmt::Display + Send + Sync + 'static
{
    const KIND: DataKind;

    fn into_value(self) -> DataValue;
    fn from_value(value: &DataValue) -> Option<Self>;
    fn read_row(row: &dyn RowData, column: &str) -> Self;
}

macro_rules! impl_native_kind {
    ($NATIVE:ty, $SCALAR:ident, $READER:ident) => {
        impl NativeKind for $NATIVE {
            const KIND: DataKind = DataKind::$SCALAR;

            fn into_value(self) -> DataValue {
                DataValue::$SCALAR(Some(self))
            }

            fn from_value(value: &DataValue) -> Option<Self> {
                match value {
                    DataValue::$SCALAR(v) => v.clone(),
                    _ => None,
                }
            }

            fn read_row(row: &dyn RowData, column: &str) -> Self {
                row.$READER(column)
            }
        }
    };
}

impl_native_kind!(bool, Boolean, read_bool);
impl_native_kind!(i8, Int8, read_i8);
impl_native_kind!(i16, Int16, read_i16);
impl_native_kind!(i32, Int32, read_i32);
impl_native_kind!(i64, Int64, read_i64);
impl_native_kind!(f32, Float32, read_f32);
impl_native_kind!(f64, Float64, read_f64);
impl_native_kind!(String, Utf8, read_utf8);
