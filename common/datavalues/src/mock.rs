// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::collections::HashMap;

use crate::DataValue;
use crate::RowData;

/// Map-backed row used by tests across the workspace. A column that is
/// absent or holds a null value reports null; typed getters fall back to
/// the type default, mirroring the validity contract of real surfaces.
#[derive(Default)]
pub struct MockRowData {
    values: HashMap<String, DataValue>,
}

impl MockRowData {
    pub fn create(values: Vec<(&str, DataValue)>) -> MockRowData {
        MockRowData {
            values: values
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }
}

macro_rules! mock_reader {
    ($FN:ident, $NATIVE:ty, $SCALAR:ident) => {
        fn $FN(&self, column: &str) -> $NATIVE {
            match self.values.get(column) {
                Some(DataValue::$SCALAR(Some(v))) => v.clone(),
                _ => <$NATIVE>::default(),
            }
        }
    };
}

impl RowData for MockRowData {
    fn is_null(&self, column: &str) -> bool {
        match self.values.get(column) {
            Some(value) => value.is_null(),
            None => true,
        }
    }

    mock_reader!(read_bool, bool, Boolean);
    mock_reader!(read_i8, i8, Int8);
    mock_reader!(read_i16, i16, Int16);
    mock_reader!(read_i32, i32, Int32);
    mock_reader!(read_i64, i64, Int64);
    mock_reader!(read_f32, f32, Float32);
    mock_reader!(read_f64, f64, Float64);
    mock_reader!(read_utf8, String, Utf8);
}
