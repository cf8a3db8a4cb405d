// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::sync::Arc;

/// Read-only access to one row of already-resident data, supplied
/// externally per execution pass. Getters are only meaningful for
/// columns whose null check returns false.
pub trait RowData: Send + Sync {
    fn is_null(&self, column: &str) -> bool;

    fn read_bool(&self, column: &str) -> bool;
    fn read_i8(&self, column: &str) -> i8;
    fn read_i16(&self, column: &str) -> i16;
    fn read_i32(&self, column: &str) -> i32;
    fn read_i64(&self, column: &str) -> i64;
    fn read_f32(&self, column: &str) -> f32;
    fn read_f64(&self, column: &str) -> f64;
    fn read_utf8(&self, column: &str) -> String;
}

pub type RowDataRef = Arc<dyn RowData>;
