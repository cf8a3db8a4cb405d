// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

#[cfg(test)]
mod row_cursor_test;

mod row_cursor;

pub use row_cursor::Row;
pub use row_cursor::RowCursor;
