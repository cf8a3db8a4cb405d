// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::Context;
use std::task::Poll;

use common_datavalues::DataValue;
use futures::Stream;

pub type Row = Vec<DataValue>;

/// Finite, forward-only sequence of result rows. Pull one row at a
/// time; once drained it cannot be restarted.
#[derive(Debug)]
pub struct RowCursor {
    columns: Vec<String>,
    rows: VecDeque<Row>,
}

impl RowCursor {
    pub fn create(columns: Vec<String>, rows: Vec<Row>) -> RowCursor {
        RowCursor {
            columns,
            rows: rows.into(),
        }
    }

    pub fn empty() -> RowCursor {
        RowCursor {
            columns: vec![],
            rows: VecDeque::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn next_row(&mut self) -> Option<Row> {
        self.rows.pop_front()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Stream for RowCursor {
    type Item = Row;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.get_mut().rows.pop_front())
    }
}
