// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataValueAggregateOperator {
    Min,
    Max,
    Sum,
    Count,
}

impl fmt::Display for DataValueAggregateOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let display = match &self {
            DataValueAggregateOperator::Min => "min",
            DataValueAggregateOperator::Max => "max",
            DataValueAggregateOperator::Sum => "sum",
            DataValueAggregateOperator::Count => "count",
        };
        write!(f, "{}", display)
    }
}
