// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_exception::ErrorCode;
use common_exception::Result;

use crate::DataValue;
use crate::DataValueAggregateOperator;

/// Merge arithmetic over pairs of dynamic values, used when partial
/// aggregation results cross a wire boundary and arrive untyped.
/// Null on either side yields the other side unchanged.
pub struct DataValueAggregate;

impl DataValueAggregate {
    #[inline]
    pub fn data_value_aggregate_op(
        op: DataValueAggregateOperator,
        left: DataValue,
        right: DataValue,
    ) -> Result<DataValue> {
        match (&left, &right) {
            (DataValue::Int8(lhs), DataValue::Int8(rhs)) => match op {
                DataValueAggregateOperator::Min => typed_data_value_min_max!(lhs, rhs, Int8, min),
                DataValueAggregateOperator::Max => typed_data_value_min_max!(lhs, rhs, Int8, max),
                DataValueAggregateOperator::Sum => typed_data_value_add!(lhs, rhs, Int8),
                DataValueAggregateOperator::Count => Result::Ok(DataValue::Int64(Some(1))),
            },
            (DataValue::Int16(lhs), DataValue::Int16(rhs)) => match op {
                DataValueAggregateOperator::Min => typed_data_value_min_max!(lhs, rhs, Int16, min),
                DataValueAggregateOperator::Max => typed_data_value_min_max!(lhs, rhs, Int16, max),
                DataValueAggregateOperator::Sum => typed_data_value_add!(lhs, rhs, Int16),
                DataValueAggregateOperator::Count => Result::Ok(DataValue::Int64(Some(1))),
            },
            (DataValue::Int32(lhs), DataValue::Int32(rhs)) => match op {
                DataValueAggregateOperator::Min => typed_data_value_min_max!(lhs, rhs, Int32, min),
                DataValueAggregateOperator::Max => typed_data_value_min_max!(lhs, rhs, Int32, max),
                DataValueAggregateOperator::Sum => typed_data_value_add!(lhs, rhs, Int32),
                DataValueAggregateOperator::Count => Result::Ok(DataValue::Int64(Some(1))),
            },
            (DataValue::Int64(lhs), DataValue::Int64(rhs)) => match op {
                DataValueAggregateOperator::Min => typed_data_value_min_max!(lhs, rhs, Int64, min),
                DataValueAggregateOperator::Max => typed_data_value_min_max!(lhs, rhs, Int64, max),
                DataValueAggregateOperator::Sum => typed_data_value_add!(lhs, rhs, Int64),
                DataValueAggregateOperator::Count => Result::Ok(DataValue::Int64(Some(1))),
            },
            (DataValue::Float32(lhs), DataValue::Float32(rhs)) => match op {
                DataValueAggregateOperator::Min => typed_data_value_min_max!(lhs, rhs, Float32, min),
                DataValueAggregateOperator::Max => typed_data_value_min_max!(lhs, rhs, Float32, max),
                DataValueAggregateOperator::Sum => typed_data_value_add!(lhs, rhs, Float32),
                DataValueAggregateOperator::Count => Result::Ok(DataValue::Int64(Some(1))),
            },
            (DataValue::Float64(lhs), DataValue::Float64(rhs)) => match op {
                DataValueAggregateOperator::Min => typed_data_value_min_max!(lhs, rhs, Float64, min),
                DataValueAggregateOperator::Max => typed_data_value_min_max!(lhs, rhs, Float64, max),
                DataValueAggregateOperator::Sum => typed_data_value_add!(lhs, rhs, Float64),
                DataValueAggregateOperator::Count => Result::Ok(DataValue::Int64(Some(1))),
            },
            (DataValue::Utf8(lhs), DataValue::Utf8(rhs)) => match op {
                DataValueAggregateOperator::Min => {
                    typed_data_value_min_max_string!(lhs, rhs, Utf8, min)
                }
                DataValueAggregateOperator::Max => {
                    typed_data_value_min_max_string!(lhs, rhs, Utf8, max)
                }
                _ => Result::Err(ErrorCode::BadDataValueType(format!(
                    "DataValue Error: Unsupported data_value_{} for data kind: left:{:?}, right:{:?}",
                    op,
                    left.kind(),
                    right.kind()
                ))),
            },
            _ => Result::Err(ErrorCode::BadDataValueType(format!(
                "DataValue Error: Unsupported data_value_{} for data kind: left:{:?}, right:{:?}",
                op,
                left.kind(),
                right.kind()
            ))),
        }
    }
}
