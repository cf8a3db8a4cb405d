// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

#[cfg(test)]
mod data_value_test;

#[macro_use]
mod macros;

mod data_field;
mod data_kind;
mod data_schema;
mod data_value;
mod data_value_aggregate;
mod data_value_operator;
mod mock;
mod native;
mod rows;

pub use crate::data_field::DataField;
pub use crate::data_kind::DataKind;
pub use crate::data_schema::DataSchema;
pub use crate::data_schema::DataSchemaRef;
pub use crate::data_schema::DataSchemaRefExt;
pub use crate::data_value::DataValue;
pub use crate::data_value_aggregate::DataValueAggregate;
pub use crate::data_value_operator::DataValueAggregateOperator;
pub use crate::mock::MockRowData;
pub use crate::native::NativeKind;
pub use crate::rows::RowData;
pub use crate::rows::RowDataRef;
