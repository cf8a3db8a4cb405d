// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::sync::Arc;

use common_exception::ErrorCode;
use common_exception::Result;

use crate::DataField;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct DataSchema {
    fields: Vec<DataField>,
}

pub type DataSchemaRef = Arc<DataSchema>;

impl DataSchema {
    pub fn empty() -> Self {
        DataSchema { fields: vec![] }
    }

    pub fn new(fields: Vec<DataField>) -> Self {
        DataSchema { fields }
    }

    pub fn fields(&self) -> &Vec<DataField> {
        &self.fields
    }

    pub fn field_with_name(&self, name: &str) -> Result<&DataField> {
        self.fields
            .iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| {
                ErrorCode::UnknownColumn(format!("Unknown column: '{}'", name))
            })
    }

    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|field| field.name() == name)
            .ok_or_else(|| {
                ErrorCode::UnknownColumn(format!("Unknown column: '{}'", name))
            })
    }
}

pub struct DataSchemaRefExt;

impl DataSchemaRefExt {
    pub fn create(fields: Vec<DataField>) -> DataSchemaRef {
        Arc::new(DataSchema::new(fields))
    }
}
