// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_datavalues::DataSchemaRef;

#[derive(Clone, Debug)]
pub struct Table {
    name: String,
    schema: DataSchemaRef,
}

impl Table {
    pub fn create(name: &str, schema: DataSchemaRef) -> Table {
        Table {
            name: name.to_string(),
            schema,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> DataSchemaRef {
        self.schema.clone()
    }
}
