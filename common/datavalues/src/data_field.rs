// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use crate::DataKind;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct DataField {
    name: String,
    kind: DataKind,
    nullable: bool,
}

impl DataField {
    pub fn new(name: &str, kind: DataKind, nullable: bool) -> Self {
        DataField {
            name: name.to_string(),
            kind,
            nullable,
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn kind(&self) -> DataKind {
        self.kind
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}
