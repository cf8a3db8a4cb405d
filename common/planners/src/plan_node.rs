// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

/// Serializable description of the work one node performs: which table
/// to scan over which time window, which fields to produce and an
/// optional predicate rendering. The core treats it as an opaque value
/// type; building one is the plan compiler's job.
#[derive(serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct ExecutionPlan {
    pub query_id: String,
    pub table: String,
    /// half-open window [ts, te)
    pub window: (i64, i64),
    pub fields: Vec<String>,
    pub predicate: Option<String>,
}

impl ExecutionPlan {
    pub fn name(&self) -> &str {
        "ExecutionPlan"
    }
}
