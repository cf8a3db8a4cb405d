// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use common_exception::ErrorCode;
use common_exception::Result;

use crate::ExecutionPlan;

pub struct PlanBuilder {
    plan: ExecutionPlan,
}

impl PlanBuilder {
    /// Starts a plan scanning one table; a fresh query id is assigned.
    pub fn scan(table: &str) -> PlanBuilder {
        PlanBuilder {
            plan: ExecutionPlan {
                query_id: uuid::Uuid::new_v4().to_string(),
                table: table.to_string(),
                window: (i64::MIN, i64::MAX),
                fields: vec![],
                predicate: None,
            },
        }
    }

    pub fn window(mut self, ts: i64, te: i64) -> Self {
        self.plan.window = (ts, te);
        self
    }

    pub fn project(mut self, fields: &[&str]) -> Self {
        self.plan.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn filter(mut self, predicate: &str) -> Self {
        self.plan.predicate = Some(predicate.to_string());
        self
    }

    pub fn build(self) -> Result<ExecutionPlan> {
        if self.plan.table.is_empty() {
            return Err(ErrorCode::BadArguments("Plan must name a table"));
        }
        if self.plan.window.0 >= self.plan.window.1 {
            return Err(ErrorCode::BadArguments(format!(
                "Plan window [{}, {}) is empty",
                self.plan.window.0, self.plan.window.1
            )));
        }
        Ok(self.plan)
    }
}
