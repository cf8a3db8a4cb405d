// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use crate::ExecutionPlan;

impl ExecutionPlan {
    pub fn display_indent(&self) -> impl fmt::Display + '_ {
        struct Wrapper<'a>(&'a ExecutionPlan);

        impl<'a> fmt::Display for Wrapper<'a> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    f,
                    "Scan: {}, range: [{}, {})",
                    self.0.table, self.0.window.0, self.0.window.1
                )?;
                write!(f, "\n  Projection: {}", self.0.fields.join(", "))?;
                if let Some(predicate) = &self.0.predicate {
                    write!(f, "\n  Filter: ({})", predicate)?;
                }
                Ok(())
            }
        }

        Wrapper(self)
    }
}

impl fmt::Debug for ExecutionPlan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_indent())
    }
}
