// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::fmt;

use crate::eval::EvalContext;
use crate::eval::EvalId;
use crate::eval::ValueEval;

/// SQL-style pattern predicate: '%' matches any substring, everything
/// else matches literally, case-sensitive. Any number of '%' tokens is
/// supported, at any position.
pub struct LikeFunction {
    id: EvalId,
    display_name: String,
    expr: Box<dyn ValueEval<String>>,
    pattern: String,
}

impl LikeFunction {
    pub fn create(
        display_name: &str,
        expr: Box<dyn ValueEval<String>>,
        pattern: &str,
    ) -> LikeFunction {
        LikeFunction {
            id: EvalId::next(),
            display_name: display_name.to_string(),
            expr,
            pattern: pattern.to_string(),
        }
    }
}

// Segment matcher over the '%'-separated pieces of the pattern. Empty
// patterns, empty operands and empty segments all flow through the same
// path: a pattern without '%' degenerates to literal equality.
fn like_match(input: &str, pattern: &str) -> bool {
    let segments: Vec<&str> = pattern.split('%').collect();
    if segments.len() == 1 {
        return input == pattern;
    }

    let last = segments.len() - 1;
    let mut pos = 0usize;
    for (index, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        if index == 0 {
            if !input.starts_with(segment) {
                return false;
            }
            pos = segment.len();
        } else if index == last {
            // anchored at the end, and it may not overlap what is
            // already consumed
            return input.ends_with(segment) && input.len() - segment.len() >= pos;
        } else {
            match input[pos..].find(segment) {
                Some(found) => pos += found + segment.len(),
                None => return false,
            }
        }
    }
    true
}

impl ValueEval<bool> for LikeFunction {
    fn id(&self) -> EvalId {
        self.id
    }

    fn name(&self) -> &str {
        &self.display_name
    }

    fn eval(&self, ctx: &mut EvalContext, valid: &mut bool) -> bool {
        let value = ctx.eval(self.expr.as_ref(), valid);
        if !*valid {
            return false;
        }
        like_match(&value, &self.pattern)
    }
}

impl fmt::Display for LikeFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} LIKE '{}'", self.expr, self.pattern)
    }
}
