// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

#[cfg(test)]
mod udf_test;

mod in_basic;
mod like;
mod not;
mod prefix;

pub use in_basic::InFunction;
pub use like::LikeFunction;
pub use not::NotFunction;
pub use prefix::PrefixFunction;
