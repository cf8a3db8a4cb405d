// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

#[cfg(test)]
mod function_factory_test;

mod function_factory;
mod udfs;

pub use function_factory::FunctionFactory;
pub use function_factory::FunctionFeatures;
pub use udfs::InFunction;
pub use udfs::LikeFunction;
pub use udfs::NotFunction;
pub use udfs::PrefixFunction;
