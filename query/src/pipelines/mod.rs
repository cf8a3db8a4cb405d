// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

#[cfg(test)]
mod transform_filter_test;

mod transform_filter;

pub use transform_filter::FilterTransform;
