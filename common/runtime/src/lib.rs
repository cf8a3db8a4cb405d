// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.


mod runtime;

pub use runtime::Runtime;
pub use tokio;
