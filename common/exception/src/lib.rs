// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.


mod exception;

pub use exception::ErrorCode;
pub use exception::Result;
