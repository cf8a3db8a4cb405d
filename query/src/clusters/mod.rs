// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.


mod address;
mod node;

pub use address::Address;
pub use node::Node;
