// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

mod mutex;
mod rwlock;

pub use mutex::Mutex;
pub use rwlock::RwLock;
