// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.


mod plan_scheduler;

pub use plan_scheduler::PlanScheduler;
