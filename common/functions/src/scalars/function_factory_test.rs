// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use crate::scalars::FunctionFactory;

#[test]
fn test_function_factory_lookup() {
    assert!(FunctionFactory::check("not"));
    assert!(FunctionFactory::check("LIKE"));
    assert!(!FunctionFactory::check("nope"));

    let features = FunctionFactory::get_features("min").unwrap();
    assert!(features.is_aggregate);

    let features = FunctionFactory::get_features("prefix").unwrap();
    assert!(features.bool_result);

    let missing = FunctionFactory::get_features("nope");
    assert!(missing.is_err());
    assert_eq!(missing.unwrap_err().code(), 8);

    let names = FunctionFactory::registered_names();
    assert!(names.contains(&"in".to_string()));
    assert!(names.contains(&"count".to_string()));
}
