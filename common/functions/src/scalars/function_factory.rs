// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::sync::Arc;

use common_exception::ErrorCode;
use common_exception::Result;
use common_infallible::RwLock;
use indexmap::IndexMap;
use lazy_static::lazy_static;

/// Feature flags answered for a registered function name. Construction
/// of the typed evaluators stays with the typed constructors; the
/// factory answers existence and shape queries for diagnostics and
/// plan validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FunctionFeatures {
    pub is_aggregate: bool,
    pub bool_result: bool,
}

impl FunctionFeatures {
    pub const fn scalar_bool() -> FunctionFeatures {
        FunctionFeatures {
            is_aggregate: false,
            bool_result: true,
        }
    }

    pub const fn aggregate() -> FunctionFeatures {
        FunctionFeatures {
            is_aggregate: true,
            bool_result: false,
        }
    }
}

pub type FactoryRef = Arc<RwLock<IndexMap<&'static str, FunctionFeatures>>>;

lazy_static! {
    static ref FACTORY: FactoryRef = {
        let map: FactoryRef = Arc::new(RwLock::new(IndexMap::new()));
        {
            let mut map = map.write();
            // always lowercase names on lookup
            map.insert("not", FunctionFeatures::scalar_bool());
            map.insert("like", FunctionFeatures::scalar_bool());
            map.insert("prefix", FunctionFeatures::scalar_bool());
            map.insert("in", FunctionFeatures::scalar_bool());

            map.insert("min", FunctionFeatures::aggregate());
            map.insert("max", FunctionFeatures::aggregate());
            map.insert("sum", FunctionFeatures::aggregate());
            map.insert("count", FunctionFeatures::aggregate());
        }
        map
    };
}

pub struct FunctionFactory;

impl FunctionFactory {
    pub fn check(name: &str) -> bool {
        let map = FACTORY.read();
        map.contains_key(&*name.to_lowercase())
    }

    pub fn get_features(name: &str) -> Result<FunctionFeatures> {
        let map = FACTORY.read();
        map.get(&*name.to_lowercase()).copied().ok_or_else(|| {
            ErrorCode::UnknownFunction(format!("Unsupported Function: {}", name))
        })
    }

    pub fn registered_names() -> Vec<String> {
        let map = FACTORY.read();
        map.keys().map(|x| x.to_string()).collect()
    }
}
