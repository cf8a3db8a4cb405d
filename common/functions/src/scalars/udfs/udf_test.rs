// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use std::sync::Arc;

use common_datavalues::MockRowData;

use crate::eval::EvalContext;
use crate::scalars::InFunction;
use crate::scalars::LikeFunction;
use crate::scalars::NotFunction;
use crate::scalars::PrefixFunction;
use crate::ConstEval;
use crate::ValueEval;

fn test_context() -> EvalContext {
    let mut ctx = EvalContext::create();
    ctx.reset(Arc::new(MockRowData::default()));
    ctx
}

/// A child that always reports invalid, for the propagation law.
struct InvalidEval<T> {
    id: crate::EvalId,
    marker: std::marker::PhantomData<T>,
}

impl<T: common_datavalues::NativeKind> InvalidEval<T> {
    fn create() -> InvalidEval<T> {
        InvalidEval {
            id: crate::EvalId::next(),
            marker: std::marker::PhantomData,
        }
    }
}

impl<T: common_datavalues::NativeKind> std::fmt::Display for InvalidEval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "invalid")
    }
}

impl<T: common_datavalues::NativeKind> crate::ValueEval<T> for InvalidEval<T> {
    fn id(&self) -> crate::EvalId {
        self.id
    }

    fn name(&self) -> &str {
        "invalid"
    }

    fn eval(&self, _ctx: &mut EvalContext, valid: &mut bool) -> T {
        *valid = false;
        T::default()
    }
}

#[test]
fn test_not() {
    let mut ctx = test_context();

    let f = NotFunction::create("n", Box::new(ConstEval::create(false)));
    let mut valid = true;
    assert!(f.eval(&mut ctx, &mut valid));
    assert!(valid);

    let y = NotFunction::create("n", Box::new(ConstEval::create(true)));
    let mut valid = true;
    assert!(!y.eval(&mut ctx, &mut valid));
    assert!(valid);
}

#[test]
fn test_like() {
    let data = vec![
        ("abcdefg", "abc%", true),
        ("quasar says hi", "%says%", true),
        ("long time no see", "%see", true),
        ("nebula is cool", "%is", false),
        ("nebula is awesome", "nebula%", true),
        ("hi there ", "%i th%", true),
        ("hi there ", "i th%", false),
        ("hi there", "%there", true),
        ("anything", "%", true),
        ("literal", "literal", true),
        ("", "", true),
        ("", "%", true),
    ];

    let mut ctx = test_context();
    for (input, pattern, expected) in data {
        let like = LikeFunction::create(
            "l",
            Box::new(ConstEval::create(input.to_string())),
            pattern,
        );
        let mut valid = true;
        assert_eq!(
            like.eval(&mut ctx, &mut valid),
            expected,
            "match {:?} with {:?}",
            input,
            pattern
        );
        assert!(valid);
    }
}

#[test]
fn test_prefix() {
    let data = vec![
        ("abcdefg", "abc", true),
        ("quasar says hi", "says", false),
        ("long time no see", "long time", true),
        ("nebula is cool", "is", false),
        ("nebula is awesome", "nebula", true),
        ("hi there ", "%i th", false),
        ("hi there ", "i th", false),
        ("hi there", "hi there", true),
        ("", "", true),
    ];

    let mut ctx = test_context();
    for (input, prefix, expected) in data {
        let function = PrefixFunction::create(
            "p",
            Box::new(ConstEval::create(input.to_string())),
            prefix,
        );
        let mut valid = true;
        assert_eq!(
            function.eval(&mut ctx, &mut valid),
            expected,
            "prefix {:?} with {:?}",
            input,
            prefix
        );
        assert!(valid);
    }
}

#[test]
fn test_in_strings() {
    let data: Vec<(Vec<&str>, &str, bool, bool)> = vec![
        (vec!["abcdefg", "abc"], "abc", true, true),
        (vec!["x", "y", "z"], "x", true, true),
        (vec!["x", "y", "z"], "a", true, false),
        (vec!["x", "y", "z"], "x", false, false),
        (vec!["x", "y", "z"], "a", false, true),
        (vec!["x", "y", "z"], "z", false, false),
        (vec![], "x", true, false),
        (vec![], "x", false, true),
    ];

    let mut ctx = test_context();
    for (set, target, sense, expected) in data {
        let set: Vec<String> = set.into_iter().map(|s| s.to_string()).collect();
        let function = InFunction::create_with_sense(
            "i",
            Box::new(ConstEval::create(target.to_string())),
            set,
            sense,
        );
        let mut valid = true;
        assert_eq!(function.eval(&mut ctx, &mut valid), expected);
        assert!(valid);
    }
}

#[test]
fn test_in_integers() {
    let data: Vec<(Vec<i32>, i32, bool, bool)> = vec![
        (vec![0, 1, 2], 1, true, true),
        (vec![66, 73, 54], 54, true, true),
        (vec![23, 45, 67, 89], 11, true, false),
        (vec![11, 22, 33], 22, false, false),
        (vec![11, 22, 33], 44, false, true),
        (vec![23, 34, 45, 56], 45, false, false),
    ];

    let mut ctx = test_context();
    for (set, target, sense, expected) in data {
        let function = InFunction::create_with_sense(
            "i",
            Box::new(ConstEval::create(target)),
            set,
            sense,
        );
        let mut valid = true;
        assert_eq!(function.eval(&mut ctx, &mut valid), expected);
        assert!(valid);
    }
}

#[test]
fn test_invalid_operand_propagates() {
    let mut ctx = test_context();

    let not = NotFunction::create("n", Box::new(InvalidEval::<bool>::create()));
    let mut valid = true;
    not.eval(&mut ctx, &mut valid);
    assert!(!valid);

    let like = LikeFunction::create("l", Box::new(InvalidEval::<String>::create()), "%");
    let mut valid = true;
    like.eval(&mut ctx, &mut valid);
    assert!(!valid);

    let prefix = PrefixFunction::create("p", Box::new(InvalidEval::<String>::create()), "a");
    let mut valid = true;
    prefix.eval(&mut ctx, &mut valid);
    assert!(!valid);

    let belongs = InFunction::create(
        "i",
        Box::new(InvalidEval::<i32>::create()),
        vec![1, 2, 3],
    );
    let mut valid = true;
    belongs.eval(&mut ctx, &mut valid);
    assert!(!valid);
}
