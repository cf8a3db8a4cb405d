// Copyright 2020-2021 The Quasar Authors.
//
// SPDX-License-Identifier: Apache-2.0.

use crate::DataKind;
use crate::DataValue;
use crate::MockRowData;
use crate::NativeKind;
use crate::RowData;

#[test]
fn test_data_value_kind_and_null() {
    use pretty_assertions::assert_eq;

    assert_eq!(DataValue::Int32(Some(3)).kind(), DataKind::Int32);
    assert_eq!(DataValue::Utf8(None).kind(), DataKind::Utf8);

    assert!(DataValue::Utf8(None).is_null());
    assert!(DataValue::Float64(None).is_null());
    assert!(!DataValue::Boolean(Some(false)).is_null());
}

#[test]
fn test_data_value_display() {
    use pretty_assertions::assert_eq;

    assert_eq!(format!("{}", DataValue::Int64(Some(42))), "42");
    assert_eq!(format!("{}", DataValue::Utf8(Some("hi".to_string()))), "hi");
    assert_eq!(format!("{}", DataValue::Int64(None)), "NULL");
}

#[test]
fn test_native_kind_round_trip() {
    use pretty_assertions::assert_eq;

    assert_eq!(bool::KIND, DataKind::Boolean);
    assert_eq!(i32::KIND, DataKind::Int32);
    assert_eq!(String::KIND, DataKind::Utf8);

    let value = 7i32.into_value();
    assert_eq!(value, DataValue::Int32(Some(7)));
    assert_eq!(i32::from_value(&value), Some(7));

    // kind mismatch yields nothing
    assert_eq!(i64::from_value(&value), None);
    assert_eq!(String::from_value(&DataValue::Utf8(None)), None);
}

#[test]
fn test_mock_row_data() {
    use pretty_assertions::assert_eq;

    let row = MockRowData::create(vec![
        ("id", DataValue::Int32(Some(11))),
        ("name", DataValue::Utf8(Some("quasar".to_string()))),
        ("flag", DataValue::Boolean(Some(true))),
        ("missing_value", DataValue::Int64(None)),
    ]);

    assert!(!row.is_null("id"));
    assert!(row.is_null("missing_value"));
    assert!(row.is_null("absent_column"));

    assert_eq!(row.read_i32("id"), 11);
    assert_eq!(row.read_utf8("name"), "quasar");
    assert!(row.read_bool("flag"));
}
