// File: crates/chart-core/tests/series.rs
// Purpose: Validate series construction, value ranges and label helpers.

use chrono::NaiveDate;
use touchchart_core::{ChartError, DataPoint, Series};

#[test]
fn rejects_non_finite_values() {
    let err = Series::try_from_pairs([("a", 1.0), ("b", f64::NAN)]).unwrap_err();
    assert!(matches!(err, ChartError::NonFiniteValue { ref label, .. } if label == "b"));
    assert!(DataPoint::try_new("c", f64::INFINITY, false).is_err());
}

#[test]
fn value_range_spans_negative_values() {
    let s = Series::try_from_pairs([("a", 3.0), ("b", -7.0), ("c", 12.0)]).unwrap();
    assert_eq!(s.value_range(), (-7.0, 12.0));
    assert_eq!(s.labels().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn empty_series_range_is_unit() {
    assert_eq!(Series::new().value_range(), (0.0, 1.0));
    assert_eq!(Series::new().max_value(), 1.0);
}

#[test]
fn dated_labels_use_chrono_format() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let p = DataPoint::dated(date, "%b", 4.0);
    assert_eq!(p.label, "Jan");
    assert!(!p.is_provisional);
    assert!(p.with_provisional(true).is_provisional);
}
