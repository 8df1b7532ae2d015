// File: crates/chart-core/tests/scale.rs
// Purpose: Validate value-to-pixel mapping, including the flat-range fallback.

use touchchart_core::{DataPoint, ScaleModel, Series, ValueScale};

fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

#[test]
fn maps_range_onto_track() {
    let vs = ValueScale::new(160.0, 0.0, 40.0);
    assert!(approx(vs.to_px(40.0), 0.0));
    assert!(approx(vs.to_px(0.0), 160.0));
    assert!(approx(vs.to_px(10.0), 120.0));
    assert!(approx(vs.from_px(120.0), 10.0));
}

#[test]
fn values_outside_range_are_not_clamped() {
    let vs = ValueScale::new(160.0, 10.0, 40.0);
    assert!(vs.to_px(0.0) > 160.0);
}

#[test]
fn flat_range_maps_to_middle() {
    let vs = ValueScale::new(160.0, 5.0, 5.0);
    assert!(vs.is_flat());
    assert!(approx(vs.to_px(5.0), 80.0));
    assert!(approx(vs.from_px(12.0), 5.0));
}

#[test]
fn scale_model_from_series_range() {
    let series: Series = vec![DataPoint::new("a", -3.0), DataPoint::new("b", 7.5)].into_iter().collect();
    let scale = ScaleModel::from_series(&series);
    assert_eq!(scale.min_value, -3.0);
    assert_eq!(scale.max_value, 7.5);
    let vs = scale.value_scale(100.0);
    assert!(approx(vs.to_px(-3.0), 100.0));
    assert!(approx(vs.to_px(7.5), 0.0));
}
