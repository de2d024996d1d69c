//! Integration tests for pointer coordinate normalization.

use pitchdeck::engine::signals::normalize_pointer;
use pitchdeck::engine::InputSignals;

const VIEWPORT: (u16, u16) = (121, 41);

#[test]
fn test_top_left_maps_to_minus_one_plus_one() {
    let p = normalize_pointer(0, 0, VIEWPORT);
    assert!((p.x - -1.0).abs() < 1e-6);
    assert!((p.y - 1.0).abs() < 1e-6);
}

#[test]
fn test_bottom_right_maps_to_plus_one_minus_one() {
    let p = normalize_pointer(120, 40, VIEWPORT);
    assert!((p.x - 1.0).abs() < 1e-6);
    assert!((p.y - -1.0).abs() < 1e-6);
}

#[test]
fn test_center_maps_to_origin() {
    let p = normalize_pointer(60, 20, VIEWPORT);
    assert!(p.x.abs() < 1e-6);
    assert!(p.y.abs() < 1e-6);
}

#[test]
fn test_vertical_axis_is_inverted() {
    let top = normalize_pointer(60, 0, VIEWPORT);
    let bottom = normalize_pointer(60, 40, VIEWPORT);
    assert!(top.y > bottom.y);
}

#[test]
fn test_signals_expose_latest_sample() {
    let mut signals = InputSignals::new();
    signals.record_pointer(0, 40, VIEWPORT);
    assert!((signals.pointer.x - -1.0).abs() < 1e-6);
    assert!((signals.pointer.y - -1.0).abs() < 1e-6);

    signals.record_pointer(120, 0, VIEWPORT);
    assert!((signals.pointer.x - 1.0).abs() < 1e-6);
    assert!((signals.pointer.y - 1.0).abs() < 1e-6);
}
