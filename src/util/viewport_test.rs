use super::*;

#[test]
fn reveal_watch_requires_partial_visibility_above_bottom_edge() {
    assert!((REVEAL_WATCH.threshold - 0.15).abs() < f64::EPSILON);
    assert_eq!(REVEAL_WATCH.root_margin, "0px 0px -50px 0px");
}

#[test]
fn spy_watch_uses_center_band() {
    assert_eq!(SPY_WATCH.threshold, 0.0);
    assert_eq!(SPY_WATCH.root_margin, "-40% 0px -40% 0px");
}
