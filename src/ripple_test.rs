use super::*;

#[test]
fn ripple_covers_the_longer_button_side() {
    let wide = RippleGeometry::for_click(0.0, 0.0, 0.0, 0.0, 120.0, 40.0);
    assert_eq!(wide.size, 120.0);
    let tall = RippleGeometry::for_click(0.0, 0.0, 0.0, 0.0, 40.0, 120.0);
    assert_eq!(tall.size, 120.0);
}

#[test]
fn ripple_centers_on_the_click_point() {
    // Click at (140, 215) inside a button at (100, 200), 80x30.
    let geometry = RippleGeometry::for_click(140.0, 215.0, 100.0, 200.0, 80.0, 30.0);
    assert_eq!(geometry.size, 80.0);
    assert_eq!(geometry.left, 0.0);
    assert_eq!(geometry.top, -25.0);
}

#[test]
fn inline_style_carries_all_four_lengths() {
    let geometry = RippleGeometry::for_click(10.0, 10.0, 0.0, 0.0, 50.0, 50.0);
    let style = geometry.inline_style();
    assert!(style.contains("width: 50px"));
    assert!(style.contains("height: 50px"));
    assert!(style.contains("left: -15px"));
    assert!(style.contains("top: -15px"));
}
