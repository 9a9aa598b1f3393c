use approx::assert_relative_eq;

use nailstudio_core::consts::{AFTER_LABEL, BEFORE_LABEL};
use nailstudio_core::slider::{fit_contain, ComparisonLayout, Rect, SplitPosition};

const VIEWPORT: Rect = Rect {
    x: 10.0,
    y: 20.0,
    width: 800.0,
    height: 400.0,
};

#[test]
fn test_fit_contain_letterboxes_tall_image() {
    let fitted = fit_contain(VIEWPORT, [300.0, 600.0]);
    assert_relative_eq!(fitted.height, 400.0);
    assert_relative_eq!(fitted.width, 200.0);
    assert_relative_eq!(fitted.x, 10.0 + 300.0);
    assert_relative_eq!(fitted.y, 20.0);
}

#[test]
fn test_fit_contain_pillarboxes_wide_image() {
    let fitted = fit_contain(VIEWPORT, [1600.0, 400.0]);
    assert_relative_eq!(fitted.width, 800.0);
    assert_relative_eq!(fitted.height, 200.0);
    assert_relative_eq!(fitted.y, 20.0 + 100.0);
}

#[test]
fn test_fit_contain_empty_image_collapses_to_center() {
    let fitted = fit_contain(VIEWPORT, [0.0, 100.0]);
    assert_relative_eq!(fitted.width, 0.0);
    assert_relative_eq!(fitted.x, 410.0);
    assert_relative_eq!(fitted.y, 220.0);
}

#[test]
fn test_before_image_does_not_depend_on_split() {
    let size = [1200.0, 900.0];
    let reference = ComparisonLayout::compute(VIEWPORT, size, size, SplitPosition::new(50.0));
    for p in [0.0, 12.5, 33.0, 99.0, 100.0] {
        let layout = ComparisonLayout::compute(VIEWPORT, size, size, SplitPosition::new(p));
        assert_eq!(layout.before_image, reference.before_image);
        assert_eq!(layout.after_image, reference.after_image);
    }
    assert_eq!(reference.before_image, reference.after_image);
}

#[test]
fn test_clip_and_handle_follow_split() {
    let size = [1200.0, 900.0];
    let layout = ComparisonLayout::compute(VIEWPORT, size, size, SplitPosition::new(25.0));
    assert_relative_eq!(layout.before_clip.x, 10.0);
    assert_relative_eq!(layout.before_clip.width, 200.0);
    assert_relative_eq!(layout.before_clip.height, 400.0);
    assert_relative_eq!(layout.handle_x, 210.0);

    let closed = ComparisonLayout::compute(VIEWPORT, size, size, SplitPosition::new(0.0));
    assert_relative_eq!(closed.before_clip.width, 0.0);
    assert_relative_eq!(closed.handle_x, 10.0);

    let open = ComparisonLayout::compute(VIEWPORT, size, size, SplitPosition::new(100.0));
    assert_relative_eq!(open.before_clip.width, 800.0);
    assert_relative_eq!(open.handle_x, 810.0);
}

#[test]
fn test_labels_sit_in_bottom_corners() {
    let size = [100.0, 100.0];
    let layout = ComparisonLayout::compute(VIEWPORT, size, size, SplitPosition::default());
    assert_eq!(layout.before_label.text, BEFORE_LABEL);
    assert_eq!(layout.after_label.text, AFTER_LABEL);
    assert!(!layout.before_label.right_aligned);
    assert!(layout.after_label.right_aligned);
    assert!(layout.before_label.x < layout.after_label.x);
    assert_relative_eq!(layout.before_label.y, VIEWPORT.bottom() - 16.0);
}

#[test]
fn test_rect_horizontal_extent() {
    let h = VIEWPORT.horizontal();
    assert_relative_eq!(h.left, 10.0);
    assert_relative_eq!(h.width, 800.0);
    assert!(VIEWPORT.contains(10.0, 420.0));
    assert!(!VIEWPORT.contains(9.0, 100.0));
}
