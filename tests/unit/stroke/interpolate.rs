use super::*;

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 64.0, 64.0)
}

#[test]
fn first_sample_has_no_interpolation() {
    let it = StrokeInterpolator::default();
    let p = Point::new(2.0, 2.0);
    assert_eq!(
        it.segment(BrushMode::Erase, 1.0, None, p, bounds()),
        StrokeSegment::Dot {
            center: p,
            radius: 1.0
        }
    );
    assert_eq!(
        it.segment(BrushMode::Restore, 1.0, None, p, bounds()),
        StrokeSegment::Stamps {
            centers: vec![p],
            half_size: 1.0
        }
    );
}

#[test]
fn erase_continues_as_round_line() {
    let it = StrokeInterpolator::default();
    let seg = it.segment(
        BrushMode::Erase,
        3.0,
        Some(Point::new(0.0, 0.0)),
        Point::new(5.0, 5.0),
        bounds(),
    );
    assert_eq!(
        seg,
        StrokeSegment::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(5.0, 5.0),
            radius: 3.0
        }
    );
}

#[test]
fn restore_steps_follow_quarter_diameter() {
    let it = StrokeInterpolator::default();
    assert_eq!(it.restore_steps(10.0, 4.0), 10);
    assert_eq!(it.restore_steps(10.5, 4.0), 11);
    assert_eq!(it.restore_steps(0.0, 4.0), 1);
    assert_eq!(it.restore_steps(10.0, 0.0), 1);
}

#[test]
fn restore_stamps_have_no_gap_wider_than_spacing() {
    let it = StrokeInterpolator::default();
    let stamps = it.restore_stamps(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        4.0,
        bounds(),
    );
    assert_eq!(stamps.first(), Some(&Point::new(0.0, 0.0)));
    assert_eq!(stamps.last(), Some(&Point::new(10.0, 0.0)));
    for pair in stamps.windows(2) {
        assert!(pair[0].distance(pair[1]) <= 1.0 + 1e-9);
    }
}

#[test]
fn custom_divisor_changes_density() {
    let it = StrokeInterpolator::new(2.0);
    assert_eq!(it.restore_steps(10.0, 4.0), 5);
    assert_eq!(StrokeInterpolator::new(-1.0), StrokeInterpolator::default());
}

#[test]
fn tiny_stamps_keep_a_minimum_spacing() {
    let it = StrokeInterpolator::default();
    assert_eq!(it.restore_steps(10.0, 1e-12), 160);
}

#[test]
fn far_jump_only_stamps_inside_the_buffer() {
    let it = StrokeInterpolator::default();
    let buffer = Rect::new(0.0, 0.0, 8.0, 8.0);
    let stamps = it.restore_stamps(Point::new(1.0, 1.0), Point::new(1e15, 1.0), 2.0, buffer);

    // Clipped to x in [1, 9]: 8 units at quarter-diameter spacing.
    assert!((17..=18).contains(&stamps.len()), "{} stamps", stamps.len());
    assert_eq!(stamps[0], Point::new(1.0, 1.0));
    assert!(stamps.iter().all(|p| p.x <= 9.0 + 1e-6 && p.y == 1.0));

    let outside =
        it.restore_stamps(Point::new(50.0, 50.0), Point::new(90.0, 50.0), 2.0, buffer);
    assert!(outside.is_empty());
}
