use super::*;

const EPS: f64 = 1e-9;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < EPS, "{a} != {b}");
}

#[test]
fn wide_buffer_fills_width_and_pads_vertically() {
    let d = DisplayRect::fit(
        Rect::new(0.0, 0.0, 400.0, 400.0),
        Dimensions::new(200, 100),
    )
    .unwrap();
    assert_close(d.render_width, 400.0);
    assert_close(d.render_height, 200.0);
    assert_close(d.offset_x, 0.0);
    assert_close(d.offset_y, 100.0);
    assert_close(d.scale, 2.0);
}

#[test]
fn tall_buffer_fills_height_and_pads_horizontally() {
    let d = DisplayRect::fit(
        Rect::new(10.0, 20.0, 410.0, 220.0),
        Dimensions::new(100, 200),
    )
    .unwrap();
    assert_close(d.render_width, 100.0);
    assert_close(d.render_height, 200.0);
    assert_close(d.offset_x, 150.0);
    assert_close(d.offset_y, 0.0);
    assert_eq!(d.origin, Point::new(10.0, 20.0));
    assert_eq!(d.render_rect(), Rect::new(160.0, 20.0, 260.0, 220.0));
}

#[test]
fn roundtrip_holds_for_all_letterbox_orientations() {
    let cases = [
        // wide buffer, narrow container
        (Rect::new(0.0, 0.0, 300.0, 600.0), Dimensions::new(640, 360)),
        // wide buffer, wider container
        (Rect::new(5.0, 7.0, 1205.0, 307.0), Dimensions::new(640, 360)),
        // tall buffer, wide container
        (Rect::new(-3.0, 4.0, 797.0, 404.0), Dimensions::new(300, 500)),
        // tall buffer, taller container
        (Rect::new(0.0, 0.0, 100.0, 900.0), Dimensions::new(300, 500)),
    ];

    for (container, dims) in cases {
        let mapper = CoordinateMapper::new(container, dims).unwrap();
        for &(x, y) in &[(0u32, 0u32), (dims.width - 1, dims.height - 1), (17, 42)] {
            let target = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let screen = mapper.to_display(target);
            let back = mapper.to_buffer(screen);
            assert!((back.x - target.x).abs() < 1e-6, "{container:?} {dims} x");
            assert!((back.y - target.y).abs() < 1e-6, "{container:?} {dims} y");
            assert_eq!(back.x.floor() as u32, x);
            assert_eq!(back.y.floor() as u32, y);
        }
    }
}

#[test]
fn render_rect_corners_map_to_buffer_corners() {
    let dims = Dimensions::new(640, 360);
    let mapper = CoordinateMapper::new(Rect::new(0.0, 0.0, 300.0, 600.0), dims).unwrap();
    let r = mapper.display_rect().render_rect();
    let tl = mapper.to_buffer(Point::new(r.x0, r.y0));
    let br = mapper.to_buffer(Point::new(r.x1, r.y1));
    assert!(tl.x.abs() < 1e-9 && tl.y.abs() < 1e-9);
    assert!((br.x - 640.0).abs() < 1e-9 && (br.y - 360.0).abs() < 1e-9);
}

#[test]
fn radius_scales_by_buffer_over_render_width() {
    let mapper = CoordinateMapper::new(
        Rect::new(0.0, 0.0, 400.0, 400.0),
        Dimensions::new(800, 400),
    )
    .unwrap();
    assert_close(mapper.visual_scale(), 2.0);
    assert_close(mapper.radius_to_buffer(10.0), 20.0);
}

#[test]
fn degenerate_container_is_rejected() {
    let dims = Dimensions::new(10, 10);
    assert!(DisplayRect::fit(Rect::new(0.0, 0.0, 0.0, 100.0), dims).is_err());
    assert!(DisplayRect::fit(Rect::new(0.0, 0.0, 100.0, f64::NAN), dims).is_err());
}
