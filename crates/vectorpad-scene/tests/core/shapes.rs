use vectorpad_core::{Point, RectPos};
use vectorpad_scene::{Shape, ShapeId};

#[test]
fn test_circle_value_round_trip_rederives_radius() {
    let mut c = Shape::circle(ShapeId(1), Point::new(10.0, 10.0), 5.0);
    assert_eq!(c.value(), vec![Point::new(10.0, 10.0), Point::new(15.0, 10.0)]);
    c.set_value(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)])
        .unwrap();
    assert!(c.in_region(Point::new(4.9, 0.0)));
    assert!(!c.in_region(Point::new(5.1, 0.0)));
}

#[test]
fn test_rect_value_is_diagonal() {
    let mut r = Shape::rect(ShapeId(1), RectPos::new(2.0, 3.0, 4.0, 5.0));
    assert_eq!(r.value(), vec![Point::new(2.0, 3.0), Point::new(6.0, 8.0)]);
    // corners given in reverse still describe the same box
    r.set_value(&[Point::new(6.0, 8.0), Point::new(2.0, 3.0)])
        .unwrap();
    assert_eq!(r.value(), vec![Point::new(2.0, 3.0), Point::new(6.0, 8.0)]);
}

#[test]
fn test_line_hit_is_exact() {
    let l = Shape::line(ShapeId(1), Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    assert!(l.in_region(Point::new(5.0, 5.0)));
    assert!(l.in_region(Point::new(0.0, 0.0)));
    assert!(!l.in_region(Point::new(5.0, 5.5)));
    assert!(!l.in_region(Point::new(11.0, 11.0)));
}

#[test]
fn test_path_hits_any_segment() {
    let p = Shape::path(
        ShapeId(1),
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ],
    );
    assert!(p.in_region(Point::new(5.0, 0.0)));
    assert!(p.in_region(Point::new(10.0, 5.0)));
    assert!(!p.in_region(Point::new(5.0, 5.0)));
}

#[test]
fn test_polygon_containment_and_translate() {
    let mut poly = Shape::polygon(
        ShapeId(1),
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ],
    );
    assert!(poly.in_region(Point::new(3.0, 6.0)));
    poly.translate(20.0, 0.0);
    assert!(!poly.in_region(Point::new(3.0, 6.0)));
    assert!(poly.in_region(Point::new(23.0, 6.0)));
}

#[test]
fn test_image_value_and_hit() {
    let img = image::RgbaImage::new(4, 2);
    let s = Shape::image(ShapeId(1), img, RectPos::new(1.0, 1.0, 8.0, 4.0));
    assert_eq!(s.value(), vec![Point::new(1.0, 1.0), Point::new(9.0, 5.0)]);
    assert!(s.in_region(Point::new(9.0, 5.0)));
    assert!(!s.in_region(Point::new(9.5, 5.0)));
}
