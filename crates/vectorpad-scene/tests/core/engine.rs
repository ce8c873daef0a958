use vectorpad_core::{Point, PointerAction, PointerEvent, RectPos, SceneError};
use vectorpad_scene::{CircleShape, Engine, Geometry, PixmapSurface, Shape, ShapeId};

fn engine(size: u32) -> Engine {
    Engine::new(Box::new(PixmapSurface::new(size, size).unwrap()))
}

fn filled_circle(id: u64, center: Point, radius: f64) -> Shape {
    Shape::new(
        ShapeId(id),
        Geometry::Circle(CircleShape::new(center, radius).filled()),
    )
}

#[test]
fn test_circle_render_and_remove() {
    let mut e = engine(100);
    e.add(filled_circle(1, Point::new(50.0, 50.0), 50.0));
    e.render(true);
    let img = e.surface().snapshot();
    assert_eq!(img.get_pixel(50, 50).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(2, 2).0[3], 0);

    assert!(e.remove(ShapeId(1)).is_some());
    e.render(true);
    assert!(e.surface().snapshot().pixels().all(|p| p.0[3] == 0));
}

#[test]
fn test_render_without_clear_accumulates() {
    let mut e = engine(40);
    e.add(filled_circle(1, Point::new(10.0, 10.0), 5.0));
    e.render(true);
    e.remove(ShapeId(1));
    e.add(filled_circle(2, Point::new(30.0, 30.0), 5.0));
    e.render(false);
    let img = e.surface().snapshot();
    assert_eq!(img.get_pixel(10, 10).0[3], 255);
    assert_eq!(img.get_pixel(30, 30).0[3], 255);
}

#[test]
fn test_hit_test_mixed_shapes() {
    let mut e = engine(64);
    e.add(Shape::rect(ShapeId(1), RectPos::new(0.0, 0.0, 20.0, 20.0)));
    e.add(Shape::circle(ShapeId(2), Point::new(15.0, 15.0), 10.0));
    e.add(Shape::line(
        ShapeId(3),
        Point::new(0.0, 10.0),
        Point::new(40.0, 10.0),
    ));

    assert_eq!(
        e.hit_test(Point::new(10.0, 10.0)),
        vec![ShapeId(1), ShapeId(2), ShapeId(3)]
    );
    assert_eq!(e.hit_test(Point::new(35.0, 10.0)), vec![ShapeId(3)]);
    assert!(e.hit_test(Point::new(60.0, 60.0)).is_empty());
}

#[test]
fn test_get_shape_after_remove() {
    let mut e = engine(16);
    e.add(Shape::rect(ShapeId(7), RectPos::new(0.0, 0.0, 4.0, 4.0)));
    e.remove(ShapeId(7));
    assert!(matches!(
        e.get_shape(ShapeId(7)),
        Err(SceneError::NotFound { id: 7 })
    ));
}

#[test]
fn test_enter_then_leave_sequence() {
    let mut e = engine(64);
    e.add(Shape::rect(ShapeId(1), RectPos::new(0.0, 0.0, 10.0, 10.0)));
    e.add(Shape::rect(ShapeId(2), RectPos::new(20.0, 0.0, 10.0, 10.0)));

    let mv = |x: f64| PointerEvent::new(Point::new(x, 5.0), PointerAction::Move);
    assert_eq!(
        e.trigger(&mv(5.0)).dispatched,
        vec![(ShapeId(1), PointerAction::Enter)]
    );
    assert_eq!(
        e.trigger(&mv(25.0)).dispatched,
        vec![
            (ShapeId(1), PointerAction::Leave),
            (ShapeId(2), PointerAction::Enter)
        ]
    );
}

#[test]
fn test_readd_resets_hover() {
    let mut e = engine(32);
    e.add(Shape::rect(ShapeId(1), RectPos::new(0.0, 0.0, 10.0, 10.0)));
    let mv = PointerEvent::new(Point::new(5.0, 5.0), PointerAction::Move);
    e.trigger(&mv);
    let shape = e.remove(ShapeId(1)).unwrap();
    e.add(shape);
    assert_eq!(
        e.trigger(&mv).dispatched,
        vec![(ShapeId(1), PointerAction::Enter)]
    );
}
