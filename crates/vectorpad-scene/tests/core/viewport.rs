use std::rc::Rc;

use vectorpad_core::{AffineTransform, Point, PointerAction, RectPos};
use vectorpad_scene::{Geometry, PixmapProvider, RectShape, Shape, ShapeId, Viewport};

fn viewport(transform: AffineTransform) -> Viewport {
    Viewport::new(64, 48, transform, Rc::new(PixmapProvider)).unwrap()
}

#[test]
fn test_overlays_follow_shared_transform() {
    let mut base = viewport(AffineTransform::identity());
    let mut overlay = base.clone_overlay().unwrap();
    overlay.engine_mut().add(Shape::rect(
        ShapeId(1),
        RectPos::new(50.0, 0.0, 10.0, 10.0),
    ));
    let overlay_id = overlay.id();
    base.append_viewport(overlay);

    assert!(base
        .overlay_mut(overlay_id)
        .unwrap()
        .trigger(Point::new(5.0, 5.0), PointerAction::Down)
        .dispatched
        .is_empty());

    base.update_transform(|m| m.translate(50.0, 0.0));
    let out = base
        .overlay_mut(overlay_id)
        .unwrap()
        .trigger(Point::new(5.0, 5.0), PointerAction::Down);
    assert_eq!(out.dispatched, vec![(ShapeId(1), PointerAction::Down)]);
}

#[test]
fn test_scaled_transform_maps_device_to_scene() {
    let vp = viewport(AffineTransform::identity().scale(2.0, 2.0));
    assert_eq!(vp.to_scene(Point::new(3.0, 4.0)), Point::new(6.0, 8.0));
    let event = vp.transform_event(PointerAction::Move, Point::new(1.0, 1.0));
    assert_eq!(event.point, Point::new(2.0, 2.0));
    assert_eq!(event.action, PointerAction::Move);
}

#[test]
fn test_composite_stacks_overlays() {
    let mut base = viewport(AffineTransform::identity());
    base.engine_mut().add(Shape::new(
        ShapeId(1),
        Geometry::Rect(RectShape::new(RectPos::new(0.0, 0.0, 10.0, 10.0)).filled()),
    ));
    let mut overlay = base.clone_overlay().unwrap();
    overlay.engine_mut().add(Shape::new(
        ShapeId(2),
        Geometry::Rect(RectShape::new(RectPos::new(30.0, 30.0, 10.0, 10.0)).filled()),
    ));
    base.append_viewport(overlay);
    base.render(true);

    let img = base.composite();
    assert_eq!(img.get_pixel(5, 5).0[3], 255);
    assert_eq!(img.get_pixel(35, 35).0[3], 255);
    assert_eq!(img.get_pixel(20, 20).0[3], 0);

    base.remove_all_viewports();
    base.render(true);
    assert_eq!(base.composite().get_pixel(35, 35).0[3], 0);
}

#[test]
fn test_zero_sized_viewport_fails() {
    let err = Viewport::new(
        0,
        10,
        AffineTransform::identity(),
        Rc::new(PixmapProvider),
    )
    .unwrap_err();
    assert_eq!(
        err,
        vectorpad_core::SceneError::InvalidDimensions {
            width: 0,
            height: 10
        }
    );
}
