//! Scripted editing session used by the headless binary.
//!
//! Drives an [`Editor`] through the same raw pointer events a host window
//! would deliver, so a rendered PNG shows drawing, selection and vertex
//! dragging working end to end.

use tracing::{debug, info};
use vectorpad_core::{EditorCommand, Point, Rgba, SceneResult};
use vectorpad_scene::{
    Editor, Geometry, ImageShape, LoadedImage, PointerRouter, RawPointerEvent, Shape, ShapeId,
};

/// Where the demo places things, as fractions of the viewport.
fn at(editor: &Editor, fx: f64, fy: f64) -> Point {
    let viewport = editor.viewport();
    Point::new(
        fx * f64::from(viewport.width()),
        fy * f64::from(viewport.height()),
    )
}

fn send(editor: &mut Editor, router: &PointerRouter, kind: &str, p: Point) -> SceneResult<()> {
    router.route(editor, &RawPointerEvent::new(kind, p.x, p.y))
}

fn drag(editor: &mut Editor, router: &PointerRouter, from: Point, to: Point) -> SceneResult<()> {
    send(editor, router, "mousedown", from)?;
    let steps = 4;
    for i in 1..=steps {
        let t = f64::from(i) / f64::from(steps);
        let p = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
        send(editor, router, "mousemove", p)?;
    }
    send(editor, router, "mouseup", to)
}

/// Places a decoded image in the lower-left corner of the scene, optionally
/// trimmed to its non-transparent content. Like drawn shapes, it can be
/// picked up in Select mode.
pub fn place_image(editor: &mut Editor, loaded: LoadedImage, crop: bool) -> ShapeId {
    let mut placed = if crop {
        ImageShape::auto_cropped(&loaded, Rgba::TRANSPARENT)
            .unwrap_or_else(|| ImageShape::from_loaded(loaded))
    } else {
        ImageShape::from_loaded(loaded)
    };
    let origin = at(editor, 0.05, 0.65);
    placed.rect.x = origin.x;
    placed.rect.y = origin.y;
    info!("Placing {}x{} image", placed.rect.w, placed.rect.h);
    let id = editor.next_id();
    editor.add_shape(Shape::new(id, Geometry::Image(placed)).selectable())
}

/// Draws a line, a rectangle and a triangle, then selects the line, drags
/// its end point and commits the edit.
pub fn sketch(editor: &mut Editor) -> SceneResult<()> {
    let router = PointerRouter::default();

    editor.command(EditorCommand::DrawLine)?;
    let (a, b) = (at(editor, 0.1, 0.1), at(editor, 0.5, 0.1));
    send(editor, &router, "mousedown", a)?;
    send(editor, &router, "mousemove", b)?;
    send(editor, &router, "mousedown", b)?;

    editor.command(EditorCommand::DrawRect)?;
    let (a, b) = (at(editor, 0.1, 0.3), at(editor, 0.4, 0.6));
    send(editor, &router, "mousedown", a)?;
    send(editor, &router, "mousedown", b)?;

    editor.command(EditorCommand::DrawPolygon)?;
    for (fx, fy) in [(0.6, 0.3), (0.9, 0.3), (0.75, 0.6)] {
        let p = at(editor, fx, fy);
        send(editor, &router, "mousedown", p)?;
    }
    let finish = editor.options().keys.session.finish_polygon;
    editor.key(finish)?;
    debug!("Drew {} shapes", editor.viewport().engine().len());

    editor.command(EditorCommand::Select)?;
    let middle = at(editor, 0.3, 0.1);
    send(editor, &router, "mousedown", middle)?;
    send(editor, &router, "mouseup", middle)?;

    let (from, to) = (at(editor, 0.5, 0.1), at(editor, 0.55, 0.2));
    drag(editor, &router, from, to)?;

    let toggle = editor.options().keys.session.toggle_transform;
    editor.key(toggle)?;
    editor.key(toggle)?;

    let empty = at(editor, 0.95, 0.05);
    send(editor, &router, "mousedown", empty)?;
    editor.render();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use image::RgbaImage;
    use vectorpad_core::PointerAction;
    use vectorpad_scene::{EditorOptions, PixmapProvider, PointerInput};

    use super::*;

    fn editor() -> Editor {
        let options = EditorOptions {
            width: 200,
            height: 100,
            ..EditorOptions::default()
        };
        Editor::new(options, Rc::new(PixmapProvider)).unwrap()
    }

    #[test]
    fn test_sketch_leaves_three_committed_shapes() {
        let mut e = editor();
        sketch(&mut e).unwrap();
        assert_eq!(e.viewport().engine().len(), 3);
        assert_eq!(e.selected(), None);
        assert!(e.viewport().overlays().is_empty());
    }

    #[test]
    fn test_sketch_moves_line_end() {
        let mut e = editor();
        sketch(&mut e).unwrap();
        let line = e
            .viewport()
            .engine()
            .shapes()
            .iter()
            .find_map(|s| match s.geometry() {
                Geometry::Line(line) => Some(line.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(line.start, Point::new(20.0, 10.0));
        assert!((line.end.x - 110.0).abs() < 1e-9);
        assert!((line.end.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_place_image_crops_transparent_border() {
        let mut e = editor();
        let mut img = RgbaImage::new(10, 10);
        img.put_pixel(4, 5, image::Rgba([0, 0, 255, 255]));
        let id = place_image(&mut e, LoadedImage::new(img), true);
        match e.viewport().engine().get_shape(id).unwrap().geometry() {
            Geometry::Image(placed) => {
                assert_eq!(placed.image.dimensions(), (1, 1));
                assert_eq!(placed.rect.x, 10.0);
                assert_eq!(placed.rect.y, 65.0);
            }
            other => panic!("unexpected geometry {}", other.kind()),
        }
    }

    #[test]
    fn test_placed_image_can_be_selected() {
        let mut e = editor();
        let img = RgbaImage::from_pixel(10, 10, image::Rgba([0, 128, 0, 255]));
        let id = place_image(&mut e, LoadedImage::new(img), false);

        e.command(EditorCommand::Select).unwrap();
        e.pointer(PointerInput::new(Point::new(15.0, 70.0), PointerAction::Down))
            .unwrap();
        assert_eq!(e.selected(), Some(id));
    }
}
