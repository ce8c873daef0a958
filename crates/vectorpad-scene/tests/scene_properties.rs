use proptest::prelude::*;
use vectorpad_core::{Point, RectPos};
use vectorpad_scene::{Engine, IdGenerator, PixmapSurface, Shape, ShapeId};

fn engine() -> Engine {
    Engine::new(Box::new(PixmapSurface::new(8, 8).unwrap()))
}

proptest! {
    #[test]
    fn hit_test_matches_in_region_in_order(
        rects in prop::collection::vec((0i32..50, 0i32..50, 1i32..20, 1i32..20), 0..12),
        px in 0i32..70,
        py in 0i32..70,
    ) {
        let mut e = engine();
        for (i, (x, y, w, h)) in rects.iter().enumerate() {
            e.add(Shape::rect(
                ShapeId(i as u64 + 1),
                RectPos::new(*x as f64, *y as f64, *w as f64, *h as f64),
            ));
        }
        let p = Point::new(px as f64, py as f64);
        let expected: Vec<ShapeId> = e
            .shapes()
            .iter()
            .filter(|s| s.in_region(p))
            .map(|s| s.id())
            .collect();
        prop_assert_eq!(e.hit_test(p), expected);
    }

    #[test]
    fn translate_then_back_is_identity(
        x0 in -100i32..100, y0 in -100i32..100,
        x1 in -100i32..100, y1 in -100i32..100,
        dx in -50i32..50, dy in -50i32..50,
    ) {
        let start = Point::new(x0 as f64, y0 as f64);
        let end = Point::new(x1 as f64, y1 as f64);
        let mut s = Shape::line(ShapeId(1), start, end);
        s.translate(dx as f64, dy as f64);
        s.translate(-dx as f64, -dy as f64);
        prop_assert_eq!(s.value(), vec![start, end]);
    }

    #[test]
    fn id_generator_is_strictly_increasing(n in 1usize..64) {
        let mut ids = IdGenerator::new();
        let drawn: Vec<ShapeId> = (0..n).map(|_| ids.next_id()).collect();
        prop_assert!(drawn.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn removed_shapes_never_hit(count in 1u64..10, remove in 1u64..10) {
        let mut e = engine();
        for id in 1..=count {
            e.add(Shape::rect(ShapeId(id), RectPos::new(0.0, 0.0, 10.0, 10.0)));
        }
        e.remove(ShapeId(remove));
        prop_assert!(!e.hit_test(Point::new(5.0, 5.0)).contains(&ShapeId(remove)));
    }
}
