use image::{Rgba as Pixel, RgbaImage};
use tempfile::TempDir;
use vectorpad_core::{Point, Rgba, SceneError};
use vectorpad_scene::{FileImageLoader, ImageLoader, ImageShape, Shape, ShapeGeometry, ShapeId};

fn write_png(dir: &TempDir, name: &str) {
    let mut img = RgbaImage::new(8, 6);
    for x in 2..5 {
        for y in 1..3 {
            img.put_pixel(x, y, Pixel([0, 128, 255, 255]));
        }
    }
    img.save(dir.path().join(name)).unwrap();
}

#[tokio::test]
async fn test_load_png_from_root() {
    let dir = TempDir::new().unwrap();
    write_png(&dir, "sprite.png");

    let loader = FileImageLoader::with_root(dir.path());
    let loaded = loader.load("sprite.png").await.unwrap();
    assert_eq!((loaded.width, loaded.height), (8, 6));
    assert_eq!(loaded.image.get_pixel(3, 2).0, [0, 128, 255, 255]);

    let placed = ImageShape::from_loaded(loaded.clone());
    assert_eq!(
        placed.value(),
        vec![Point::new(0.0, 0.0), Point::new(8.0, 6.0)]
    );

    let cropped = ImageShape::auto_cropped(&loaded, Rgba::TRANSPARENT).unwrap();
    assert_eq!(cropped.image.dimensions(), (3, 2));
}

#[tokio::test]
async fn test_missing_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    let loader = FileImageLoader::with_root(dir.path());
    let err = loader.load("nope.png").await.unwrap_err();
    match err {
        SceneError::Load { location, .. } => assert_eq!(location, "nope.png"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_garbage_bytes_is_load_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.png"), b"not an image").unwrap();
    let err = FileImageLoader::with_root(dir.path())
        .load("bad.png")
        .await
        .unwrap_err();
    assert!(matches!(err, SceneError::Load { .. }));
}

#[tokio::test]
async fn test_loaded_image_as_hittable_shape() {
    let dir = TempDir::new().unwrap();
    write_png(&dir, "a.png");
    let path = dir.path().join("a.png");
    let loaded = FileImageLoader::new()
        .load(path.to_str().unwrap())
        .await
        .unwrap();
    let shape = Shape::image(
        ShapeId(1),
        loaded.image,
        vectorpad_core::RectPos::new(10.0, 10.0, 8.0, 6.0),
    );
    assert!(shape.in_region(Point::new(18.0, 16.0)));
    assert!(!shape.in_region(Point::new(9.0, 10.0)));
}
