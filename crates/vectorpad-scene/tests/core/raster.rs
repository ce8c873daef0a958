use image::{Rgba as Pixel, RgbaImage};
use vectorpad_core::Rgba;
use vectorpad_scene::{
    binarize, bresenham_line, content_bounds, grayscale, index_to_pos, ContentBounds, ImageShape,
    LoadedImage,
};

fn cells(width: usize, indices: &[usize]) -> Vec<(usize, usize)> {
    indices.iter().map(|i| index_to_pos(*i, width)).collect()
}

#[test]
fn test_bresenham_sequences() {
    assert_eq!(
        cells(10, &bresenham_line(10, 10, (0, 0), (2, 5))),
        vec![(0, 0), (1, 0), (2, 1), (2, 5)]
    );
    assert_eq!(
        cells(10, &bresenham_line(10, 10, (0, 0), (1, 1))),
        vec![(0, 0), (1, 0), (1, 1)]
    );
    assert_eq!(
        cells(10, &bresenham_line(10, 10, (0, 0), (0, 1))),
        vec![(0, 0), (0, 1)]
    );
}

#[test]
fn test_bresenham_drops_cells_outside_buffer() {
    assert_eq!(bresenham_line(2, 2, (0, 0), (5, 5)), vec![0, 1]);
}

#[test]
fn test_grayscale_averages() {
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Pixel([30, 60, 90, 10]));
    img.put_pixel(1, 0, Pixel([255, 255, 255, 0]));
    let g = grayscale(&img);
    assert_eq!(g.get_pixel(0, 0).0, [60, 60, 60, 255]);
    assert_eq!(g.get_pixel(1, 0).0, [255, 255, 255, 255]);
}

#[test]
fn test_binarize_against_mean() {
    // channel sums 0, 15, 6, 15: mean grey is floor(36 / 3 / 4) = 3
    let mut img = RgbaImage::new(2, 2);
    img.put_pixel(0, 0, Pixel([0, 0, 0, 255]));
    img.put_pixel(1, 0, Pixel([5, 5, 5, 255]));
    img.put_pixel(0, 1, Pixel([2, 2, 2, 255]));
    img.put_pixel(1, 1, Pixel([5, 5, 5, 255]));
    let b = binarize(&img);
    assert_eq!(b.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(b.get_pixel(1, 0).0, [255, 255, 255, 255]);
    assert_eq!(b.get_pixel(0, 1).0, [255, 255, 255, 255]);
    assert_eq!(b.get_pixel(1, 1).0, [255, 255, 255, 255]);
}

#[test]
fn test_content_bounds_single_pixel() {
    let mut img = RgbaImage::new(3, 3);
    img.put_pixel(1, 1, Pixel([0, 0, 0, 1]));
    assert_eq!(
        content_bounds(&img, Rgba::TRANSPARENT),
        Some(ContentBounds {
            x: 1,
            y: 1,
            width: 0,
            height: 0
        })
    );
    assert_eq!(content_bounds(&RgbaImage::new(3, 3), Rgba::TRANSPARENT), None);
}

#[test]
fn test_content_bounds_custom_background() {
    let mut img = RgbaImage::from_pixel(5, 4, Pixel([255, 255, 255, 255]));
    img.put_pixel(1, 2, Pixel([0, 0, 0, 255]));
    img.put_pixel(3, 0, Pixel([0, 0, 0, 255]));
    assert_eq!(
        content_bounds(&img, Rgba::WHITE),
        Some(ContentBounds {
            x: 1,
            y: 0,
            width: 2,
            height: 2
        })
    );
}

#[test]
fn test_auto_cropped_image_shape() {
    let mut img = RgbaImage::new(6, 6);
    for x in 2..5 {
        img.put_pixel(x, 3, Pixel([200, 0, 0, 255]));
    }
    let loaded = LoadedImage::new(img);
    let shape = ImageShape::auto_cropped(&loaded, Rgba::TRANSPARENT).unwrap();
    assert_eq!(shape.image.dimensions(), (3, 1));
    assert_eq!((shape.rect.w, shape.rect.h), (3.0, 1.0));

    let blank = LoadedImage::new(RgbaImage::new(4, 4));
    assert!(ImageShape::auto_cropped(&blank, Rgba::TRANSPARENT).is_none());
}
