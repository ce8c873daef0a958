use vectorpad_core::RasterError;
use vectorpad_scene::{rotate_right_index, CompressedChannel};

fn rotated(width: usize, height: usize) -> Vec<usize> {
    (0..width * height)
        .map(|i| rotate_right_index(width, height, i))
        .collect()
}

#[test]
fn test_rotate_right_index_tables() {
    assert_eq!(rotated(3, 3), vec![6, 3, 0, 7, 4, 1, 8, 5, 2]);
    assert_eq!(rotated(2, 2), vec![2, 0, 3, 1]);
    assert_eq!(rotated(1, 1), vec![0]);
    assert_eq!(rotated(3, 1), vec![0, 1, 2]);
    assert_eq!(rotated(1, 3), vec![2, 1, 0]);
}

#[test]
fn test_channel_bounds() {
    assert_eq!(
        CompressedChannel::new(0, 0, 0).unwrap_err(),
        RasterError::InvalidDimensions {
            width: 0,
            height: 0
        }
    );
    let mut c = CompressedChannel::new(3, 3, 0).unwrap();
    assert!(matches!(
        c.set(3, 3, 1),
        Err(RasterError::IndexOutOfRange { index: 12, len: 9 })
    ));
    assert!(c.get(3, 3).is_err());
    // x past the right edge must not wrap onto the next row
    assert!(c.get(3, 0).is_err());
}

#[test]
fn test_channel_set_get_overwrite() {
    let mut c = CompressedChannel::new(3, 3, 9).unwrap();
    assert_eq!(c.get(0, 0).unwrap(), 9);
    c.set(0, 0, 1).unwrap();
    assert_eq!(c.pixels(), &[(0, 1)]);
    c.set(0, 0, 2).unwrap();
    c.set(0, 0, 3).unwrap();
    assert_eq!(c.get(0, 0).unwrap(), 3);
    assert_eq!(c.pixels().len(), 1);
}
