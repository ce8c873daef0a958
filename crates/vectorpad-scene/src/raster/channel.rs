use vectorpad_core::RasterError;

use super::{index_to_pos, pos_to_index};

/// Source index that ends up at `index` after a 90 degree clockwise turn
/// of a `width` x `height` buffer. The turned buffer is `height` wide, so
/// mapping every position in order yields its pixels row by row.
///
/// A buffer with no rows has no positions; `index` comes back unchanged.
pub fn rotate_right_index(width: usize, height: usize, index: usize) -> usize {
    if height == 0 {
        return index;
    }
    let n = index + 1;
    let row_from_bottom = match n % height {
        0 => height,
        r => r,
    };
    (index + height) / height + width * (height - row_from_bottom) - 1
}

/// Single colour channel stored as the pixels that differ from a
/// background value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedChannel {
    width: usize,
    height: usize,
    background: u8,
    pixels: Vec<(usize, u8)>,
}

impl CompressedChannel {
    pub fn new(width: usize, height: usize, background: u8) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            background,
            pixels: Vec::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> u8 {
        self.background
    }

    /// Stored `(index, value)` pairs in insertion order.
    pub fn pixels(&self) -> &[(usize, u8)] {
        &self.pixels
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, RasterError> {
        let index = pos_to_index(x, y, self.width);
        let len = self.width * self.height;
        if x >= self.width || index >= len {
            return Err(RasterError::IndexOutOfRange { index, len });
        }
        Ok(index)
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) -> Result<(), RasterError> {
        let index = self.checked_index(x, y)?;
        match self.pixels.iter_mut().find(|(i, _)| *i == index) {
            Some(entry) => entry.1 = value,
            None => self.pixels.push((index, value)),
        }
        Ok(())
    }

    /// Stored value, or the background for untouched pixels.
    pub fn get(&self, x: usize, y: usize) -> Result<u8, RasterError> {
        let index = self.checked_index(x, y)?;
        Ok(self
            .pixels
            .iter()
            .find(|(i, _)| *i == index)
            .map_or(self.background, |(_, v)| *v))
    }

    /// Turns the channel 90 degrees clockwise; width and height swap.
    pub fn rotate_right(&mut self) {
        let (w, h) = (self.width, self.height);
        for (index, _) in self.pixels.iter_mut() {
            let (x, y) = index_to_pos(*index, w);
            *index = pos_to_index(h - 1 - y, x, h);
        }
        self.width = h;
        self.height = w;
    }
}
