use image::{GrayImage, Luma};

/// A 2D raster stored row-major. Unlike a world map it does not wrap:
/// coordinates must lie inside the raster.
#[derive(Clone, Debug, PartialEq)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({}, {}) outside {}x{}", x, y, self.width, self.height);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Raw row-major cells.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get 8-connected neighbors. Edges are clamped, nothing wraps.
    pub fn neighbors_8(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(8);

        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx >= 0 && nx < self.width as i32 && ny >= 0 && ny < self.height as i32 {
                    result.push((nx as usize, ny as usize));
                }
            }
        }

        result
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| (idx % width, idx / width, val))
    }

    /// Iterate mutably over all cells with their coordinates.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        let width = self.width;
        self.data.iter_mut().enumerate().map(move |(idx, val)| (idx % width, idx / width, val))
    }

    /// Values of one column, top to bottom.
    pub fn column(&self, x: usize) -> impl Iterator<Item = &T> + '_ {
        (0..self.height).map(move |y| self.get(x, y))
    }
}

/// Intensity rasters
impl Tilemap<u8> {
    /// Minimum and maximum intensity. `None` for an empty raster.
    pub fn value_range(&self) -> Option<(u8, u8)> {
        let min = *self.data.iter().min()?;
        let max = *self.data.iter().max()?;
        Some((min, max))
    }

    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().map(|&v| v as f64).sum::<f64>() / self.data.len() as f64
    }

    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            Luma([*self.get(x as usize, y as usize)])
        })
    }

    pub fn from_gray_image(img: &GrayImage) -> Self {
        Self {
            width: img.width() as usize,
            height: img.height() as usize,
            data: img.as_raw().clone(),
        }
    }
}
