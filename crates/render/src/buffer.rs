use foundation::Rgba;

/// Row-major RGBA pixel buffer. Row 0 is the southernmost row; PNG export
/// flips vertically.
///
/// `version` is a display-commit counter: the builder bumps it in batches
/// so a host can re-upload the texture only when something worth showing
/// changed.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    version: u64,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Allocate fully transparent.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            version: 0,
            pixels: vec![Rgba::CLEAR; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn row(&self, y: u32) -> &[Rgba] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Overwrite one row. Out-of-range rows and mismatched widths are
    /// ignored; the builder treats the buffer edge as a silent boundary.
    pub fn write_row(&mut self, y: u32, row: &[Rgba]) {
        if y >= self.height || row.len() != self.width as usize {
            return;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        self.pixels[start..start + w].copy_from_slice(row);
    }

    /// Fill one row with a single color. Out-of-range rows are ignored.
    pub fn fill_row(&mut self, y: u32, color: Rgba) {
        if y >= self.height {
            return;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        self.pixels[start..start + w].fill(color);
    }

    /// Mark the buffer as display-worthy.
    pub fn commit(&mut self) {
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use foundation::Rgba;

    use super::PixelBuffer;

    #[test]
    fn starts_fully_transparent() {
        let buf = PixelBuffer::new(4, 2);
        assert!(buf.pixels().iter().all(|p| *p == Rgba::CLEAR));
        assert_eq!(buf.version(), 0);
    }

    #[test]
    fn row_writes_land_in_place() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.write_row(1, &[Rgba::RED; 3]);
        assert_eq!(buf.pixel(0, 0), Some(Rgba::CLEAR));
        assert_eq!(buf.pixel(2, 1), Some(Rgba::RED));
        assert_eq!(buf.pixel(3, 1), None);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut buf = PixelBuffer::new(3, 2);
        let before = buf.clone();
        buf.write_row(2, &[Rgba::RED; 3]);
        buf.write_row(0, &[Rgba::RED; 4]);
        buf.fill_row(9, Rgba::RED);
        assert_eq!(buf, before);
    }

    #[test]
    fn commit_bumps_version() {
        let mut buf = PixelBuffer::new(1, 1);
        buf.commit();
        buf.commit();
        assert_eq!(buf.version(), 2);
    }
}
