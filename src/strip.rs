use crate::color::{Rgb, BLACK};

/// Something the effects can paint into, one pixel at a time.
pub trait PixelStrip {
    fn pixel_count(&self) -> usize;

    /// Writes past the end of the strip are dropped.
    fn set_pixel_color(&mut self, index: usize, color: Rgb);
}

/// In-memory frame for a strip of `pixel_count` LEDs.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(pixel_count: usize) -> Self {
        PixelBuffer {
            pixels: vec![BLACK; pixel_count],
        }
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn clear(&mut self) {
        self.pixels.fill(BLACK);
    }
}

impl PixelStrip for PixelBuffer {
    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        match self.pixels.get_mut(index) {
            Some(pixel) => *pixel = color,
            None => log::trace!(
                "Dropping write to pixel {} of {}",
                index,
                self.pixels.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RED;

    #[test]
    fn starts_dark() {
        let strip = PixelBuffer::new(5);
        assert_eq!(strip.pixel_count(), 5);
        assert!(strip.pixels().iter().all(|p| *p == BLACK));
    }

    #[test]
    fn out_of_range_write_is_ignored() {
        let mut strip = PixelBuffer::new(2);
        strip.set_pixel_color(1, RED);
        strip.set_pixel_color(2, RED);
        strip.set_pixel_color(usize::MAX, RED);

        assert_eq!(strip.pixels(), &[BLACK, RED]);
    }

    #[test]
    fn clear_blacks_out() {
        let mut strip = PixelBuffer::new(3);
        strip.set_pixel_color(0, RED);
        strip.set_pixel_color(2, RED);
        strip.clear();

        assert_eq!(strip.pixels(), &[BLACK; 3]);
    }
}
