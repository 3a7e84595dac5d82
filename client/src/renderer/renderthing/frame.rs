pub const PIXEL_BITS: usize = 4;

/// RGBA pixel buffer of a single frame, `width * height * PIXEL_BITS` bytes.
pub struct RenderFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl<'a> RenderFrame<'a> {
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8; PIXEL_BITS]> {
        self.buffer
            .chunks_exact_mut(PIXEL_BITS)
            .map(|chunk| chunk.try_into().unwrap())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8; PIXEL_BITS]> {
        let index = self.pixel_index(x, y)?;
        <&[u8; PIXEL_BITS]>::try_from(&self.buffer[index..index + PIXEL_BITS]).ok()
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8; PIXEL_BITS]> {
        let index = self.pixel_index(x, y)?;
        <&mut [u8; PIXEL_BITS]>::try_from(&mut self.buffer[index..index + PIXEL_BITS]).ok()
    }

    /// Pixels outside of the frame are ignored.
    pub fn draw_pixel(&mut self, x: u32, y: u32, color: [u8; PIXEL_BITS]) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            *pixel = color;
        }
    }

    pub fn draw_square(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        color: [u8; PIXEL_BITS],
    ) {
        for y in y..y.saturating_add(height).min(self.height) {
            for x in x..x.saturating_add(width).min(self.width) {
                self.draw_pixel(x, y, color);
            }
        }
    }

    pub fn fill(&mut self, color: [u8; PIXEL_BITS]) {
        for pixel in self.pixels_mut() {
            *pixel = color;
        }
    }

    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (x as usize + y as usize * self.width as usize) * PIXEL_BITS;

        if index + PIXEL_BITS > self.buffer.len() {
            return None;
        }

        Some(index)
    }
}
