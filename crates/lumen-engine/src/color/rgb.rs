/// An sRGB color with 8-bit channels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `[r, g, b]` order.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Converts to linear-light channel values in `[0, 1]` (sRGB EOTF).
    ///
    /// Surface clear colors are specified in linear space; an sRGB surface
    /// encodes them back on write, so this round-trips to the original bytes.
    pub fn to_linear(self) -> [f64; 3] {
        [linearize(self.r), linearize(self.g), linearize(self.b)]
    }
}

fn linearize(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_endpoints() {
        assert_eq!(Rgb::new(0, 0, 0).to_linear(), [0.0, 0.0, 0.0]);
        assert_eq!(Rgb::new(255, 255, 255).to_linear(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn linear_is_monotonic() {
        let mid = Rgb::new(127, 127, 127).to_linear();
        let brighter = Rgb::new(128, 128, 128).to_linear();
        assert!(mid[0] < brighter[0]);
        assert!(mid[0] > 0.0 && brighter[0] < 1.0);
    }
}
