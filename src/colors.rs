//! Color values and ARGB8888 packing.
//!
//! The framebuffer stores pixels packed as `0xAARRGGBB` (the same layout the
//! display code of software renderers usually streams to a texture), while
//! the rasterizers pass around the unpacked [`Color`] value.

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack into `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack from `0xAARRGGBB`.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Channels in `[r, g, b, a]` order, as image encoders expect them.
    #[inline]
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_as_argb() {
        assert_eq!(Color::RED.to_argb(), 0xFFFF0000);
        assert_eq!(Color::rgba(0x12, 0x34, 0x56, 0x78).to_argb(), 0x78123456);
    }

    #[test]
    fn unpack_inverts_pack() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(Color::from_argb(c.to_argb()), c);
    }

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(9, 8, 7).a, 255);
        assert_eq!(Color::from([9, 8, 7, 255]), Color::rgb(9, 8, 7));
        assert_eq!(Color::WHITE.to_rgba_bytes(), [255, 255, 255, 255]);
    }
}
