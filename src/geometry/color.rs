/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Creates a color, clamping every channel to `0..=255`.
    #[must_use]
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Returns the red channel.
    #[must_use]
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Returns the green channel.
    #[must_use]
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Returns the blue channel.
    #[must_use]
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Channel-wise integer mean of two colors.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn average(a: Self, b: Self) -> Self {
        let mean = |x: u8, y: u8| ((u16::from(x) + u16::from(y)) / 2) as u8;
        Self {
            r: mean(a.r, b.r),
            g: mean(a.g, b.g),
            b: mean(a.b, b.b),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
