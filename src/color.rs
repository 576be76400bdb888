//! Pixel encodings a colormap can produce.

use rgb::{RGB, RGBA, RGB8, RGB16, RGBA8, RGBA16};

/// Specifies the methods a RGB color encoding must provide.
///
/// Colormaps compute in unit RGB (each channel nominally in \[0, 1\]);
/// this trait carries the result over to the caller's pixel type.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color in
    /// \[0, 1\].
    fn to_unit(&self) -> RGB<f64>;

    /// Create a color from its components in \[0, 1\].  Integer
    /// encodings clamp out of range components; floating-point ones
    /// keep them as is.
    fn from_unit(rgb: RGB<f64>) -> Self;
}

#[inline]
fn quantize(x: f64, max: f64) -> f64 { (x.clamp(0., 1.) * max).round() }

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_unit(&self) -> RGB<f64> { *self }

    #[inline]
    fn from_unit(c: RGB<f64>) -> Self { c }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_unit(&self) -> RGB<f64> { RGB { r: self.r, g: self.g, b: self.b } }

    #[inline]
    fn from_unit(c: RGB<f64>) -> Self { RGBA { r: c.r, g: c.g, b: c.b, a: 1. } }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_unit(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255. }
    }

    #[inline]
    fn from_unit(c: RGB<f64>) -> Self {
        RGB8 { r: quantize(c.r, 255.) as u8,  g: quantize(c.g, 255.) as u8,
               b: quantize(c.b, 255.) as u8 }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_unit(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
              b: self.b as f64 / 65535. }
    }

    #[inline]
    fn from_unit(c: RGB<f64>) -> Self {
        RGB16 { r: quantize(c.r, 65535.) as u16,
                g: quantize(c.g, 65535.) as u16,
                b: quantize(c.b, 65535.) as u16 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_unit(&self) -> RGB<f64> { RGB8::new(self.r, self.g, self.b).to_unit() }

    #[inline]
    fn from_unit(c: RGB<f64>) -> Self {
        let RGB8 { r, g, b } = RGB8::from_unit(c);
        RGBA8 { r, g, b, a: 255 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_unit(&self) -> RGB<f64> {
        RGB16::new(self.r, self.g, self.b).to_unit()
    }

    #[inline]
    fn from_unit(c: RGB<f64>) -> Self {
        let RGB16 { r, g, b } = RGB16::from_unit(c);
        RGBA16 { r, g, b, a: 65535 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_encodings_clamp_and_round() {
        let c = RGB { r: -0.2, g: 0.5, b: 1.7 };
        assert_eq!(RGB8::from_unit(c), RGB8::new(0, 128, 255));
        assert_eq!(RGB16::from_unit(c), RGB16::new(0, 32768, 65535));
        assert_eq!(RGBA8::from_unit(c), RGBA8::new(0, 128, 255, 255));
    }

    #[test]
    fn float_encodings_pass_through() {
        let c = RGB { r: -0.2, g: 0.5, b: 1.7 };
        assert_eq!(<RGB<f64>>::from_unit(c), c);
        assert_eq!(RGBA::<f64>::from_unit(c).to_unit(), c);
    }

    #[test]
    fn unit_of_extremes() {
        assert_eq!(RGB8::new(255, 0, 255).to_unit(),
                   RGB { r: 1., g: 0., b: 1. });
        assert_eq!(RGBA16::new(0, 65535, 0, 7).to_unit(),
                   RGB { r: 0., g: 1., b: 0. });
    }
}
