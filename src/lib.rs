//! Colormaps for scalar fields.
//!
//! A [`ColorMap`] turns a value normalized to \[0, 1\] into a color.
//! Four palettes are provided: [`ColorMap::Gray`], [`ColorMap::Jet`],
//! [`ColorMap::Summer`] and [`ColorMap::Winter`].
//!
//! Code drawing point clouds or meshes usually does not choose a
//! palette itself but asks for the current default with
//! [`global_color_map`]; [`set_global_color_map`] changes it for the
//! whole process.  An application wanting to keep that choice local can
//! own a [`ColorMapRegistry`] instead.
//!
//! ```
//! use scalar_colormap::{ColorMap, ColorRange};
//! use rgb::RGB8;
//! let c: RGB8 = ColorMap::Jet.rgb(0.5);
//! assert_eq!(c, RGB8::new(128, 255, 128));
//! ```

use std::marker::PhantomData;

mod color;
mod colormap;
mod math;
mod registry;

pub use color::RGBColor;
pub use colormap::{ColorMap, ParseColorMapError};
pub use registry::{ColorMapRegistry, global_registry, global_color_map,
                   set_global_color_map, set_global_color_map_code};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding `n` points uniformly spaced between
    /// `a` and `b` (both included) together with their colors, the
    /// first point getting the color at `t = 0.` and the last the one
    /// at `t = 1.`.  It is not required that `a <= b`.
    ///
    /// ```
    /// use scalar_colormap::{ColorMap, ColorRange};
    /// use rgb::RGB8;
    /// let legend: Vec<(f64, RGB8)> = ColorMap::Gray.range(0., 10., 3)
    ///     .collect();
    /// assert_eq!(legend[1], (5., RGB8::new(128, 128, 128)));
    /// ```
    fn range(self, a: f64, b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        Range::new(self, finite_or_nan(a), finite_or_nan(b), n)
    }
}

/// Replace infinities by the largest finite floats of the same sign.
fn finite_or_nan(x: f64) -> f64 {
    if x == f64::INFINITY { f64::MAX }
    else if x == f64::NEG_INFINITY { f64::MIN }
    else { x }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    last: usize, // index of `b`
    i: usize, // first position to be consumed
    j: usize, // last position to be consumed; empty when i > j
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    fn new(range: R, a: f64, b: f64, n: usize) -> Self {
        let (i, j) = if n == 0 { (1, 0) } else { (0, n - 1) };
        Range { range, color: PhantomData, a, b,
                last: n.saturating_sub(1), i, j }
    }

    /// Value and color at position `k` ∈ `0 ..= self.last`.
    fn sample(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            return (self.a, self.range.rgb(0.))
        }
        if k == self.last {
            return (self.b, self.range.rgb(1.))
        }
        let flast = self.last as f64;
        let t = k as f64 / flast;
        // May overflow when `a` and `b` are huge.
        let mut x = ((self.last - k) as f64 * self.a + k as f64 * self.b)
            / flast;
        if x.is_infinite() {
            x = (1. - t) * self.a + t * self.b;
        }
        (x, self.range.rgb(t))
    }

    fn remaining(&self) -> usize { (self.j + 1).saturating_sub(self.i) }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i > self.j { return None }
        let item = self.sample(self.i);
        self.i += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i > self.j { return None }
        let item = self.sample(self.j);
        if self.j == 0 { self.i = 1 } else { self.j -= 1 }
        Some(item)
    }
}
