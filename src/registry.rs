//! The currently selected palette.

use std::sync::atomic::{AtomicI32, Ordering};
use lazy_static::lazy_static;
use tracing::{debug, warn};
use crate::ColorMap;

/// Holds the palette used to color scalar fields when the caller does
/// not pick one explicitly.
///
/// Reads and writes are lock-free: the palette is stored as its option
/// code, so a reader always sees one of the four palettes in full.
#[derive(Debug)]
pub struct ColorMapRegistry {
    code: AtomicI32, // Invariant: a valid `ColorMap::code`
}

impl Default for ColorMapRegistry {
    fn default() -> Self { Self::new() }
}

impl ColorMapRegistry {
    /// A registry holding [`ColorMap::DEFAULT`].
    pub fn new() -> Self { Self::with_color_map(ColorMap::DEFAULT) }

    /// A registry initially holding `map`.
    pub fn with_color_map(map: ColorMap) -> Self {
        Self { code: AtomicI32::new(map.code()) }
    }

    /// Returns the active palette.
    pub fn get(&self) -> ColorMap {
        ColorMap::from_code(self.code.load(Ordering::Acquire))
    }

    /// Makes `map` the active palette.
    pub fn set(&self, map: ColorMap) {
        let prev = self.code.swap(map.code(), Ordering::AcqRel);
        if prev != map.code() {
            debug!(from = %ColorMap::from_code(prev), to = %map,
                   "Colormap changed");
        }
    }

    /// Selects the active palette by option code.  Codes outside
    /// 0..=3 select [`ColorMap::DEFAULT`].
    pub fn set_code(&self, code: i32) {
        let map = match ColorMap::try_from_code(code) {
            Some(map) => map,
            None => {
                warn!(code, fallback = %ColorMap::DEFAULT,
                      "Unknown colormap option");
                ColorMap::DEFAULT
            }
        };
        self.set(map)
    }

    /// Goes back to [`ColorMap::DEFAULT`].
    pub fn reset(&self) { self.set(ColorMap::DEFAULT) }
}

lazy_static! {
    static ref GLOBAL: ColorMapRegistry = {
        debug!("Global colormap init");
        ColorMapRegistry::new()
    };
}

/// The process-wide registry behind [`global_color_map`] and
/// [`set_global_color_map`].
pub fn global_registry() -> &'static ColorMapRegistry { &GLOBAL }

/// Returns the process-wide default palette ([`ColorMap::Jet`] until
/// changed).
pub fn global_color_map() -> ColorMap { GLOBAL.get() }

/// Replaces the process-wide default palette.
pub fn set_global_color_map(map: ColorMap) { GLOBAL.set(map) }

/// Replaces the process-wide default palette by option code, falling
/// back to [`ColorMap::Jet`] for unknown codes.
pub fn set_global_color_map_code(code: i32) { GLOBAL.set_code(code) }

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    // The global registry is exercised in `tests/global.rs`.

    #[test]
    fn starts_with_jet() {
        assert_eq!(ColorMapRegistry::new().get(), ColorMap::Jet);
        assert_eq!(ColorMapRegistry::default().get(), ColorMap::Jet);
    }

    #[test]
    fn set_then_get() {
        let reg = ColorMapRegistry::new();
        reg.set(ColorMap::Gray);
        assert_eq!(reg.get(), ColorMap::Gray);
        assert_eq!(reg.get().color(0.3), rgb::RGB { r: 0.3, g: 0.3, b: 0.3 });
        assert_eq!(reg.get(), reg.get());
        reg.reset();
        assert_eq!(reg.get(), ColorMap::Jet);
    }

    #[test]
    fn unknown_code_behaves_like_jet() {
        let reg = ColorMapRegistry::with_color_map(ColorMap::Winter);
        reg.set_code(17);
        assert_eq!(reg.get(), ColorMap::Jet);
        reg.set_code(2);
        assert_eq!(reg.get(), ColorMap::Summer);
        reg.set_code(-3);
        assert_eq!(reg.get(), ColorMap::Jet);
    }

    #[test]
    fn concurrent_readers_see_whole_palettes() {
        let reg = Arc::new(ColorMapRegistry::new());
        let writer = {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                for i in 0 .. 1000 { reg.set(ColorMap::ALL[i % 4]) }
            })
        };
        let readers: Vec<_> = (0 .. 4).map(|_| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                for _ in 0 .. 1000 {
                    assert!(ColorMap::ALL.contains(&reg.get()));
                }
            })
        }).collect();
        writer.join().unwrap();
        for r in readers { r.join().unwrap() }
        assert_eq!(reg.get(), ColorMap::Winter);
    }
}
