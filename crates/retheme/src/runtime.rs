//! The process-wide theme runtime.
//!
//! [`ThemeRuntime`] owns the two shared [`LivePalette`] instances — one per
//! variant — for the lifetime of the process. It is constructed once at
//! host startup and passed explicitly to every capture and apply call;
//! there are no ambient statics to reach for.
//!
//! ```rust
//! use retheme::{ThemeRuntime, Variant};
//!
//! let runtime = ThemeRuntime::new();
//! let dark = runtime.palette_for(Variant::Dark);
//! assert!(dark.borrow().is_empty());
//! ```

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::palette::{SharedPalette, ThemeBlock};
use crate::variant::Variant;

/// Owner of the per-variant live palettes.
///
/// The palette instances are created exactly once and reused for the
/// process lifetime; rebuilds swap the installed [`ThemeBlock`] but always
/// re-attach these same instances.
#[derive(Debug, Clone)]
pub struct ThemeRuntime {
    palettes: BTreeMap<Variant, SharedPalette>,
}

impl ThemeRuntime {
    /// Creates a runtime with an empty palette per supported variant.
    pub fn new() -> Self {
        let palettes = Variant::ALL
            .iter()
            .map(|&variant| (variant, SharedPalette::default()))
            .collect();
        Self { palettes }
    }

    /// The fixed ordered set of supported variants.
    pub fn variants(&self) -> [Variant; 2] {
        Variant::ALL
    }

    /// Returns the shared palette instance for a variant.
    ///
    /// The same instance is returned for every call with the same variant.
    pub fn palette_for(&self, variant: Variant) -> SharedPalette {
        // Both variants are populated in new(); the map cannot miss.
        Rc::clone(&self.palettes[&variant])
    }

    /// Builds a theme block carrying this runtime's palette instances.
    ///
    /// Hosts install one of these at startup; the applier builds a fresh
    /// one (same palettes, new block identity) whenever a rebuild is
    /// needed.
    pub fn build_block(&self) -> ThemeBlock {
        ThemeBlock::new(self.palettes.clone())
    }
}

impl Default for ThemeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::PaletteRole;
    use retheme_color::Color;

    #[test]
    fn test_palette_identity_is_stable() {
        let runtime = ThemeRuntime::new();
        let a = runtime.palette_for(Variant::Dark);
        let b = runtime.palette_for(Variant::Dark);
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_variants_have_distinct_palettes() {
        let runtime = ThemeRuntime::new();
        let light = runtime.palette_for(Variant::Light);
        let dark = runtime.palette_for(Variant::Dark);
        assert!(!Rc::ptr_eq(&light, &dark));

        light
            .borrow_mut()
            .set_color(PaletteRole::Accent, Color::from_rgb(1, 2, 3));
        assert!(dark.borrow().color(PaletteRole::Accent).is_unset());
    }

    #[test]
    fn test_block_attaches_the_same_instances() {
        let runtime = ThemeRuntime::new();
        let block = runtime.build_block();

        for variant in runtime.variants() {
            let in_block = block.palette(variant).unwrap();
            assert!(Rc::ptr_eq(in_block, &runtime.palette_for(variant)));
        }
    }

    #[test]
    fn test_rebuilt_blocks_share_palettes() {
        let runtime = ThemeRuntime::new();
        let first = runtime.build_block();
        let second = runtime.build_block();

        let a = first.palette(Variant::Light).unwrap();
        let b = second.palette(Variant::Light).unwrap();
        assert!(Rc::ptr_eq(a, b));
    }
}
