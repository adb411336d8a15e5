//! The host rendering-context boundary.
//!
//! The engine never talks to a concrete UI toolkit; it drives anything
//! that implements [`StyleHost`]. The trait captures the full capability
//! set the engine needs from a host: report and switch the active
//! variant, look up statically-defined default resources, and hold the
//! installed [`ThemeBlock`] so it can be swapped on rebuild.
//!
//! [`MemoryHost`] is the shipped in-process implementation — enough for
//! tests, headless use, and as a reference for wiring a real toolkit.
//!
//! # Example
//!
//! ```rust
//! use retheme::{Color, MemoryHost, PaletteRole, StyleHost, ThemeRuntime, Variant};
//!
//! let runtime = ThemeRuntime::new();
//! let mut host = MemoryHost::new(Variant::Dark)
//!     .with_static("SystemAccentColor", Variant::Dark, Color::from_rgb(0, 0x78, 0xd4));
//! host.install_theme_block(runtime.build_block());
//!
//! let defaults = runtime.capture_live(&host);
//! assert_eq!(
//!     defaults.color(Variant::Dark, PaletteRole::Accent),
//!     Color::from_rgb(0, 0x78, 0xd4)
//! );
//! ```

use std::collections::BTreeMap;

use retheme_color::Color;

use crate::palette::ThemeBlock;
use crate::variant::{Variant, VariantSelector};

/// Capability set the engine requires from a host rendering context.
///
/// All methods are synchronous and must be called from the thread that
/// owns the rendering context; the engine provides no locking.
pub trait StyleHost {
    /// The concrete variant the host currently renders.
    ///
    /// `None` means the host is in a state the engine does not support
    /// (it renders neither Light nor Dark); applying a theme then fails
    /// with [`ThemeError::InvalidVariant`](crate::ThemeError::InvalidVariant).
    fn active_variant(&self) -> Option<Variant>;

    /// Asks the host to switch variants.
    ///
    /// The host may override the request (e.g. a forced high-contrast
    /// mode); callers must re-read [`active_variant`](Self::active_variant)
    /// afterwards rather than assume the request took effect.
    fn request_variant(&mut self, selector: VariantSelector);

    /// Looks up a statically-defined default resource scoped to a variant.
    fn static_resource(&self, name: &str, variant: Variant) -> Option<Color>;

    /// Removes and returns the installed theme block, if any.
    fn take_theme_block(&mut self) -> Option<ThemeBlock>;

    /// Installs a theme block into the host's active style list.
    ///
    /// Installing a new block is the signal for the host to re-derive all
    /// palette-dependent visual resources.
    fn install_theme_block(&mut self, block: ThemeBlock);
}

/// In-process [`StyleHost`] backed by plain maps.
///
/// Static resources are registered up front with
/// [`with_static`](MemoryHost::with_static). The host honors variant
/// requests unless a forced variant is set, which models hosts that
/// override variant selection themselves. Block installs are counted so
/// tests can assert how many rebuilds occurred.
#[derive(Debug, Default)]
pub struct MemoryHost {
    active: Option<Variant>,
    forced: Option<Variant>,
    statics: BTreeMap<(Variant, String), Color>,
    block: Option<ThemeBlock>,
    installs: usize,
}

impl MemoryHost {
    /// Creates a host currently rendering the given variant.
    pub fn new(active: Variant) -> Self {
        Self {
            active: Some(active),
            ..Self::default()
        }
    }

    /// Registers a static default resource, returning `self` for chaining.
    pub fn with_static(mut self, name: impl Into<String>, variant: Variant, color: Color) -> Self {
        self.statics.insert((variant, name.into()), color);
        self
    }

    /// Forces the host onto one variant, ignoring later requests.
    pub fn force_variant(&mut self, variant: Variant) {
        self.forced = Some(variant);
        self.active = Some(variant);
    }

    /// Puts the host into a state where it renders no supported variant.
    pub fn clear_active_variant(&mut self) {
        self.active = None;
    }

    /// Number of theme-block installs so far (startup install included).
    pub fn install_count(&self) -> usize {
        self.installs
    }

    /// The currently installed theme block, if any.
    pub fn theme_block(&self) -> Option<&ThemeBlock> {
        self.block.as_ref()
    }
}

impl StyleHost for MemoryHost {
    fn active_variant(&self) -> Option<Variant> {
        self.active
    }

    fn request_variant(&mut self, selector: VariantSelector) {
        if self.forced.is_some() {
            return;
        }
        if let Some(variant) = selector.concrete() {
            self.active = Some(variant);
        }
        // Active keeps whatever the host already renders.
    }

    fn static_resource(&self, name: &str, variant: Variant) -> Option<Color> {
        self.statics.get(&(variant, name.to_string())).copied()
    }

    fn take_theme_block(&mut self) -> Option<ThemeBlock> {
        self.block.take()
    }

    fn install_theme_block(&mut self, block: ThemeBlock) {
        self.block = Some(block);
        self.installs += 1;
    }
}
