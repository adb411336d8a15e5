//! Theme variants and OS color-scheme detection.
//!
//! [`Variant`] is the closed set of supported theme modes: Light and Dark.
//! Everything keyed by variant (palettes, snapshot buckets) uses this enum
//! directly, so "whichever variant is active" can never leak into storage.
//! That request is expressed as [`VariantSelector::Active`], an input-only
//! value resolved against the host's current state.
//!
//! # Detection
//!
//! [`detect_variant`] queries the OS for the user's preferred scheme so a
//! host can seed its initial active variant. Override it for testing with
//! [`set_variant_detector`]:
//!
//! ```rust,ignore
//! retheme::set_variant_detector(|| Variant::Dark);
//! ```

use std::fmt;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One of the two supported theme modes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Variant {
    /// Light mode (light background, dark content).
    Light,
    /// Dark mode (dark background, light content).
    Dark,
}

impl Variant {
    /// The fixed ordered set of supported variants.
    pub const ALL: [Variant; 2] = [Variant::Light, Variant::Dark];

    /// Canonical variant name.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Light => "Light",
            Variant::Dark => "Dark",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A variant request: a concrete variant, or "whichever is active".
///
/// `Active` is resolved by the host rendering context at apply time, never
/// by the engine itself. Selectors are inputs only; nothing is ever stored
/// under `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantSelector {
    /// Request the Light variant.
    Light,
    /// Request the Dark variant.
    Dark,
    /// Keep whichever variant the host currently renders.
    Active,
}

impl VariantSelector {
    /// Maps a variant name to a selector.
    ///
    /// `"Light"` and `"Dark"` map to their concrete selectors; anything
    /// else — including `None` — means "stay on the active variant".
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("Light") => VariantSelector::Light,
            Some("Dark") => VariantSelector::Dark,
            _ => VariantSelector::Active,
        }
    }

    /// Returns the concrete variant this selector names, if any.
    pub fn concrete(self) -> Option<Variant> {
        match self {
            VariantSelector::Light => Some(Variant::Light),
            VariantSelector::Dark => Some(Variant::Dark),
            VariantSelector::Active => None,
        }
    }
}

impl From<Variant> for VariantSelector {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Light => VariantSelector::Light,
            Variant::Dark => VariantSelector::Dark,
        }
    }
}

type VariantDetector = fn() -> Variant;

static VARIANT_DETECTOR: Lazy<Mutex<VariantDetector>> =
    Lazy::new(|| Mutex::new(os_variant_detector));

/// Overrides the detector used by [`detect_variant`].
///
/// Useful for tests and for hosts that manage variant preference
/// themselves. Tests that call this should be serialized.
pub fn set_variant_detector(detector: VariantDetector) {
    let mut guard = VARIANT_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Detects the user's preferred variant from the OS color scheme.
///
/// Falls back to [`Variant::Light`] when the OS reports no preference.
pub fn detect_variant() -> Variant {
    let guard = VARIANT_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*guard)()
}

fn os_variant_detector() -> Variant {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Variant::Dark,
        _ => Variant::Light,
    }
}
