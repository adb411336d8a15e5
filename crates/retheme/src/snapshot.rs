//! Owned snapshots of per-variant color overrides.
//!
//! A [`ThemeSnapshot`] maps `Variant → (PaletteRole → Color)` and is the
//! value type that flows through the whole engine: capture produces one,
//! editing mutates a working clone of one, and apply pushes one into the
//! live palettes. Snapshots are plain owned data — cloning one yields a
//! fully independent copy, so "compiled defaults", "session defaults",
//! and any number of working copies can coexist without sharing state.
//!
//! # Example
//!
//! ```rust
//! use retheme::{Color, PaletteRole, ThemeSnapshot, Variant};
//!
//! let defaults = ThemeSnapshot::new()
//!     .with_color(Variant::Dark, PaletteRole::Accent, Color::from_rgb(0, 0x78, 0xd4));
//!
//! let mut working = defaults.clone();
//! working.set_color(Variant::Dark, PaletteRole::Accent, Color::from_rgb(0x99, 0x32, 0xcc));
//!
//! // The original is untouched.
//! assert_eq!(
//!     defaults.color(Variant::Dark, PaletteRole::Accent),
//!     Color::from_rgb(0, 0x78, 0xd4)
//! );
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use retheme_color::Color;

use crate::role::PaletteRole;
use crate::variant::Variant;

/// An independent `variant → role → color` mapping.
///
/// Reads never fail: a role with no entry reads as [`Color::UNSET`].
/// Both variant buckets always exist, so there is nothing to key by the
/// "active variant" alias — callers resolve that before touching a
/// snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSnapshot {
    light: BTreeMap<PaletteRole, Color>,
    dark: BTreeMap<PaletteRole, Color>,
}

impl ThemeSnapshot {
    /// Creates a snapshot with both variant buckets empty.
    pub fn new() -> Self {
        Self::default()
    }

    fn bucket(&self, variant: Variant) -> &BTreeMap<PaletteRole, Color> {
        match variant {
            Variant::Light => &self.light,
            Variant::Dark => &self.dark,
        }
    }

    fn bucket_mut(&mut self, variant: Variant) -> &mut BTreeMap<PaletteRole, Color> {
        match variant {
            Variant::Light => &mut self.light,
            Variant::Dark => &mut self.dark,
        }
    }

    /// Returns the stored color, or [`Color::UNSET`] if absent.
    pub fn color(&self, variant: Variant, role: PaletteRole) -> Color {
        self.bucket(variant).get(&role).copied().unwrap_or_default()
    }

    /// Upserts a color for `(variant, role)`.
    ///
    /// No validation is applied; storing [`Color::UNSET`] records "no
    /// override requested" for that role.
    pub fn set_color(&mut self, variant: Variant, role: PaletteRole, color: Color) {
        self.bucket_mut(variant).insert(role, color);
    }

    /// Upserts a color, returning `self` for chaining.
    pub fn with_color(mut self, variant: Variant, role: PaletteRole, color: Color) -> Self {
        self.set_color(variant, role, color);
        self
    }

    /// Upserts a color by role name.
    ///
    /// Returns `false` — and stores nothing — when the name is not a
    /// recognized role. The rejection is deliberately explicit so UI
    /// callers can surface it instead of losing the edit.
    pub fn set_color_by_name(&mut self, variant: Variant, name: &str, color: Color) -> bool {
        match PaletteRole::from_name(name) {
            Some(role) => {
                self.set_color(variant, role, color);
                true
            }
            None => false,
        }
    }

    /// Read-only view of one variant's entries, for enumeration.
    pub fn colors_for(&self, variant: Variant) -> &BTreeMap<PaletteRole, Color> {
        self.bucket(variant)
    }

    /// Returns true if neither variant holds any entry.
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orchid() -> Color {
        Color::from_rgb(0x99, 0x32, 0xcc)
    }

    #[test]
    fn test_new_is_empty_and_reads_unset() {
        let snapshot = ThemeSnapshot::new();
        assert!(snapshot.is_empty());
        for variant in Variant::ALL {
            for role in PaletteRole::ALL {
                assert!(snapshot.color(variant, role).is_unset());
            }
        }
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut snapshot = ThemeSnapshot::new();
        for variant in Variant::ALL {
            for role in PaletteRole::ALL {
                snapshot.set_color(variant, role, orchid());
                assert_eq!(snapshot.color(variant, role), orchid());
            }
        }
    }

    #[test]
    fn test_sentinel_round_trips_too() {
        let mut snapshot = ThemeSnapshot::new();
        snapshot.set_color(Variant::Dark, PaletteRole::Accent, Color::UNSET);
        assert!(snapshot.color(Variant::Dark, PaletteRole::Accent).is_unset());
        // The entry exists even though it reads as unset.
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_set_is_an_upsert() {
        let mut snapshot = ThemeSnapshot::new();
        snapshot.set_color(Variant::Light, PaletteRole::Region, orchid());
        snapshot.set_color(Variant::Light, PaletteRole::Region, Color::from_rgb(1, 2, 3));
        assert_eq!(
            snapshot.color(Variant::Light, PaletteRole::Region),
            Color::from_rgb(1, 2, 3)
        );
        assert_eq!(snapshot.colors_for(Variant::Light).len(), 1);
    }

    #[test]
    fn test_variants_are_isolated() {
        let mut snapshot = ThemeSnapshot::new();
        snapshot.set_color(Variant::Light, PaletteRole::Accent, orchid());
        assert!(snapshot.color(Variant::Dark, PaletteRole::Accent).is_unset());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = ThemeSnapshot::new().with_color(
            Variant::Dark,
            PaletteRole::Accent,
            orchid(),
        );

        let mut clone = original.clone();
        clone.set_color(Variant::Dark, PaletteRole::Accent, Color::from_rgb(0, 0, 0xff));
        clone.set_color(Variant::Light, PaletteRole::Region, orchid());

        assert_eq!(original.color(Variant::Dark, PaletteRole::Accent), orchid());
        assert!(original.color(Variant::Light, PaletteRole::Region).is_unset());
    }

    #[test]
    fn test_set_by_name() {
        let mut snapshot = ThemeSnapshot::new();
        assert!(snapshot.set_color_by_name(Variant::Dark, "Accent", orchid()));
        assert_eq!(snapshot.color(Variant::Dark, PaletteRole::Accent), orchid());

        assert!(snapshot.set_color_by_name(Variant::Dark, "RegionColor", orchid()));
        assert_eq!(snapshot.color(Variant::Dark, PaletteRole::Region), orchid());
    }

    #[test]
    fn test_set_by_unknown_name_is_rejected_loudly() {
        // Unknown names must be rejected explicitly, never dropped on the
        // floor with the caller none the wiser.
        let mut snapshot = ThemeSnapshot::new();
        assert!(!snapshot.set_color_by_name(Variant::Dark, "NotARole", orchid()));
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_colors_for_enumerates_entries() {
        let snapshot = ThemeSnapshot::new()
            .with_color(Variant::Dark, PaletteRole::Accent, orchid())
            .with_color(Variant::Dark, PaletteRole::Region, Color::from_rgb(1, 2, 3));

        let entries = snapshot.colors_for(Variant::Dark);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get(&PaletteRole::Accent), Some(&orchid()));
        assert!(snapshot.colors_for(Variant::Light).is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let snapshot = ThemeSnapshot::new().with_color(
            Variant::Dark,
            PaletteRole::Accent,
            orchid(),
        );

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ThemeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
