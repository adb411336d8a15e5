//! The closed vocabulary of palette color roles.
//!
//! Each role is one named color slot in a variant's palette. The
//! vocabulary is a plain enum rather than anything resolved reflectively
//! at runtime, so role access is compile-checked and the only runtime
//! lookup, [`PaletteRole::from_name`], fails explicitly with `None`
//! instead of turning a typo into a silently dropped write.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named slot in the color palette.
///
/// The set mirrors the role vocabulary of Fluent-style palette objects:
/// an accent color, layered alt/base/chrome tones, list and error colors,
/// and the region (window background) color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PaletteRole {
    Accent,
    AltHigh,
    AltLow,
    AltMedium,
    AltMediumHigh,
    AltMediumLow,
    BaseHigh,
    BaseLow,
    BaseMedium,
    BaseMediumHigh,
    BaseMediumLow,
    ChromeAltLow,
    ChromeBlackHigh,
    ChromeBlackLow,
    ChromeBlackMedium,
    ChromeBlackMediumLow,
    ChromeDisabledHigh,
    ChromeDisabledLow,
    ChromeGray,
    ChromeHigh,
    ChromeLow,
    ChromeMedium,
    ChromeMediumLow,
    ChromeWhite,
    ErrorText,
    ListLow,
    ListMedium,
    #[serde(rename = "RegionColor")]
    Region,
}

impl PaletteRole {
    /// Number of roles in the vocabulary.
    pub const COUNT: usize = Self::ALL.len();

    /// The fixed ordered set of all roles, used by capture and apply loops.
    pub const ALL: [PaletteRole; 28] = [
        PaletteRole::Accent,
        PaletteRole::AltHigh,
        PaletteRole::AltLow,
        PaletteRole::AltMedium,
        PaletteRole::AltMediumHigh,
        PaletteRole::AltMediumLow,
        PaletteRole::BaseHigh,
        PaletteRole::BaseLow,
        PaletteRole::BaseMedium,
        PaletteRole::BaseMediumHigh,
        PaletteRole::BaseMediumLow,
        PaletteRole::ChromeAltLow,
        PaletteRole::ChromeBlackHigh,
        PaletteRole::ChromeBlackLow,
        PaletteRole::ChromeBlackMedium,
        PaletteRole::ChromeBlackMediumLow,
        PaletteRole::ChromeDisabledHigh,
        PaletteRole::ChromeDisabledLow,
        PaletteRole::ChromeGray,
        PaletteRole::ChromeHigh,
        PaletteRole::ChromeLow,
        PaletteRole::ChromeMedium,
        PaletteRole::ChromeMediumLow,
        PaletteRole::ChromeWhite,
        PaletteRole::ErrorText,
        PaletteRole::ListLow,
        PaletteRole::ListMedium,
        PaletteRole::Region,
    ];

    /// Canonical resource-name string for this role.
    pub fn name(self) -> &'static str {
        match self {
            PaletteRole::Accent => "Accent",
            PaletteRole::AltHigh => "AltHigh",
            PaletteRole::AltLow => "AltLow",
            PaletteRole::AltMedium => "AltMedium",
            PaletteRole::AltMediumHigh => "AltMediumHigh",
            PaletteRole::AltMediumLow => "AltMediumLow",
            PaletteRole::BaseHigh => "BaseHigh",
            PaletteRole::BaseLow => "BaseLow",
            PaletteRole::BaseMedium => "BaseMedium",
            PaletteRole::BaseMediumHigh => "BaseMediumHigh",
            PaletteRole::BaseMediumLow => "BaseMediumLow",
            PaletteRole::ChromeAltLow => "ChromeAltLow",
            PaletteRole::ChromeBlackHigh => "ChromeBlackHigh",
            PaletteRole::ChromeBlackLow => "ChromeBlackLow",
            PaletteRole::ChromeBlackMedium => "ChromeBlackMedium",
            PaletteRole::ChromeBlackMediumLow => "ChromeBlackMediumLow",
            PaletteRole::ChromeDisabledHigh => "ChromeDisabledHigh",
            PaletteRole::ChromeDisabledLow => "ChromeDisabledLow",
            PaletteRole::ChromeGray => "ChromeGray",
            PaletteRole::ChromeHigh => "ChromeHigh",
            PaletteRole::ChromeLow => "ChromeLow",
            PaletteRole::ChromeMedium => "ChromeMedium",
            PaletteRole::ChromeMediumLow => "ChromeMediumLow",
            PaletteRole::ChromeWhite => "ChromeWhite",
            PaletteRole::ErrorText => "ErrorText",
            PaletteRole::ListLow => "ListLow",
            PaletteRole::ListMedium => "ListMedium",
            PaletteRole::Region => "RegionColor",
        }
    }

    /// Looks up a role by its canonical resource name.
    ///
    /// Returns `None` for unknown names; callers decide whether that is an
    /// error. (This replaces the silent dropped write of reflective
    /// resolution with an explicit rejection.)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|role| role.name() == name)
    }

    /// Name of the statically-defined default resource for this role.
    ///
    /// Follows the `System<Role>Color` convention, except for the region
    /// color whose role name already carries the `Color` suffix.
    pub fn static_resource_name(self) -> String {
        match self {
            // Irregular: "SystemRegionColorColor" would double the suffix.
            PaletteRole::Region => "SystemRegionColor".to_string(),
            other => format!("System{}Color", other.name()),
        }
    }

    /// Dense index of this role, used for palette table storage.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_role_once() {
        let mut names: Vec<&str> = PaletteRole::ALL.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PaletteRole::COUNT);
    }

    #[test]
    fn test_name_round_trip() {
        for role in PaletteRole::ALL {
            assert_eq!(PaletteRole::from_name(role.name()), Some(role));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(PaletteRole::from_name("Sparkle"), None);
        // Lookup is exact; static resource names are not role names.
        assert_eq!(PaletteRole::from_name("SystemAccentColor"), None);
    }

    #[test]
    fn test_static_resource_name_convention() {
        assert_eq!(PaletteRole::Accent.static_resource_name(), "SystemAccentColor");
        assert_eq!(
            PaletteRole::ChromeBlackMediumLow.static_resource_name(),
            "SystemChromeBlackMediumLowColor"
        );

        // Every regular role follows System<Role>Color.
        for role in PaletteRole::ALL {
            if role == PaletteRole::Region {
                continue;
            }
            assert_eq!(
                role.static_resource_name(),
                format!("System{}Color", role.name())
            );
        }
    }

    #[test]
    fn test_region_static_name_is_irregular() {
        assert_eq!(PaletteRole::Region.name(), "RegionColor");
        assert_eq!(PaletteRole::Region.static_resource_name(), "SystemRegionColor");
    }

    #[test]
    fn test_indices_are_dense() {
        for (i, role) in PaletteRole::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_resource_names() {
        let json = serde_json::to_string(&PaletteRole::Region).unwrap();
        assert_eq!(json, "\"RegionColor\"");
        let role: PaletteRole = serde_json::from_str("\"Accent\"").unwrap();
        assert_eq!(role, PaletteRole::Accent);
    }
}
