//! Live palettes and the installable theme block.
//!
//! A [`LivePalette`] is the mutable color table a host consults at render
//! time, one per variant. The two instances are created once by
//! [`ThemeRuntime`](crate::ThemeRuntime) and shared for the process
//! lifetime; everything else holds them through the [`SharedPalette`]
//! handle. All access is UI-thread-affine, hence `Rc<RefCell<_>>` rather
//! than locking (the same single-threaded stance as the rest of the
//! crate).
//!
//! [`ThemeBlock`] is the unit the host's style list actually holds. Hosts
//! re-derive dependent visual resources only when the installed block
//! object is replaced; mutating palette entries alone is necessary but
//! not sufficient to re-render. The applier therefore swaps the block
//! while keeping the palette instances themselves identical.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use retheme_color::Color;

use crate::role::PaletteRole;
use crate::variant::Variant;

/// The mutable, currently-rendered color table for one variant.
///
/// Every slot starts as [`Color::UNSET`], meaning "no override in force;
/// fall back to the statically-defined default".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivePalette {
    slots: [Color; PaletteRole::COUNT],
}

impl LivePalette {
    /// Creates a palette with every role unset.
    pub fn new() -> Self {
        Self {
            slots: [Color::UNSET; PaletteRole::COUNT],
        }
    }

    /// Returns the explicit color for a role, or [`Color::UNSET`].
    pub fn color(&self, role: PaletteRole) -> Color {
        self.slots[role.index()]
    }

    /// Writes a color into a role slot.
    pub fn set_color(&mut self, role: PaletteRole, color: Color) {
        self.slots[role.index()] = color;
    }

    /// Returns true if no role holds an explicit color.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|c| c.is_unset())
    }
}

impl Default for LivePalette {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a process-lifetime palette instance.
pub type SharedPalette = Rc<RefCell<LivePalette>>;

/// The style block a host installs to make palettes take effect.
///
/// Carries the shared palette instances for all variants. Replacing the
/// installed block (rather than mutating it) is what signals the host to
/// re-derive dependent visuals; this is a documented capability
/// requirement of the host, not an accident.
#[derive(Debug, Clone)]
pub struct ThemeBlock {
    palettes: BTreeMap<Variant, SharedPalette>,
}

impl ThemeBlock {
    pub(crate) fn new(palettes: BTreeMap<Variant, SharedPalette>) -> Self {
        Self { palettes }
    }

    /// Returns the palette this block carries for a variant.
    pub fn palette(&self, variant: Variant) -> Option<&SharedPalette> {
        self.palettes.get(&variant)
    }

    /// The variants this block carries palettes for.
    pub fn variants(&self) -> impl Iterator<Item = Variant> + '_ {
        self.palettes.keys().copied()
    }
}
