//! Capturing what a host currently renders into a snapshot.

use crate::host::StyleHost;
use crate::role::PaletteRole;
use crate::runtime::ThemeRuntime;
use crate::snapshot::ThemeSnapshot;
use crate::variant::Variant;

impl ThemeRuntime {
    /// Captures the colors currently in force, for every variant and role.
    ///
    /// For each role the explicit live-palette value wins; when the slot
    /// is unset (no override in force), the host's statically-defined
    /// default resource is consulted under the role's
    /// [`static_resource_name`](PaletteRole::static_resource_name). Roles
    /// the host defines nowhere stay unset in the snapshot.
    ///
    /// Purely observational: neither the palettes nor the host change.
    /// Capture once at process start for "compiled defaults", and again
    /// when an edit screen opens for its "session defaults".
    pub fn capture_live(&self, host: &dyn StyleHost) -> ThemeSnapshot {
        let mut snapshot = ThemeSnapshot::new();

        for variant in Variant::ALL {
            let palette = self.palette_for(variant);
            let palette = palette.borrow();

            for role in PaletteRole::ALL {
                let mut color = palette.color(role);
                if color.is_unset() {
                    if let Some(fallback) =
                        host.static_resource(&role.static_resource_name(), variant)
                    {
                        color = fallback;
                    }
                }
                snapshot.set_color(variant, role, color);
            }
        }

        snapshot
    }
}
