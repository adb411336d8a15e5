//! Applying a snapshot to a host, with minimal rebuilds.

use crate::error::{Result, ThemeError};
use crate::host::StyleHost;
use crate::role::PaletteRole;
use crate::runtime::ThemeRuntime;
use crate::snapshot::ThemeSnapshot;
use crate::variant::VariantSelector;

impl ThemeRuntime {
    /// Pushes a snapshot's overrides into the live palette and rebuilds
    /// the host's theme block only if something actually changed.
    ///
    /// The steps, in order:
    ///
    /// 1. Ask the host to switch to `selector`.
    /// 2. Re-read the host's *actual* active variant; the host may have
    ///    overridden the request. A host rendering no supported variant
    ///    fails with [`ThemeError::InvalidVariant`].
    /// 3. For every role: a concrete snapshot value that differs from the
    ///    live palette is written and counts as a change. Unset snapshot
    ///    values are "no override requested" and leave the live color
    ///    alone — a snapshot can overwrite a role, never blank it.
    /// 4. If anything changed, swap the host's theme block: take the old
    ///    one (its absence fails with [`ThemeError::MissingStyleBlock`]),
    ///    install a fresh block carrying the identical palette instances.
    ///    Hosts only re-derive palette-dependent visuals on that swap.
    ///
    /// Returns whether a rebuild occurred. Applying the same snapshot
    /// twice rebuilds at most once; the second call is a no-op, which is
    /// what keeps repeated identical edits flicker-free.
    pub fn apply_theme(
        &self,
        host: &mut dyn StyleHost,
        snapshot: &ThemeSnapshot,
        selector: VariantSelector,
    ) -> Result<bool> {
        host.request_variant(selector);
        let variant = host.active_variant().ok_or(ThemeError::InvalidVariant)?;

        let mut changed = false;
        {
            let palette = self.palette_for(variant);
            let mut palette = palette.borrow_mut();

            for role in PaletteRole::ALL {
                let color = snapshot.color(variant, role);
                if !color.is_unset() && palette.color(role) != color {
                    palette.set_color(role, color);
                    changed = true;
                }
            }
        }

        if changed {
            host.take_theme_block().ok_or(ThemeError::MissingStyleBlock)?;
            host.install_theme_block(self.build_block());
        }

        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::variant::Variant;
    use retheme_color::Color;

    fn orchid() -> Color {
        Color::from_rgb(0x99, 0x32, 0xcc)
    }

    fn host_with_block(runtime: &ThemeRuntime, active: Variant) -> MemoryHost {
        let mut host = MemoryHost::new(active);
        host.install_theme_block(runtime.build_block());
        host
    }

    #[test]
    fn test_apply_writes_palette_and_rebuilds_once() {
        let runtime = ThemeRuntime::new();
        let mut host = host_with_block(&runtime, Variant::Dark);
        let snapshot =
            ThemeSnapshot::new().with_color(Variant::Dark, PaletteRole::Accent, orchid());

        let rebuilt = runtime
            .apply_theme(&mut host, &snapshot, VariantSelector::Dark)
            .unwrap();

        assert!(rebuilt);
        assert_eq!(host.install_count(), 2); // startup + rebuild
        assert_eq!(
            runtime.palette_for(Variant::Dark).borrow().color(PaletteRole::Accent),
            orchid()
        );
    }

    #[test]
    fn test_second_identical_apply_is_a_no_op() {
        let runtime = ThemeRuntime::new();
        let mut host = host_with_block(&runtime, Variant::Dark);
        let snapshot =
            ThemeSnapshot::new().with_color(Variant::Dark, PaletteRole::Accent, orchid());

        let first = runtime
            .apply_theme(&mut host, &snapshot, VariantSelector::Dark)
            .unwrap();
        let second = runtime
            .apply_theme(&mut host, &snapshot, VariantSelector::Dark)
            .unwrap();

        assert!(first);
        assert!(!second);
        assert_eq!(host.install_count(), 2);
    }

    #[test]
    fn test_unset_entries_never_blank_live_colors() {
        let runtime = ThemeRuntime::new();
        let mut host = host_with_block(&runtime, Variant::Dark);

        runtime
            .palette_for(Variant::Dark)
            .borrow_mut()
            .set_color(PaletteRole::Accent, orchid());

        // Snapshot explicitly records "no override" for the same role.
        let mut snapshot = ThemeSnapshot::new();
        snapshot.set_color(Variant::Dark, PaletteRole::Accent, Color::UNSET);

        let rebuilt = runtime
            .apply_theme(&mut host, &snapshot, VariantSelector::Dark)
            .unwrap();

        assert!(!rebuilt);
        assert_eq!(
            runtime.palette_for(Variant::Dark).borrow().color(PaletteRole::Accent),
            orchid()
        );
    }

    #[test]
    fn test_variant_isolation() {
        let runtime = ThemeRuntime::new();
        let mut host = host_with_block(&runtime, Variant::Light);
        let snapshot =
            ThemeSnapshot::new().with_color(Variant::Light, PaletteRole::Accent, orchid());

        runtime
            .apply_theme(&mut host, &snapshot, VariantSelector::Light)
            .unwrap();

        assert!(runtime
            .palette_for(Variant::Dark)
            .borrow()
            .color(PaletteRole::Accent)
            .is_unset());
    }

    #[test]
    fn test_applies_to_the_effective_variant_not_the_requested_one() {
        let runtime = ThemeRuntime::new();
        let mut host = host_with_block(&runtime, Variant::Light);
        host.force_variant(Variant::Dark);

        // The snapshot colors both variants differently.
        let snapshot = ThemeSnapshot::new()
            .with_color(Variant::Light, PaletteRole::Accent, Color::from_rgb(1, 2, 3))
            .with_color(Variant::Dark, PaletteRole::Accent, orchid());

        runtime
            .apply_theme(&mut host, &snapshot, VariantSelector::Light)
            .unwrap();

        // The host overrode the request; only Dark was written.
        assert_eq!(
            runtime.palette_for(Variant::Dark).borrow().color(PaletteRole::Accent),
            orchid()
        );
        assert!(runtime
            .palette_for(Variant::Light)
            .borrow()
            .color(PaletteRole::Accent)
            .is_unset());
    }

    #[test]
    fn test_unsupported_host_variant_fails() {
        let runtime = ThemeRuntime::new();
        let mut host = host_with_block(&runtime, Variant::Dark);
        host.clear_active_variant();

        let snapshot =
            ThemeSnapshot::new().with_color(Variant::Dark, PaletteRole::Accent, orchid());
        let err = runtime
            .apply_theme(&mut host, &snapshot, VariantSelector::Active)
            .unwrap_err();

        assert_eq!(err, ThemeError::InvalidVariant);
    }

    #[test]
    fn test_rebuild_without_installed_block_fails() {
        let runtime = ThemeRuntime::new();
        let mut host = MemoryHost::new(Variant::Dark); // no block installed
        let snapshot =
            ThemeSnapshot::new().with_color(Variant::Dark, PaletteRole::Accent, orchid());

        let err = runtime
            .apply_theme(&mut host, &snapshot, VariantSelector::Dark)
            .unwrap_err();

        assert_eq!(err, ThemeError::MissingStyleBlock);
    }

    #[test]
    fn test_no_change_needs_no_block_at_all() {
        let runtime = ThemeRuntime::new();
        let mut host = MemoryHost::new(Variant::Dark); // no block installed

        let rebuilt = runtime
            .apply_theme(&mut host, &ThemeSnapshot::new(), VariantSelector::Dark)
            .unwrap();

        // Nothing differed, so the missing block was never an issue.
        assert!(!rebuilt);
    }

    #[test]
    fn test_rebuild_preserves_palette_identity() {
        use std::rc::Rc;

        let runtime = ThemeRuntime::new();
        let mut host = host_with_block(&runtime, Variant::Dark);
        let snapshot =
            ThemeSnapshot::new().with_color(Variant::Dark, PaletteRole::Accent, orchid());

        runtime
            .apply_theme(&mut host, &snapshot, VariantSelector::Dark)
            .unwrap();

        let block = host.theme_block().unwrap();
        for variant in Variant::ALL {
            assert!(Rc::ptr_eq(
                block.palette(variant).unwrap(),
                &runtime.palette_for(variant)
            ));
        }
    }
}
