//! # Retheme - Runtime Theme Overrides
//!
//! `retheme` lets a running user interface recolor itself: capture the
//! palette a host currently renders, edit named color roles on an owned
//! snapshot, and push the result back so that only genuinely changed
//! values trigger the (expensive) style rebuild.
//!
//! ## Core Concepts
//!
//! - [`Variant`]: the two supported theme modes, Light and Dark
//! - [`PaletteRole`]: the closed vocabulary of named color slots
//! - [`ThemeSnapshot`]: an owned `variant → role → color` mapping
//! - [`ThemeRuntime`]: owner of the per-variant live palettes, with
//!   [`capture_live`](ThemeRuntime::capture_live) and
//!   [`apply_theme`](ThemeRuntime::apply_theme)
//! - [`StyleHost`]: the trait a host rendering context implements
//!
//! ## Quick Start
//!
//! ```rust
//! use retheme::{
//!     Color, MemoryHost, PaletteRole, StyleHost, ThemeRuntime, Variant, VariantSelector,
//! };
//!
//! // Host startup: one runtime, one installed theme block.
//! let runtime = ThemeRuntime::new();
//! let mut host = MemoryHost::new(Variant::Dark)
//!     .with_static("SystemAccentColor", Variant::Dark, Color::from_rgb(0, 0x78, 0xd4));
//! host.install_theme_block(runtime.build_block());
//!
//! // Capture what is rendered right now, keep it as the reset point.
//! let defaults = runtime.capture_live(&host);
//!
//! // Edit a working copy and apply it.
//! let mut working = defaults.clone();
//! working.set_color(Variant::Dark, PaletteRole::Accent, "darkorchid".parse().unwrap());
//! let rebuilt = runtime
//!     .apply_theme(&mut host, &working, VariantSelector::Dark)
//!     .unwrap();
//! assert!(rebuilt);
//!
//! // Reset: applying the untouched defaults puts everything back.
//! runtime.apply_theme(&mut host, &defaults, VariantSelector::Active).unwrap();
//! ```
//!
//! ## Editing Flow
//!
//! A typical edit screen captures a "session defaults" snapshot when it
//! opens, clones it into a working snapshot, routes every user edit
//! through [`ThemeSnapshot::set_color`] followed by
//! [`apply_theme`](ThemeRuntime::apply_theme), and offers reset actions
//! that re-apply an untouched snapshot. Because apply compares values
//! before writing, spamming the same edit is free: no palette write, no
//! rebuild, no flicker.
//!
//! ## Threading
//!
//! Everything is single-threaded and synchronous by design. The live
//! palettes belong to the thread that owns the rendering context; the
//! host's event loop provides all the serialization there is.

mod apply;
mod capture;
mod error;
mod host;
mod palette;
mod role;
mod runtime;
mod snapshot;
mod variant;

pub use retheme_color::{Color, ColorParseError};

pub use error::{Result, ThemeError};
pub use host::{MemoryHost, StyleHost};
pub use palette::{LivePalette, SharedPalette, ThemeBlock};
pub use role::PaletteRole;
pub use runtime::ThemeRuntime;
pub use snapshot::ThemeSnapshot;
pub use variant::{detect_variant, set_variant_detector, Variant, VariantSelector};
