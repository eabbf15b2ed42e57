//! Gate context provider.
//!
//! The app root owns the [`GateController`] and mirrors its published state
//! into a signal; child components reach both through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! let gate = use_gate();
//! let state = use_gate_state();
//!
//! if state().entry_visible {
//!     gate.on_enter();
//! }
//! ```

use dioxus::prelude::*;
use static_gate_core::{GateConfig, GateController, GateState};

use crate::host::DesktopHost;

/// The controller type used by the desktop app.
pub type SharedGate = GateController<DesktopHost>;

/// Get the gate configuration resolved at startup.
pub fn get_gate_config() -> GateConfig {
    crate::get_gate_config()
}

/// Hook to access the gate controller from context.
pub fn use_gate() -> SharedGate {
    use_context::<SharedGate>()
}

/// Hook to read the latest published gate state.
///
/// Returns a reactive signal that updates on every phase change and when
/// the warning screen's visibility flips.
pub fn use_gate_state() -> Signal<GateState> {
    use_context::<Signal<GateState>>()
}
