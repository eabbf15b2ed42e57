use dioxus::desktop::use_window;
use dioxus::prelude::*;
use static_gate_core::{GateController, GateState};

use crate::context::{get_gate_config, SharedGate};
use crate::host::{run_host_commands, DesktopHost};
use crate::pages::GatePage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the gate controller for the lifetime of the window, provides it and
/// its state signal as context, and renders the gate page.
#[component]
pub fn App() -> Element {
    let window = use_window();

    let gate: SharedGate = use_hook(|| {
        let (host, commands) = DesktopHost::new();
        spawn(run_host_commands(commands, window));
        GateController::new(get_gate_config(), host)
    });

    let mut gate_state: Signal<GateState> = use_signal(|| gate.state());

    use_context_provider(|| gate.clone());
    use_context_provider(|| gate_state);

    // Mirror published state into the signal
    let watched = gate.clone();
    use_future(move || {
        let mut changes = watched.subscribe();
        async move {
            while changes.changed().await.is_ok() {
                let next = changes.borrow_and_update().clone();
                tracing::debug!("Gate phase: {}", next.phase);
                gate_state.set(next);
            }
        }
    });

    // Pending timers must not outlive the window
    let teardown = gate.clone();
    use_drop(move || teardown.shutdown());

    rsx! {
        style { {GLOBAL_STYLES} }
        GatePage {}
    }
}
