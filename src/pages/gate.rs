//! The gate page: warning screen, static, video, static, close.
//!
//! Layering from bottom to top: grain backdrop, video, warning screen,
//! static overlay.

use dioxus::prelude::*;

use crate::components::{StaticOverlay, VideoStage, WarningScreen};
use crate::context::{get_gate_config, use_gate, use_gate_state};
use crate::host::read_playback_position;

/// Gate page component.
#[component]
pub fn GatePage() -> Element {
    let gate = use_gate();
    let state = use_gate_state();
    let config = use_hook(get_gate_config);

    let enter_gate = gate.clone();
    let on_enter = move |_| enter_gate.on_enter();

    let end_gate = gate.clone();
    let on_ended = move |_| end_gate.on_video_end();

    // Only ask the webview for the position until playback has visibly
    // started; after that the warning screen can never come back.
    let on_time_update = move |_| {
        if !state.read().entry_visible {
            return;
        }
        let gate = gate.clone();
        spawn(async move {
            match read_playback_position().await {
                Ok(seconds) => gate.on_position(seconds),
                Err(e) => tracing::debug!("Could not read playback position: {}", e),
            }
        });
    };

    let current = state();

    rsx! {
        main { class: "gate",
            div { class: "gate-scrim" }
            div { class: "gate-grain" }

            div { class: "gate-content",
                StaticOverlay {
                    visible: current.show_static,
                    intensity: current.static_intensity,
                }

                VideoStage {
                    src: config.video_src.clone(),
                    mime: config.video_mime.clone(),
                    dimmed: current.show_static,
                    on_ended: on_ended,
                    on_time_update: on_time_update,
                }

                if current.entry_visible {
                    WarningScreen { on_enter: on_enter }
                }
            }
        }
    }
}
