//! Warning screen with the ENTER control.

use dioxus::prelude::*;

/// Properties for the WarningScreen component
#[derive(Clone, PartialEq, Props)]
pub struct WarningScreenProps {
    /// Fired when ENTER is clicked
    pub on_enter: EventHandler<()>,
}

/// Black panel over the video with the pulsing warning and ENTER button.
#[component]
pub fn WarningScreen(props: WarningScreenProps) -> Element {
    rsx! {
        div { class: "warning-screen",
            div { class: "warning-glow" }

            div { class: "warning-body",
                h1 { class: "warning-title", "⚠️ WARNING ⚠️" }

                p { class: "warning-subtitle", "SOMETHING WANTS TO SHOW YOU SOMETHING" }

                button {
                    class: "btn-enter",
                    onclick: move |_| props.on_enter.call(()),
                    "ENTER"
                }

                p { class: "warning-footer", "[FULLSCREEN MODE ACTIVATED]" }
            }
        }
    }
}
