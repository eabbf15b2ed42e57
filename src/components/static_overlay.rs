//! Full-screen TV static.

use dioxus::prelude::*;

/// Noise layer drawn above everything else while `visible`.
///
/// The flicker is a CSS animation; this component only decides whether the
/// layer exists and at what base opacity.
#[component]
pub fn StaticOverlay(visible: bool, intensity: f32) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div {
            class: "static-overlay",
            style: "opacity: {intensity};",
        }
    }
}
