//! The gated video.

use dioxus::prelude::*;

use crate::host::VIDEO_ELEMENT_ID;

/// Properties for the VideoStage component
#[derive(Clone, PartialEq, Props)]
pub struct VideoStageProps {
    /// Media URL
    pub src: String,
    /// MIME type for the `<source>` element
    pub mime: String,
    /// Darken and harden the frame while static is up
    #[props(default = false)]
    pub dimmed: bool,
    /// End of stream
    pub on_ended: EventHandler<()>,
    /// Playback position advanced
    pub on_time_update: EventHandler<()>,
}

/// `<video>` without native controls; playback is started by the gate.
#[component]
pub fn VideoStage(props: VideoStageProps) -> Element {
    let class = if props.dimmed {
        "gate-video dimmed"
    } else {
        "gate-video"
    };

    rsx! {
        div { class: "video-stage",
            video {
                id: VIDEO_ELEMENT_ID,
                class: "{class}",
                onended: move |_| props.on_ended.call(()),
                ontimeupdate: move |_| props.on_time_update.call(()),
                source { src: "{props.src}", r#type: "{props.mime}" }
                "Your browser does not support the video tag."
            }
        }
    }
}
