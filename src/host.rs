//! Desktop implementation of the media capability.
//!
//! DOM evaluation and window control have to run on the UI runtime, while
//! the gate's timers fire on tokio tasks. [`DesktopHost`] bridges the two:
//! it forwards each request over a channel to [`run_host_commands`], which
//! runs inside the page component.

use dioxus::desktop::DesktopContext;
use dioxus::prelude::*;
use static_gate_core::{GateError, GateResult, MediaHost};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// DOM id of the gated `<video>` element.
pub const VIDEO_ELEMENT_ID: &str = "gate-video";

/// Requests forwarded from the controller to the UI runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCommand {
    Play,
    Close,
}

/// [`MediaHost`] backed by the desktop webview.
pub struct DesktopHost {
    commands: UnboundedSender<HostCommand>,
}

impl DesktopHost {
    /// Create the host and the receiving end that [`run_host_commands`] drains.
    pub fn new() -> (Self, UnboundedReceiver<HostCommand>) {
        let (commands, rx) = unbounded_channel();
        (Self { commands }, rx)
    }

    fn send(&self, command: HostCommand) -> GateResult<()> {
        self.commands
            .send(command)
            .map_err(|_| GateError::HostUnavailable)
    }
}

impl MediaHost for DesktopHost {
    fn play(&self) -> GateResult<()> {
        self.send(HostCommand::Play)
    }

    fn close(&self) -> GateResult<()> {
        self.send(HostCommand::Close)
    }
}

/// Execute host commands until the controller goes away.
pub async fn run_host_commands(
    mut commands: UnboundedReceiver<HostCommand>,
    window: DesktopContext,
) {
    while let Some(command) = commands.recv().await {
        match command {
            HostCommand::Play => {
                if let Err(e) = start_playback().await {
                    tracing::warn!("Playback did not start: {}", e);
                }
            }
            HostCommand::Close => {
                tracing::info!("Closing gate window");
                window.close();
            }
        }
    }
    tracing::debug!("Host command channel closed");
}

/// Call `play()` on the video element and report a rejected promise.
async fn start_playback() -> GateResult<()> {
    let script = format!(
        r#"
        const video = document.getElementById("{VIDEO_ELEMENT_ID}");
        if (!video) {{ return "video element missing"; }}
        try {{
            await video.play();
            return "ok";
        }} catch (e) {{
            return String(e);
        }}
        "#
    );

    let outcome = document::eval(&script)
        .join::<String>()
        .await
        .map_err(|e| GateError::PlaybackRejected(e.to_string()))?;

    if outcome == "ok" {
        tracing::debug!("Playback started");
        Ok(())
    } else {
        Err(GateError::PlaybackRejected(outcome))
    }
}

/// Read the video element's `currentTime`, in seconds.
pub async fn read_playback_position() -> GateResult<f64> {
    let script = format!(
        r#"
        const video = document.getElementById("{VIDEO_ELEMENT_ID}");
        return video ? video.currentTime : 0;
        "#
    );

    document::eval(&script)
        .join::<f64>()
        .await
        .map_err(|e| GateError::Script(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_are_forwarded_in_order() {
        let (host, mut rx) = DesktopHost::new();
        host.play().unwrap();
        host.close().unwrap();

        assert_eq!(rx.try_recv().unwrap(), HostCommand::Play);
        assert_eq!(rx.try_recv().unwrap(), HostCommand::Close);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_reports_unavailable() {
        let (host, rx) = DesktopHost::new();
        drop(rx);
        assert!(matches!(host.play(), Err(GateError::HostUnavailable)));
        assert!(matches!(host.close(), Err(GateError::HostUnavailable)));
    }
}
