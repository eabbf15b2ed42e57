//! The media capability the controller drives.
//!
//! The controller never touches a DOM or a window directly. It asks a
//! [`MediaHost`] to start playback and to close the window, which keeps the
//! state machine testable with a recording host.

use std::sync::Arc;

use crate::error::GateResult;

/// Start playback and close the hosting window.
///
/// Calls are made from timer tasks while the controller holds its timer
/// lock, so implementations must not call back into the controller
/// synchronously.
pub trait MediaHost: Send + Sync + 'static {
    /// Ask the media element to begin playback.
    fn play(&self) -> GateResult<()>;

    /// Close the window hosting the page.
    fn close(&self) -> GateResult<()>;
}

impl<T: MediaHost> MediaHost for Arc<T> {
    fn play(&self) -> GateResult<()> {
        (**self).play()
    }

    fn close(&self) -> GateResult<()> {
        (**self).close()
    }
}
