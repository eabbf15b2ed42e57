//! Phases and the state snapshot published to the view.

use serde::{Deserialize, Serialize};

/// Where the gate is in its linear flow.
///
/// ```text
/// Entry --enter--> Transition --(enter delay)--> Playing --end--> ExitStatic --(exit delay)--> Closed
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Warning screen with the ENTER control
    #[default]
    Entry,
    /// Static shown before playback starts
    Transition,
    /// Video is playing
    Playing,
    /// Static shown after playback, waiting to close
    ExitStatic,
    /// Close succeeded; terminal
    Closed,
}

impl Phase {
    /// Whether the static overlay belongs on screen in this phase.
    ///
    /// `Closed` keeps the static up: the window is going away and there is
    /// nothing left to reveal.
    pub fn shows_static(self) -> bool {
        matches!(self, Phase::Transition | Phase::ExitStatic | Phase::Closed)
    }

    /// Whether an end-of-playback signal is honoured in this phase.
    pub fn accepts_video_end(self) -> bool {
        matches!(self, Phase::Entry | Phase::Transition | Phase::Playing)
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Entry => "entry",
            Phase::Transition => "transition",
            Phase::Playing => "playing",
            Phase::ExitStatic => "exit-static",
            Phase::Closed => "closed",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of everything the page renders from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GateState {
    pub phase: Phase,
    /// Noise overlay visible
    pub show_static: bool,
    /// Overlay opacity, 1.0 whenever the static is shown
    pub static_intensity: f32,
    /// Warning screen visible; follows the last reported media position
    pub entry_visible: bool,
    /// Last position reported by the media element, in seconds
    pub playback_position: Option<f64>,
}

impl Default for GateState {
    fn default() -> Self {
        Self {
            phase: Phase::Entry,
            show_static: false,
            static_intensity: 0.0,
            entry_visible: true,
            playback_position: None,
        }
    }
}

impl GateState {
    /// Whether an ENTER activation is honoured.
    ///
    /// Besides the entry and transition phases, ENTER is live while the
    /// warning screen is still up after playback was requested: the media
    /// never reported progress, so playback did not start and the user may
    /// retry.
    pub fn accepts_enter(&self) -> bool {
        match self.phase {
            Phase::Entry | Phase::Transition => true,
            Phase::Playing => self.entry_visible,
            Phase::ExitStatic | Phase::Closed => false,
        }
    }

    pub(crate) fn raise_static(&mut self, phase: Phase) {
        self.phase = phase;
        self.show_static = true;
        self.static_intensity = 1.0;
    }

    /// Record a position report. Returns true if the snapshot changed.
    pub(crate) fn record_position(&mut self, seconds: f64) -> bool {
        let visible = !position_started(seconds);
        let same_position = self
            .playback_position
            .is_some_and(|prev| prev == seconds || (prev.is_nan() && seconds.is_nan()));
        if same_position && visible == self.entry_visible {
            return false;
        }
        self.playback_position = Some(seconds);
        self.entry_visible = visible;
        true
    }
}

/// A position counts as started once it is a positive, real number.
fn position_started(seconds: f64) -> bool {
    seconds.is_finite() && seconds > 0.0
}
