//! Gate controller: owns the gate state and its two timers.
//!
//! The controller reacts to three inputs from the page (ENTER, media end,
//! position reports) and to its own timers. Each timer is a tokio task whose
//! abort handle the controller keeps, so re-entry and teardown cancel it.
//! Timer tasks only hold a weak reference to the controller; once the last
//! [`GateController`] is dropped, pending timers are aborted and never fire.
//!
//! State is published through a [`tokio::sync::watch`] channel so the view
//! can re-render on change.
//!
//! Must be used from within a tokio runtime.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use crate::config::GateConfig;
use crate::host::MediaHost;
use crate::state::{GateState, Phase};

/// Handle to a running gate. Cheap to clone; all clones share one state.
pub struct GateController<H> {
    inner: Arc<Inner<H>>,
}

impl<H> Clone for GateController<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<H> {
    host: H,
    config: GateConfig,
    state: watch::Sender<GateState>,
    timers: Mutex<Timers>,
}

/// Pending timers. A generation counter per timer lets a task that already
/// woke up detect that it was superseded before it got the lock.
#[derive(Default)]
struct Timers {
    enter: Option<AbortHandle>,
    enter_generation: u64,
    exit: Option<AbortHandle>,
    exit_generation: u64,
    shut_down: bool,
}

impl Timers {
    fn cancel_enter(&mut self) -> bool {
        self.enter_generation += 1;
        match self.enter.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    fn cancel_exit(&mut self) -> bool {
        self.exit_generation += 1;
        match self.exit.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

impl<H> Drop for Inner<H> {
    fn drop(&mut self) {
        let timers = self.timers.get_mut();
        timers.cancel_enter();
        timers.cancel_exit();
    }
}

impl<H: MediaHost> GateController<H> {
    pub fn new(config: GateConfig, host: H) -> Self {
        let (state, _) = watch::channel(GateState::default());
        Self {
            inner: Arc::new(Inner {
                host,
                config,
                state,
                timers: Mutex::new(Timers::default()),
            }),
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.inner.config
    }

    pub fn host(&self) -> &H {
        &self.inner.host
    }

    /// Current state snapshot.
    pub fn state(&self) -> GateState {
        self.inner.state.borrow().clone()
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.borrow().phase
    }

    /// Receive every published state change.
    pub fn subscribe(&self) -> watch::Receiver<GateState> {
        self.inner.state.subscribe()
    }

    pub fn has_pending_enter(&self) -> bool {
        self.inner.timers.lock().enter.is_some()
    }

    pub fn has_pending_exit(&self) -> bool {
        self.inner.timers.lock().exit.is_some()
    }

    /// ENTER activated: raise the static and schedule playback.
    ///
    /// A second activation during the transition restarts the delay rather
    /// than stacking another timer. After playback was requested, ENTER is
    /// honoured again only while the warning screen is still up, which is
    /// how a rejected play gets retried.
    pub fn on_enter(&self) {
        let mut timers = self.inner.timers.lock();
        if timers.shut_down {
            tracing::debug!("Ignoring enter after shutdown");
            return;
        }

        let (accepted, phase) = {
            let state = self.inner.state.borrow();
            (state.accepts_enter(), state.phase)
        };
        if !accepted {
            tracing::debug!("Ignoring enter in phase {}", phase);
            return;
        }
        if phase == Phase::Playing {
            tracing::info!("Enter clicked again before playback started, retrying");
        }

        if timers.cancel_enter() {
            tracing::debug!("Enter re-activated, restarting transition");
        }

        self.inner
            .state
            .send_modify(|state| state.raise_static(Phase::Transition));

        let delay = self.inner.config.enter_delay();
        let generation = timers.enter_generation;
        let weak = Arc::downgrade(&self.inner);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fire(weak, |inner| inner.finish_transition(generation));
        });
        timers.enter = Some(task.abort_handle());

        tracing::info!("Gate entered, static for {:?} before playback", delay);
    }

    /// Media reported end of stream: raise the static and schedule close.
    pub fn on_video_end(&self) {
        let mut timers = self.inner.timers.lock();
        if timers.shut_down {
            tracing::debug!("Ignoring video end after shutdown");
            return;
        }

        let phase = self.phase();
        if !phase.accepts_video_end() {
            tracing::debug!("Ignoring video end in phase {}", phase);
            return;
        }

        if timers.cancel_enter() {
            tracing::debug!("Video ended during transition, dropping pending playback");
        }
        timers.cancel_exit();

        self.inner
            .state
            .send_modify(|state| state.raise_static(Phase::ExitStatic));

        let delay = self.inner.config.exit_delay();
        let generation = timers.exit_generation;
        let weak = Arc::downgrade(&self.inner);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fire(weak, |inner| inner.finish_exit(generation));
        });
        timers.exit = Some(task.abort_handle());

        tracing::info!("Video ended, static for {:?} before close", delay);
    }

    /// Media reported its current position, in seconds.
    ///
    /// Subscribers are notified whenever the position or the warning
    /// screen's visibility changes; a repeated identical report is silent.
    pub fn on_position(&self, seconds: f64) {
        if self.inner.timers.lock().shut_down {
            return;
        }

        self.inner.state.send_if_modified(|state| {
            let was_visible = state.entry_visible;
            let changed = state.record_position(seconds);
            if was_visible != state.entry_visible {
                tracing::debug!(
                    "Playback position {:.3}s, entry screen visible: {}",
                    seconds,
                    state.entry_visible
                );
            }
            changed
        });
    }

    /// Cancel pending timers and ignore all further input.
    pub fn shutdown(&self) {
        let mut timers = self.inner.timers.lock();
        if timers.shut_down {
            return;
        }
        timers.shut_down = true;
        let enter = timers.cancel_enter();
        let exit = timers.cancel_exit();
        tracing::debug!(
            "Gate shut down (cancelled enter timer: {}, exit timer: {})",
            enter,
            exit
        );
    }
}

fn fire<H>(weak: Weak<Inner<H>>, action: impl FnOnce(&Inner<H>)) {
    if let Some(inner) = weak.upgrade() {
        action(&inner);
    }
}

impl<H: MediaHost> Inner<H> {
    fn finish_transition(&self, generation: u64) {
        let mut timers = self.timers.lock();
        if timers.shut_down || timers.enter_generation != generation {
            return;
        }
        timers.enter = None;

        if let Err(e) = self.host.play() {
            tracing::warn!("Failed to start playback: {}", e);
        }

        self.state.send_modify(|state| {
            state.phase = Phase::Playing;
            state.show_static = false;
        });
        tracing::info!("Transition complete, playback requested");
    }

    fn finish_exit(&self, generation: u64) {
        let mut timers = self.timers.lock();
        if timers.shut_down || timers.exit_generation != generation {
            return;
        }
        timers.exit = None;

        match self.host.close() {
            Ok(()) => {
                self.state.send_modify(|state| state.phase = Phase::Closed);
                tracing::info!("Close requested");
            }
            Err(e) => {
                tracing::warn!("Failed to close window: {}", e);
            }
        }
    }
}
