//! Property-based tests for the gate controller
//!
//! Drives the controller with arbitrary event sequences on a paused clock
//! and checks the invariants that must hold after every step.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;
use static_gate_core::{GateConfig, GateController, GateResult, MediaHost, Phase};

#[derive(Default)]
struct CountingHost {
    plays: AtomicUsize,
    closes: AtomicUsize,
}

impl MediaHost for CountingHost {
    fn play(&self) -> GateResult<()> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn close(&self) -> GateResult<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Strategy Generators
// ============================================================================

/// Inputs the page can feed into the controller
#[derive(Debug, Clone)]
enum GateOp {
    Enter,
    VideoEnd,
    Position(f64),
    Wait(u64),
    Shutdown,
}

fn gate_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<GateOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(GateOp::Enter),
            2 => Just(GateOp::VideoEnd),
            2 => (0.0..30.0f64).prop_map(GateOp::Position),
            4 => (0..4000u64).prop_map(GateOp::Wait),
            1 => Just(GateOp::Shutdown),
        ],
        0..max_ops,
    )
}

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .expect("runtime")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The overlay is up exactly in the phases that show static, playback is
    /// never requested more often than ENTER was clicked, and close happens
    /// at most once
    #[test]
    fn overlay_matches_phase(ops in gate_ops_strategy(40)) {
        let rt = paused_runtime();
        rt.block_on(async {
            let host = Arc::new(CountingHost::default());
            let gate = GateController::new(GateConfig::default(), Arc::clone(&host));
            let mut enters = 0;

            for op in ops {
                match op {
                    GateOp::Enter => {
                        enters += 1;
                        gate.on_enter();
                    }
                    GateOp::VideoEnd => gate.on_video_end(),
                    GateOp::Position(secs) => gate.on_position(secs),
                    GateOp::Wait(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
                    GateOp::Shutdown => gate.shutdown(),
                }

                let state = gate.state();
                prop_assert_eq!(state.show_static, state.phase.shows_static());
                if state.show_static {
                    prop_assert_eq!(state.static_intensity, 1.0);
                }
                let plays = host.plays.load(Ordering::SeqCst);
                prop_assert!(plays <= enters);
                prop_assert!(host.closes.load(Ordering::SeqCst) <= 1);
            }
            Ok(())
        })?;
    }

    /// The entry screen is visible iff the last reported position is zero
    #[test]
    fn entry_visibility_follows_position(positions in prop::collection::vec(
        prop_oneof![Just(0.0f64), 0.0..100.0f64],
        1..20,
    )) {
        let rt = paused_runtime();
        rt.block_on(async {
            let gate = GateController::new(GateConfig::default(), CountingHost::default());
            for secs in positions {
                gate.on_position(secs);
                prop_assert_eq!(gate.state().entry_visible, secs <= 0.0);
            }
            Ok(())
        })?;
    }

    /// Once closed, no further input changes the phase
    #[test]
    fn closed_is_terminal(ops in gate_ops_strategy(20)) {
        let rt = paused_runtime();
        rt.block_on(async {
            let gate = GateController::new(GateConfig::default(), CountingHost::default());
            gate.on_video_end();
            tokio::time::sleep(Duration::from_millis(3001)).await;
            prop_assert_eq!(gate.phase(), Phase::Closed);

            for op in ops {
                match op {
                    GateOp::Enter => gate.on_enter(),
                    GateOp::VideoEnd => gate.on_video_end(),
                    GateOp::Position(secs) => gate.on_position(secs),
                    GateOp::Wait(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
                    GateOp::Shutdown => gate.shutdown(),
                }
                prop_assert_eq!(gate.phase(), Phase::Closed);
            }
            Ok(())
        })?;
    }
}
