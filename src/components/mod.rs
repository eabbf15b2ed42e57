//! Reusable UI components for the gate page.

mod static_overlay;
mod video_stage;
mod warning_screen;

pub use static_overlay::StaticOverlay;
pub use video_stage::VideoStage;
pub use warning_screen::WarningScreen;
