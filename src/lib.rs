//! Floating-ball page backgrounds and the page's small interactive widgets,
//! independent of any particular rendering host.

pub mod advance;
pub mod app;
pub mod background;
pub mod ball;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod logging;
#[cfg(feature = "sdl")]
pub mod render;
pub mod simulation;
pub mod wall;
pub mod widgets;
pub mod world_gen;

pub use app::{App, FrameReport, Widgets};
pub use background::{BallsBackground, Mount, Overlay};
pub use ball::{Ball, BallId, BallStyle, Color};
pub use config::{AppConfig, BackgroundConfig, ContainerConfig, DisplayConfig, TransferConfig};
pub use coordinator::{MultiContainerBalls, Transfer};
pub use error::{Error, Result};
pub use simulation::{FrameSource, Interval, PacedFrames, ScriptedFrames};
pub use wall::Bounds;
