pub mod clock;
pub mod controls;
pub mod pipeline;
pub mod simulation;

pub use clock::{FrameClock, TimerHandle};
pub use controls::{BindingEffect, Control, ControlEcho, ParameterChange, ValueEcho};
pub use pipeline::{FrameDisplay, SimulationPlugin, SimulationSet};
pub use simulation::{SimulationState, TickStats};
