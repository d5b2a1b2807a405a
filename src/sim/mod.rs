mod simulation;
mod sink;

pub use simulation::Simulation;
pub use sink::{FrameWriter, GenerationSink, History, NullSink};
