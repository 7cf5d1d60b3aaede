pub mod package;
pub mod visualizer;
