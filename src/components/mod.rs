//! Visualizers, lessons and games, each with its pure logic beside its view.

/// Canvas sizing and the animation-frame loop.
pub mod canvas;
/// Small shared widgets: legends and stat cards.
pub mod controls;
/// Graph search visualizer.
pub mod graph;
/// Step-played algorithm lessons.
pub mod lessons;
/// Keyword-driven mentor chat.
pub mod mentor;
/// Fill colors shared by the canvas renderers.
pub mod palette;
/// Scored data-structure games.
pub mod practice;
/// Coding problems checked against reference solutions.
pub mod problems;
/// Sorting visualizer.
pub mod sorting;
/// Paced release of precomputed algorithm events.
pub mod step_driver;
/// Binary search tree visualizer.
pub mod tree;
