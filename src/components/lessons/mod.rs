//! Step-played lessons on greedy, dynamic-programming and recursive algorithms.

mod component;
mod playback;
/// Dynamic-programming walkthroughs.
pub mod dynamic;
/// Greedy walkthroughs.
pub mod greedy;
/// Lesson catalogue and dispatch.
pub mod lesson;
/// Recursive walkthroughs.
pub mod recursion;

pub use component::LessonPlayer;
pub use lesson::{Family, Lesson, LessonRun};
