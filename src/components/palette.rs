//! Colors shared by the canvas renderers.

/// Canvas background.
pub const BACKGROUND: &str = "#1a1a2e";
/// Idle bars and nodes.
pub const PURPLE: &str = "#8b5cf6";
/// Compared bars.
pub const YELLOW: &str = "#eab308";
/// Visited graph nodes.
pub const AMBER: &str = "#f59e0b";
/// Swaps and the search target.
pub const RED: &str = "#ef4444";
/// Sorted bars, search start and highlighted tree nodes.
pub const GREEN: &str = "#10b981";
/// Edges.
pub const GRAY: &str = "#6b7280";
/// Labels.
pub const WHITE: &str = "#ffffff";
