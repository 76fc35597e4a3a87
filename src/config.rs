//! Tunables for the visualizers, provided to components through context.

use std::ops::RangeInclusive;

use leptos::prelude::*;

/// Playback multipliers offered next to the speed slider.
pub const PLAYBACK_RATES: [f64; 4] = [0.5, 1.0, 2.0, 4.0];

/// Pacing and data-generation settings shared by every visualizer.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualizerConfig {
	/// Allowed per-step delay in milliseconds.
	pub speed_range: RangeInclusive<u32>,
	/// Initial per-step delay in milliseconds.
	pub default_speed: u32,
	/// Allowed number of bars in the sorting view.
	pub array_size_range: RangeInclusive<usize>,
	/// Initial number of bars in the sorting view.
	pub default_array_size: usize,
	/// Bar values are drawn from `value_min..value_max`.
	pub value_min: u32,
	/// Exclusive upper bound for bar values.
	pub value_max: u32,
	/// Graph generation parameters.
	pub graph: GraphConfig,
	/// Width of every visualizer canvas.
	pub canvas_width: f64,
	/// Height of every visualizer canvas.
	pub canvas_height: f64,
	/// Delay between greedy and DP lesson steps in milliseconds.
	pub lesson_delay: u32,
	/// Delay between recursion lesson steps in milliseconds.
	pub recursion_delay: u32,
	/// Simulated typing delay of the mentor in milliseconds.
	pub mentor_delay: u32,
}

/// Parameters for random graph generation.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	/// Nodes per generated graph, labelled A, B, C...
	pub node_count: usize,
	/// Probability that any pair of nodes is connected.
	pub edge_probability: f64,
	/// Edge weights are drawn from this range.
	pub weight_range: RangeInclusive<u32>,
	/// Radius of the initial circular placement.
	pub radius: f64,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			node_count: 8,
			edge_probability: 0.4,
			weight_range: 1..=20,
			radius: 120.0,
		}
	}
}

impl Default for VisualizerConfig {
	fn default() -> Self {
		Self {
			speed_range: 10..=1000,
			default_speed: 100,
			array_size_range: 10..=100,
			default_array_size: 50,
			value_min: 10,
			value_max: 310,
			graph: GraphConfig::default(),
			canvas_width: 600.0,
			canvas_height: 400.0,
			lesson_delay: 1500,
			recursion_delay: 1000,
			mentor_delay: 1200,
		}
	}
}

impl VisualizerConfig {
	/// Clamp a requested delay into the configured speed range.
	pub fn clamp_speed(&self, ms: u32) -> u32 {
		ms.clamp(*self.speed_range.start(), *self.speed_range.end())
	}

	/// Clamp a requested array length into the configured size range.
	pub fn clamp_array_size(&self, len: usize) -> usize {
		len.clamp(*self.array_size_range.start(), *self.array_size_range.end())
	}
}

/// Fetch the config from context, falling back to defaults outside an `App`.
pub fn use_config() -> VisualizerConfig {
	use_context::<VisualizerConfig>().unwrap_or_default()
}

/// Parse integer form input. Blank or malformed text yields `None`.
pub fn parse_int(input: &str) -> Option<i64> {
	let trimmed = input.trim();
	if trimmed.is_empty() {
		return None;
	}
	trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_int_ignores_garbage() {
		assert_eq!(parse_int(" 42 "), Some(42));
		assert_eq!(parse_int("-7"), Some(-7));
		assert_eq!(parse_int(""), None);
		assert_eq!(parse_int("   "), None);
		assert_eq!(parse_int("4x"), None);
	}

	#[test]
	fn clamps_to_ranges() {
		let config = VisualizerConfig::default();
		assert_eq!(config.clamp_speed(1), 10);
		assert_eq!(config.clamp_speed(5000), 1000);
		assert_eq!(config.clamp_array_size(3), 10);
		assert_eq!(config.clamp_array_size(60), 60);
	}

	#[test]
	fn playback_rates_are_valid_multipliers() {
		for rate in PLAYBACK_RATES {
			assert!(rate.is_finite() && rate > 0.0);
		}
		assert!(PLAYBACK_RATES.contains(&1.0));
	}
}
