use std::collections::VecDeque;

use log::{debug, warn};

use crate::error::{Result, VisualizerError};

/// How far the release clock may trail the frame clock before it is pulled
/// forward; bounds the burst after a stalled frame or a hidden tab.
const MAX_LAG_MS: f64 = 250.0;

/// Lifecycle of a single driver instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriverState {
	/// No run queued.
	#[default]
	Idle,
	/// Releasing events on every elapsed interval.
	Running,
	/// A run is queued but held.
	Paused,
}

/// Releases the events of one algorithm run at a human-perceptible pace.
///
/// Algorithms produce their full event trace up front; the driver only
/// decides *when* each event becomes visible. At most one run is active at a
/// time: `start` while running is rejected and leaves the active run as is.
#[derive(Debug)]
pub struct StepDriver<E> {
	pending: VecDeque<E>,
	state: DriverState,
	delay_ms: f64,
	multiplier: f64,
	last_release: Option<f64>,
	released: usize,
}

impl<E> StepDriver<E> {
	/// An idle driver spacing events `delay_ms` apart.
	pub fn new(delay_ms: u32) -> Self {
		Self {
			pending: VecDeque::new(),
			state: DriverState::Idle,
			delay_ms: delay_ms as f64,
			multiplier: 1.0,
			last_release: None,
			released: 0,
		}
	}

	/// Queue a new run. Fails with `AlreadyRunning` if a run is in flight.
	pub fn start(&mut self, events: impl IntoIterator<Item = E>) -> Result<()> {
		if self.state != DriverState::Idle {
			warn!("Rejected start: run of {} steps still pending", self.pending.len());
			return Err(VisualizerError::AlreadyRunning);
		}
		self.pending = events.into_iter().collect();
		self.released = 0;
		self.last_release = None;
		if self.pending.is_empty() {
			return Ok(());
		}
		debug!("Starting run with {} steps", self.pending.len());
		self.state = DriverState::Running;
		Ok(())
	}

	/// Release the next event if its pacing interval has elapsed.
	///
	/// The release clock advances by whole intervals rather than snapping to
	/// `now_ms`, so polling in a loop on each frame drains every due event and
	/// frame granularity does not stretch the run.
	pub fn poll(&mut self, now_ms: f64) -> Option<E> {
		if self.state != DriverState::Running {
			return None;
		}
		let interval = self.step_interval();
		if let Some(last) = self.last_release {
			if now_ms - last < interval {
				return None;
			}
		}
		let event = self.pending.pop_front();
		self.last_release = Some(
			self.last_release
				.map_or(now_ms, |last| (last + interval).max(now_ms - MAX_LAG_MS)),
		);
		if event.is_some() {
			self.released += 1;
		}
		if self.pending.is_empty() {
			debug!("Run finished after {} steps", self.released);
			self.state = DriverState::Idle;
		}
		event
	}

	/// Release every remaining event immediately.
	pub fn finish_now(&mut self) -> Vec<E> {
		if self.state == DriverState::Idle {
			return Vec::new();
		}
		let rest: Vec<E> = self.pending.drain(..).collect();
		self.released += rest.len();
		self.state = DriverState::Idle;
		rest
	}

	/// Hold the active run; `poll` releases nothing until `resume`.
	pub fn pause(&mut self) {
		if self.state == DriverState::Running {
			self.state = DriverState::Paused;
		}
	}

	/// Resume a paused run. The next event waits a full interval.
	pub fn resume(&mut self, now_ms: f64) {
		if self.state == DriverState::Paused {
			self.state = DriverState::Running;
			self.last_release = Some(now_ms);
		}
	}

	/// Abort the active run; no stale events are delivered afterwards.
	pub fn cancel(&mut self) {
		if self.state != DriverState::Idle {
			debug!("Cancelled run with {} steps left", self.pending.len());
		}
		self.pending.clear();
		self.state = DriverState::Idle;
		self.last_release = None;
	}

	/// Base delay between events, applied from the next release on.
	pub fn set_delay(&mut self, delay_ms: u32) {
		self.delay_ms = delay_ms as f64;
	}

	/// Playback speed factor dividing the delay. Must be finite and positive.
	pub fn set_multiplier(&mut self, multiplier: f64) -> Result<()> {
		if !multiplier.is_finite() || multiplier <= 0.0 {
			return Err(VisualizerError::InvalidMultiplier(multiplier));
		}
		self.multiplier = multiplier;
		Ok(())
	}

	/// Milliseconds between two released events.
	pub fn step_interval(&self) -> f64 {
		self.delay_ms / self.multiplier
	}

	/// Current lifecycle state.
	pub fn state(&self) -> DriverState {
		self.state
	}

	/// True while a run is queued, paused or not.
	pub fn is_running(&self) -> bool {
		self.state != DriverState::Idle
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn drain(driver: &mut StepDriver<u32>) -> Vec<u32> {
		let mut out = Vec::new();
		let mut now = 0.0;
		while driver.is_running() {
			if let Some(e) = driver.poll(now) {
				out.push(e);
			}
			now += 10.0;
		}
		out
	}

	#[test]
	fn releases_events_at_pace() {
		let mut driver = StepDriver::new(100);
		driver.start([1, 2, 3]).unwrap();
		assert_eq!(driver.state(), DriverState::Running);
		assert_eq!(driver.poll(0.0), Some(1));
		assert_eq!(driver.poll(50.0), None);
		assert_eq!(driver.poll(100.0), Some(2));
		assert_eq!(driver.poll(199.0), None);
		assert_eq!(driver.poll(200.0), Some(3));
		assert_eq!(driver.state(), DriverState::Idle);
		assert_eq!(driver.poll(1000.0), None);
	}

	#[test]
	fn multiplier_shortens_interval() {
		let mut driver: StepDriver<u8> = StepDriver::new(100);
		driver.set_multiplier(4.0).unwrap();
		assert_eq!(driver.step_interval(), 25.0);
		assert_eq!(
			driver.set_multiplier(0.0),
			Err(VisualizerError::InvalidMultiplier(0.0))
		);
		assert!(driver.set_multiplier(f64::NAN).is_err());
		assert_eq!(driver.step_interval(), 25.0);
	}

	#[test]
	fn multiplier_change_applies_mid_run() {
		let mut driver = StepDriver::new(100);
		driver.start([1, 2, 3]).unwrap();
		assert_eq!(driver.poll(0.0), Some(1));
		driver.set_multiplier(2.0).unwrap();
		assert_eq!(driver.poll(49.0), None);
		assert_eq!(driver.poll(50.0), Some(2));
		driver.set_multiplier(0.5).unwrap();
		assert_eq!(driver.poll(200.0), None);
		assert_eq!(driver.poll(250.0), Some(3));
	}

	#[test]
	fn second_start_does_not_disturb_active_run() {
		let mut driver = StepDriver::new(10);
		driver.start(vec![1, 2, 3, 4]).unwrap();
		assert_eq!(driver.poll(0.0), Some(1));
		assert_eq!(driver.start(vec![99, 98]), Err(VisualizerError::AlreadyRunning));
		let mut rest = vec![1];
		rest.extend(drain(&mut driver));
		assert_eq!(rest, vec![1, 2, 3, 4]);
	}

	#[test]
	fn cancel_drops_pending_events() {
		let mut driver = StepDriver::new(10);
		driver.start(vec![1, 2, 3]).unwrap();
		assert_eq!(driver.poll(0.0), Some(1));
		driver.cancel();
		assert_eq!(driver.state(), DriverState::Idle);
		assert_eq!(driver.poll(100.0), None);
		assert!(driver.pending.is_empty());
		driver.start(vec![7]).unwrap();
		assert_eq!(driver.poll(200.0), Some(7));
	}

	#[test]
	fn pause_holds_events_until_resume() {
		let mut driver = StepDriver::new(10);
		driver.start(vec![1, 2]).unwrap();
		assert_eq!(driver.poll(0.0), Some(1));
		driver.pause();
		assert_eq!(driver.poll(500.0), None);
		assert!(driver.is_running());
		assert_eq!(driver.start(vec![5]), Err(VisualizerError::AlreadyRunning));
		driver.resume(500.0);
		assert_eq!(driver.poll(505.0), None);
		assert_eq!(driver.poll(510.0), Some(2));
	}

	#[test]
	fn empty_run_stays_idle() {
		let mut driver: StepDriver<u8> = StepDriver::new(10);
		driver.start(Vec::new()).unwrap();
		assert_eq!(driver.state(), DriverState::Idle);
		assert!(driver.finish_now().is_empty());
	}

	#[test]
	fn finish_now_drains_everything() {
		let mut driver = StepDriver::new(1000);
		driver.start(vec![1, 2, 3]).unwrap();
		assert_eq!(driver.poll(0.0), Some(1));
		assert_eq!(driver.finish_now(), vec![2, 3]);
		assert_eq!(driver.released, 3);
		assert!(!driver.is_running());
	}

	fn span_on_frame_grid(delay_ms: u32, steps: u32) -> f64 {
		let frame = 1000.0 / 60.0;
		let mut driver = StepDriver::new(delay_ms);
		driver.start(0..=steps).unwrap();
		let (mut first, mut last) = (None, 0.0);
		let mut now = 0.0;
		while driver.is_running() {
			while let Some(_) = driver.poll(now) {
				first.get_or_insert(now);
				last = now;
			}
			now += frame;
		}
		last - first.unwrap_or(0.0)
	}

	#[test]
	fn frame_polling_keeps_pace() {
		let frame = 1000.0 / 60.0;
		let fast = span_on_frame_grid(10, 100);
		assert!(fast >= 1000.0 - 1e-6 && fast <= 1000.0 + frame + 1e-6, "took {fast} ms");
		let slow = span_on_frame_grid(100, 100);
		assert!(slow >= 10_000.0 - 1e-6 && slow <= 10_000.0 + frame + 1e-6, "took {slow} ms");
	}

	#[test]
	fn stalled_frame_catches_up_within_lag() {
		let mut driver = StepDriver::new(100);
		driver.start(1..=6).unwrap();
		assert_eq!(driver.poll(0.0), Some(1));
		let mut burst = Vec::new();
		while let Some(e) = driver.poll(1000.0) {
			burst.push(e);
		}
		assert_eq!(burst, vec![2, 3, 4]);
		assert_eq!(driver.poll(1049.0), None);
		assert_eq!(driver.poll(1050.0), Some(5));
	}
}
