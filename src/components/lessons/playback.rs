use crate::components::step_driver::StepDriver;
use crate::error::Result;

/// Cursor over the narrated steps of one lesson run.
#[derive(Debug)]
pub struct Playback {
	driver: StepDriver<usize>,
	current: Option<usize>,
}

impl Playback {
	pub fn new(delay_ms: u32) -> Self {
		Self {
			driver: StepDriver::new(delay_ms),
			current: None,
		}
	}

	/// Start walking `steps` steps from the top.
	pub fn play(&mut self, steps: usize) -> Result<()> {
		self.driver.start(0..steps)?;
		self.current = None;
		Ok(())
	}

	/// Advance to every step due at `now_ms`. Returns whether the cursor moved.
	pub fn tick(&mut self, now_ms: f64) -> bool {
		let mut moved = false;
		while let Some(step) = self.driver.poll(now_ms) {
			self.current = Some(step);
			moved = true;
		}
		moved
	}

	/// Jump to the last step of the active run.
	pub fn skip(&mut self) -> Option<usize> {
		if let Some(last) = self.driver.finish_now().pop() {
			self.current = Some(last);
		}
		self.current
	}

	pub fn reset(&mut self) {
		self.driver.cancel();
		self.current = None;
	}

	pub fn current(&self) -> Option<usize> {
		self.current
	}

	pub fn is_playing(&self) -> bool {
		self.driver.is_running()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::VisualizerError;

	#[test]
	fn walks_steps_in_order() {
		let mut playback = Playback::new(100);
		playback.play(3).unwrap();
		assert!(playback.tick(0.0));
		assert_eq!(playback.current(), Some(0));
		assert!(!playback.tick(50.0));
		assert!(playback.tick(100.0));
		assert_eq!(playback.current(), Some(1));
		assert_eq!(playback.play(3), Err(VisualizerError::AlreadyRunning));
		assert!(playback.tick(200.0));
		assert_eq!(playback.current(), Some(2));
		assert!(!playback.is_playing());
	}

	#[test]
	fn skip_and_reset() {
		let mut playback = Playback::new(1000);
		playback.play(5).unwrap();
		playback.tick(0.0);
		assert_eq!(playback.skip(), Some(4));
		assert!(!playback.is_playing());
		assert_eq!(playback.skip(), Some(4));
		playback.reset();
		assert_eq!(playback.current(), None);
		assert!(!playback.tick(10_000.0));
	}

	#[test]
	fn state_fits_reactive_storage() {
		fn assert_thread_safe<T: Send + Sync + 'static>() {}
		assert_thread_safe::<Playback>();
	}
}
