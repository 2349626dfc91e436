//! Frame timing consumed by [SystemManager::update](crate::systems::SystemManager::update).

use std::time::{Duration, Instant};
use std::cell::Cell;

/// A source of frame timing.
pub trait Clock {
	/// Elapsed seconds since the previous frame, handed to update and late-update hooks.
	fn delta_time(&self) -> f32;

	/// A monotonic timestamp, only read to measure how long a system's hooks ran.
	fn now(&self) -> Duration;
}

/// A wall-clock [Clock] advanced once per frame with [tick](FrameClock::tick).
#[derive(Debug, Copy, Clone)]
pub struct FrameClock {
	origin: Instant,
	// The instant the current frame started
	instant: Instant,
	/// The time delta since the last frame
	delta: Duration,
	/// The total elapsed time since the first frame
	time: Duration,
	frame: u64,
}

impl FrameClock {
	/// Construct a new clock with delta and time set to `0`.
	pub fn new() -> Self {
		let now = Instant::now();
		Self {
			origin: now,
			instant: now,
			delta: Duration::ZERO,
			time: Duration::ZERO,
			frame: 0,
		}
	}

	/// Start the next frame, capturing the delta since the previous one.
	pub fn tick(&mut self) {
		let now = Instant::now();
		self.delta = now.duration_since(self.instant);
		self.instant = now;
		self.time += self.delta;
		self.frame += 1;
	}

	/// Restart delta measurement from now. Useful when the loop was paused.
	pub fn reset_now(&mut self) {
		self.instant = Instant::now();
		self.delta = Duration::ZERO;
	}

	pub fn delta(&self) -> Duration {
		self.delta
	}

	pub fn time(&self) -> Duration {
		self.time
	}

	/// Number of frames started with [tick](FrameClock::tick).
	pub fn frame(&self) -> u64 {
		self.frame
	}
}

impl Default for FrameClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for FrameClock {
	fn delta_time(&self) -> f32 {
		self.delta.as_secs_f32()
	}

	fn now(&self) -> Duration {
		self.origin.elapsed()
	}
}

/// A [Clock] driven entirely by the caller.
///
/// Both values live in cells so the clock can be advanced through a shared reference,
/// for instance from inside a hook that is being measured.
#[derive(Debug, Default)]
pub struct ManualClock {
	delta_time: Cell<f32>,
	now: Cell<Duration>,
}

impl ManualClock {
	pub fn new(delta_time: f32) -> Self {
		Self {
			delta_time: Cell::new(delta_time),
			now: Cell::new(Duration::ZERO),
		}
	}

	pub fn set_delta_time(&self, delta_time: f32) {
		self.delta_time.set(delta_time);
	}

	/// Move [now](Clock::now) forward by `by`.
	pub fn advance(&self, by: Duration) {
		self.now.set(self.now.get() + by);
	}
}

impl Clock for ManualClock {
	fn delta_time(&self) -> f32 {
		self.delta_time.get()
	}

	fn now(&self) -> Duration {
		self.now.get()
	}
}
