use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Manual-reset event.
///
/// Once set it stays set, waking every waiter, until [`ReadySignal::reset`].
/// Many `set` calls between two resets are observed as one.
#[derive(Debug, Default)]
pub struct ReadySignal {
	flag: Mutex<bool>,
	cond: Condvar,
}

impl ReadySignal {
	pub fn set(&self) {
		let mut flag = self.flag.lock();
		*flag = true;
		self.cond.notify_all();
	}

	pub fn reset(&self) {
		*self.flag.lock() = false;
	}

	pub fn is_set(&self) -> bool {
		*self.flag.lock()
	}

	/// Blocks until the signal is set or `timeout` elapses; returns whether it is set.
	pub fn wait_timeout(&self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		let mut flag = self.flag.lock();
		while !*flag {
			if self.cond.wait_until(&mut flag, deadline).timed_out() {
				break;
			}
		}
		*flag
	}
}
