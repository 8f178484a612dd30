use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{RecognizerError, Result};
use crate::probe::ExecutableProbe;
use crate::signal::ReadySignal;

/// Default time [`Recognizer::end_line`] waits for outstanding work.
pub const DEFAULT_END_LINE_GRACE: Duration = Duration::from_secs(2);

const WORKER_THREAD_NAME: &str = "kerf-recognizer";

struct Job {
	key: Arc<str>,
	probe_text: String,
	generation: u64,
}

enum Worker {
	NotStarted,
	Running(JoinHandle<()>),
	/// Spawning failed; the recognizer never becomes usable.
	Unavailable,
	Stopped,
}

struct State {
	settled: FxHashMap<Arc<str>, bool>,
	/// Keys answered with the `false` placeholder until their job settles.
	pending: FxHashSet<Arc<str>>,
	/// Single-slot mailbox; a newer job replaces a queued one.
	queued: Option<Job>,
	in_flight: Option<(Arc<str>, u64)>,
	keys: FxHashSet<Arc<str>>,
	/// Bumped by every clear so results from older lines are dropped.
	generation: u64,
	/// Auto-reset wake flag for the worker.
	signaled: bool,
	zombie: bool,
	worker: Worker,
}

impl State {
	fn intern(&mut self, key: &str) -> Arc<str> {
		if let Some(existing) = self.keys.get(key) {
			return Arc::clone(existing);
		}
		let key: Arc<str> = Arc::from(key);
		self.keys.insert(Arc::clone(&key));
		key
	}

	fn is_busy(&self) -> bool {
		self.queued.is_some() || self.in_flight.is_some()
	}

	fn clear_entries(&mut self) {
		self.settled.clear();
		self.pending.clear();
		self.queued = None;
		self.keys.clear();
		self.generation = self.generation.wrapping_add(1);
	}
}

struct Shared {
	state: Mutex<State>,
	/// Wakes the worker when `signaled` or `zombie` changes.
	wake: Condvar,
	/// Notified whenever the worker finishes a job.
	idle: Condvar,
	ready: ReadySignal,
	probe: Box<dyn ExecutableProbe>,
}

/// Asynchronous cache answering "does this word name an executable?".
///
/// Lookups never block on the file system. An unknown word is queued for a
/// background probe and answered `false` until the worker settles it; the
/// [`ReadySignal`] then tells the caller to classify the line again.
///
/// The worker thread starts on the first [`Recognizer::enqueue`]. Dropping the
/// recognizer shuts it down and joins the worker.
pub struct Recognizer {
	shared: Arc<Shared>,
	end_line_grace: Duration,
}

impl std::fmt::Debug for Recognizer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.shared.state.lock();
		f.debug_struct("Recognizer")
			.field("settled", &state.settled.len())
			.field("pending", &state.pending.len())
			.field("queued", &state.queued.as_ref().map(|job| &job.key))
			.field("zombie", &state.zombie)
			.field("end_line_grace", &self.end_line_grace)
			.finish()
	}
}

impl Recognizer {
	pub fn new(probe: impl ExecutableProbe + 'static) -> Self {
		Self {
			shared: Arc::new(Shared {
				state: Mutex::new(State {
					settled: FxHashMap::default(),
					pending: FxHashSet::default(),
					queued: None,
					in_flight: None,
					keys: FxHashSet::default(),
					generation: 0,
					signaled: false,
					zombie: false,
					worker: Worker::NotStarted,
				}),
				wake: Condvar::new(),
				idle: Condvar::new(),
				ready: ReadySignal::default(),
				probe: Box::new(probe),
			}),
			end_line_grace: DEFAULT_END_LINE_GRACE,
		}
	}

	pub fn with_end_line_grace(mut self, grace: Duration) -> Self {
		self.end_line_grace = grace;
		self
	}

	/// Signal set each time a job settles.
	pub fn ready_signal(&self) -> &ReadySignal {
		&self.shared.ready
	}

	/// Looks up `key`: the settled answer, else `Some(false)` while pending.
	///
	/// Returns `None` for unknown keys and after shutdown.
	pub fn find(&self, key: &str) -> Option<bool> {
		let state = self.shared.state.lock();
		if state.zombie {
			return None;
		}
		if let Some(&found) = state.settled.get(key) {
			return Some(found);
		}
		state.pending.contains(key).then_some(false)
	}

	/// The settled answer for `key`, ignoring pending placeholders.
	pub fn settled(&self, key: &str) -> Option<bool> {
		let state = self.shared.state.lock();
		if state.zombie {
			return None;
		}
		state.settled.get(key).copied()
	}

	/// Returns true when no probe is queued or running.
	pub fn is_idle(&self) -> bool {
		!self.shared.state.lock().is_busy()
	}

	/// Queues a probe of `probe_text` whose answer is stored under `key`.
	///
	/// Returns the answer to use right now: the settled result if there is
	/// one, otherwise the `false` placeholder.
	pub fn enqueue(&self, key: &str, probe_text: &str) -> Result<bool> {
		let mut state = self.shared.state.lock();
		if state.zombie {
			return Err(RecognizerError::ShutDown);
		}
		if let Some(&found) = state.settled.get(key) {
			return Ok(found);
		}
		self.ensure_worker(&mut state)?;

		let key = state.intern(key);
		state.pending.insert(Arc::clone(&key));

		let generation = state.generation;
		if state
			.in_flight
			.as_ref()
			.is_some_and(|(active, active_gen)| *active == key && *active_gen == generation)
		{
			tracing::trace!(key = %key, "probe already in flight");
			return Ok(false);
		}

		if let Some(replaced) = state.queued.replace(Job {
			key: Arc::clone(&key),
			probe_text: probe_text.to_string(),
			generation,
		}) && replaced.key != key
		{
			tracing::trace!(replaced = %replaced.key, key = %key, "queued probe superseded");
		}
		state.signaled = true;
		self.shared.wake.notify_one();
		tracing::trace!(key = %key, "probe queued");
		Ok(false)
	}

	/// Drops every settled and pending entry and any queued job.
	///
	/// A probe already running completes, but its answer is discarded.
	pub fn clear(&self) {
		let mut state = self.shared.state.lock();
		state.clear_entries();
	}

	/// Waits up to the grace period for queued and in-flight probes, then clears.
	pub fn end_line(&self) {
		let deadline = Instant::now() + self.end_line_grace;
		let mut state = self.shared.state.lock();
		while state.is_busy() && !state.zombie && matches!(state.worker, Worker::Running(_)) {
			if self.shared.idle.wait_until(&mut state, deadline).timed_out() {
				tracing::debug!(grace_ms = self.end_line_grace.as_millis() as u64, "recognizer still busy at end of line");
				break;
			}
		}
		state.clear_entries();
	}

	/// Stops the worker and joins it. Later calls fail closed.
	pub fn shutdown(&self) {
		let handle = {
			let mut state = self.shared.state.lock();
			if state.zombie {
				return;
			}
			state.zombie = true;
			state.clear_entries();
			self.shared.wake.notify_all();
			self.shared.idle.notify_all();
			match std::mem::replace(&mut state.worker, Worker::Stopped) {
				Worker::Running(handle) => Some(handle),
				Worker::Unavailable => {
					state.worker = Worker::Unavailable;
					None
				}
				Worker::NotStarted | Worker::Stopped => None,
			}
		};

		if let Some(handle) = handle
			&& handle.join().is_err()
		{
			tracing::warn!("recognizer worker exited by panic");
		}
		tracing::debug!("recognizer shut down");
	}

	fn ensure_worker(&self, state: &mut State) -> Result<()> {
		match state.worker {
			Worker::Running(_) => Ok(()),
			Worker::Unavailable => Err(RecognizerError::Unavailable),
			Worker::Stopped => Err(RecognizerError::ShutDown),
			Worker::NotStarted => {
				let shared = Arc::clone(&self.shared);
				match thread::Builder::new()
					.name(WORKER_THREAD_NAME.into())
					.spawn(move || run_worker(&shared))
				{
					Ok(handle) => {
						tracing::debug!("recognizer worker started");
						state.worker = Worker::Running(handle);
						Ok(())
					}
					Err(error) => {
						tracing::warn!(%error, "failed to spawn recognizer worker; recognition disabled");
						state.worker = Worker::Unavailable;
						Err(RecognizerError::Unavailable)
					}
				}
			}
		}
	}

	/// Wakes the worker without queueing a job.
	#[cfg(test)]
	pub(crate) fn signal_worker(&self) {
		let mut state = self.shared.state.lock();
		state.signaled = true;
		self.shared.wake.notify_one();
	}

	#[cfg(test)]
	pub(crate) fn pending_len(&self) -> usize {
		self.shared.state.lock().pending.len()
	}

	/// Blocks until no job is queued or running, up to `timeout`.
	#[cfg(test)]
	pub(crate) fn wait_idle(&self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		let mut state = self.shared.state.lock();
		while state.is_busy() {
			if self.shared.idle.wait_until(&mut state, deadline).timed_out() {
				return false;
			}
		}
		true
	}
}

impl Drop for Recognizer {
	fn drop(&mut self) {
		self.shutdown();
	}
}

fn run_worker(shared: &Shared) {
	loop {
		let job = {
			let mut state = shared.state.lock();
			while !state.signaled && !state.zombie {
				shared.wake.wait(&mut state);
			}
			if state.zombie {
				break;
			}
			state.signaled = false;

			let Some(job) = state.queued.take() else {
				// Woken with nothing queued: every placeholder is stale.
				let stale = state.pending.len();
				state.pending.clear();
				tracing::trace!(stale, "recognizer woke without a job");
				continue;
			};
			state.in_flight = Some((Arc::clone(&job.key), job.generation));
			job
		};

		let found = match std::panic::catch_unwind(AssertUnwindSafe(|| shared.probe.is_executable(&job.probe_text))) {
			Ok(found) => found,
			Err(_) => {
				tracing::warn!(key = %job.key, "executable probe panicked");
				false
			}
		};
		tracing::debug!(key = %job.key, found, "probe settled");

		let stored = {
			let mut state = shared.state.lock();
			state.in_flight = None;
			shared.idle.notify_all();
			if state.zombie {
				break;
			}
			if job.generation == state.generation {
				state.pending.remove(&job.key);
				state.settled.insert(job.key, found);
				true
			} else {
				false
			}
		};
		if stored {
			shared.ready.set();
		}
	}
	tracing::debug!("recognizer worker stopped");
}
