use std::time::Duration;

/// Handle for one scheduled settle.
///
/// Only the ticket issued by the most recent [`LatencyTimer::schedule`] call
/// is accepted by [`LatencyTimer::fire`]; anything older is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleTicket {
	generation: u64,
	deadline: Duration,
}

impl SettleTicket {
	/// Session clock reading at which this settle becomes due.
	#[must_use]
	pub fn deadline(&self) -> Duration {
		self.deadline
	}
}

/// Single-slot deferred settle, stamped with a generation counter.
#[derive(Debug, Default)]
pub(crate) struct LatencyTimer {
	generation: u64,
	pending: Option<SettleTicket>,
}

impl LatencyTimer {
	/// Replace any pending settle with a new one due at `deadline`.
	pub(crate) fn schedule(&mut self, deadline: Duration) -> SettleTicket {
		self.generation = self.generation.wrapping_add(1);
		let ticket = SettleTicket {
			generation: self.generation,
			deadline,
		};
		self.pending = Some(ticket);
		ticket
	}

	/// Drop the pending settle; tickets issued so far become stale.
	pub(crate) fn cancel(&mut self) {
		self.generation = self.generation.wrapping_add(1);
		self.pending = None;
	}

	pub(crate) fn pending(&self) -> Option<SettleTicket> {
		self.pending
	}

	/// The pending ticket if its deadline has been reached at `now`.
	pub(crate) fn due(&self, now: Duration) -> Option<SettleTicket> {
		self.pending.filter(|ticket| ticket.deadline <= now)
	}

	/// Consume `ticket` if it is the live one. Returns `false` for stale tickets.
	pub(crate) fn fire(&mut self, ticket: SettleTicket) -> bool {
		if ticket.generation != self.generation || self.pending != Some(ticket) {
			return false;
		}
		self.pending = None;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const MS_800: Duration = Duration::from_millis(800);

	#[test]
	fn newer_schedule_supersedes_older_ticket() {
		let mut timer = LatencyTimer::default();
		let first = timer.schedule(MS_800);
		let second = timer.schedule(MS_800 * 2);
		assert!(!timer.fire(first));
		assert!(timer.pending().is_some());
		assert!(timer.fire(second));
		assert_eq!(timer.pending(), None);
	}

	#[test]
	fn ticket_fires_once() {
		let mut timer = LatencyTimer::default();
		let ticket = timer.schedule(MS_800);
		assert!(timer.fire(ticket));
		assert!(!timer.fire(ticket));
	}

	#[test]
	fn cancel_invalidates_outstanding_ticket() {
		let mut timer = LatencyTimer::default();
		let ticket = timer.schedule(MS_800);
		timer.cancel();
		assert!(!timer.fire(ticket));
		assert_eq!(timer.pending(), None);
	}

	#[test]
	fn due_respects_deadline() {
		let mut timer = LatencyTimer::default();
		let ticket = timer.schedule(MS_800);
		assert_eq!(timer.due(Duration::from_millis(799)), None);
		assert_eq!(timer.due(MS_800), Some(ticket));
	}
}
