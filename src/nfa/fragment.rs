use super::{State, StateId, StateSet};
use btree_slab::BTreeSet;
use std::collections::VecDeque;

/// Single-entry, single-exit piece of a non deterministic automaton.
///
/// A fragment cannot be cloned: composing it with
/// [`Builder`](crate::Builder) operations consumes it, since composition
/// demotes its accepting state. Using a fragment after it has been folded
/// into a larger one is therefore rejected at compile time.
pub struct Fragment {
	start: StateId,
	accept: StateId,

	/// States reachable from `start`, at construction time.
	states: StateSet,

	/// Non-epsilon symbols labelling the transitions of `states`.
	alphabet: BTreeSet<char>,
}

impl Fragment {
	/// Collects the states reachable from `start` in the given arena.
	///
	/// The traversal is breadth-first and visits each state once, so it
	/// terminates on the epsilon cycles introduced by `star`.
	pub(crate) fn new(arena: &[State], start: StateId, accept: StateId) -> Fragment {
		let mut states = BTreeSet::new();
		let mut alphabet = BTreeSet::new();
		let mut queue = VecDeque::new();
		queue.push_back(start);

		while let Some(q) = queue.pop_front() {
			if states.insert(q) {
				for (symbol, target) in arena[q.index()].edges() {
					if let Some(c) = symbol.as_char() {
						alphabet.insert(c);
					}

					if !states.contains(&target) {
						queue.push_back(target)
					}
				}
			}
		}

		Fragment {
			start,
			accept,
			states,
			alphabet,
		}
	}

	pub fn start(&self) -> StateId {
		self.start
	}

	pub fn accept(&self) -> StateId {
		self.accept
	}

	pub fn states(&self) -> &StateSet {
		&self.states
	}

	pub fn alphabet(&self) -> &BTreeSet<char> {
		&self.alphabet
	}

	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}
}
