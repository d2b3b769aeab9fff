use super::{DetState, DetStateId, Dfa};
use crate::nfa::{Nfa, StateSet};
use btree_slab::BTreeSet;
use std::collections::{HashMap, VecDeque};

/// Subset construction.
///
/// Derives a deterministic automaton from a non deterministic one. Each
/// deterministic state is the epsilon-closure of a set of non deterministic
/// states, named in the order it is discovered.
pub struct SubsetConverter<'a> {
	nfa: &'a Nfa,

	/// States discovered so far.
	states: Vec<DetState>,

	index: HashMap<StateSet, DetStateId>,

	/// Discovered states whose transitions are not computed yet.
	queue: VecDeque<DetStateId>,
}

impl<'a> SubsetConverter<'a> {
	pub fn new(nfa: &'a Nfa) -> Self {
		Self {
			nfa,
			states: Vec::new(),
			index: HashMap::new(),
			queue: VecDeque::new(),
		}
	}

	/// Returns the state standing for `states`, creating and enqueuing it
	/// on first sight.
	fn discover(&mut self, states: StateSet) -> DetStateId {
		if let Some(q) = self.index.get(&states) {
			return *q;
		}

		let q = DetStateId::from_index(self.states.len());
		let accepting = self.nfa.is_accepting(&states);

		if log::log_enabled!(log::Level::Debug) {
			use itertools::Itertools;
			log::debug!(
				"discovered {} = {{{}}}{}",
				q,
				states.iter().format(","),
				if accepting { " (accepting)" } else { "" }
			);
		}

		self.index.insert(states.clone(), q);
		self.states.push(DetState::new(q, states, accepting));
		self.queue.push_back(q);
		q
	}

	pub fn convert(mut self) -> Dfa {
		let nfa = self.nfa;

		let mut initial = BTreeSet::new();
		initial.insert(nfa.start());
		self.discover(nfa.epsilon_closure(&initial));

		while let Some(q) = self.queue.pop_front() {
			let current = self.states[q.index()].states().clone();

			for c in nfa.alphabet() {
				let next = nfa.move_on(&current, *c);
				if next.is_empty() {
					continue;
				}

				let target = self.discover(nfa.epsilon_closure(&next));
				let previous = self.states[q.index()].transitions.insert(*c, target);
				debug_assert!(previous.is_none());
			}
		}

		log::debug!(
			"subset construction gave {} states from {} non deterministic states",
			self.states.len(),
			nfa.len()
		);

		Dfa::new(self.states, self.index, nfa.alphabet().clone())
	}
}
