use crate::{dfa, Dfa, Symbol};
use btree_slab::BTreeSet;
use std::fmt;

mod builder;
mod fragment;
mod state;

pub use builder::*;
pub use fragment::*;
pub use state::*;

/// Set of non deterministic states.
///
/// Sets are sorted and deduplicated, so two sets holding the same states
/// are equal and hash identically whatever the order of insertion.
pub type StateSet = BTreeSet<StateId>;

/// Non deterministic automaton with epsilon-transitions.
///
/// Produced by [`Builder::finish`]. It owns every state allocated during the
/// construction session, but only the states reachable from the root
/// fragment's start state are part of the automaton.
pub struct Nfa {
	/// Arena of the construction session.
	states: Vec<State>,

	/// Root fragment.
	root: Fragment,
}

impl Nfa {
	pub(crate) fn new(states: Vec<State>, root: Fragment) -> Nfa {
		Nfa { states, root }
	}

	pub fn start(&self) -> StateId {
		self.root.start()
	}

	/// The designated accepting state.
	pub fn accept(&self) -> StateId {
		self.root.accept()
	}

	/// Non-epsilon symbols used by the automaton.
	pub fn alphabet(&self) -> &BTreeSet<char> {
		self.root.alphabet()
	}

	/// Reachable states.
	pub fn states(&self) -> &StateSet {
		self.root.states()
	}

	/// Number of reachable states.
	pub fn len(&self) -> usize {
		self.root.len()
	}

	pub fn is_empty(&self) -> bool {
		self.root.is_empty()
	}

	/// Number of states allocated during the construction session,
	/// reachable or not.
	pub(crate) fn arena_len(&self) -> usize {
		self.states.len()
	}

	pub fn state(&self, id: StateId) -> Option<&State> {
		self.states.get(id.index())
	}

	/// States reachable from `states` through epsilon-transitions only,
	/// `states` included.
	pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
		let mut closure = BTreeSet::new();
		let mut stack: Vec<StateId> = states.iter().cloned().collect();

		while let Some(q) = stack.pop() {
			if closure.insert(q) {
				for t in self.states[q.index()].targets(Symbol::Epsilon) {
					if !closure.contains(t) {
						stack.push(*t)
					}
				}
			}
		}

		debug_assert!(closure.len() <= self.states.len());
		closure
	}

	/// Direct successors of `states` under the character `c`.
	pub fn move_on(&self, states: &StateSet, c: char) -> StateSet {
		let mut result = BTreeSet::new();
		for q in states {
			result.extend(self.states[q.index()].targets(Symbol::Char(c)).iter().cloned())
		}

		result
	}

	/// Checks if the given set contains a final state.
	///
	/// The designated accepting state counts as final even if it has been
	/// demoted.
	pub fn is_accepting(&self, states: &StateSet) -> bool {
		states
			.iter()
			.any(|q| *q == self.accept() || self.states[q.index()].is_final())
	}

	/// Derives an equivalent deterministic automaton.
	pub fn determinize(&self) -> Dfa {
		dfa::SubsetConverter::new(self).convert()
	}

	/// Text dump of the automaton: start and accepting states, then one
	/// line per transition.
	pub fn dump(&self) -> DisplayNfa<'_> {
		DisplayNfa(self)
	}

	pub fn dot_write<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()> {
		write!(f, "digraph {{\n")?;
		write!(f, "\trankdir=LR\n")?;

		for q in self.states() {
			if self.states[q.index()].is_final() {
				write!(f, "\t{} [ shape=doublecircle ]\n", q)?
			} else {
				write!(f, "\t{} [ shape=circle ]\n", q)?
			}
		}

		write!(f, "\tstart [ shape=point ]\n")?;
		write!(f, "\tstart -> {}\n", self.start())?;

		for q in self.states() {
			for (symbol, target) in self.states[q.index()].edges() {
				write!(f, "\t{} -> {} [ label=\"{}\" ]\n", q, target, symbol)?
			}
		}

		write!(f, "}}\n")
	}
}

pub struct DisplayNfa<'a>(&'a Nfa);

impl<'a> fmt::Display for DisplayNfa<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let nfa = self.0;
		write!(f, "start: {}\n", nfa.start())?;
		write!(f, "accept: {}\n", nfa.accept())?;

		for q in nfa.states() {
			for (symbol, target) in nfa.states[q.index()].edges() {
				write!(f, "{} --{}--> {}\n", q, symbol, target)?
			}
		}

		Ok(())
	}
}
