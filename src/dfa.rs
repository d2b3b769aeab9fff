use crate::{nfa::StateSet, symbol::DisplayChar};
use btree_slab::BTreeSet;
use std::{
	collections::{BTreeMap, HashMap, HashSet},
	convert::TryFrom,
	fmt,
};

mod minimize;
mod subset;

pub use subset::SubsetConverter;

/// Identity of a deterministic state.
///
/// Identities are assigned in discovery order and are displayed as the
/// state names `q0`, `q1`, etc.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct DetStateId(pub(crate) u32);

impl DetStateId {
	/// Panics if the index does not fit in an identity.
	pub(crate) fn from_index(index: usize) -> DetStateId {
		match u32::try_from(index) {
			Ok(i) => DetStateId(i),
			Err(_) => panic!("deterministic state identity overflow at index {}", index),
		}
	}

	pub fn index(&self) -> usize {
		self.0 as usize
	}
}

impl fmt::Display for DetStateId {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "q{}", self.0)
	}
}

/// State of a deterministic automaton.
///
/// Each state stands for a set of non deterministic states.
#[derive(Clone)]
pub struct DetState {
	id: DetStateId,

	/// Underlying non deterministic states.
	states: StateSet,

	accepting: bool,

	transitions: BTreeMap<char, DetStateId>,
}

impl DetState {
	pub(crate) fn new(id: DetStateId, states: StateSet, accepting: bool) -> Self {
		Self {
			id,
			states,
			accepting,
			transitions: BTreeMap::new(),
		}
	}

	pub fn id(&self) -> DetStateId {
		self.id
	}

	pub fn states(&self) -> &StateSet {
		&self.states
	}

	pub fn is_accepting(&self) -> bool {
		self.accepting
	}

	pub fn transitions(&self) -> &BTreeMap<char, DetStateId> {
		&self.transitions
	}
}

/// Deterministic epsilon-free automaton.
///
/// The start state is always `q0`. A missing transition means the input is
/// rejected: there is no explicit dead state.
pub struct Dfa {
	/// States, indexed by identity.
	states: Vec<DetState>,

	/// Maps each set of non deterministic states to its deterministic state.
	index: HashMap<StateSet, DetStateId>,

	alphabet: BTreeSet<char>,
}

impl Dfa {
	pub(crate) fn new(
		states: Vec<DetState>,
		index: HashMap<StateSet, DetStateId>,
		alphabet: BTreeSet<char>,
	) -> Self {
		debug_assert!(!states.is_empty());
		Self {
			states,
			index,
			alphabet,
		}
	}

	pub fn start(&self) -> DetStateId {
		DetStateId(0)
	}

	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	pub fn states(&self) -> &[DetState] {
		&self.states
	}

	pub fn state(&self, id: DetStateId) -> Option<&DetState> {
		self.states.get(id.index())
	}

	/// Accepting states, in discovery order.
	pub fn accepting(&self) -> impl Iterator<Item = DetStateId> + '_ {
		self.states
			.iter()
			.filter(|q| q.is_accepting())
			.map(DetState::id)
	}

	pub fn alphabet(&self) -> &BTreeSet<char> {
		&self.alphabet
	}

	/// The deterministic state standing for the given set, if any.
	pub fn find(&self, states: &StateSet) -> Option<DetStateId> {
		self.index.get(states).cloned()
	}

	pub fn transition(&self, source: DetStateId, c: char) -> Option<DetStateId> {
		self.state(source)
			.and_then(|q| q.transitions.get(&c))
			.cloned()
	}

	pub fn successors(&self, q: DetStateId) -> DetSuccessors<'_> {
		DetSuccessors::new(self.state(q).map(|q| &q.transitions))
	}

	pub fn reachable_states_from(&self, q: DetStateId) -> ReachableStates<'_> {
		ReachableStates::new(self, q)
	}

	/// Transition table: start state, accepting states, then one row per
	/// state and one column per symbol.
	pub fn table(&self) -> DisplayTable<'_> {
		DisplayTable(self)
	}

	/// One line per state giving the underlying non deterministic states.
	pub fn legend(&self) -> DisplayLegend<'_> {
		DisplayLegend(self)
	}

	pub fn dot_write<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()> {
		write!(f, "digraph {{\n")?;
		write!(f, "\trankdir=LR\n")?;

		for q in &self.states {
			if q.accepting {
				write!(f, "\t{} [ shape=doublecircle ]\n", q.id)?
			} else {
				write!(f, "\t{} [ shape=circle ]\n", q.id)?
			}
		}

		write!(f, "\tstart [ shape=point ]\n")?;
		write!(f, "\tstart -> {}\n", self.start())?;

		for q in &self.states {
			for (c, target) in &q.transitions {
				write!(f, "\t{} -> {} [ label=\"{}\" ]\n", q.id, target, DisplayChar(*c))?
			}
		}

		write!(f, "}}\n")
	}
}

pub struct DetSuccessors<'a> {
	inner: Option<std::collections::btree_map::Iter<'a, char, DetStateId>>,
}

impl<'a> DetSuccessors<'a> {
	pub fn new(map: Option<&'a BTreeMap<char, DetStateId>>) -> Self {
		Self {
			inner: map.map(|map| map.iter()),
		}
	}
}

impl<'a> Iterator for DetSuccessors<'a> {
	type Item = (char, DetStateId);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner
			.as_mut()
			.and_then(|inner| inner.next())
			.map(|(c, q)| (*c, *q))
	}
}

pub struct ReachableStates<'a> {
	aut: &'a Dfa,
	visited: HashSet<DetStateId>,
	stack: Vec<DetStateId>,
}

impl<'a> ReachableStates<'a> {
	fn new(aut: &'a Dfa, q: DetStateId) -> Self {
		Self {
			aut,
			visited: HashSet::new(),
			stack: vec![q],
		}
	}
}

impl<'a> Iterator for ReachableStates<'a> {
	type Item = DetStateId;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			match self.stack.pop() {
				Some(q) => {
					if self.visited.insert(q) {
						for (_, target) in self.aut.successors(q) {
							self.stack.push(target)
						}

						break Some(q);
					}
				}
				None => break None,
			}
		}
	}
}

pub struct DisplayTable<'a>(&'a Dfa);

impl<'a> fmt::Display for DisplayTable<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		use itertools::Itertools;
		let aut = self.0;

		write!(f, "start: {}\n", aut.start())?;

		let mut accepting = aut.accepting().peekable();
		if accepting.peek().is_some() {
			write!(f, "accepting: {}\n", accepting.format(", "))?;
		} else {
			write!(f, "accepting: -\n")?;
		}

		write!(f, "state")?;
		for c in &aut.alphabet {
			write!(f, "\t{}", DisplayChar(*c))?;
		}
		write!(f, "\n")?;

		for q in &aut.states {
			write!(f, "{}", q.id)?;
			for c in &aut.alphabet {
				match q.transitions.get(c) {
					Some(target) => write!(f, "\t{}", target)?,
					None => write!(f, "\t-")?,
				}
			}
			write!(f, "\n")?;
		}

		Ok(())
	}
}

pub struct DisplayLegend<'a>(&'a Dfa);

impl<'a> fmt::Display for DisplayLegend<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		use itertools::Itertools;

		for q in &self.0.states {
			write!(
				f,
				"{} = {{{}}}\n",
				q.id,
				q.states.iter().map(|r| u32::from(*r)).format(", ")
			)?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::DetStateId;

	#[cfg(target_pointer_width = "64")]
	#[test]
	#[should_panic]
	fn from_index_overflow() {
		DetStateId::from_index(u32::MAX as usize + 1);
	}
}
