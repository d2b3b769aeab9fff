use crate::Symbol;
use std::{convert::TryFrom, fmt};

/// Identity of a non deterministic state.
///
/// Identities are handed out by a [`Builder`](crate::Builder) in increasing
/// order, starting from 0, and double as indexes in the builder's arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct StateId(pub(crate) u32);

impl StateId {
	/// Identity of the state stored at `index` in the arena.
	///
	/// Panics if the index does not fit in an identity.
	pub(crate) fn from_index(index: usize) -> StateId {
		match u32::try_from(index) {
			Ok(i) => StateId(i),
			Err(_) => panic!("state identity overflow at index {}", index),
		}
	}

	pub fn index(&self) -> usize {
		self.0 as usize
	}
}

impl From<StateId> for u32 {
	fn from(id: StateId) -> u32 {
		id.0
	}
}

impl fmt::Display for StateId {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "q{}", self.0)
	}
}

/// State of a non deterministic automaton.
#[derive(Clone)]
pub struct State {
	id: StateId,

	is_final: bool,

	/// Outgoing transitions, grouped by symbol in the order the symbols
	/// were first used.
	transitions: Vec<(Symbol, Vec<StateId>)>,
}

impl State {
	pub(crate) fn new(id: StateId) -> State {
		State {
			id,
			is_final: false,
			transitions: Vec::new(),
		}
	}

	pub fn id(&self) -> StateId {
		self.id
	}

	pub fn is_final(&self) -> bool {
		self.is_final
	}

	pub(crate) fn set_final(&mut self, is_final: bool) {
		self.is_final = is_final
	}

	/// Appends `target` to the successors of this state under `symbol`.
	pub fn add_transition(&mut self, symbol: Symbol, target: StateId) {
		match self.transitions.iter_mut().find(|(s, _)| *s == symbol) {
			Some((_, targets)) => targets.push(target),
			None => self.transitions.push((symbol, vec![target])),
		}
	}

	/// Successors of this state under the given symbol.
	pub fn targets(&self, symbol: Symbol) -> &[StateId] {
		self.transitions
			.iter()
			.find(|(s, _)| *s == symbol)
			.map(|(_, targets)| targets.as_slice())
			.unwrap_or(&[])
	}

	pub fn transitions(&self) -> impl Iterator<Item = (Symbol, &[StateId])> + '_ {
		self.transitions
			.iter()
			.map(|(symbol, targets)| (*symbol, targets.as_slice()))
	}

	/// Iterates over every `(symbol, target)` pair, one per edge.
	pub fn edges(&self) -> impl Iterator<Item = (Symbol, StateId)> + '_ {
		self.transitions
			.iter()
			.flat_map(|(symbol, targets)| targets.iter().map(move |t| (*symbol, *t)))
	}
}

#[cfg(test)]
mod tests {
	use super::StateId;

	#[test]
	fn from_index() {
		assert_eq!(StateId::from_index(7).index(), 7);
		assert_eq!(u32::from(StateId::from_index(u32::MAX as usize)), u32::MAX);
	}

	#[cfg(target_pointer_width = "64")]
	#[test]
	#[should_panic]
	fn from_index_overflow() {
		StateId::from_index(u32::MAX as usize + 1);
	}
}
