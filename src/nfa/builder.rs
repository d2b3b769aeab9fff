use super::{Fragment, Nfa, State, StateId};
use crate::Symbol;
use std::collections::HashMap;

/// Thompson construction.
///
/// The builder owns the arena in which every state of a construction
/// session is allocated. Each operation allocates fresh states and returns a
/// new [`Fragment`] with exactly one start and one accepting state.
///
/// Operations consuming fragments take them by value: the accepting state of
/// an operand is demoted to non-final when it is folded into the result.
pub struct Builder {
	/// States allocated so far, indexed by identity.
	states: Vec<State>,
}

impl Builder {
	/// Creates a new builder. State identities start at 0.
	pub fn new() -> Builder {
		Builder { states: Vec::new() }
	}

	/// Forgets every state allocated so far.
	///
	/// The next allocated state gets identity 0 again. Fragments obtained
	/// before the reset refer to discarded states and must not be used with
	/// this builder anymore.
	pub fn reset(&mut self) {
		log::trace!("reset after {} states", self.states.len());
		self.states.clear()
	}

	/// Number of states allocated since the last reset.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	pub fn state(&self, id: StateId) -> Option<&State> {
		self.states.get(id.index())
	}

	/// Turns the given fragment into a standalone automaton.
	///
	/// The arena is moved into the automaton and the builder is reset.
	pub fn finish(&mut self, fragment: Fragment) -> Nfa {
		let states = std::mem::take(&mut self.states);
		let nfa = Nfa::new(states, fragment);
		log::debug!(
			"finished NFA with {} reachable states out of {} and {} symbols",
			nfa.len(),
			nfa.arena_len(),
			nfa.alphabet().len()
		);
		nfa
	}

	/// Creates a new state.
	fn new_state(&mut self) -> StateId {
		let q = StateId::from_index(self.states.len());
		self.states.push(State::new(q));
		q
	}

	/// Creates a new final state.
	fn new_final_state(&mut self) -> StateId {
		let q = self.new_state();
		self.states[q.index()].set_final(true);
		q
	}

	fn add(&mut self, source: StateId, symbol: Symbol, target: StateId) {
		self.states[source.index()].add_transition(symbol, target)
	}

	/// Demotes the accepting state of a consumed fragment.
	fn demote(&mut self, q: StateId) {
		self.states[q.index()].set_final(false)
	}

	fn fragment(&self, start: StateId, accept: StateId) -> Fragment {
		Fragment::new(&self.states, start, accept)
	}

	/// Recognizes the single character `c`.
	pub fn literal(&mut self, c: char) -> Fragment {
		let i = self.new_state();
		let f = self.new_final_state();
		self.add(i, Symbol::Char(c), f);
		log::trace!("literal {:?}: {} -> {}", c, i, f);
		self.fragment(i, f)
	}

	/// Recognizes any single character of the given set.
	///
	/// An empty set gives a fragment whose accepting state cannot be
	/// reached, that is the empty language.
	pub fn char_class<C: IntoIterator<Item = char>>(&mut self, chars: C) -> Fragment {
		let i = self.new_state();
		let f = self.new_final_state();
		for c in chars {
			self.add(i, Symbol::Char(c), f);
		}

		log::trace!("class: {} -> {}", i, f);
		self.fragment(i, f)
	}

	/// Recognizes the empty word.
	pub fn epsilon(&mut self) -> Fragment {
		let i = self.new_state();
		let f = self.new_final_state();
		self.add(i, Symbol::Epsilon, f);
		log::trace!("epsilon: {} -> {}", i, f);
		self.fragment(i, f)
	}

	/// Recognizes exactly the word `s`.
	///
	/// The empty string gives the [`epsilon`](Self::epsilon) fragment.
	pub fn string(&mut self, s: &str) -> Fragment {
		let mut chars = s.chars();
		match chars.next() {
			Some(first) => {
				let mut a = self.literal(first);
				for c in chars {
					let b = self.literal(c);
					a = self.concat(a, b);
				}

				a
			}
			None => self.epsilon(),
		}
	}

	/// Recognizes the words of `a` followed by the words of `b`.
	pub fn concat(&mut self, a: Fragment, b: Fragment) -> Fragment {
		self.demote(a.accept());
		self.add(a.accept(), Symbol::Epsilon, b.start());
		log::trace!("concat: {} -> {}", a.start(), b.accept());
		self.fragment(a.start(), b.accept())
	}

	/// Recognizes the words of either `a` or `b`.
	pub fn union(&mut self, a: Fragment, b: Fragment) -> Fragment {
		let i = self.new_state();
		let f = self.new_final_state();

		self.add(i, Symbol::Epsilon, a.start());
		self.add(i, Symbol::Epsilon, b.start());

		self.demote(a.accept());
		self.demote(b.accept());
		self.add(a.accept(), Symbol::Epsilon, f);
		self.add(b.accept(), Symbol::Epsilon, f);

		log::trace!("union: {} -> {}", i, f);
		self.fragment(i, f)
	}

	/// Recognizes any number of repetitions of `a`, including none.
	pub fn star(&mut self, a: Fragment) -> Fragment {
		let i = self.new_state();
		let f = self.new_final_state();

		self.add(i, Symbol::Epsilon, a.start());
		self.add(i, Symbol::Epsilon, f);

		self.demote(a.accept());
		self.add(a.accept(), Symbol::Epsilon, a.start());
		self.add(a.accept(), Symbol::Epsilon, f);

		log::trace!("star: {} -> {}", i, f);
		self.fragment(i, f)
	}

	/// Recognizes one or more repetitions of `a`.
	///
	/// Built as `a` followed by the star of a copy of `a`. The copy has its
	/// own states, so the mandatory pass and the repetitions never share a
	/// subgraph.
	pub fn plus(&mut self, a: Fragment) -> Fragment {
		let copy = self.duplicate(&a);
		let repeat = self.star(copy);
		self.concat(a, repeat)
	}

	/// Recognizes the words of `a` and the empty word.
	pub fn optional(&mut self, a: Fragment) -> Fragment {
		let i = self.new_state();
		let f = self.new_final_state();

		self.add(i, Symbol::Epsilon, f);
		self.add(i, Symbol::Epsilon, a.start());

		self.demote(a.accept());
		self.add(a.accept(), Symbol::Epsilon, f);

		log::trace!("optional: {} -> {}", i, f);
		self.fragment(i, f)
	}

	/// Copies the subgraph of `a` onto fresh states.
	///
	/// States are copied in ascending identity order, so the copy keeps the
	/// relative numbering of the original.
	pub fn duplicate(&mut self, a: &Fragment) -> Fragment {
		let mut originals: Vec<StateId> = a.states().iter().cloned().collect();
		if !a.states().contains(&a.accept()) {
			originals.push(a.accept())
		}

		let mut map = HashMap::new();
		for q in &originals {
			let copy = self.new_state();
			let is_final = self.states[q.index()].is_final();
			self.states[copy.index()].set_final(is_final);
			map.insert(*q, copy);
		}

		for q in &originals {
			let edges: Vec<_> = self.states[q.index()].edges().collect();
			for (symbol, target) in edges {
				self.add(map[q], symbol, map[&target]);
			}
		}

		log::trace!("duplicate: {} -> {}", map[&a.start()], map[&a.accept()]);
		self.fragment(map[&a.start()], map[&a.accept()])
	}
}

impl Default for Builder {
	fn default() -> Self {
		Self::new()
	}
}
