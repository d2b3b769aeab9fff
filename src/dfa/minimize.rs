use super::{DetState, DetStateId, Dfa};
use crate::nfa::StateSet;
use btree_slab::BTreeSet;
use std::collections::{HashMap, HashSet, VecDeque};

impl Dfa {
	/// Merges indistinguishable states.
	///
	/// Partition refinement starting from the accepting/non-accepting split.
	/// States from which no accepting state can be reached are dead: they
	/// are merged into the implicit dead state, and transitions leading to
	/// them are removed. A missing transition counts as a transition to that
	/// dead state. The resulting states are renamed in breadth-first order
	/// from the start state, and each one stands for the union of the sets of
	/// the states it merges.
	pub fn minimize(&self) -> Dfa {
		let live = self.live_states();
		let target_block = |blocks: &[usize], r: &DetStateId| {
			if live[r.index()] {
				Some(blocks[r.index()])
			} else {
				None
			}
		};

		let mut blocks: Vec<usize> = self
			.states
			.iter()
			.map(|q| {
				if q.accepting {
					1
				} else if live[q.id.index()] {
					0
				} else {
					2
				}
			})
			.collect();
		let mut count = blocks.iter().collect::<HashSet<_>>().len();

		loop {
			let mut signatures: HashMap<(usize, Vec<Option<usize>>), usize> = HashMap::new();
			let mut refined = Vec::with_capacity(blocks.len());

			for q in &self.states {
				let targets = self
					.alphabet
					.iter()
					.map(|c| q.transitions.get(c).and_then(|r| target_block(&blocks, r)))
					.collect();
				let next_block = signatures.len();
				let block = *signatures
					.entry((blocks[q.id.index()], targets))
					.or_insert(next_block);
				refined.push(block);
			}

			blocks = refined;
			if signatures.len() == count {
				break;
			}

			count = signatures.len();
		}

		// First member of each block.
		let mut representatives: HashMap<usize, usize> = HashMap::new();
		for (q, block) in blocks.iter().enumerate() {
			representatives.entry(*block).or_insert(q);
		}

		// Name the blocks in breadth-first order.
		let mut ids: HashMap<usize, DetStateId> = HashMap::new();
		let mut order = Vec::new();
		let mut queue = VecDeque::new();
		let start_block = blocks[self.start().index()];
		ids.insert(start_block, DetStateId::from_index(0));
		order.push(start_block);
		queue.push_back(start_block);

		while let Some(block) = queue.pop_front() {
			let representative = &self.states[representatives[&block]];
			for target in representative.transitions.values() {
				if !live[target.index()] {
					continue;
				}

				let target_block = blocks[target.index()];
				if !ids.contains_key(&target_block) {
					ids.insert(target_block, DetStateId::from_index(order.len()));
					order.push(target_block);
					queue.push_back(target_block);
				}
			}
		}

		let mut states = Vec::with_capacity(order.len());
		let mut index = HashMap::new();
		for (i, block) in order.iter().enumerate() {
			let representative = &self.states[representatives[block]];

			let mut members: StateSet = BTreeSet::new();
			for (q, b) in blocks.iter().enumerate() {
				if b == block {
					members.extend(self.states[q].states.iter().cloned())
				}
			}

			let id = DetStateId::from_index(i);
			let mut state = DetState::new(id, members.clone(), representative.accepting);
			for (c, target) in &representative.transitions {
				if !live[target.index()] {
					continue;
				}

				state.transitions.insert(*c, ids[&blocks[target.index()]]);
			}

			index.insert(members, id);
			states.push(state);
		}

		log::debug!("minimized {} states into {}", self.states.len(), states.len());
		Dfa::new(states, index, self.alphabet.clone())
	}

	/// Marks the states from which an accepting state can be reached.
	fn live_states(&self) -> Vec<bool> {
		let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); self.states.len()];
		for q in &self.states {
			for target in q.transitions.values() {
				predecessors[target.index()].push(q.id.index())
			}
		}

		let mut live = vec![false; self.states.len()];
		let mut stack: Vec<usize> = self.accepting().map(|q| q.index()).collect();
		while let Some(q) = stack.pop() {
			if !live[q] {
				live[q] = true;
				stack.extend(predecessors[q].iter().filter(|p| !live[**p]))
			}
		}

		live
	}
}
