#![allow(dead_code)]
use thompson::{Builder, Dfa, Expr, Nfa, StateSet};

pub fn nfa_of(expr: &Expr) -> Nfa {
	let mut builder = Builder::new();
	let fragment = expr.build(&mut builder);
	builder.finish(fragment)
}

/// Runs the non deterministic automaton on `word`.
pub fn nfa_accepts(nfa: &Nfa, word: &str) -> bool {
	let mut initial = StateSet::new();
	initial.insert(nfa.start());

	let mut current = nfa.epsilon_closure(&initial);
	for c in word.chars() {
		current = nfa.epsilon_closure(&nfa.move_on(&current, c));
	}

	nfa.is_accepting(&current)
}

/// Runs the deterministic automaton on `word`.
pub fn dfa_accepts(dfa: &Dfa, word: &str) -> bool {
	let mut q = dfa.start();
	for c in word.chars() {
		match dfa.transition(q, c) {
			Some(r) => q = r,
			None => return false,
		}
	}

	dfa.state(q).map(|q| q.is_accepting()).unwrap_or(false)
}

/// Every word over `alphabet` of length at most `max_len`.
pub fn words(alphabet: &[char], max_len: usize) -> Vec<String> {
	let mut result = vec![String::new()];
	let mut last = vec![String::new()];
	for _ in 0..max_len {
		let mut next = Vec::new();
		for w in &last {
			for c in alphabet {
				let mut w = w.clone();
				w.push(*c);
				next.push(w);
			}
		}

		result.extend(next.iter().cloned());
		last = next;
	}

	result
}

/// Checks the automata derived from `expr` against the given words.
///
/// The non deterministic automaton, its determinization and the minimized
/// determinization must all agree.
pub fn check_language(expr: &Expr, accept: &[&str], reject: &[&str]) {
	let nfa = nfa_of(expr);
	let dfa = nfa.determinize();
	let min = dfa.minimize();

	for word in accept {
		assert!(nfa_accepts(&nfa, word), "NFA of `{}` rejects {:?}", expr, word);
		assert!(dfa_accepts(&dfa, word), "DFA of `{}` rejects {:?}", expr, word);
		assert!(dfa_accepts(&min, word), "minimal DFA of `{}` rejects {:?}", expr, word);
	}

	for word in reject {
		assert!(!nfa_accepts(&nfa, word), "NFA of `{}` accepts {:?}", expr, word);
		assert!(!dfa_accepts(&dfa, word), "DFA of `{}` accepts {:?}", expr, word);
		assert!(!dfa_accepts(&min, word), "minimal DFA of `{}` accepts {:?}", expr, word);
	}
}
