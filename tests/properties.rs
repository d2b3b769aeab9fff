mod common;

use common::*;
use quickcheck::{quickcheck, Arbitrary, Gen};
use thompson::Expr;

const ALPHABET: [char; 2] = ['a', 'b'];
const MAX_LEN: usize = 4;

/// Small expression over `a` and `b`.
#[derive(Clone, Debug)]
struct Small(Expr);

fn leaf(g: &mut Gen) -> Expr {
	match u8::arbitrary(g) % 5 {
		0 => Expr::Epsilon,
		1 => Expr::class(""),
		2 => Expr::string(if bool::arbitrary(g) { "ab" } else { "ba" }),
		_ => Expr::Char(*g.choose(&ALPHABET).unwrap()),
	}
}

fn expr(g: &mut Gen, depth: usize) -> Expr {
	if depth == 0 {
		return leaf(g);
	}

	match u8::arbitrary(g) % 8 {
		0 => leaf(g),
		1 => Expr::concat(vec![expr(g, depth - 1), expr(g, depth - 1)]),
		2 => Expr::or(vec![expr(g, depth - 1), expr(g, depth - 1)]),
		3 => Expr::star(expr(g, depth - 1)),
		4 => Expr::plus(expr(g, depth - 1)),
		5 => Expr::optional(expr(g, depth - 1)),
		6 => Expr::concat(vec![
			expr(g, depth - 1),
			expr(g, depth - 1),
			expr(g, depth - 1),
		]),
		_ => Expr::or(vec![
			expr(g, depth - 1),
			expr(g, depth - 1),
			expr(g, depth - 1),
		]),
	}
}

impl Arbitrary for Small {
	fn arbitrary(g: &mut Gen) -> Self {
		Small(expr(g, 3))
	}

	fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
		let children = match &self.0 {
			Expr::Concat(parts) | Expr::Or(parts) => parts.clone(),
			Expr::Star(e) | Expr::Plus(e) | Expr::Optional(e) | Expr::Group(e) => {
				vec![e.as_ref().clone()]
			}
			_ => Vec::new(),
		};

		Box::new(children.into_iter().map(Small))
	}
}

fn language(nfa: &thompson::Nfa) -> Vec<bool> {
	words(&ALPHABET, MAX_LEN)
		.iter()
		.map(|w| nfa_accepts(nfa, w))
		.collect()
}

/// Checks if `w` is a sequence of words accepted by `accepts`.
fn kleene<F: Fn(&str) -> bool>(accepts: &F, w: &str) -> bool {
	w.is_empty() || (1..=w.len()).any(|i| accepts(&w[..i]) && kleene(accepts, &w[i..]))
}

quickcheck! {
	fn determinization_preserves_language(e: Small) -> bool {
		let nfa = nfa_of(&e.0);
		let dfa = nfa.determinize();
		words(&ALPHABET, MAX_LEN)
			.iter()
			.all(|w| nfa_accepts(&nfa, w) == dfa_accepts(&dfa, w))
	}

	fn minimization_preserves_language(e: Small) -> bool {
		let dfa = nfa_of(&e.0).determinize();
		let min = dfa.minimize();
		min.len() <= dfa.len()
			&& words(&ALPHABET, MAX_LEN)
				.iter()
				.all(|w| dfa_accepts(&dfa, w) == dfa_accepts(&min, w))
	}

	fn dfa_is_deterministic(e: Small) -> bool {
		let nfa = nfa_of(&e.0);
		let dfa = nfa.determinize();
		dfa.states().iter().enumerate().all(|(i, p)| {
			p.transitions().keys().all(|c| dfa.alphabet().contains(c))
				&& dfa.states()[i + 1..].iter().all(|q| p.states() != q.states())
		}) && dfa.reachable_states_from(dfa.start()).count() == dfa.len()
	}

	fn star_accepts_empty_word(e: Small) -> bool {
		let nfa = nfa_of(&Expr::star(e.0));
		nfa_accepts(&nfa, "") && dfa_accepts(&nfa.determinize(), "")
	}

	fn optional_adds_empty_word(e: Small) -> bool {
		let inner = language(&nfa_of(&e.0));
		let opt = language(&nfa_of(&Expr::optional(e.0)));
		opt[0] && inner.iter().zip(&opt).skip(1).all(|(a, b)| a == b)
	}

	fn plus_is_concat_with_star(e: Small) -> bool {
		let plus = language(&nfa_of(&Expr::plus(e.0.clone())));
		let expanded = language(&nfa_of(&Expr::concat(vec![e.0.clone(), Expr::star(e.0)])));
		plus == expanded
	}

	fn plus_accepts_empty_word_iff_operand_does(e: Small) -> bool {
		let inner = nfa_of(&e.0);
		let plus = nfa_of(&Expr::plus(e.0));
		nfa_accepts(&plus, "") == nfa_accepts(&inner, "")
	}

	fn union_is_commutative(a: Small, b: Small) -> bool {
		let ab = language(&nfa_of(&Expr::or(vec![a.0.clone(), b.0.clone()])));
		let ba = language(&nfa_of(&Expr::or(vec![b.0, a.0])));
		ab == ba
	}

	fn nfa_states_are_reachable(e: Small) -> bool {
		let nfa = nfa_of(&e.0);
		nfa.states().contains(&nfa.start())
			&& nfa.states().iter().all(|q| nfa.state(*q).is_some())
	}

	fn literal_accepts_only_itself(c: char) -> bool {
		let nfa = nfa_of(&Expr::Char(c));
		let dfa = nfa.determinize();
		let other = if c == 'a' { 'b' } else { 'a' };
		let single = c.to_string();
		let rejected = [String::new(), format!("{}{}", c, c), other.to_string()];

		nfa.len() == 2
			&& nfa_accepts(&nfa, &single)
			&& dfa_accepts(&dfa, &single)
			&& rejected.iter().all(|w| !nfa_accepts(&nfa, w) && !dfa_accepts(&dfa, w))
	}

	fn union_is_set_union(a: Small, b: Small) -> bool {
		let na = nfa_of(&a.0);
		let nb = nfa_of(&b.0);
		let union = nfa_of(&Expr::or(vec![a.0, b.0]));
		let dfa = union.determinize();

		words(&ALPHABET, MAX_LEN).iter().all(|w| {
			let expected = nfa_accepts(&na, w) || nfa_accepts(&nb, w);
			nfa_accepts(&union, w) == expected && dfa_accepts(&dfa, w) == expected
		})
	}

	fn concat_is_concatenation(a: Small, b: Small) -> bool {
		let na = nfa_of(&a.0);
		let nb = nfa_of(&b.0);
		let concat = nfa_of(&Expr::concat(vec![a.0, b.0]));
		let dfa = concat.determinize();

		words(&ALPHABET, MAX_LEN).iter().all(|w| {
			let expected =
				(0..=w.len()).any(|i| nfa_accepts(&na, &w[..i]) && nfa_accepts(&nb, &w[i..]));
			nfa_accepts(&concat, w) == expected && dfa_accepts(&dfa, w) == expected
		})
	}

	fn star_is_kleene_closure(e: Small) -> bool {
		let inner = nfa_of(&e.0);
		let star = nfa_of(&Expr::star(e.0));
		let dfa = star.determinize();
		let accepts = |u: &str| nfa_accepts(&inner, u);

		words(&ALPHABET, MAX_LEN).iter().all(|w| {
			let expected = kleene(&accepts, w);
			nfa_accepts(&star, w) == expected && dfa_accepts(&dfa, w) == expected
		})
	}
}
