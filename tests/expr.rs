mod common;

use common::*;
use thompson::{catalog, Expr};

#[test]
fn catalog_display() {
	let expected = [
		("a", "(a|t)c"),
		("b", "(a|b)*"),
		("c", "(a*|b*)*"),
		("d", "((ε|a)|b*)*"),
		("e", "(a|b)*abb(a|b)*"),
		("f", "0?(1?)?0*"),
		("g", r"if\([ae]+\)\{[ei]+\}(\n(else\{[jl]+\}))?"),
		("h", "[ae03]+@[ae03]+.(com|net|org)(.(gt|cr|co))?"),
	];

	assert_eq!(catalog::examples().len(), expected.len());
	for (example, (name, display)) in catalog::examples().iter().zip(expected.iter()) {
		assert_eq!(example.name, *name);
		assert_eq!(format!("{}", example.expr), *display);
	}
}

#[test]
fn catalog_lookup() {
	assert!(catalog::get("e").is_some());
	assert!(catalog::get("z").is_none());
}

#[test]
fn catalog_numbering_is_fresh() {
	for example in catalog::examples() {
		let nfa = example.build();
		assert_eq!(nfa.states().iter().next().map(|q| q.index()), Some(0));
	}
}

#[test]
fn display_precedence() {
	let a = || Expr::Char('a');
	let b = || Expr::Char('b');

	assert_eq!(format!("{}", Expr::star(Expr::string("ab"))), "(ab)*");
	assert_eq!(format!("{}", Expr::star(Expr::concat(vec![a(), b()]))), "(ab)*");
	assert_eq!(format!("{}", Expr::concat(vec![Expr::or(vec![a(), b()]), a()])), "(a|b)a");
	assert_eq!(format!("{}", Expr::or(vec![Expr::concat(vec![a(), b()]), a()])), "ab|a");
	assert_eq!(format!("{}", Expr::plus(Expr::star(a()))), "(a*)+");
	assert_eq!(format!("{}", Expr::optional(Expr::class("ab"))), "[ab]?");
	assert_eq!(format!("{}", Expr::group(a())), "(a)");
}

#[test]
fn display_escapes() {
	assert_eq!(format!("{}", Expr::Char('*')), r"\*");
	assert_eq!(format!("{}", Expr::string("a|b")), r"a\|b");
	assert_eq!(format!("{}", Expr::Char('\t')), r"\t");
	assert_eq!(format!("{}", Expr::Char('.')), ".");
}

#[test]
fn display_empty() {
	assert_eq!(format!("{}", Expr::Epsilon), "ε");
	assert_eq!(format!("{}", Expr::string("")), "ε");
	assert_eq!(format!("{}", Expr::concat(Vec::new())), "ε");
	assert_eq!(format!("{}", Expr::or(Vec::new())), "[]");
}

#[test]
fn empty_concatenation_is_epsilon() {
	check_language(&Expr::concat(Vec::new()), &[""], &["a"]);
}

#[test]
fn empty_alternative_is_empty_language() {
	check_language(&Expr::or(Vec::new()), &[], &["", "a"]);

	let dfa = nfa_of(&Expr::or(Vec::new())).determinize();
	assert_eq!(dfa.len(), 1);
	assert_eq!(dfa.accepting().count(), 0);

	// Absorbing in a sequence, neutral in an alternative.
	check_language(
		&Expr::concat(vec![Expr::Char('a'), Expr::or(Vec::new())]),
		&[],
		&["", "a"],
	);
	check_language(
		&Expr::or(vec![Expr::Char('a'), Expr::or(Vec::new())]),
		&["a"],
		&[""],
	);
}

#[test]
fn group_is_transparent() {
	let grouped = nfa_of(&Expr::group(Expr::string("ab")));
	let plain = nfa_of(&Expr::string("ab"));
	assert_eq!(format!("{}", grouped.dump()), format!("{}", plain.dump()));
}

#[test]
fn union_folds_left() {
	// ((a|b)|c): the outermost union owns the last two states.
	let nfa = nfa_of(&Expr::or(vec![Expr::Char('a'), Expr::Char('b'), Expr::Char('c')]));
	assert_eq!(nfa.len(), 10);
	assert_eq!(nfa.start().index(), 8);
	assert_eq!(nfa.accept().index(), 9);
}
