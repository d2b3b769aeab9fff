//! Expressions shipped with the crate.
use crate::{Builder, Expr, Nfa};

/// Named expression.
pub struct Example {
	pub name: &'static str,
	pub expr: Expr,
}

impl Example {
	/// Builds the automaton of the expression with a fresh builder, so that
	/// state numbering starts from 0.
	pub fn build(&self) -> Nfa {
		let mut builder = Builder::new();
		let fragment = self.expr.build(&mut builder);
		builder.finish(fragment)
	}
}

fn c(c: char) -> Expr {
	Expr::Char(c)
}

fn a_or_b() -> Expr {
	Expr::or(vec![c('a'), c('b')])
}

lazy_static::lazy_static! {
	static ref EXAMPLES: Vec<Example> = vec![
		Example {
			name: "a",
			expr: Expr::concat(vec![Expr::or(vec![c('a'), c('t')]), c('c')]),
		},
		Example {
			name: "b",
			expr: Expr::star(a_or_b()),
		},
		Example {
			name: "c",
			expr: Expr::star(Expr::or(vec![Expr::star(c('a')), Expr::star(c('b'))])),
		},
		Example {
			name: "d",
			expr: Expr::star(Expr::or(vec![
				Expr::or(vec![Expr::Epsilon, c('a')]),
				Expr::star(c('b')),
			])),
		},
		Example {
			name: "e",
			expr: Expr::concat(vec![
				Expr::star(a_or_b()),
				Expr::string("abb"),
				Expr::star(a_or_b()),
			]),
		},
		Example {
			name: "f",
			expr: Expr::concat(vec![
				Expr::optional(c('0')),
				Expr::optional(Expr::optional(c('1'))),
				Expr::star(c('0')),
			]),
		},
		Example {
			name: "g",
			expr: Expr::concat(vec![
				Expr::string("if"),
				c('('),
				Expr::plus(Expr::class("ae")),
				c(')'),
				c('{'),
				Expr::plus(Expr::class("ei")),
				c('}'),
				Expr::optional(Expr::group(Expr::concat(vec![
					c('\n'),
					Expr::group(Expr::concat(vec![
						Expr::string("else"),
						c('{'),
						Expr::plus(Expr::class("jl")),
						c('}'),
					])),
				]))),
			]),
		},
		Example {
			name: "h",
			expr: Expr::concat(vec![
				Expr::plus(Expr::class("ae03")),
				c('@'),
				Expr::plus(Expr::class("ae03")),
				c('.'),
				Expr::or(vec![Expr::string("com"), Expr::string("net"), Expr::string("org")]),
				Expr::optional(Expr::group(Expr::concat(vec![
					c('.'),
					Expr::or(vec![Expr::string("gt"), Expr::string("cr"), Expr::string("co")]),
				]))),
			]),
		},
	];
}

/// Every shipped expression, in order.
pub fn examples() -> &'static [Example] {
	&EXAMPLES
}

pub fn get(name: &str) -> Option<&'static Example> {
	EXAMPLES.iter().find(|e| e.name == name)
}
