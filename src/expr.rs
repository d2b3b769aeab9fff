use crate::{nfa::Fragment, Builder};
use std::fmt;

/// Regular expression tree.
///
/// Each variant maps to one [`Builder`] operation. Expressions are built in
/// memory; turning a textual regular expression into an `Expr` is not the
/// business of this crate.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
	/// The empty word.
	Epsilon,

	Char(char),

	/// Any character of the set.
	Class(Vec<char>),

	/// Literal word.
	Str(String),

	/// Sequence, folded left.
	Concat(Vec<Expr>),

	/// Alternative, folded left.
	///
	/// An empty alternative is the empty language.
	Or(Vec<Expr>),

	Star(Box<Expr>),
	Plus(Box<Expr>),
	Optional(Box<Expr>),

	/// Parenthesized expression.
	///
	/// Behaves as the inner expression, and is displayed between
	/// parentheses.
	Group(Box<Expr>),
}

impl Expr {
	pub fn class<S: AsRef<str>>(chars: S) -> Self {
		Self::Class(chars.as_ref().chars().collect())
	}

	pub fn string<S: ToString>(s: S) -> Self {
		Self::Str(s.to_string())
	}

	pub fn concat<I: IntoIterator<Item = Expr>>(parts: I) -> Self {
		Self::Concat(parts.into_iter().collect())
	}

	pub fn or<I: IntoIterator<Item = Expr>>(parts: I) -> Self {
		Self::Or(parts.into_iter().collect())
	}

	pub fn star(e: Expr) -> Self {
		Self::Star(Box::new(e))
	}

	pub fn plus(e: Expr) -> Self {
		Self::Plus(Box::new(e))
	}

	pub fn optional(e: Expr) -> Self {
		Self::Optional(Box::new(e))
	}

	pub fn group(e: Expr) -> Self {
		Self::Group(Box::new(e))
	}

	/// Builds the fragment recognizing this expression.
	pub fn build(&self, builder: &mut Builder) -> Fragment {
		match self {
			Self::Epsilon => builder.epsilon(),
			Self::Char(c) => builder.literal(*c),
			Self::Class(chars) => builder.char_class(chars.iter().cloned()),
			Self::Str(s) => builder.string(s),
			Self::Concat(parts) => match parts.split_first() {
				Some((first, rest)) => {
					let mut a = first.build(builder);
					for part in rest {
						let b = part.build(builder);
						a = builder.concat(a, b);
					}

					a
				}
				None => builder.epsilon(),
			},
			Self::Or(parts) => match parts.split_first() {
				Some((first, rest)) => {
					let mut a = first.build(builder);
					for part in rest {
						let b = part.build(builder);
						a = builder.union(a, b);
					}

					a
				}
				None => builder.char_class(std::iter::empty()),
			},
			Self::Star(e) => {
				let a = e.build(builder);
				builder.star(a)
			}
			Self::Plus(e) => {
				let a = e.build(builder);
				builder.plus(a)
			}
			Self::Optional(e) => {
				let a = e.build(builder);
				builder.optional(a)
			}
			Self::Group(e) => e.build(builder),
		}
	}

	/// Binding strength, used to place parentheses when displaying.
	fn precedence(&self) -> u8 {
		match self {
			Self::Or(parts) if parts.len() > 1 => 0,
			Self::Concat(parts) if parts.len() > 1 => 1,
			Self::Str(s) if s.chars().count() > 1 => 1,
			Self::Star(_) | Self::Plus(_) | Self::Optional(_) => 2,
			_ => 3,
		}
	}

	fn fmt_operand(&self, f: &mut fmt::Formatter, min_precedence: u8) -> fmt::Result {
		if self.precedence() < min_precedence {
			write!(f, "({})", self)
		} else {
			fmt::Display::fmt(self, f)
		}
	}
}

fn is_meta(c: char) -> bool {
	matches!(
		c,
		'\\' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '*' | '+' | '?'
	)
}

/// Character as it appears in an expression.
struct DisplayLiteral(char);

impl fmt::Display for DisplayLiteral {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.0 {
			'\n' => write!(f, "\\n"),
			'\t' => write!(f, "\\t"),
			'\r' => write!(f, "\\r"),
			c if is_meta(c) => write!(f, "\\{}", c),
			c => write!(f, "{}", c),
		}
	}
}

impl fmt::Display for Expr {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		use itertools::Itertools;
		match self {
			Self::Epsilon => write!(f, "ε"),
			Self::Char(c) => write!(f, "{}", DisplayLiteral(*c)),
			Self::Class(chars) => {
				write!(f, "[{}]", chars.iter().map(|c| DisplayLiteral(*c)).format(""))
			}
			Self::Str(s) if s.is_empty() => write!(f, "ε"),
			Self::Str(s) => write!(f, "{}", s.chars().map(DisplayLiteral).format("")),
			Self::Concat(parts) if parts.is_empty() => write!(f, "ε"),
			Self::Concat(parts) => {
				for part in parts {
					part.fmt_operand(f, 1)?
				}

				Ok(())
			}
			Self::Or(parts) if parts.is_empty() => write!(f, "[]"),
			Self::Or(parts) => {
				for (i, part) in parts.iter().enumerate() {
					if i > 0 {
						write!(f, "|")?
					}

					part.fmt_operand(f, 1)?
				}

				Ok(())
			}
			Self::Star(e) => {
				e.fmt_operand(f, 3)?;
				write!(f, "*")
			}
			Self::Plus(e) => {
				e.fmt_operand(f, 3)?;
				write!(f, "+")
			}
			Self::Optional(e) => {
				e.fmt_operand(f, 3)?;
				write!(f, "?")
			}
			Self::Group(e) => write!(f, "({})", e),
		}
	}
}
