use std::fmt;

/// Transition label.
///
/// A transition either consumes one character or none at all.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Symbol {
	/// Transition taken without reading any input.
	Epsilon,

	/// Transition reading exactly the given character.
	Char(char),
}

impl Symbol {
	pub fn is_epsilon(&self) -> bool {
		matches!(self, Symbol::Epsilon)
	}

	/// Returns the character read by this symbol, if any.
	pub fn as_char(&self) -> Option<char> {
		match self {
			Symbol::Epsilon => None,
			Symbol::Char(c) => Some(*c),
		}
	}
}

impl From<char> for Symbol {
	fn from(c: char) -> Symbol {
		Symbol::Char(c)
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Symbol::Epsilon => write!(f, "ε"),
			Symbol::Char(c) => write!(f, "{}", DisplayChar(*c)),
		}
	}
}

/// Printable form of a character.
///
/// Whitespace and control characters are written as escape sequences so
/// that transition tables stay on one line per row.
pub struct DisplayChar(pub char);

impl fmt::Display for DisplayChar {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let c = self.0;
		match c {
			'\\' => write!(f, "\\\\"),
			'\r' => write!(f, "\\r"),
			'\n' => write!(f, "\\n"),
			'\t' => write!(f, "\\t"),
			' ' => write!(f, "\\s"),
			_ if c.is_control() => {
				let d = c as u32;
				if d <= 0xff {
					write!(f, "\\x{:02x}", d)
				} else if d <= 0xffff {
					write!(f, "\\u{:04x}", d)
				} else {
					write!(f, "\\U{:08x}", d)
				}
			}
			_ => write!(f, "{}", c),
		}
	}
}
