//! Compiles regular expressions into finite automata.
//!
//! Expressions are assembled with a [`Builder`] using Thompson's
//! construction, giving a non deterministic automaton ([`Nfa`]) with
//! epsilon-transitions. The subset construction then derives an equivalent
//! deterministic automaton ([`Dfa`]).
//!
//! ```
//! use thompson::Builder;
//!
//! let mut builder = Builder::new();
//! let a = builder.literal('a');
//! let b = builder.literal('b');
//! let a_or_b = builder.union(a, b);
//! let fragment = builder.star(a_or_b);
//!
//! let nfa = builder.finish(fragment);
//! let dfa = nfa.determinize();
//! assert_eq!(dfa.len(), 3);
//! assert_eq!(dfa.minimize().len(), 1);
//! ```
pub mod catalog;
pub mod dfa;
pub mod expr;
pub mod nfa;
pub mod symbol;

pub use dfa::{DetState, DetStateId, Dfa, SubsetConverter};
pub use expr::Expr;
pub use nfa::{Builder, Fragment, Nfa, State, StateId, StateSet};
pub use symbol::Symbol;
