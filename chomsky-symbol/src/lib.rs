//! Symbols of formal grammars. Terminals and nonterminals share one space of dense
//! numeric IDs, and every ID is bound to a single name and kind by a [`SymbolSource`].

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod error;
pub mod names;
mod repr;
mod source;
mod symbol;

pub use self::error::SymbolError;
pub use self::names::NameSpace;
pub use self::repr::{SymbolId, SymbolRepr};
pub use self::source::SymbolSource;
pub use self::symbol::{NonTerminal, Symbol, SymbolKind, Terminal};

/// The textual marker of the empty string.
pub const EPSILON: &str = "ε";
