//! Shapes of regular bodies.

use chomsky_grammar::Symbol;

/// Checks whether a body has the form `ε`, `a`, `aB` or `B`.
pub fn is_right_linear_body(rhs: &[Symbol]) -> bool {
    matches!(
        rhs,
        [] | [Symbol::Terminal(_)]
            | [Symbol::NonTerminal(_)]
            | [Symbol::Terminal(_), Symbol::NonTerminal(_)]
    )
}

/// Checks whether a body has the form `ε`, `a`, `Ba` or `B`.
pub fn is_left_linear_body(rhs: &[Symbol]) -> bool {
    matches!(
        rhs,
        [] | [Symbol::Terminal(_)]
            | [Symbol::NonTerminal(_)]
            | [Symbol::NonTerminal(_), Symbol::Terminal(_)]
    )
}
