pub use chomsky_automaton as automaton;
pub use chomsky_classify as classify;
pub use chomsky_convert as convert;
#[cfg(feature = "generate")]
pub use chomsky_generate as generate;
pub use chomsky_grammar::*;
pub use chomsky_load as load;
pub use chomsky_normalize as normalize;
pub use chomsky_symbol::*;
pub use chomsky_symbol_bit_matrix as symbol_bit_matrix;
