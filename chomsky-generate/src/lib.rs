//! Generation of strings from context-free grammars.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod bounded;
mod random;

pub use self::bounded::BoundedLanguage;
pub use self::random::{Limits, Random, RandomGenError};
