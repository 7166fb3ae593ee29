//! Relations between grammar symbols, stored as square bit matrices.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

mod symbol_bit_matrix;

pub use self::symbol_bit_matrix::*;
