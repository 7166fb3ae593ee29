use std::ops::{Deref, Index};

use bit_matrix::BitMatrix;
use log::trace;

use chomsky_grammar::{Grammar, Symbol, SymbolId};

/// A relation between symbols, with one row and one column per symbol of
/// the grammar's source.
#[derive(Clone, Debug)]
pub struct SymbolBitMatrix {
    bit_matrix: BitMatrix,
}

/// `R(A, B)` holds when `B` occurs in a body of `A`.
#[derive(Clone, Debug)]
pub struct DirectDerivationMatrix(SymbolBitMatrix);

/// `R(A, B)` holds when `B` occurs in some sentential form derived from `A`.
#[derive(Clone, Debug)]
pub struct ReachabilityMatrix(SymbolBitMatrix);

/// `R(A, B)` holds when `A ⇒+ B` through single-nonterminal bodies.
#[derive(Clone, Debug)]
pub struct UnitDerivationMatrix(SymbolBitMatrix);

impl SymbolBitMatrix {
    fn square(num_syms: usize) -> Self {
        SymbolBitMatrix {
            bit_matrix: BitMatrix::new(num_syms, num_syms),
        }
    }

    fn relate(&mut self, row: SymbolId, col: SymbolId) {
        self.bit_matrix.set(row.usize(), col.usize(), true);
    }

    fn index_of(&self, sym: Symbol) -> Option<usize> {
        sym.id()
            .map(|id| id.usize())
            .filter(|&index| index < self.num_syms())
    }

    pub fn num_syms(&self) -> usize {
        self.bit_matrix.size().0
    }

    /// Checks whether `R(row, col)` holds. Symbols outside of the matrix and
    /// the empty-string marker are never related.
    pub fn contains(&self, row: impl Into<Symbol>, col: impl Into<Symbol>) -> bool {
        match (self.index_of(row.into()), self.index_of(col.into())) {
            (Some(row), Some(col)) => self.bit_matrix[(row, col)],
            _ => false,
        }
    }

    /// Iterates over the symbols `B` such that `R(row, B)` holds.
    pub fn iter_row_syms(&self, row: impl Into<Symbol>) -> impl Iterator<Item = SymbolId> + '_ {
        self.index_of(row.into()).into_iter().flat_map(move |row| {
            self.bit_matrix
                .iter_row(row)
                .enumerate()
                .filter(|&(_, related)| related)
                .map(|(col, _)| SymbolId::from(col))
        })
    }
}

macro_rules! relation_newtype {
    ($($name:ident),*) => {
        $(
            impl Deref for $name {
                type Target = SymbolBitMatrix;

                fn deref(&self) -> &SymbolBitMatrix {
                    &self.0
                }
            }
        )*
    };
}

relation_newtype!(DirectDerivationMatrix, ReachabilityMatrix, UnitDerivationMatrix);

static RELATED: bool = true;
static UNRELATED: bool = false;

impl<A, B> Index<(A, B)> for SymbolBitMatrix
where
    A: Into<Symbol>,
    B: Into<Symbol>,
{
    type Output = bool;

    fn index(&self, (row, col): (A, B)) -> &bool {
        if self.contains(row, col) {
            &RELATED
        } else {
            &UNRELATED
        }
    }
}

impl DirectDerivationMatrix {
    /// Closes the relation transitively and reflexively, so every symbol
    /// reaches itself.
    pub fn reachability(self) -> ReachabilityMatrix {
        let mut matrix = self.0;
        matrix.bit_matrix.transitive_closure();
        matrix.bit_matrix.reflexive_closure();
        ReachabilityMatrix(matrix)
    }
}

/// Builds relations between the symbols of a grammar.
pub trait GrammarSymbolBitMatrixExt {
    /// Creates a `|S| x |S|` matrix where nothing is related.
    fn empty_matrix(&self) -> SymbolBitMatrix;
    fn direct_derivation_matrix(&self) -> DirectDerivationMatrix;
    fn reachability_matrix(&self) -> ReachabilityMatrix;
    /// A body such as `A -> A` relates nothing. `A` is related to itself
    /// only through a longer cycle of unit bodies.
    fn unit_derivation_matrix(&self) -> UnitDerivationMatrix;
}

impl GrammarSymbolBitMatrixExt for Grammar {
    fn empty_matrix(&self) -> SymbolBitMatrix {
        SymbolBitMatrix::square(self.num_syms())
    }

    fn direct_derivation_matrix(&self) -> DirectDerivationMatrix {
        let mut matrix = self.empty_matrix();
        for rule in self.rules() {
            for id in rule.rhs.iter().filter_map(|sym| sym.id()) {
                matrix.relate(rule.lhs.id(), id);
            }
        }
        DirectDerivationMatrix(matrix)
    }

    fn reachability_matrix(&self) -> ReachabilityMatrix {
        self.direct_derivation_matrix().reachability()
    }

    fn unit_derivation_matrix(&self) -> UnitDerivationMatrix {
        let mut matrix = self.empty_matrix();
        for rule in self.rules() {
            if let Some(unit) = rule.unit().filter(|&unit| unit != rule.lhs) {
                trace!("unit body {:?} -> {:?}", rule.lhs, unit);
                matrix.relate(rule.lhs.id(), unit.id());
            }
        }
        matrix.bit_matrix.transitive_closure();
        UnitDerivationMatrix(matrix)
    }
}
