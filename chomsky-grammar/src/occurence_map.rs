use std::collections::BTreeMap;

use crate::local_prelude::*;

type RuleIndex = usize;

/// Maps every symbol to the rules whose RHS it occurs in.
pub(crate) struct OccurenceMap {
    occurences: BTreeMap<SymbolId, Occurences>,
    empty_occurences: Occurences,
}

#[derive(Clone, Default)]
pub(crate) struct Occurences {
    rhs: Vec<RuleIndex>,
}

impl OccurenceMap {
    pub(crate) fn from_rules(rules: &[RuleRef]) -> Self {
        let mut occurences: BTreeMap<SymbolId, Occurences> = BTreeMap::new();
        for (i, rule) in rules.iter().enumerate() {
            let mut rhs_syms: Vec<SymbolId> = rule.rhs.iter().filter_map(|sym| sym.id()).collect();
            rhs_syms.sort();
            rhs_syms.dedup();
            for rhs_sym in rhs_syms {
                occurences.entry(rhs_sym).or_default().rhs.push(i);
            }
        }
        OccurenceMap {
            occurences,
            empty_occurences: Occurences::default(),
        }
    }

    pub(crate) fn get(&self, sym: SymbolId) -> &Occurences {
        self.occurences.get(&sym).unwrap_or(&self.empty_occurences)
    }
}

impl Occurences {
    pub(crate) fn rhs(&self) -> &[RuleIndex] {
        &self.rhs[..]
    }
}
