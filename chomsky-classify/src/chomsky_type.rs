use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A class of the Chomsky hierarchy.
///
/// Ordered by restrictiveness: every `Regular` grammar is also `ContextFree`,
/// and so on, so `a <= b` means that class `a` contains class `b`.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChomskyType {
    /// Type 0.
    Unrestricted,
    /// Type 1.
    ContextSensitive,
    /// Type 2.
    ContextFree,
    /// Type 3.
    Regular,
}

impl ChomskyType {
    /// Returns the type number, from 0 to 3.
    pub fn level(self) -> u8 {
        match self {
            ChomskyType::Unrestricted => 0,
            ChomskyType::ContextSensitive => 1,
            ChomskyType::ContextFree => 2,
            ChomskyType::Regular => 3,
        }
    }
}

impl fmt::Display for ChomskyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ChomskyType::Unrestricted => "Unrestricted",
            ChomskyType::ContextSensitive => "Context-sensitive",
            ChomskyType::ContextFree => "Context-free",
            ChomskyType::Regular => "Regular",
        };
        write!(f, "Type-{} ({})", self.level(), name)
    }
}
