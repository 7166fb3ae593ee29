use core::num::NonZeroU32;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type SymbolRepr = u32;
/// The first usable symbol ID.
pub const FIRST_ID: SymbolRepr = 0;
/// Reserved, never handed out.
pub const NULL_ID: SymbolRepr = !0;

/// Dense identifier of a symbol within one [`SymbolSource`].
///
/// [`SymbolSource`]: crate::SymbolSource
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymbolId(NonZeroU32);

impl Default for SymbolId {
    fn default() -> Self {
        FIRST_ID.into()
    }
}

impl From<SymbolRepr> for SymbolId {
    #[inline]
    fn from(id: SymbolRepr) -> Self {
        debug_assert_ne!(id, NULL_ID, "invalid conversion from a null id");
        match NonZeroU32::new(id.wrapping_add(1)) {
            Some(n) => SymbolId(n),
            None => unreachable!("id out of range"),
        }
    }
}

impl From<SymbolId> for SymbolRepr {
    #[inline]
    fn from(id: SymbolId) -> Self {
        id.0.get().wrapping_sub(1)
    }
}

impl From<usize> for SymbolId {
    #[inline]
    fn from(id: usize) -> Self {
        SymbolId::from(id as SymbolRepr)
    }
}

impl From<SymbolId> for usize {
    #[inline]
    fn from(id: SymbolId) -> Self {
        let id: SymbolRepr = id.into();
        id as usize
    }
}

impl SymbolId {
    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.into()
    }
}
