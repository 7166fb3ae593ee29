//! The canonical sequence of fresh nonterminal names.

/// Describes the sequence that fresh nonterminal names are drawn from.
///
/// Names are every character of `alphabet` on its own, followed by every character
/// of `alphabet` with a numeric suffix in `0..suffixes`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NameSpace {
    /// Characters used for names.
    pub alphabet: &'static str,
    /// Number of numeric suffixes per character.
    pub suffixes: u32,
}

impl Default for NameSpace {
    fn default() -> Self {
        NameSpace {
            alphabet: "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            suffixes: 100,
        }
    }
}

impl NameSpace {
    /// Returns the number of names in the sequence.
    pub fn capacity(&self) -> usize {
        let chars = self.alphabet.chars().count();
        chars + chars * self.suffixes as usize
    }

    /// Returns the name at the given position of the sequence.
    pub fn nth(&self, n: usize) -> Option<String> {
        let chars = self.alphabet.chars().count();
        if n < chars {
            return self.alphabet.chars().nth(n).map(String::from);
        }
        let n = n - chars;
        let suffixes = self.suffixes as usize;
        if suffixes == 0 {
            return None;
        }
        let letter = self.alphabet.chars().nth(n / suffixes)?;
        Some(format!("{}{}", letter, n % suffixes))
    }

    /// Iterates over all names in order.
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.capacity()).filter_map(move |n| self.nth(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_characters_come_first() {
        let names = NameSpace::default();
        let first: Vec<_> = names.iter().take(3).collect();
        assert_eq!(first, ["0", "1", "2"]);
        assert_eq!(names.nth(35).as_deref(), Some("Z"));
        assert_eq!(names.nth(36).as_deref(), Some("00"));
        assert_eq!(names.nth(36 + 100).as_deref(), Some("10"));
    }

    #[test]
    fn test_capacity() {
        let names = NameSpace {
            alphabet: "AB",
            suffixes: 2,
        };
        assert_eq!(names.capacity(), 6);
        let all: Vec<_> = names.iter().collect();
        assert_eq!(all, ["A", "B", "A0", "A1", "B0", "B1"]);
        assert_eq!(names.nth(6), None);
    }
}
