//! Compact set of lowercase ASCII letters
//!
//! Stored as a 26-bit mask: bit 0 = 'a', bit 25 = 'z'. Iteration is always alphabetical,
//! which gives feedback a deterministic rendering order for free.

use std::fmt;

/// A de-duplicated set of letters `a`-`z`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    const fn bit(letter: u8) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(1u32 << (letter - b'a'))
        } else {
            None
        }
    }

    /// Add a letter; anything outside `a`-`z` is ignored
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        if let Some(bit) = Self::bit(letter) {
            self.0 |= bit;
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        (0u8..26)
            .filter(move |i| self.0 & (1u32 << i) != 0)
            .map(|i| char::from(b'a' + i))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// Renders as `a, e, l`
impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
