//! `BitSet`: a word-packed set of small non-negative integers.
//!
//! Bits are stored in a `Vec<u64>`, so membership tests are a shift and a mask
//! and ascending iteration skips empty words with `trailing_zeros`. The set grows
//! on insert; bits past the allocated words read as absent.
//!
//! The graph uses one `BitSet` per adjacency row and one per traversal for
//! visitation state.

use core::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// A growable bit set.
#[derive(Clone, Default)]
pub struct BitSet {
    words: Vec<u64>,
    /// Number of set bits.
    len: usize,
}

impl BitSet {
    /// Creates a new empty bit set.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty bit set with room for `bits` bits before reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(WORD_BITS)],
            len: 0,
        }
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears every bit, keeping the allocation.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.len = 0;
    }

    /// Sets `bit`. Returns `true` if it was not already set.
    pub fn insert(&mut self, bit: usize) -> bool {
        let (word_idx, mask) = split(bit);

        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }

        let word = &mut self.words[word_idx];
        if *word & mask == 0 {
            *word |= mask;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Clears `bit`. Returns `true` if it was set.
    pub fn remove(&mut self, bit: usize) -> bool {
        let (word_idx, mask) = split(bit);
        let Some(word) = self.words.get_mut(word_idx) else {
            return false;
        };

        if *word & mask != 0 {
            *word &= !mask;
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` if `bit` is set.
    #[inline]
    pub fn contains(&self, bit: usize) -> bool {
        let (word_idx, mask) = split(bit);
        self.words.get(word_idx).is_some_and(|w| w & mask != 0)
    }

    /// Returns the smallest set bit that is `>= from`, if any.
    pub fn next_from(&self, from: usize) -> Option<usize> {
        let (mut word_idx, _) = split(from);
        let first = self.words.get(word_idx)?;
        // Drop the bits below `from` in its own word.
        let mut word = first & (u64::MAX << (from % WORD_BITS));

        loop {
            if word != 0 {
                return Some(word_idx * WORD_BITS + word.trailing_zeros() as usize);
            }
            word_idx += 1;
            word = *self.words.get(word_idx)?;
        }
    }

    /// Iterates the set bits in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.words.iter().enumerate(),
            current_word: 0,
            word_idx: 0,
        }
    }
}

#[inline]
fn split(bit: usize) -> (usize, u64) {
    (bit / WORD_BITS, 1u64 << (bit % WORD_BITS))
}

/// Ascending iterator over the set bits of a [`BitSet`].
pub struct Iter<'a> {
    iter: core::iter::Enumerate<core::slice::Iter<'a, u64>>,
    current_word: u64,
    word_idx: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let trailing = self.current_word.trailing_zeros();
                self.current_word &= self.current_word - 1; // clear lowest bit
                return Some(self.word_idx * WORD_BITS + trailing as usize);
            }

            let (idx, &word) = self.iter.next()?;
            self.word_idx = idx;
            self.current_word = word;
        }
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<usize> for BitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for bit in iter {
            self.insert(bit);
        }
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

// Trailing zero words do not affect equality.
impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for BitSet {}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
