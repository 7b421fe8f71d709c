use rand::Rng;

/// Largest universe the subset engine addresses: one item more and the
/// enumerator's `2^universe` mask bound no longer fits a `u128`.
pub const MAX_UNIVERSE: u32 = 127;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubsetError {
    #[error("invalid subset parameters: take {take} from a universe of {universe}")]
    InvalidParameters { universe: u32, take: u32 },
    #[error("universe of {0} items is wider than the subset mask walk allows ({MAX_UNIVERSE})")]
    UniverseTooLarge(u32),
    #[error("index {0} does not fit in a 128-bit subset mask")]
    IndexOutOfRange(usize),
}

fn check_parameters(universe: u32, take: u32) -> Result<(), SubsetError> {
    if universe > MAX_UNIVERSE {
        return Err(SubsetError::UniverseTooLarge(universe));
    }
    if universe < 1 || take < 1 || universe < take {
        return Err(SubsetError::InvalidParameters { universe, take });
    }
    Ok(())
}

/// A set of distinct item indices, packed as a 128-bit mask.
///
/// Bit `i` set means item `i` is selected. Order never matters; two subsets
/// are equal iff their masks are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subset {
    mask: u128,
}

impl Subset {
    pub const fn from_mask(mask: u128) -> Self {
        Self { mask }
    }

    /// Build a subset from item indices. Duplicates collapse; an index
    /// past the mask width is an error.
    pub fn from_indices<I>(indices: I) -> Result<Self, SubsetError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut mask = 0u128;
        for index in indices {
            if index > MAX_UNIVERSE as usize {
                return Err(SubsetError::IndexOutOfRange(index));
            }
            mask |= 1u128 << index;
        }
        Ok(Self { mask })
    }

    pub const fn mask(self) -> u128 {
        self.mask
    }

    /// Number of selected items (population count).
    pub const fn len(self) -> u32 {
        self.mask.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.mask == 0
    }

    pub const fn contains(self, index: usize) -> bool {
        index <= MAX_UNIVERSE as usize && self.mask & (1u128 << index) != 0
    }

    /// Selected indices in ascending order.
    pub fn indices(self) -> Indices {
        Indices { mask: self.mask }
    }
}

/// Iterator over a subset's indices, lowest first.
pub struct Indices {
    mask: u128,
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.mask == 0 {
            return None;
        }
        let index = self.mask.trailing_zeros() as usize;
        // Strip the lowest set bit.
        self.mask &= self.mask - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.mask.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Indices {}

/// Exhaustive enumeration of every `take`-subset of `0..universe`.
///
/// Walks integer masks `0..2^universe` in ascending order and yields those
/// whose population count equals `take`, so the sequence is canonical and a
/// fresh enumerator replays it identically. The walk visits `2^universe`
/// masks regardless of how few survive the popcount filter: fine for
/// exposition and small-universe verification, intractable for the real
/// 78-card deck, where [`sample_subset`] is the practical substitute.
///
/// ```
/// use tarot_rs::subsets::SubsetEnumerator;
///
/// let subsets: Vec<_> = SubsetEnumerator::new(4, 2).unwrap().collect();
/// assert_eq!(subsets.len(), 6);
/// assert_eq!(subsets[0].indices().collect::<Vec<_>>(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SubsetEnumerator {
    next_mask: u128,
    end: u128,
    take: u32,
}

impl SubsetEnumerator {
    pub fn new(universe: u32, take: u32) -> Result<Self, SubsetError> {
        check_parameters(universe, take)?;
        Ok(Self { next_mask: 0, end: 1u128 << universe, take })
    }
}

impl Iterator for SubsetEnumerator {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        while self.next_mask < self.end {
            let mask = self.next_mask;
            self.next_mask += 1;
            if mask.count_ones() == self.take {
                return Some(Subset::from_mask(mask));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Remaining masks bound the remaining subsets from above.
        let remaining = self.end - self.next_mask;
        (0, usize::try_from(remaining).ok())
    }
}

/// Draw one uniform `take`-subset of `0..universe` without replacement.
///
/// Indices come one at a time from the injected generator; a draw that hits
/// an index already in the mask is rejected and redrawn, so a produced
/// subset never repeats an index. Under a uniform generator every one of
/// the C(universe, take) subsets is equally likely. No bound is placed on
/// the number of draws; the generator is assumed non-degenerate.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use tarot_rs::subsets::sample_subset;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let subset = sample_subset(78, 18, &mut rng).unwrap();
/// assert_eq!(subset.len(), 18);
/// ```
pub fn sample_subset<R: Rng + ?Sized>(
    universe: u32,
    take: u32,
    rng: &mut R,
) -> Result<Subset, SubsetError> {
    check_parameters(universe, take)?;

    let mut mask = 0u128;
    let mut chosen = 0u32;
    while chosen < take {
        let bit = 1u128 << rng.random_range(0..universe);
        if mask & bit != 0 {
            continue;
        }
        mask |= bit;
        chosen += 1;
    }
    Ok(Subset::from_mask(mask))
}
