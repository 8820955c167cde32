//! Deterministic permutation enumeration.
//!
//! # Order
//!
//! Orderings are produced in lexicographic order over input **positions**:
//! the position array `0..k` is advanced with the classic next-permutation
//! step (Narayana Pandita), and each state is mapped back to the input
//! items. For `[a, b, c]` the sequence is `abc, acb, bac, bca, cab, cba`
//! regardless of the item values, so for sorted input it coincides with
//! lexicographic order by value.
//!
//! Exhaustive search breaks ties in favour of the first ordering seen, so
//! this order is part of the solver's observable behaviour.

/// Advances `positions` to the next lexicographic permutation in place.
///
/// Returns `false` (leaving the slice untouched) once the last permutation
/// has been reached.
///
/// # Examples
///
/// ```
/// use u_tour::exact::next_permutation;
///
/// let mut p = vec![0, 1, 2];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, vec![0, 2, 1]);
///
/// let mut last = vec![2, 1, 0];
/// assert!(!next_permutation(&mut last));
/// ```
pub fn next_permutation(positions: &mut [usize]) -> bool {
    let n = positions.len();
    if n < 2 {
        return false;
    }

    // longest non-increasing suffix starts right after `i`
    let mut i = n - 1;
    while i > 0 && positions[i - 1] >= positions[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let pivot = i - 1;

    let mut j = n - 1;
    while positions[j] <= positions[pivot] {
        j -= 1;
    }
    positions.swap(pivot, j);
    positions[i..].reverse();
    true
}

/// Number of orderings of `k` items, or `None` if `k!` overflows `u64`.
///
/// # Examples
///
/// ```
/// use u_tour::exact::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(5), Some(120));
/// assert_eq!(factorial(21), None);
/// ```
pub fn factorial(k: usize) -> Option<u64> {
    (1..=k as u64).try_fold(1u64, |acc, x| acc.checked_mul(x))
}

/// Lazy iterator over every ordering of a slice of indices.
///
/// Yields exactly `k!` orderings; an empty input yields a single empty
/// ordering. See the module docs for the enumeration order.
///
/// # Examples
///
/// ```
/// use u_tour::exact::Permutations;
///
/// let all: Vec<Vec<usize>> = Permutations::new(&[7, 3, 5]).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![7, 3, 5]);
/// assert_eq!(all[1], vec![7, 5, 3]);
/// assert_eq!(all[5], vec![5, 3, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    items: Vec<usize>,
    positions: Vec<usize>,
    remaining: Option<usize>,
    done: bool,
}

impl Permutations {
    /// Starts a fresh enumeration over `items` in their given order.
    pub fn new(items: &[usize]) -> Self {
        let remaining = factorial(items.len()).and_then(|f| usize::try_from(f).ok());
        Self {
            items: items.to_vec(),
            positions: (0..items.len()).collect(),
            remaining,
            done: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.positions.iter().map(|&p| self.items[p]).collect();
        if !next_permutation(&mut self.positions) {
            self.done = true;
        }
        if let Some(r) = self.remaining.as_mut() {
            *r -= 1;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}
