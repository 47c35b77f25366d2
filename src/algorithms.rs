//! Maximum-finding candidates
//!
//! Both candidates compute the maximum of a non-empty dataset:
//!
//! - [`IterativeMax`]: one linear pass, O(1) auxiliary space, never fails
//! - [`RecursiveMax`]: linear recursion, one frame per element, bounded by an
//!   explicit call-depth ceiling
//!
//! The recursive candidate counts its own frames instead of relying on the
//! host stack: the entry call is frame 1 and every helper call adds one, so a
//! dataset of `n` elements needs `n + 1` frames. Datasets with at least
//! `limit` elements therefore fail with [`Error::DepthExceeded`] as soon as
//! the frame count passes the ceiling, well before the host stack is at risk.

use crate::config::DEFAULT_RECURSION_LIMIT;
use crate::dataset::Dataset;
use crate::{Error, Result};

/// A maximum-finding algorithm under test.
pub trait Candidate {
    /// Name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Compute the maximum of `data`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DepthExceeded` if the candidate cannot process a
    /// dataset of this size.
    fn find_max(&self, data: &Dataset) -> Result<i64>;
}

/// Single-pass running maximum.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeMax;

impl Candidate for IterativeMax {
    fn name(&self) -> &'static str {
        "Iterative"
    }

    fn find_max(&self, data: &Dataset) -> Result<i64> {
        max_iterative(data.values()).ok_or(Error::EmptyDataset)
    }
}

/// Linear recursion threading the running maximum as an accumulator.
#[derive(Debug, Clone, Copy)]
pub struct RecursiveMax {
    limit: usize,
}

impl RecursiveMax {
    /// Create a recursive candidate with the given call-depth ceiling.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Configured call-depth ceiling.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for RecursiveMax {
    fn default() -> Self {
        Self::new(DEFAULT_RECURSION_LIMIT)
    }
}

impl Candidate for RecursiveMax {
    fn name(&self) -> &'static str {
        "Recursive"
    }

    fn find_max(&self, data: &Dataset) -> Result<i64> {
        max_recursive(data.values(), self.limit)?.ok_or(Error::EmptyDataset)
    }
}

/// Running maximum over a slice; `None` for an empty slice.
#[must_use]
pub fn max_iterative<T: Ord + Copy>(values: &[T]) -> Option<T> {
    let (&first, rest) = values.split_first()?;
    let mut current = first;
    for &value in rest {
        if value > current {
            current = value;
        }
    }
    Some(current)
}

/// Recursive maximum over a slice with an explicit frame ceiling.
///
/// Returns `Ok(None)` for an empty slice.
///
/// # Errors
///
/// Returns `Error::DepthExceeded` when `values.len() + 1 > limit`.
pub fn max_recursive<T: Ord + Copy>(values: &[T], limit: usize) -> Result<Option<T>> {
    max_recursive_traced(values, limit).map(|traced| traced.map(|(max, _)| max))
}

/// Like [`max_recursive`], but also reports the deepest number of live
/// frames reached, entry frame included.
fn max_recursive_traced<T: Ord + Copy>(values: &[T], limit: usize) -> Result<Option<(T, usize)>> {
    let Some(&first) = values.first() else {
        return Ok(None);
    };
    let mut frames = Frames {
        limit,
        required: values.len() + 1,
        live: 1,
        max_live: 1,
    };
    let max = descend(values, 1, first, &mut frames)?;
    Ok(Some((max, frames.max_live)))
}

struct Frames {
    limit: usize,
    required: usize,
    live: usize,
    max_live: usize,
}

impl Frames {
    fn enter(&mut self) -> Result<()> {
        if self.live + 1 > self.limit {
            return Err(Error::DepthExceeded {
                limit: self.limit,
                required: self.required,
            });
        }
        self.live += 1;
        self.max_live = self.max_live.max(self.live);
        Ok(())
    }

    fn leave(&mut self) {
        self.live -= 1;
    }
}

// One real stack frame per element: the bookkeeping after the nested call
// keeps it out of tail position.
fn descend<T: Ord + Copy>(values: &[T], idx: usize, current: T, frames: &mut Frames) -> Result<T> {
    frames.enter()?;
    let result = match values.get(idx) {
        None => Ok(current),
        Some(&value) => descend(values, idx + 1, value.max(current), frames),
    };
    frames.leave();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_RECURSION_LIMIT;

    fn dataset(values: &[i64]) -> Dataset {
        Dataset::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_iterative_basic() {
        let data = dataset(&[10, 5, 100, 2, 8]);
        assert_eq!(IterativeMax.find_max(&data).unwrap(), 100);
    }

    #[test]
    fn test_recursive_basic() {
        let data = dataset(&[10, 5, 100, 2, 8]);
        assert_eq!(RecursiveMax::default().find_max(&data).unwrap(), 100);
    }

    #[test]
    fn test_single_element() {
        let data = dataset(&[-7]);
        assert_eq!(IterativeMax.find_max(&data).unwrap(), -7);
        assert_eq!(RecursiveMax::default().find_max(&data).unwrap(), -7);
    }

    #[test]
    fn test_max_first_and_last() {
        assert_eq!(max_iterative(&[9, 1, 2]), Some(9));
        assert_eq!(max_iterative(&[1, 2, 9]), Some(9));
        assert_eq!(max_recursive(&[9, 1, 2], 100).unwrap(), Some(9));
        assert_eq!(max_recursive(&[1, 2, 9], 100).unwrap(), Some(9));
    }

    #[test]
    fn test_empty_slices() {
        assert_eq!(max_iterative::<i64>(&[]), None);
        assert_eq!(max_recursive::<i64>(&[], 10).unwrap(), None);
    }

    #[test]
    fn test_depth_boundary() {
        let limit = 50;
        let below: Vec<i64> = (0..49).collect();
        let at: Vec<i64> = (0..50).collect();
        assert_eq!(max_recursive(&below, limit).unwrap(), Some(48));

        let err = max_recursive(&at, limit).unwrap_err();
        assert!(matches!(
            err,
            Error::DepthExceeded {
                limit: 50,
                required: 51
            }
        ));
    }

    #[test]
    fn test_default_ceiling() {
        let ok = Dataset::new((0..2999).collect()).unwrap();
        let too_deep = Dataset::new((0..3000).collect()).unwrap();
        let candidate = RecursiveMax::default();
        assert_eq!(candidate.limit(), 3000);
        assert_eq!(candidate.find_max(&ok).unwrap(), 2998);
        assert!(candidate.find_max(&too_deep).unwrap_err().is_depth_exceeded());
    }

    #[test]
    fn test_recursion_holds_one_frame_per_element() {
        for len in [1usize, 2, 17, 500, 2999] {
            let values: Vec<i64> = (0..len as i64).rev().collect();
            let (max, max_live) = max_recursive_traced(&values, 3000).unwrap().unwrap();
            assert_eq!(max, values[0]);
            assert_eq!(max_live, len + 1);
        }
    }

    #[test]
    fn test_deepest_allowed_recursion_fits_test_thread_stack() {
        let values: Vec<i64> = (0..MAX_RECURSION_LIMIT as i64 - 1).collect();
        let handle = std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(move || max_recursive_traced(&values, MAX_RECURSION_LIMIT).unwrap())
            .unwrap();
        let (max, max_live) = handle.join().unwrap().unwrap();
        assert_eq!(max, MAX_RECURSION_LIMIT as i64 - 2);
        assert_eq!(max_live, MAX_RECURSION_LIMIT);
    }

    #[test]
    fn test_iterative_has_no_ceiling() {
        let data = Dataset::new((0..20_000).rev().collect()).unwrap();
        assert_eq!(IterativeMax.find_max(&data).unwrap(), 19_999);
    }
}
