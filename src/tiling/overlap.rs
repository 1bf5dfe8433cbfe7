use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TilingError {
    #[error("Fewer than two amplicons detected ({count})")]
    InsufficientAmplicons { count: usize },

    #[error("Amplicons {first} and {second} do not overlap")]
    MissingOverlap { first: usize, second: usize },

    #[error("Amplicon {index} overlaps non-adjacent amplicon {other}")]
    UnexpectedOverlap { index: usize, other: usize },
}

impl TilingError {
    /// Index of the amplicon the failure is reported against
    #[must_use]
    pub fn amplicon_index(&self) -> Option<usize> {
        match self {
            Self::InsufficientAmplicons { .. } => None,
            Self::MissingOverlap { first, .. } => Some(*first),
            Self::UnexpectedOverlap { index, .. } => Some(*index),
        }
    }
}

/// Two intervals overlap iff `max(a.start, b.start) <= min(a.end, b.end)`.
///
/// Intervals that merely touch are considered overlapping.
#[must_use]
pub fn overlaps(a: (u64, u64), b: (u64, u64)) -> bool {
    a.0.max(b.0) <= a.1.min(b.1)
}

/// Verify that amplicon extents tile: each amplicon overlaps exactly its
/// immediate neighbours and nothing else.
///
/// `bounds` holds `(min_start, max_end)` per amplicon in tiling order.
///
/// # Errors
///
/// Returns `TilingError::InsufficientAmplicons` for fewer than two amplicons,
/// `TilingError::MissingOverlap` when neighbours do not overlap, or
/// `TilingError::UnexpectedOverlap` when non-neighbours do.
pub fn check_tiling(bounds: &[(u64, u64)]) -> Result<(), TilingError> {
    let n = bounds.len();
    if n < 2 {
        return Err(TilingError::InsufficientAmplicons { count: n });
    }

    // First amplicon
    if !overlaps(bounds[0], bounds[1]) {
        return Err(TilingError::MissingOverlap { first: 0, second: 1 });
    }
    if let Some(j) = (2..n).find(|&j| overlaps(bounds[0], bounds[j])) {
        return Err(TilingError::UnexpectedOverlap { index: 0, other: j });
    }

    // Last amplicon
    let last = n - 1;
    if !overlaps(bounds[last], bounds[last - 1]) {
        return Err(TilingError::MissingOverlap {
            first: last - 1,
            second: last,
        });
    }
    if let Some(j) = (0..last.saturating_sub(1)).find(|&j| overlaps(bounds[last], bounds[j])) {
        return Err(TilingError::UnexpectedOverlap {
            index: last,
            other: j,
        });
    }

    // Interior amplicons
    for i in 1..last {
        if !overlaps(bounds[i], bounds[i - 1]) {
            return Err(TilingError::MissingOverlap {
                first: i - 1,
                second: i,
            });
        }
        if !overlaps(bounds[i], bounds[i + 1]) {
            return Err(TilingError::MissingOverlap {
                first: i,
                second: i + 1,
            });
        }
        if let Some(j) = (0..n)
            .filter(|&j| j + 1 != i && j != i && j != i + 1)
            .find(|&j| overlaps(bounds[i], bounds[j]))
        {
            return Err(TilingError::UnexpectedOverlap { index: i, other: j });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps() {
        assert!(overlaps((0, 100), (50, 150)));
        assert!(overlaps((50, 150), (0, 100)));
        assert!(overlaps((0, 100), (100, 200))); // touching
        assert!(!overlaps((0, 100), (101, 200)));
        assert!(overlaps((0, 300), (100, 200))); // containment
    }

    #[test]
    fn test_two_overlapping_amplicons_pass() {
        assert_eq!(check_tiling(&[(100, 220), (200, 320)]), Ok(()));
    }

    #[test]
    fn test_single_amplicon_fails() {
        assert_eq!(
            check_tiling(&[(100, 220)]),
            Err(TilingError::InsufficientAmplicons { count: 1 })
        );
        assert_eq!(
            check_tiling(&[]),
            Err(TilingError::InsufficientAmplicons { count: 0 })
        );
    }

    #[test]
    fn test_valid_tiling() {
        let bounds = [(0, 120), (100, 220), (200, 320), (300, 420), (400, 520)];
        assert_eq!(check_tiling(&bounds), Ok(()));
    }

    #[test]
    fn test_first_overlaps_third() {
        let bounds = [(0, 250), (100, 220), (200, 320)];
        let err = check_tiling(&bounds).unwrap_err();
        assert_eq!(err, TilingError::UnexpectedOverlap { index: 0, other: 2 });
        assert_eq!(err.amplicon_index(), Some(0));
    }

    #[test]
    fn test_gap_between_first_pair() {
        let bounds = [(0, 90), (100, 220), (200, 320)];
        assert_eq!(
            check_tiling(&bounds),
            Err(TilingError::MissingOverlap { first: 0, second: 1 })
        );
    }

    #[test]
    fn test_gap_before_last() {
        let bounds = [(0, 120), (100, 220), (230, 320)];
        assert_eq!(
            check_tiling(&bounds),
            Err(TilingError::MissingOverlap { first: 1, second: 2 })
        );
    }

    #[test]
    fn test_last_overlaps_earlier() {
        let bounds = [(0, 120), (100, 220), (200, 320), (110, 420)];
        // Amplicon 0 is checked first and already sees amplicon 3
        assert_eq!(
            check_tiling(&bounds),
            Err(TilingError::UnexpectedOverlap { index: 0, other: 3 })
        );

        let bounds = [(0, 120), (100, 220), (200, 320), (300, 420), (230, 520)];
        assert_eq!(
            check_tiling(&bounds),
            Err(TilingError::UnexpectedOverlap { index: 4, other: 2 })
        );
    }

    #[test]
    fn test_interior_gap() {
        let bounds = [(0, 120), (100, 220), (200, 320), (330, 420), (400, 520)];
        assert_eq!(
            check_tiling(&bounds),
            Err(TilingError::MissingOverlap { first: 2, second: 3 })
        );
    }

    #[test]
    fn test_interior_overlaps_two_ahead() {
        let bounds = [(0, 120), (100, 310), (200, 320), (300, 420), (400, 520)];
        assert_eq!(
            check_tiling(&bounds),
            Err(TilingError::UnexpectedOverlap { index: 1, other: 3 })
        );
    }
}
