//! Structural validation of primer schemes.
//!
//! - [`check_tiling`]: amplicon extents overlap their immediate neighbours only
//! - [`check_invariants`]: duplicate names, reference bounds, amplicon
//!   completeness and per-chromosome tiling in one pass
//!
//! ## Tiling Rule
//!
//! Given amplicon extents `a[0..n]` in amplicon-number order, with `n >= 2`:
//!
//! | Amplicon | Must overlap | Must not overlap |
//! |----------|--------------|------------------|
//! | `a[0]` | `a[1]` | `a[2..]` |
//! | `a[n-1]` | `a[n-2]` | `a[..n-2]` |
//! | `a[i]` | `a[i-1]`, `a[i+1]` | everything else |
//!
//! Intervals that touch at a single coordinate count as overlapping.

pub mod invariants;
pub mod overlap;

pub use invariants::{check_invariants, InvariantError};
pub use overlap::{check_tiling, overlaps, TilingError};
