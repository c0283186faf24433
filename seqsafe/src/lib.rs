//! One namespace for the everyday sequence surface.
//!
//! The partial list operations (head, last, tail, init, maximum, minimum)
//! get total variants that return [`Option`] instead of panicking on an
//! empty input. Prefix and suffix trimming comes in a stripping flavor
//! (`Option` on mismatch) and a keep-on-mismatch flavor. [`lines_cr`]
//! splits text into lines with any trailing carriage return removed.
//!
//! Everything else — the bulk iterator operations — is re-exported from
//! [`itertools`] unchanged, so `use seqsafe::Itertools` is all a caller
//! needs.

pub mod sequence;
pub mod string;

pub use crate::sequence::{
    drop_prefix, drop_suffix, head, init, last, maximum, maximum_by, minimum, minimum_by,
    strip_prefix, strip_suffix, tail,
};
pub use crate::string::{lines_cr, LinesCr};

// the bulk sequence surface is itertools, passed through unchanged
pub use itertools::{
    chain, concat, equal, interleave, intersperse, join, kmerge, merge, multipeek, multiunzip,
    multizip, peek_nth, put_back, rciter, rev, sorted, zip_eq,
};
pub use itertools::{Either, Itertools, iproduct, izip};
