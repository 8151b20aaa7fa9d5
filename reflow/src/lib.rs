//! Offset remapping for line-by-line reformatting.
//!
//! A formatter rewrites a buffer one line at a time; carets and selection bounds are
//! absolute offsets into the original buffer. After each rewritten line the mapper shifts
//! every offset downstream of the edit and pins offsets that fell inside it.
//!
//! Offsets are counted in an [`OffsetEncoding`] and lines are joined by a fixed-width
//! [`LineTerminator`]. Nothing here keeps state between calls.

mod encoding;
mod ledger;
mod mapper;
mod tests;
mod tracker;

pub use encoding::OffsetEncoding;
pub use ledger::{LineLedger, LineTerminator, Position};
pub use mapper::{ClampPolicy, LineEdit, OffsetMapper};
pub use tracker::{OffsetTracker, Selection};
