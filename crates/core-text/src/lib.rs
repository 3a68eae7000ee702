//! Row-based text storage.
//!
//! A document is a flat `Vec<Row>`; each row holds its raw characters plus
//! two derived sequences (tab-expanded render and highlight classes). Every
//! raw mutation goes through [`RowStore`], which recomputes the derived data
//! of the touched row and then propagates block-comment state forward until
//! it reaches a fixed point. Out-of-range indices are clamped or ignored,
//! never reported: callers (cursor movement, dispatch) rely on that.

mod row;
mod store;

pub use row::Row;
pub use store::{DEFAULT_TAB_STOP, RowStore};
