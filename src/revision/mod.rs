//! CVS/RCS dotted revision numbers.
//!
//! Revisions are strings such as `1.2` (trunk) or `1.2.4.3` (third revision
//! on branch `1.2.4`). All operations are pure; an invalid input or a result
//! that does not exist is reported as `None`, never as a panic.

mod algebra;
mod types;


// Re-export public API
pub use algebra::{
    compare, component_count, is_valid, magic_branch, predecessor, sort_descending, strip,
    to_branch, valid_or,
};
pub use types::{ParseRevisionError, Revision};
