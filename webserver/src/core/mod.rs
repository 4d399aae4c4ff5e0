//! Core backend logic
//!
//! Pure document helpers with no I/O: ids, stamping, patching, the ownership
//! and conversation predicates, and reference population.

pub mod documents;

#[cfg(test)]
mod tests;

pub use documents::{
    apply_patch, document_id, in_conversation, index_by_id, involves_user, populate, reference_id, sort_by_created,
    stamp,
};
