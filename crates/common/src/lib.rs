//! Shared building blocks for the clinic workspace: paging arithmetic and
//! logging bootstrap.

pub mod pagination;
pub mod utils;
