//! Entity definitions and field sets for the clinic tables.
//!
//! Each entity module pairs a SeaORM `Model` with a `*Fields` struct holding
//! everything but the key; the fields struct is what forms submit for both
//! create and full-replace update.

pub mod errors;
pub mod db;
pub mod validation;
pub mod client;
pub mod product;
pub mod clinic_service;
pub mod invoice;

#[cfg(test)]
mod tests;
