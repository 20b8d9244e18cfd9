//! Read-only queries over a loaded [`crate::RentalTable`].

pub mod correlation;
pub(crate) mod stats;
pub mod summary;
pub mod temporal;
pub mod weather;
