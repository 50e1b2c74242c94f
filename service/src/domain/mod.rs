//! Domain definitions.

pub mod car;
pub mod modification;
pub mod pricing;
pub mod rental;

pub use self::{car::Car, modification::Modification, rental::Rental};
