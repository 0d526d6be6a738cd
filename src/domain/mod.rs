// Domain layer module exports
// Records, change sets and repository contracts for the catalogue.
// Domain is independent of the HTTP layer.

pub mod errors;
pub mod repositories;
pub mod validation;
