//! Claim submission rules and request validation.

pub mod claims;
pub mod validation;

pub use claims::ClaimService;
pub use validation::ClaimValidator;
