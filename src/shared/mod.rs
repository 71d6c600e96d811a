//! Shared Module
//!
//! Wire types and validation rules used by the HTTP layer and by API
//! clients. Everything here is plain data: no database or framework
//! dependencies beyond `serde`.

/// Shared error types
pub mod error;

/// Object identifiers
pub mod object_id;

/// Field validation rules and the `Validate` trait
pub mod validation;

/// User request/response bodies
pub mod user;

/// Card request/response bodies
pub mod card;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use object_id::ObjectId;
pub use validation::Validate;
pub use user::{SignupRequest, SigninRequest, UpdateAvatarRequest, UpdateProfileRequest, UserResponse};
pub use card::{CardResponse, CreateCardRequest};
