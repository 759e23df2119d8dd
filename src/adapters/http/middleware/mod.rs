//! HTTP middleware and extractors.

mod identity;

pub use identity::{IdentityRejection, RequireUser};
