//! Dependency injection infrastructure.
//!
//! Repositories and services are built from the application [`Context`]
//! through the `FromRef` trait and the derives from `di-macros`.
//!
//! - `FromRef<T>`: extract a value from a reference to `T`
//! - `#[derive(Context)]`: makes each context field extractable via `FromRef`
//! - `#[derive(FromContext)]`: generates a `FromRef` impl that resolves each field
//!
//! ```ignore
//! use crate::di::FromRef;
//!
//! let ctx = Context::new(Config::default());
//! let floats = FloatRepository::from_ref(&ctx);
//! let query = QueryService::from_ref(&ctx);
//! ```
//!
//! [`Context`]: crate::context::Context

/// Trait for extracting a value from a reference to another type.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

pub use di_macros::{Context, FromContext};
