//! Compile-time dependency injection derives for FloatChat.
//!
//! - `#[derive(Context)]` exposes every field of the application context
//!   through `FromRef`, so handlers can pull out the store or config.
//! - `#[derive(FromContext)]` builds repositories and services by resolving
//!   each of their fields from the context.
//!
//! Generated code names `crate::FromRef`, so the consuming crate must expose
//! the trait at its root.

use proc_macro::TokenStream;

mod context;
mod fields;
mod from_context;

/// Makes each field of a context struct extractable via `FromRef`.
///
/// Every field must be `Clone`, and no two fields may share a type.
///
/// ```ignore
/// #[derive(Context, Clone)]
/// pub struct Context {
///     pub store: Arc<MemoryStore>,
///     pub config: Arc<Config>,
/// }
///
/// // Generated:
/// // impl FromRef<Context> for Arc<MemoryStore> { ... }
/// // impl FromRef<Context> for Arc<Config> { ... }
/// ```
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    context::derive_context_impl(input)
}

/// Builds a struct from a context by resolving every field through `FromRef`.
///
/// The context type defaults to `Context`; override it with
/// `#[from_context(Context = "OtherContext")]`.
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// pub struct FloatRepository {
///     store: AppStore,
/// }
///
/// // Generated:
/// // impl FromRef<Context> for FloatRepository {
/// //     fn from_ref(ctx: &Context) -> Self {
/// //         Self { store: <AppStore as FromRef<Context>>::from_ref(ctx) }
/// //     }
/// // }
/// ```
#[proc_macro_derive(FromContext, attributes(from_context))]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    from_context::derive_from_context_impl(input)
}
