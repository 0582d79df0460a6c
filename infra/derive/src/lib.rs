#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by the Sentio crates: runtime bootstrap, `OpenAPI`
//! aware DTOs and handlers, error enums and feature slices.
//!
//! Examples below are `ignore`d because they need the consuming crates
//! (`sentio-runtime`, `sentio-kernel`, `utoipa`) to compile.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a plain `fn main` running on a
/// [`sentio_runtime`](https://docs.rs/tokio) runtime profile.
///
/// # Arguments
///
/// * `high_performance` - API servers.
/// * `memory_efficient` - The dashboard and other light processes.
/// * `default` - Worker threads follow available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[sentio_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a wire model (request or response body).
///
/// Works on structs and on fieldless enums.
///
/// * Adds `Debug`, `Serialize` and `Deserialize` unless already derived.
/// * Adds `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// * Structs default to `rename_all = "camelCase"` and `deny_unknown_fields`.
/// * Enums default to `rename_all = "lowercase"`; `deny_unknown_fields` is not applied.
///
/// # Example
///
/// ```rust,ignore
/// #[api_model(deny_unknown_fields = false)]
/// pub struct TweetRequest {
///     pub text: String,
/// }
///
/// #[api_model]
/// #[derive(Clone, Copy, PartialEq, Eq)]
/// pub enum SentimentLabel {
///     Positive,
///     Neutral,
///     Negative,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Wraps an Axum handler with `utoipa::path` when the `server` feature is on.
///
/// Accepts the usual `utoipa::path` arguments (`get`, `post`, `path = "..."`,
/// `request_body = ...`, `responses(...)`, `tag = ...`).
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = SYSTEM_TAG,
/// )]
/// pub async fn health_handler() -> impl IntoResponse {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Declares a crate error enum.
///
/// Every variant must use named fields. A variant that wraps an upstream error
/// names it `source` (or marks it `#[source]` / `#[from]`) and must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// Generated items:
///
/// * `#[derive(Debug, thiserror::Error)]` if missing.
/// * `<Name>Ext` trait with `.context(...)` on `Result<T, Name>` and on
///   `Result<T, Source>` for every wrapped source type.
/// * `From<Source>` for every wrapped source type.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for the `#[error(...)]` strings.
///
/// # Example
///
/// ```rust,ignore
/// #[sentio_error]
/// pub enum AnalysisError {
///     #[error("Tweet text cannot be empty{}", format_context(.context))]
///     EmptyText { context: Option<Cow<'static, str>> },
///
///     #[error("Internal analysis error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn sentio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The struct body moves into `<Name>Inner`; `<Name>` becomes an `Arc` wrapper
/// that derefs to it and implements `FeatureSlice` so the kernel state can
/// store and look it up by type.
///
/// # Example
/// ```rust,ignore
/// #[sentio_derive::sentio_slice]
/// pub struct Analysis {
///     pub analyzer: Analyzer,
/// }
///
/// let slice = Analysis::new(AnalysisInner { analyzer });
/// ```
#[proc_macro_attribute]
pub fn sentio_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
