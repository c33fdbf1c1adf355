//! Paths of the runtime items the generated code refers to.
//!
//! Kept in one place, so a layout change of `marshal_reflect` only
//! touches this file.

use proc_macro2::TokenStream;
use quote::quote;

/// Path of the `marshal_reflect` crate from the caller's point of view.
///
/// Reading the manifest is relatively costly, the result is computed once
/// per derive and passed along.
pub(crate) fn marshal_reflect() -> syn::Path {
    marshal_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("marshal_reflect"))
}

/// Path of the `marshal_engine` crate, needed by `#[reflect(adapter = ...)]`.
#[cfg(feature = "auto_register")]
pub(crate) fn marshal_engine() -> syn::Path {
    marshal_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("marshal_engine"))
}

#[inline(always)]
pub(crate) fn reflect_(reflect_path: &syn::Path) -> TokenStream {
    quote!(#reflect_path::Reflect)
}

#[inline(always)]
pub(crate) fn info_(reflect_path: &syn::Path) -> TokenStream {
    quote!(#reflect_path::info)
}

#[inline(always)]
pub(crate) fn ops_(reflect_path: &syn::Path) -> TokenStream {
    quote!(#reflect_path::ops)
}

#[inline(always)]
pub(crate) fn macro_exports_(reflect_path: &syn::Path) -> TokenStream {
    quote!(#reflect_path::__macro_exports)
}
