use proc_macro2::TokenStream;

use crate::derive_data::ReflectStruct;

/// Generate the `inventory` submission for `#[reflect(adapter = ...)]`.
///
/// Generic types are skipped, their instantiations are unknown here.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(data: &ReflectStruct) -> TokenStream {
    use quote::quote_spanned;
    use syn::spanned::Spanned;

    let Some(adapter) = &data.attrs.adapter else {
        return TokenStream::new();
    };
    if data.is_generic() {
        return TokenStream::new();
    }

    let engine_path = crate::path::marshal_engine();
    let ident = &data.ident;

    quote_spanned! { adapter.span() =>
        #engine_path::__macro_exports::inventory::submit! {
            #engine_path::__macro_exports::AdapterDirective::new::<#ident, #adapter>()
        }
    }
}

#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectStruct) -> TokenStream {
    TokenStream::new()
}
