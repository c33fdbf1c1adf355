// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod struct_kind;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use auto_register::get_auto_register_impl;
use struct_kind::impl_struct_kind;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// All implementations for one derived struct.
pub(crate) fn impl_reflect_struct(data: &ReflectStruct) -> TokenStream {
    let type_path = match data.attrs.switches.impl_type_path {
        true => impl_trait_type_path(data),
        false => TokenStream::new(),
    };
    let typed = match data.attrs.switches.impl_typed {
        true => impl_trait_typed(data),
        false => TokenStream::new(),
    };
    let struct_kind = impl_struct_kind(data);
    let auto_register = get_auto_register_impl(data);

    quote! {
        const _: () = {
            #type_path
            #typed
            #struct_kind
            #auto_register
        };
    }
}
