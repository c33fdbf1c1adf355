use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation codes for `TypePath`.
///
/// Generic types build their paths once per instantiation in a
/// `GenericTypePathCell`.
pub(crate) fn impl_trait_type_path(data: &ReflectStruct) -> TokenStream {
    let reflect_path = &data.reflect_path;
    let info_ = crate::path::info_(reflect_path);
    let exports_ = crate::path::macro_exports_(reflect_path);

    let ident = &data.ident;
    let (base_path, module_path) = data.base_paths();
    let base_ident = data.base_ident();

    let (impl_generics, ty_generics, where_clause) =
        data.split_generics(&[quote!(#info_::TypePath)]);

    let (type_path, type_name) = if data.is_generic() {
        let params = data.type_params();
        let path_cell = |prefix: TokenStream, accessor: TokenStream| {
            quote! {
                static CELL: #exports_::GenericTypePathCell = #exports_::GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    #exports_::generic_path(#prefix, &[#(<#params as #info_::TypePath>::#accessor()),*])
                })
            }
        };
        (
            path_cell(base_path, quote!(type_path)),
            path_cell(quote!(#base_ident), quote!(type_name)),
        )
    } else {
        (base_path, quote!(#base_ident))
    };

    quote! {
        impl #impl_generics #info_::TypePath for #ident #ty_generics #where_clause {
            fn type_path() -> &'static str {
                #type_path
            }

            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #base_ident
            }

            #[inline]
            fn module_path() -> #exports_::Option<&'static str> {
                #module_path
            }
        }
    }
}
