use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation codes for `Typed`.
///
/// ```ignore
/// impl Typed for Foo {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Struct(
///             StructInfo::new::<Self>(&[NamedField::new::<u32>("a")]).with_default::<Self>()
///         ))
///     }
/// }
/// ```
pub(crate) fn impl_trait_typed(data: &ReflectStruct) -> TokenStream {
    let reflect_path = &data.reflect_path;
    let reflect_ = crate::path::reflect_(reflect_path);
    let info_ = crate::path::info_(reflect_path);
    let exports_ = crate::path::macro_exports_(reflect_path);

    let ident = &data.ident;
    // Generic types may only be `Default` under extra bounds.
    let default_predicate = match data.attrs.default.is_some() && data.is_generic() {
        true => Some(quote!(Self: ::core::default::Default)),
        false => None,
    };
    let (impl_generics, ty_generics, where_clause) = data
        .split_generics_where(&[quote!(#reflect_), quote!(#info_::Typed)], default_predicate);

    let fields = data.fields.iter().map(|field| {
        let ty = &field.ty;
        let name = ReflectStruct::field_name(field);
        quote!(#info_::NamedField::new::<#ty>(#name))
    });

    let constructor = if data.attrs.default.is_some() {
        quote!(.with_default::<Self>())
    } else if data.is_unit {
        quote! {
            .with_constructor(|| -> #exports_::Box<dyn #reflect_> { #exports_::Box::new(Self) })
        }
    } else {
        TokenStream::new()
    };

    let info = quote! {
        #info_::TypeInfo::Struct(
            #info_::StructInfo::new::<Self>(&[#(#fields),*])#constructor
        )
    };

    let body = if data.is_generic() {
        quote! {
            static CELL: #exports_::GenericTypeInfoCell = #exports_::GenericTypeInfoCell::new();
            CELL.get_or_insert::<Self>(|| #info)
        }
    } else {
        quote! {
            static CELL: #exports_::NonGenericTypeInfoCell = #exports_::NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| #info)
        }
    };

    quote! {
        impl #impl_generics #info_::Typed for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #info_::TypeInfo {
                #body
            }
        }
    }
}
