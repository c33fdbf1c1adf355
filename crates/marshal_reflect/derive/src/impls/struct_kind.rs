use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation codes for `Struct` and `Reflect`.
pub(crate) fn impl_struct_kind(data: &ReflectStruct) -> TokenStream {
    let reflect_path = &data.reflect_path;
    let reflect_ = crate::path::reflect_(reflect_path);
    let info_ = crate::path::info_(reflect_path);
    let ops_ = crate::path::ops_(reflect_path);
    let exports_ = crate::path::macro_exports_(reflect_path);

    let ident = &data.ident;
    let (impl_generics, ty_generics, where_clause) =
        data.split_generics(&[quote!(#reflect_), quote!(#info_::Typed)]);

    let members: Vec<_> = data.fields.iter().map(|field| &field.ident).collect();
    let names: Vec<_> = data.fields.iter().map(ReflectStruct::field_name).collect();
    let indices: Vec<_> = (0..data.fields.len()).collect();
    let field_len = data.fields.len();

    quote! {
        impl #impl_generics #ops_::Struct for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #exports_::Option<&dyn #reflect_> {
                match name {
                    #(#names => #exports_::Option::Some(&self.#members),)*
                    _ => #exports_::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #exports_::Option<&mut dyn #reflect_> {
                match name {
                    #(#names => #exports_::Option::Some(&mut self.#members),)*
                    _ => #exports_::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> #exports_::Option<&dyn #reflect_> {
                match index {
                    #(#indices => #exports_::Option::Some(&self.#members),)*
                    _ => #exports_::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #exports_::Option<&mut dyn #reflect_> {
                match index {
                    #(#indices => #exports_::Option::Some(&mut self.#members),)*
                    _ => #exports_::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> #exports_::Option<&str> {
                match index {
                    #(#indices => #exports_::Option::Some(#names),)*
                    _ => #exports_::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            #[inline]
            fn iter_fields(&self) -> #ops_::StructFieldIter<'_> {
                #ops_::StructFieldIter::new(self)
            }
        }

        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #exports_::Box<dyn #reflect_>,
            ) -> #exports_::Result<(), #exports_::Box<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                #exports_::Result::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #info_::ReflectKind {
                #info_::ReflectKind::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #ops_::ReflectRef<'_> {
                #ops_::ReflectRef::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #ops_::ReflectMut<'_> {
                #ops_::ReflectMut::Struct(self)
            }

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #exports_::struct_debug(self, f)
            }
        }
    }
}
