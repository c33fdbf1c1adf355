//! Parsed form of the derive input.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, Generics, Ident, Type};

/// A reflected named field.
pub(crate) struct StructField {
    pub ident: Ident,
    pub ty: Type,
}

/// Everything the code generators need about one struct.
pub(crate) struct ReflectStruct {
    pub ident: Ident,
    pub generics: Generics,
    pub attrs: TypeAttributes,
    /// Non-skipped fields, in declaration order.
    pub fields: Vec<StructField>,
    /// `struct Unit;`
    pub is_unit: bool,
    pub reflect_path: syn::Path,
}

impl ReflectStruct {
    pub fn from_input(ast: DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        for param in &ast.generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(lt) => {
                    return Err(syn::Error::new_spanned(
                        lt,
                        "`Reflect` types must be `'static`, lifetime parameters are not supported",
                    ));
                }
                GenericParam::Const(c) => {
                    return Err(syn::Error::new_spanned(
                        c,
                        "const generic parameters are not supported by `#[derive(Reflect)]`",
                    ));
                }
            }
        }

        let data = match ast.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`#[derive(Reflect)]` only supports structs with named fields",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`#[derive(Reflect)]` only supports structs with named fields",
                ));
            }
        };

        let (fields, is_unit) = match data.fields {
            Fields::Named(named) => {
                let mut fields = Vec::with_capacity(named.named.len());
                for field in named.named {
                    if FieldAttributes::parse_attrs(&field.attrs)?.skip {
                        continue;
                    }
                    // Named fields always carry an ident.
                    let Some(ident) = field.ident else { continue };
                    fields.push(StructField { ident, ty: field.ty });
                }
                (fields, false)
            }
            Fields::Unit => (Vec::new(), true),
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new_spanned(
                    unnamed,
                    "tuple structs are not supported, use named fields",
                ));
            }
        };

        Ok(Self {
            ident: ast.ident,
            generics: ast.generics,
            attrs,
            fields,
            is_unit,
            reflect_path: crate::path::marshal_reflect(),
        })
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }

    /// The field name as written, without a raw `r#` prefix.
    pub fn field_name(field: &StructField) -> String {
        let name = field.ident.to_string();
        match name.strip_prefix("r#") {
            Some(stripped) => stripped.to_owned(),
            None => name,
        }
    }

    /// Splits the generics, bounding every type parameter with `bounds`.
    pub fn split_generics(&self, bounds: &[TokenStream]) -> (TokenStream, TokenStream, TokenStream) {
        self.split_generics_where(bounds, None)
    }

    /// Like [`split_generics`](Self::split_generics), plus one extra where predicate.
    pub fn split_generics_where(
        &self,
        bounds: &[TokenStream],
        predicate: Option<TokenStream>,
    ) -> (TokenStream, TokenStream, TokenStream) {
        let mut generics = self.generics.clone();
        for param in generics.type_params_mut() {
            for bound in bounds {
                param.bounds.push(syn::parse_quote!(#bound));
            }
        }
        if let Some(predicate) = predicate {
            generics
                .make_where_clause()
                .predicates
                .push(syn::parse_quote!(#predicate));
        }
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        (
            quote!(#impl_generics),
            quote!(#ty_generics),
            quote!(#where_clause),
        )
    }

    /// The idents of the type parameters, in order.
    pub fn type_params(&self) -> Vec<&Ident> {
        self.generics.type_params().map(|param| &param.ident).collect()
    }

    /// `(type_path, module_path)` of the base type, as token expressions.
    ///
    /// Without `#[reflect(type_path = ...)]` both come from `module_path!()`.
    pub fn base_paths(&self) -> (TokenStream, TokenStream) {
        let ident = self.ident.to_string();
        match &self.attrs.type_path {
            Some(custom) => {
                let full = custom.value();
                let module = match full.rsplit_once("::") {
                    Some((module, _)) => {
                        quote!(::core::option::Option::Some(#module))
                    }
                    None => quote!(::core::option::Option::None),
                };
                (quote!(#full), module)
            }
            None => (
                quote!(::core::concat!(::core::module_path!(), "::", #ident)),
                quote!(::core::option::Option::Some(::core::module_path!())),
            ),
        }
    }

    /// The last path segment, used as type ident.
    pub fn base_ident(&self) -> String {
        match &self.attrs.type_path {
            Some(custom) => {
                let full = custom.value();
                match full.rsplit_once("::") {
                    Some((_, ident)) => ident.to_owned(),
                    None => full,
                }
            }
            None => self.ident.to_string(),
        }
    }
}
