use proc_macro2::Span;
use syn::{Attribute, LitBool, LitStr, Path};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Switches for the traits the derive writes.
///
/// Both default to `true`. Disabling one means the user provides it.
#[derive(Debug)]
pub(crate) struct TraitImplSwitches {
    /// `#[reflect(TypePath = false)]`
    pub impl_type_path: bool,
    /// `#[reflect(Typed = false)]`
    pub impl_typed: bool,
}

impl Default for TraitImplSwitches {
    #[inline]
    fn default() -> Self {
        Self {
            impl_type_path: true,
            impl_typed: true,
        }
    }
}

/// Type-level `#[reflect(...)]` attributes.
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(type_path = "a::b::Name")]`, without generics.
    pub type_path: Option<LitStr>,
    /// `#[reflect(default)]`: record `Default::default` as constructor.
    pub default: Option<Span>,
    /// `#[reflect(adapter = path::To::Adapter)]`: auto-discovery directive.
    pub adapter: Option<Path>,
    pub switches: TraitImplSwitches,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    let lit: LitStr = meta.value()?.parse()?;
                    let value = lit.value();
                    if value.is_empty() || value.starts_with("::") || value.contains('<') {
                        return Err(meta.error(
                            "`type_path` must be a plain path such as \"app::model::Node\"",
                        ));
                    }
                    res.type_path = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("default") {
                    res.default = Some(meta.path.require_ident()?.span());
                    Ok(())
                } else if meta.path.is_ident("adapter") {
                    res.adapter = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("TypePath") {
                    let lit: LitBool = meta.value()?.parse()?;
                    res.switches.impl_type_path = lit.value;
                    Ok(())
                } else if meta.path.is_ident("Typed") {
                    let lit: LitBool = meta.value()?.parse()?;
                    res.switches.impl_typed = lit.value;
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported attribute, expected one of `type_path`, `default`, `adapter`, `TypePath`, `Typed`",
                    ))
                }
            })?;
        }

        Ok(res)
    }
}
