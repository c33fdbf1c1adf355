use syn::Attribute;

use crate::REFLECT_ATTRIBUTE_NAME;

/// Field-level `#[reflect(...)]` attributes.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(skip)]`: the field is invisible to reflection.
    pub skip: bool,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    res.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected `skip`"))
                }
            })?;
        }

        Ok(res)
    }
}
