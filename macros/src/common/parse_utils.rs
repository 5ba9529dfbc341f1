//! Helper attribute parsing.

use syn::{Attribute, LitStr};

/// Options collected from `#[subject(...)]` attributes.
#[derive(Default)]
pub struct SubjectOptions {
    pub name: Option<LitStr>,
    pub shares_state: bool,
}

impl SubjectOptions {
    /// Parse every `#[subject(...)]` attribute on an item.
    ///
    /// Accepted keys:
    /// - `name = "..."`: identity reported instead of `type_name`
    /// - `shares_state`: `Clone` aliases mutable state, so not duplicable
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = SubjectOptions::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("subject")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if options.name.is_some() {
                        return Err(meta.error("duplicate `name`"));
                    }
                    options.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("shares_state") {
                    if options.shares_state {
                        return Err(meta.error("duplicate `shares_state`"));
                    }
                    options.shares_state = true;
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported subject option, expected `name` or `shares_state`",
                    ))
                }
            })?;
        }

        Ok(options)
    }
}
