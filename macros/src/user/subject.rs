//! `#[derive(Subject)]`

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::common::{probed_expr, SubjectOptions};

/// Implement `Subject` for a concrete type.
///
/// Generic types are rejected: inside a generic impl the probes cannot see
/// through the type parameters and would report `false` for everything.
pub fn expand_derive_subject(input: DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Subject` can only be derived for non-generic types; \
             derive it on a concrete wrapper instead",
        ));
    }

    let options = SubjectOptions::from_attrs(&input.attrs)?;
    let ty = &input.ident;
    let probed = probed_expr(&quote! { #ty });
    let facts = if options.shares_state {
        quote! { (#probed).sharing_state() }
    } else {
        probed
    };

    let name_fn = options.name.map(|name| {
        quote! {
            fn name() -> &'static str {
                #name
            }
        }
    });

    Ok(quote! {
        impl ::cap_probe::Subject for #ty {
            const FACTS: ::cap_probe::ProbedFacts = #facts;
            #name_fn
        }
    })
}
