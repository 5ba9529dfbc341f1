//! Token generation for capability probes.
//!
//! Every expansion reads `Detect::<Ty>::IS_XXX` with the matching fallback
//! trait in scope. The inherent const wins when `Ty: Trait` holds, the
//! fallback's `false` otherwise. `Ty` must be concrete at the expansion site.

use proc_macro2::TokenStream;
use quote::quote;

/// Expression of type `::cap_probe::ProbedFacts` for `ty`.
pub fn probed_expr(ty: &TokenStream) -> TokenStream {
    quote! {
        {
            #[allow(unused_imports)]
            use ::cap_probe::detect::{DuplicableFallback as _, RelocatableFallback as _};
            ::cap_probe::ProbedFacts::__from_probes(
                ::cap_probe::detect::Detect::<#ty>::IS_CLONE,
                ::cap_probe::detect::Detect::<#ty>::IS_UNPIN,
            )
        }
    }
}

/// Expression of type `::cap_probe::CapabilityFacts` for `ty`.
pub fn facts_expr(ty: &TokenStream) -> TokenStream {
    let probed = probed_expr(ty);
    quote! { (#probed).facts() }
}
