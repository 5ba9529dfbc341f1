//! `classify!(Type)`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

use crate::common::facts_expr;

/// One type, optionally followed by a trailing comma.
pub struct ClassifyInput {
    pub ty: Type,
}

impl Parse for ClassifyInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        if !input.is_empty() {
            return Err(input.error("expected a single type"));
        }
        Ok(ClassifyInput { ty })
    }
}

pub fn expand_classify(input: ClassifyInput) -> TokenStream {
    let ty = &input.ty;
    facts_expr(&quote! { #ty })
}
