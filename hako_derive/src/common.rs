use proc_macro2::{Span, TokenStream};
use quote::ToTokens;

pub fn combined_error(
    prefix: &str,
    default_span: Span,
    errors: Vec<(&str, Option<Span>)>,
) -> syn::Error {
    errors
        .iter()
        .map(|&(err, span)| {
            syn::Error::new(span.unwrap_or(default_span), format!("{}: {}", prefix, err))
        })
        .reduce(|mut acc, err| {
            acc.combine(err);
            acc
        })
        .unwrap_or_else(|| syn::Error::new(default_span, prefix))
}

/// Compares two syntax nodes by their token representation.
pub fn same_tokens<A, B>(a: &A, b: &B) -> bool
where
    A: ToTokens,
    B: ToTokens,
{
    let a: TokenStream = a.to_token_stream();
    let b: TokenStream = b.to_token_stream();
    a.to_string() == b.to_string()
}
