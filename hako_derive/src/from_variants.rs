use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Fields};

use crate::common::combined_error;

pub fn from_variants_impl(input: &DeriveInput) -> TokenStream {
    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return combined_error(
                "FromVariants",
                input.ident.span(),
                vec![("Only enums are supported", None)],
            )
            .to_compile_error();
        }
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut errors = Vec::new();
    let mut impls = Vec::new();
    for variant in &data.variants {
        match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                let ty = &fields.unnamed[0].ty;
                let variant_ident = &variant.ident;
                let doc = format!("Wraps the value as `{}::{}`.", name, variant_ident);
                impls.push(quote! {
                    impl #impl_generics From<#ty> for #name #ty_generics
                    #where_clause
                    {
                        #[doc = #doc]
                        #[inline]
                        fn from(v: #ty) -> Self {
                            Self::#variant_ident(v)
                        }
                    }
                });
            }
            _ => errors.push((
                "Expected a variant with a single unnamed field",
                Some(variant.span()),
            )),
        }
    }

    if !errors.is_empty() {
        return combined_error("FromVariants", input.ident.span(), errors).to_compile_error();
    }

    quote! {
        #(#impls)*
    }
}
