use syn::{parse_macro_input, DeriveInput, ItemImpl};

mod common;
mod from_variants;
mod symmetric;

/// Implements the mirrored ordering of a pairwise trait impl.
///
/// Applied on `impl Trait<B> for A`, emits the impl as is and an
/// `impl Trait<A> for B` whose methods swap the arguments and call the annotated impl.
/// Each method of the impl is expected to take `&self` and a single other argument.
#[proc_macro_attribute]
pub fn symmetric(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = parse_macro_input!(item as ItemImpl);
    proc_macro::TokenStream::from(symmetric::symmetric_impl(attr.into(), item))
}

/// Implements `From<Member>` for each single-field tuple variant of an enum.
#[proc_macro_derive(FromVariants)]
pub fn from_variants(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    proc_macro::TokenStream::from(from_variants::from_variants_impl(&input))
}
