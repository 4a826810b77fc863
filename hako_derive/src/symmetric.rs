use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    spanned::Spanned, FnArg, GenericArgument, ImplItem, ImplItemMethod, ItemImpl, Pat, Path,
    PathArguments, Type,
};

use crate::common::{combined_error, same_tokens};

pub fn symmetric_impl(attr: TokenStream, item: ItemImpl) -> TokenStream {
    match mirror_impl(attr, &item) {
        Ok(mirror) => quote! {
            #item

            #mirror
        },
        Err(err) => {
            let err = err.to_compile_error();
            quote! {
                #item

                #err
            }
        }
    }
}

fn mirror_impl(attr: TokenStream, item: &ItemImpl) -> syn::Result<TokenStream> {
    let mut errors = Vec::new();
    if !attr.is_empty() {
        errors.push(("Takes no arguments", Some(attr.span())));
    }
    if item.unsafety.is_some() {
        errors.push(("Unsafe impls are not supported", Some(item.span())));
    }

    let trait_path = match &item.trait_ {
        Some((None, path, _)) => path,
        Some((Some(bang), _, _)) => {
            errors.push(("Negative impls are not supported", Some(bang.span())));
            return Err(combined_error("symmetric", item.span(), errors));
        }
        None => {
            errors.push(("Expected a trait impl", Some(item.self_ty.span())));
            return Err(combined_error("symmetric", item.span(), errors));
        }
    };

    let self_ty = &item.self_ty;
    let rhs_ty = match rhs_type(trait_path) {
        Some(ty) => ty,
        None => {
            errors.push((
                "Expected the trait to have the other type as its last generic argument",
                Some(trait_path.span()),
            ));
            return Err(combined_error("symmetric", item.span(), errors));
        }
    };
    if same_tokens(rhs_ty, self_ty.as_ref()) {
        errors.push((
            "Impl for a pair of the same type is already symmetric",
            Some(rhs_ty.span()),
        ));
    }

    let mirrored_path = mirrored_trait_path(trait_path, self_ty);

    let mut items = Vec::new();
    for impl_item in &item.items {
        match impl_item {
            ImplItem::Type(t) => items.push(quote! { #t }),
            ImplItem::Method(m) => match mirror_method(m, self_ty, trait_path) {
                Ok(method) => items.push(method),
                Err((err, span)) => errors.push((err, Some(span))),
            },
            other => errors.push(("Only types and methods are supported", Some(other.span()))),
        }
    }

    if !errors.is_empty() {
        return Err(combined_error("symmetric", item.span(), errors));
    }

    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics #mirrored_path for #rhs_ty
        #where_clause
        {
            #(#items)*
        }
    })
}

/// Returns the last type argument of the trait, e.g. `B` in `Distance<B>`.
fn rhs_type(path: &Path) -> Option<&Type> {
    let segment = path.segments.last()?;
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => match args.args.last()? {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        },
        _ => None,
    }
}

fn mirrored_trait_path(path: &Path, self_ty: &Type) -> Path {
    let mut ret = path.clone();
    if let Some(segment) = ret.segments.last_mut() {
        if let PathArguments::AngleBracketed(args) = &mut segment.arguments {
            if let Some(GenericArgument::Type(ty)) = args.args.last_mut() {
                *ty = self_ty.clone();
            }
        }
    }
    ret
}

fn mirror_method(
    method: &ImplItemMethod,
    self_ty: &Type,
    trait_path: &Path,
) -> Result<TokenStream, (&'static str, Span)> {
    let sig = &method.sig;
    if sig.inputs.len() != 2 {
        return Err(("Expected methods of the form fn(&self, other)", sig.span()));
    }

    match sig.inputs.first() {
        Some(FnArg::Receiver(r)) if r.reference.is_some() && r.mutability.is_none() => (),
        _ => return Err(("Expected &self as the first argument", sig.inputs.span())),
    }

    let (other, other_ty) = match sig.inputs.last() {
        Some(FnArg::Typed(pat_type)) => match pat_type.pat.as_ref() {
            Pat::Ident(ident) => (ident.ident.clone(), pat_type.ty.as_ref()),
            _ => return Err(("Expected a plain identifier", pat_type.pat.span())),
        },
        _ => return Err(("Expected a typed second argument", sig.inputs.span())),
    };

    let (mirrored_ty, receiver, call_arg) = match other_ty {
        Type::Reference(r) => {
            if r.mutability.is_some() {
                return Err(("Expected a shared reference", r.span()));
            }
            (quote! { &#self_ty }, quote! { #other }, quote! { self })
        }
        _ => (quote! { #self_ty }, quote! { &#other }, quote! { *self }),
    };

    let name = &sig.ident;
    let output = &sig.output;
    let generics = &sig.generics;
    let where_clause = &sig.generics.where_clause;
    Ok(quote! {
        #[inline]
        fn #name #generics(&self, #other: #mirrored_ty) #output
        #where_clause
        {
            <#self_ty as #trait_path>::#name(#receiver, #call_arg)
        }
    })
}
