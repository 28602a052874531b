//! Provides `#[derive(Error)]`, which implements [Display](std::fmt::Display) and
//! [Error](std::error::Error) from a `#[msg = "..."]` attribute.
//!
//! The attribute goes on every enum variant, or on the struct itself.
//! Named fields that appear in the message as `{field}` (optionally with a format spec,
//! like `{field:?}`) are interpolated into it.
//! Newtype variants additionally get a [From] implementation and are reported
//! as the [source](std::error::Error::source) of the error.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Fields};

#[proc_macro_derive(Error, attributes(msg))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let mut display_arms = vec![];
    let mut source_arms = vec![];
    let mut from_impls = vec![];

    match &input.data {
        Data::Enum(item) => {
            for variant in &item.variants {
                let ident = &variant.ident;
                let path = quote!(Self::#ident);
                let message = find_message(&variant.attrs, variant.span())?;

                display_arms.push(display_arm(&path, &variant.fields, &message)?);

                if let Fields::Unnamed(fields) = &variant.fields {
                    let ty = &fields.unnamed[0].ty;

                    source_arms.push(quote!(#path(ref value) => Some(value)));
                    from_impls.push(quote!(
                        #[automatically_derived]
                        impl #impl_generics ::std::convert::From<#ty> for #name #type_generics #where_clause {
                            fn from(value: #ty) -> Self {
                                #path(value)
                            }
                        }
                    ));
                }
            }
        },
        Data::Struct(item) => {
            let message = find_message(&input.attrs, input.span())?;
            display_arms.push(display_arm(&quote!(Self), &item.fields, &message)?);
        },
        Data::Union(_) => {
            return Err(syn::Error::new(
                input.span(),
                "Error can not be derived for unions",
            ))
        },
    }

    Ok(quote!(
        #[automatically_derived]
        impl #impl_generics ::std::fmt::Display for #name #type_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(
                        #display_arms,
                    )*
                }
            }
        }

        #(
            #from_impls
        )*

        #[automatically_derived]
        impl #impl_generics ::std::error::Error for #name #type_generics #where_clause {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    #(
                        #source_arms,
                    )*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    ))
}

/// Find the `#[msg = "..."]` attribute among `attributes`
fn find_message(attributes: &[syn::Attribute], span: Span) -> syn::Result<syn::LitStr> {
    let value = attributes
        .iter()
        .find_map(|attribute| match &attribute.meta {
            syn::Meta::NameValue(name_value) if name_value.path.is_ident("msg") => {
                Some(&name_value.value)
            },
            _ => None,
        })
        .ok_or_else(|| syn::Error::new(span, "need a #[msg = \"...\"] attribute"))?;

    match value {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(message),
            ..
        }) => Ok(message.clone()),
        other => Err(syn::Error::new(
            other.span(),
            "the message must be a string literal",
        )),
    }
}

fn display_arm(
    path: &TokenStream2,
    fields: &Fields,
    message: &syn::LitStr,
) -> syn::Result<TokenStream2> {
    let arm = match fields {
        Fields::Unit => quote!(#path => f.write_str(#message)),
        Fields::Unnamed(unnamed) => {
            if unnamed.unnamed.len() != 1 {
                return Err(syn::Error::new(
                    unnamed.span(),
                    "need exactly one unnamed field",
                ));
            }

            quote!(#path(_) => f.write_str(#message))
        },
        Fields::Named(named) => {
            let template = message.value();

            // Only pass the fields that the message actually uses, unused named
            // arguments are rejected by format_args!
            let referenced: Vec<_> = named
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .filter(|ident| mentions_field(&template, &ident.to_string()))
                .collect();

            quote!(#path { #(#referenced,)* .. } => write!(f, #message, #(#referenced = #referenced),*))
        },
    };

    Ok(arm)
}

/// Return `true` if `template` contains a `{field}` or `{field:...}` placeholder
fn mentions_field(template: &str, field: &str) -> bool {
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        if c != '{' {
            continue;
        }

        // "{{" is an escaped brace, not a placeholder
        if chars.next_if(|&(_, next)| next == '{').is_some() {
            continue;
        }

        let placeholder = &template[position + 1..];
        if let Some(rest) = placeholder.strip_prefix(field) {
            if rest.starts_with('}') || rest.starts_with(':') {
                return true;
            }
        }
    }

    false
}
