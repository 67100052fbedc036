use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, Ident, parse_macro_input};

fn expect_enum(ident: &Ident, data: Data, derive_name: &str) -> Result<DataEnum, TokenStream> {
    match data {
        Data::Enum(data_enum) => Ok(data_enum),
        _ => Err(syn::Error::new_spanned(
            ident,
            format!("#[derive({derive_name})] is only valid on enums"),
        )
        .to_compile_error()
        .into()),
    }
}

#[proc_macro_derive(EnumCount)]
pub fn enum_count_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let data = match expect_enum(&name, input.data, "EnumCount") {
        Ok(data) => data,
        Err(err) => return err,
    };
    let count = data.variants.len();

    let expanded = quote! {
        impl #name {
            pub const COUNT: usize = #count;
        }
    };

    TokenStream::from(expanded)
}

#[proc_macro_derive(Vector)]
pub fn vector_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let data = match expect_enum(&name, input.data, "Vector") {
        Ok(data) => data,
        Err(err) => return err,
    };

    let constructors = data.variants.into_iter().map(|variant| {
        let variant_ident = variant.ident;
        match variant.fields {
            Fields::Unit => quote! { #name::#variant_ident },
            Fields::Unnamed(fields) => {
                let defaults = fields.unnamed.iter().map(|_| quote! { Default::default() });
                quote! { #name::#variant_ident(#(#defaults),*) }
            }
            Fields::Named(fields) => {
                let inits = fields.named.iter().map(|field| {
                    let field_ident = field.ident.as_ref().unwrap();
                    quote! { #field_ident: Default::default() }
                });
                quote! { #name::#variant_ident { #(#inits),* } }
            }
        }
    });

    let expanded = quote! {
        impl #name {
            pub fn vector() -> Vec<Self> {
                vec![
                    #(#constructors),*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}

#[proc_macro_derive(ToString)]
pub fn to_string_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let data = match expect_enum(&name, input.data, "ToString") {
        Ok(data) => data,
        Err(err) => return err,
    };

    let arms = data.variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let label = variant_ident.to_string();
        match variant.fields {
            Fields::Unit => quote! {
                #name::#variant_ident => f.write_str(#label),
            },
            _ => syn::Error::new_spanned(variant_ident, "ToString supports unit variants only")
                .to_compile_error(),
        }
    });

    let expanded = quote! {
        impl std::fmt::Display for #name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    #(#arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
