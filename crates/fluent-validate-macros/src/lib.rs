//! Procedural macros for fluent-validate
//!
//! This crate provides:
//!
//! - `#[derive(Properties)]` - one labelled `Property` constant per named field

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

/// Derive associated `Property` constants for every named field.
///
/// Each field `foo: T` becomes `pub const FOO: Property<Self, T>` labelled
/// `"foo"`. The label can be changed with `#[property(rename = "...")]` and a
/// field can be left out with `#[property(skip)]`.
///
/// # Example
///
/// ```rust,ignore
/// use fluent_validate::prelude::*;
///
/// #[derive(Properties)]
/// struct User {
///     name: String,
///     #[property(rename = "e-mail")]
///     email: String,
///     #[property(skip)]
///     internal_id: u64,
/// }
///
/// let mut validator = Validator::<User>::new();
/// validator.rule_for(User::NAME).not_empty();
/// validator.rule_for(User::EMAIL).email();
/// ```
#[proc_macro_derive(Properties, attributes(property))]
pub fn derive_properties(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_properties(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Options read from `#[property(...)]` on one field.
#[derive(Default)]
struct FieldOptions {
    rename: Option<String>,
    skip: bool,
}

fn field_options(field: &syn::Field) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("property")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let label: LitStr = meta.value()?.parse()?;
                options.rename = Some(label.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `rename = \"...\"` or `skip`"))
            }
        })?;
    }

    Ok(options)
}

fn expand_properties(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Properties can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Properties can only be derived for structs",
            ))
        }
    };

    let mut constants = Vec::new();
    for field in fields {
        let options = field_options(field)?;
        if options.skip {
            continue;
        }

        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = ident.to_string();
        let field_name = field_name.strip_prefix("r#").unwrap_or(&field_name);
        let label = options.rename.unwrap_or_else(|| field_name.to_string());
        let const_name = format_ident!("{}", field_name.to_uppercase());
        let ty = &field.ty;
        let doc = format!("Property accessor for `{}`.", field_name);

        constants.push(quote! {
            #[doc = #doc]
            pub const #const_name: ::fluent_validate::Property<Self, #ty> =
                ::fluent_validate::Property::new(#label, |model: &Self| &model.#ident);
        });
    }

    Ok(quote! {
        #[allow(dead_code)]
        impl #impl_generics #name #ty_generics #where_clause {
            #(#constants)*
        }
    })
}
