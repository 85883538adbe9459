//! ConfigBlock derive macro implementation
//!
//! This module generates the `ConfigBlock` implementation: the schema
//! descriptors, the decoder from an untyped map and the encoder back to it.

use darling::{ast, FromDeriveInput, FromField};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use crate::utils::{self, FieldKind};

/// Receiver for the struct that derives `ConfigBlock`
#[derive(Debug, FromDeriveInput)]
#[darling(supports(struct_named))]
struct ConfigBlockReceiver {
    /// The struct identifier
    ident: syn::Ident,
    /// The struct data with parsed fields
    data: ast::Data<(), ConfigFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(field))]
struct ConfigFieldReceiver {
    /// The field identifier
    ident: Option<syn::Ident>,
    /// The field type
    ty: syn::Type,
    /// `FieldName` constant of the configuration key
    name: syn::Expr,
    #[darling(default)]
    required: bool,
    #[darling(default)]
    max_items: Option<usize>,
    #[darling(default)]
    set: bool,
    #[darling(default)]
    description: Option<String>,
}

/// Process the ConfigBlock derive macro
pub fn process_derive_config_block(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let receiver = match ConfigBlockReceiver::from_derive_input(&input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors().into(),
    };

    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    match generate_config_block_impl(&receiver.ident, fields) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Generate the trait implementation
fn generate_config_block_impl(
    struct_name: &syn::Ident,
    fields: &ast::Fields<ConfigFieldReceiver>,
) -> syn::Result<proc_macro2::TokenStream> {
    let krate = quote! { ::elastigroup_integrations };
    let schema = quote! { #krate::schema };

    let mut definitions = Vec::new();
    let mut decoders = Vec::new();
    let mut encoders = Vec::new();

    for field in fields.iter() {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(&field.ty, "expected a named field"))?;
        let name = &field.name;
        let key = quote! { #schema::FieldName::from(#name) };

        let (definition, decoder, encoder) = match utils::classify(&field.ty)? {
            FieldKind::Scalar(kind) => {
                let field_type = kind.field_type_tokens();
                (
                    quote! { #schema::FieldDefinition::scalar(#key, #field_type) },
                    quote! { #ident: #schema::decode::scalar(map, #key) },
                    quote! {
                        if let ::std::option::Option::Some(value) = &self.#ident {
                            map.insert(#key.as_str().to_string(), #schema::decode::encode_scalar(value));
                        }
                    },
                )
            }
            FieldKind::Object(inner) => (
                quote! {
                    #schema::FieldDefinition::object(#key, <#inner as #schema::ConfigBlock>::fields())
                },
                quote! { #ident: #schema::decode::object(map, #key)? },
                quote! {
                    if let ::std::option::Option::Some(value) = &self.#ident {
                        map.insert(#key.as_str().to_string(), #schema::decode::encode_block(value));
                    }
                },
            ),
            FieldKind::List(inner) => (
                quote! {
                    #schema::FieldDefinition::list(#key, <#inner as #schema::ConfigBlock>::fields())
                },
                quote! { #ident: #schema::decode::objects(map, #key)? },
                quote! {
                    if !self.#ident.is_empty() {
                        map.insert(#key.as_str().to_string(), #schema::decode::encode_blocks(&self.#ident));
                    }
                },
            ),
        };

        let required = field.required;
        let mut definition = quote! { #definition.with_required(#required) };
        if let Some(max_items) = field.max_items {
            definition = quote! { #definition.with_max_items(#max_items) };
        }
        if field.set {
            definition = quote! { #definition.as_set() };
        }
        if let Some(description) = &field.description {
            definition = quote! { #definition.with_description(#description) };
        }

        definitions.push(definition);
        decoders.push(decoder);
        encoders.push(encoder);
    }

    Ok(quote! {
        #[allow(unused_variables, unused_mut)]
        impl #schema::ConfigBlock for #struct_name {
            fn fields() -> ::std::vec::Vec<#schema::FieldDefinition> {
                ::std::vec![#(#definitions),*]
            }

            fn from_map(map: &#schema::ConfigMap) -> #krate::Result<Self> {
                ::std::result::Result::Ok(Self {
                    #(#decoders),*
                })
            }

            fn to_map(&self) -> #schema::ConfigMap {
                let mut map = #schema::ConfigMap::new();
                #(#encoders)*
                map
            }
        }
    })
}
