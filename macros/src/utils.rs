//! Utility functions for procedural macros
//!
//! This module contains the type inspection used to decide the shape of a
//! configuration key from the Rust type of its field.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

/// Scalar types a configuration key can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
}

impl ScalarKind {
    /// Path of the matching `FieldType` variant
    pub fn field_type_tokens(self) -> TokenStream {
        match self {
            ScalarKind::String => quote! { ::elastigroup_integrations::schema::FieldType::String },
            ScalarKind::Integer => quote! { ::elastigroup_integrations::schema::FieldType::Integer },
            ScalarKind::Float => quote! { ::elastigroup_integrations::schema::FieldType::Float },
            ScalarKind::Boolean => quote! { ::elastigroup_integrations::schema::FieldType::Boolean },
        }
    }
}

/// Shape of a configuration key, derived from the field type
#[derive(Debug)]
pub enum FieldKind<'a> {
    /// `Option<scalar>`
    Scalar(ScalarKind),
    /// `Option<T>` with `T` a configuration block
    Object(&'a Type),
    /// `Vec<T>` with `T` a configuration block
    List(&'a Type),
}

/// Get the single type argument of `Wrapper<T>` if `ty` is that wrapper
pub fn generic_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

/// Recognize the scalar types supported in configuration
pub fn scalar_kind(ty: &Type) -> Option<ScalarKind> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if !segment.arguments.is_empty() {
        return None;
    }
    let ident = segment.ident.to_string();
    match ident.as_str() {
        "String" => Some(ScalarKind::String),
        "bool" => Some(ScalarKind::Boolean),
        "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "u64" | "isize" | "usize" => {
            Some(ScalarKind::Integer)
        }
        "f32" | "f64" => Some(ScalarKind::Float),
        _ => None,
    }
}

/// Classify a field type
pub fn classify(ty: &Type) -> syn::Result<FieldKind<'_>> {
    if let Some(inner) = generic_inner(ty, "Option") {
        return Ok(match scalar_kind(inner) {
            Some(kind) => FieldKind::Scalar(kind),
            None => FieldKind::Object(inner),
        });
    }
    if let Some(inner) = generic_inner(ty, "Vec") {
        if scalar_kind(inner).is_some() {
            return Err(syn::Error::new_spanned(
                ty,
                "lists of scalars are not supported in configuration blocks",
            ));
        }
        return Ok(FieldKind::List(inner));
    }
    Err(syn::Error::new_spanned(
        ty,
        "configuration block fields must be Option<T> or Vec<T>",
    ))
}
