//! Name and type resolution for generated code
//!
//! Catalog names arrive in SQL spelling (`BOOK`, `CO_AUTHOR_ID`,
//! `varchar(400)`). This module maps them onto the Rust side: struct
//! names, accessor names, `SqlType` constructor tokens, and the value
//! type each typed column accessor returns.

use anyhow::{anyhow, bail, Context};
use proc_macro2::TokenStream;
use quote::quote;

/// Convert a SQL name to PascalCase (`CO_AUTHOR` -> `CoAuthor`).
pub fn pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|s| !s.is_empty())
        .map(|s| {
            let lower = s.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Rust keywords that cannot be used as accessor names without escaping.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "do", "dyn", "else",
    "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let", "loop", "macro",
    "match", "mod", "move", "mut", "priv", "pub", "ref", "return", "self", "static", "struct",
    "super", "trait", "true", "try", "type", "unsafe", "use", "virtual", "where", "while",
    "yield",
];

/// Convert a SQL name to a snake_case accessor name (`CO_AUTHOR_ID` ->
/// `co_author_id`). Names that collide with a Rust keyword get a
/// trailing underscore.
pub fn accessor_name(name: &str) -> String {
    let snake = name.to_lowercase();
    if KEYWORDS.contains(&snake.as_str()) {
        format!("{snake}_")
    } else {
        snake
    }
}

/// Parse a catalog type spelling into its base name and numeric arguments
/// (`"varchar(400)"` -> `("varchar", [400])`).
fn split_type(type_str: &str) -> anyhow::Result<(&str, Vec<u32>)> {
    let type_str = type_str.trim();
    match type_str.split_once('(') {
        None => Ok((type_str, vec![])),
        Some((base, rest)) => {
            let args_str = rest
                .strip_suffix(')')
                .ok_or_else(|| anyhow!("unbalanced parenthesis in type '{type_str}'"))?;
            let args = args_str
                .split(',')
                .map(|a| {
                    a.trim()
                        .parse::<u32>()
                        .with_context(|| format!("bad numeric argument in type '{type_str}'"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok((base, args))
        }
    }
}

/// Tokens constructing the `SqlType` value for a catalog type spelling.
pub fn sql_type_tokens(type_str: &str) -> anyhow::Result<TokenStream> {
    let (base, args) = split_type(type_str)?;

    let tokens = match (base, args.as_slice()) {
        ("smallint", []) => quote! { SqlType::SmallInt },
        ("integer", []) => quote! { SqlType::Integer },
        ("bigint", []) => quote! { SqlType::BigInt },
        ("double", []) => quote! { SqlType::Double },
        ("boolean", []) => quote! { SqlType::Boolean },
        ("varchar", [len]) => quote! { SqlType::Varchar(#len) },
        ("text", []) => quote! { SqlType::Text },
        ("blob", []) => quote! { SqlType::Blob },
        ("date", []) => quote! { SqlType::Date },
        ("datetime", [precision]) => {
            let precision = u8::try_from(*precision)
                .map_err(|_| anyhow!("datetime precision out of range in '{type_str}'"))?;
            quote! { SqlType::DateTime { precision: #precision } }
        }
        ("json", []) => quote! { SqlType::Json },
        ("uuid", []) => quote! { SqlType::Uuid },
        ("decimal", [precision, scale]) => {
            quote! { SqlType::Decimal { precision: #precision, scale: #scale } }
        }
        _ => bail!("unknown column type '{type_str}'"),
    };

    Ok(tokens)
}

/// Tokens for the Rust value type a typed column accessor returns.
/// Nullable columns wrap the value type in `Option`.
pub fn value_type_tokens(type_str: &str, nullable: bool) -> anyhow::Result<TokenStream> {
    let (base, args) = split_type(type_str)?;

    let inner = match (base, args.as_slice()) {
        ("smallint", []) => quote! { i16 },
        ("integer", []) => quote! { i32 },
        ("bigint", []) => quote! { i64 },
        ("double", []) => quote! { f64 },
        ("boolean", []) => quote! { bool },
        ("varchar", [_]) | ("text", []) => quote! { String },
        ("blob", []) => quote! { Vec<u8> },
        ("date", []) => quote! { chrono::NaiveDate },
        ("datetime", [_]) => quote! { chrono::NaiveDateTime },
        ("json", []) => quote! { serde_json::Value },
        ("uuid", []) => quote! { uuid::Uuid },
        ("decimal", [_, _]) => quote! { rust_decimal::Decimal },
        _ => bail!("unknown column type '{type_str}'"),
    };

    if nullable {
        Ok(quote! { Option<#inner> })
    } else {
        Ok(inner)
    }
}

/// Check whether a catalog type spelling is one the generator understands.
pub fn is_known_type(type_str: &str) -> bool {
    sql_type_tokens(type_str).is_ok()
}
