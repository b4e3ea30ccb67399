//! TOML template generation for the Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::{FieldInfo, is_option_type};

/// Generate template code for the visible fields of a section.
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let field_codes: Vec<TokenStream> = fields.iter().map(|f| field_template_code(f)).collect();

    quote! {
        #(#field_codes)*
    }
}

/// Generate the TOML template snippet for one field.
fn field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;

    // Doc comment above the field, unless rendered inline
    let doc_code = match &info.doc {
        Some(doc) if !info.inline_doc => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#doc_str); }
        }
        _ => quote! {},
    };

    let inline_comment = if info.inline_doc {
        info.doc.clone().unwrap_or_default().replace('\n', " ")
    } else {
        String::new()
    };

    // Nested sections emit their own template recursively
    if info.sub {
        let field_ty = &info.ty;
        return quote! {
            out.push('\n');
            #doc_code
            out.push_str(&<#field_ty>::template_with_header());
        };
    }

    // Optional fields without an explicit default are commented out
    if is_option_type(&info.ty) && info.default.is_none() {
        let line = if inline_comment.is_empty() {
            format!("# {} = \"\"\n", toml_name)
        } else {
            format!("# {} = \"\"  # {}\n", toml_name, inline_comment)
        };
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Explicit default value, known at macro expansion time
    if let Some(default_val) = &info.default {
        let formatted = format_default(default_val);
        let line = if inline_comment.is_empty() {
            format!("{} = {}\n", toml_name, formatted)
        } else {
            format!("{} = {}  # {}\n", toml_name, formatted, inline_comment)
        };
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Fall back to Default::default(), serialized as a TOML value at runtime
    let tail = if inline_comment.is_empty() {
        quote! { out.push('\n'); }
    } else {
        quote! {
            out.push_str("  # ");
            out.push_str(#inline_comment);
            out.push('\n');
        }
    };

    quote! {
        #doc_code
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        #tail
    }
}

/// Quote a default value unless it is already a bare TOML literal.
fn format_default(value: &str) -> String {
    let bare = value == "true"
        || value == "false"
        || value.parse::<i64>().is_ok()
        || value.parse::<f64>().is_ok()
        || value.starts_with('[')
        || value.starts_with('"');
    if bare {
        value.to_string()
    } else {
        format!("\"{}\"", value)
    }
}
