//! Minimal `{{ key }}` template substitution.
//!
//! Flat key substitution only: no conditionals, no loops, no nesting, no
//! escaping of literal braces.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::records::model::{value_text, RenderContext};

lazy_static! {
    static ref TOKEN_PATTERN: Regex =
        Regex::new(r"\{\{\s*([\w.-]+)\s*\}\}").expect("token pattern must compile");
}

/// Substitute `{{ key }}` placeholders from the render context.
///
/// A token is a run of word characters, dots, and hyphens, optionally
/// padded with whitespace inside the braces. Tokens without a matching
/// context key render as the empty string; a template with no recognised
/// tokens passes through untouched.
pub fn render_template(template: &str, context: &RenderContext) -> String {
    TOKEN_PATTERN
        .replace_all(template, |caps: &Captures| {
            context.get(&caps[1]).map(value_text).unwrap_or_default()
        })
        .into_owned()
}
