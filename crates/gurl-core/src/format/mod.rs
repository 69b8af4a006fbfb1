//! Format-mask interpreter.
//!
//! A mask is scanned once, left to right. `%` plus one character is a
//! directive; anything else is copied through. Unknown directives and a
//! trailing lone `%` are emitted verbatim, so rendering cannot fail.

mod directive;

pub use directive::Directive;

use crate::url_model::DecomposedUrl;

/// Render `format` against `url`.
///
/// # Examples
///
/// - `render("%H", u)` with `https://example.com:8080/` → `"example.com:8080"`
/// - `render("%x%", u)` → `"%x%"`
pub fn render(format: &str, url: &DecomposedUrl) -> String {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next) => match Directive::from_char(next) {
                Some(directive) => directive.expand(url, &mut out),
                None => {
                    out.push('%');
                    out.push(next);
                }
            },
            None => out.push('%'),
        }
    }

    out
}
