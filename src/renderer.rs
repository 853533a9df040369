//! Template rendering for vuez.
//! Templated files use EJS-style placeholders (`<%= name %>` escaped,
//! `<%- name %>` raw) and are rendered with MiniJinja configured for that
//! syntax.
use std::borrow::Cow;

use crate::error::Result;
use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior, Value};

/// Filter appended to every `<%= %>` expression.
const ESCAPE_FILTER: &str = "ejs_escape";

/// HTML-escapes a value the way EJS does for `<%= %>`.
fn ejs_escape(value: Value) -> std::result::Result<String, minijinja::Error> {
    if value.is_undefined() {
        return Err(minijinja::Error::new(
            ErrorKind::UndefinedError,
            "cannot output an undefined value",
        ));
    }
    let text = value.to_string();
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Rewrites EJS output tags into the single variable tag MiniJinja knows.
///
/// `<%= expr %>` becomes `<%= (expr)|ejs_escape %>` and `<%- expr %>` becomes
/// `<%= expr %>`. A trailing `-%>` trim marker is kept. Line breaks are never
/// added or removed, so error line numbers still match the source file.
fn translate_output_tags(template: &str) -> Cow<'_, str> {
    if !template.contains("<%=") && !template.contains("<%-") {
        return Cow::Borrowed(template);
    }

    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(start) = rest.find("<%") {
        out.push_str(&rest[..start]);
        let tag = &rest[start..];
        let escaped = match tag.as_bytes().get(2) {
            Some(b'=') => true,
            Some(b'-') => false,
            _ => {
                out.push_str("<%");
                rest = &tag[2..];
                continue;
            }
        };
        let body = &tag[3..];
        // Unterminated tags are left for the parser to report.
        let Some(end) = body.find("%>") else {
            out.push_str(tag);
            rest = "";
            break;
        };
        let (expr, trim) = match body[..end].strip_suffix('-') {
            Some(expr) => (expr, "-"),
            None => (&body[..end], ""),
        };
        if escaped {
            out.push_str("<%= (");
            out.push_str(expr);
            out.push_str(")|");
            out.push_str(ESCAPE_FILTER);
            out.push(' ');
        } else {
            out.push_str("<%=");
            out.push_str(expr);
        }
        out.push_str(trim);
        out.push_str("%>");
        rest = &body[end + 2..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Trait for template rendering engines.
///
/// Implementations are shared by every materializer worker, hence the
/// `Send + Sync` bound.
pub trait TemplateRenderer: Send + Sync {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `name` - Name used in error messages, usually the source path
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that understands `<%= %>`, `<%- %>`, `<% %>` and
    /// `<%# %>`. Only `<%= %>` output is HTML-escaped.
    ///
    /// Anything outside those delimiters, including `{{ ... }}` mustaches in
    /// Vue components, is emitted untouched.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the delimiter configuration is rejected
    pub fn new() -> Result<Self> {
        let syntax = SyntaxConfig::builder()
            .block_delimiters("<%", "%>")
            .variable_delimiters("<%=", "%>")
            .comment_delimiters("<%#", "%>")
            .build()?;

        let mut env = Environment::new();
        env.set_syntax(syntax);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter(ESCAPE_FILTER, ejs_escape);
        Ok(Self { env })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::TemplateError` if the template fails to parse, references an
    ///   undefined variable, or fails to render
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        let template = translate_output_tags(template);
        Ok(self.env.render_named_str(name, &template, context)?)
    }
}
