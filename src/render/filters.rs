//! MiniJinja filter registration for host page templates.

use std::sync::Arc;

use minijinja::{Environment, Value};

use super::class::class_name_for;
use super::css::css_for;
use crate::style::StyleRegistry;

/// Registers the inherited-style filters on a minijinja environment.
///
/// Both filters take a resolved style key:
///
/// - `inherited_style_class`: the body class, or an empty string
/// - `inherited_style_css`: the CSS as a safe string (already escaped, so
///   auto-escaping leaves it alone), or an empty string
///
/// # Example
///
/// ```rust
/// use minijinja::{context, Environment};
/// use page_style_inheritance::{register_filters, StyleRegistry};
///
/// let mut env = Environment::new();
/// register_filters(&mut env, StyleRegistry::build());
/// env.add_template(
///     "page.html",
///     r#"<body class="page {{ key | inherited_style_class }}">"#,
/// )
/// .unwrap();
///
/// let html = env
///     .get_template("page.html")
///     .unwrap()
///     .render(context! { key => "example" })
///     .unwrap();
/// assert_eq!(html, r#"<body class="page has-inherited-style-example">"#);
/// ```
pub fn register_filters(env: &mut Environment<'_>, registry: StyleRegistry) {
    let registry = Arc::new(registry);

    let class_registry = Arc::clone(&registry);
    env.add_filter("inherited_style_class", move |key: String| -> String {
        class_name_for(&key, &class_registry).unwrap_or_default()
    });

    env.add_filter("inherited_style_css", move |key: String| -> Value {
        match css_for(&key, &registry) {
            Some(css) => Value::from_safe_string(css),
            None => Value::from(""),
        }
    });
}
