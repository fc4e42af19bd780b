//! Breadcrumb overflow dropdown rendering.
//!
//! When the month breadcrumb overflows, collapsed crumbs move into a
//! dropdown whose items are rendered from a small template with a
//! `{classes, label, href}` context. A crumb without a target renders a
//! placeholder anchor.

use minijinja::{context, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::error::{ReportError, ReportResult};

/// Default dropdown item markup.
pub const DROPDOWN_ITEM_TEMPLATE: &str = "<li class=\"{{ classes.item_disable_class }}\">\
<a class=\"{{ classes.item_class }}\" href=\"{{ href }}\">{{ label }}</a></li>";

/// CSS classes handed to the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbClasses {
    pub item_class: String,
    pub item_disable_class: String,
}

impl Default for BreadcrumbClasses {
    fn default() -> Self {
        Self {
            item_class: "dropdown-item".to_string(),
            item_disable_class: String::new(),
        }
    }
}

/// One collapsed crumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub classes: BreadcrumbClasses,
    pub label: String,
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>, href: Option<String>) -> Self {
        Self {
            classes: BreadcrumbClasses::default(),
            label: label.into(),
            href,
        }
    }
}

/// Render a dropdown item with the default template.
pub fn render_dropdown_item(item: &BreadcrumbItem) -> ReportResult<String> {
    render_dropdown_item_with(DROPDOWN_ITEM_TEMPLATE, item)
}

/// Render a dropdown item with a caller-supplied template.
///
/// # Errors
///
/// Returns `ReportError::Template` when the template does not compile or
/// references variables outside the `{classes, label, href}` context.
pub fn render_dropdown_item_with(template: &str, item: &BreadcrumbItem) -> ReportResult<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template("dropdown_item", template)
        .map_err(|e| ReportError::Template(e.to_string()))?;
    let tmpl = env
        .get_template("dropdown_item")
        .map_err(|e| ReportError::Template(e.to_string()))?;

    // Missing target renders a placeholder anchor.
    let href = item.href.as_deref().unwrap_or("#");
    tmpl.render(context! {
        classes => item.classes.clone(),
        label => item.label.clone(),
        href => href,
    })
    .map_err(|e| ReportError::Template(e.to_string()))
}
