//! Composes a themed login-page preview from style variables and resource
//! overrides. Pure: identical inputs yield byte-identical output, and the
//! emitted styles live entirely under the preview scope so a host document
//! embedding the result (e.g. via iframe `srcdoc`) is never affected.

use crate::markup::{Element, Node};
use crate::resources::ResourceRoot;
use crate::stylesheet::{CssRule, Stylesheet};
use crate::template::LoginTemplate;
use crate::vars::StyleVars;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Variable name carrying the logo width, emitted conditionally
pub const LOGO_WIDTH_VAR: &str = "logoWidth";
/// Variable name carrying the logo height, emitted conditionally
pub const LOGO_HEIGHT_VAR: &str = "logoHeight";

/// Prefix for generic custom-property passthrough
const VAR_PREFIX: &str = "--pf-v5-global--";

/// Scope class every emitted rule is anchored under
const SCOPE_CLASS: &str = "login-preview";
const WRAPPER_CLASS: &str = "login-preview-wrapper";
const PAGE_ID: &str = "login-preview";

/// Output of one compose call: scoped stylesheet, external stylesheet links,
/// and the inert login-page markup tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedPreview {
    pub style: Stylesheet,
    pub stylesheet_links: Vec<String>,
    pub markup: Node,
}

impl ComposedPreview {
    /// The scoped stylesheet as CSS text
    pub fn style_text(&self) -> String {
        self.style.render()
    }

    /// The markup tree as an HTML fragment
    pub fn markup_html(&self) -> String {
        self.markup.to_html()
    }

    /// Assemble a standalone HTML document for an isolated rendering
    /// boundary. The document links the theme stylesheets, carries the
    /// scoped style block, and shares no style scope with any host page.
    pub fn to_document(&self) -> String {
        let mut links = String::new();
        for href in &self.stylesheet_links {
            // Writing into a String cannot fail
            let _ = writeln!(links, "<link rel=\"stylesheet\" href=\"{}\">", href);
        }
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>Login preview</title>\n{}<style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            links,
            self.style.render(),
            self.markup.to_html()
        )
    }
}

/// Compose a preview with the default `keycloak.v2` template.
///
/// `resource_root` is the versioned base path assets are served under
/// (e.g. `/resources/v1`). Absent overrides fall back to the default theme
/// assets; this function never fails.
pub fn compose(
    vars: &StyleVars,
    logo_override: Option<&str>,
    background_override: Option<&str>,
    resource_root: &str,
) -> ComposedPreview {
    compose_with_template(
        vars,
        logo_override,
        background_override,
        resource_root,
        &LoginTemplate::DEFAULT,
    )
}

/// Compose a preview against a caller-supplied structural template
pub fn compose_with_template(
    vars: &StyleVars,
    logo_override: Option<&str>,
    background_override: Option<&str>,
    resource_root: &str,
    template: &LoginTemplate,
) -> ComposedPreview {
    let root = ResourceRoot::new(resource_root);

    let logo_url = logo_override
        .map(str::to_string)
        .unwrap_or_else(|| root.default_logo());
    let bg_url = background_override
        .map(str::to_string)
        .unwrap_or_else(|| root.default_background());

    ComposedPreview {
        style: build_stylesheet(vars, &logo_url, &bg_url, template),
        stylesheet_links: root.stylesheets(),
        markup: build_markup(template),
    }
}

fn build_stylesheet(
    vars: &StyleVars,
    logo_url: &str,
    bg_url: &str,
    template: &LoginTemplate,
) -> Stylesheet {
    let mut scope = CssRule::new(format!(".{}", SCOPE_CLASS));

    // Generic passthrough, insertion order. An empty value would produce an
    // invalid `--x: ;` declaration, so empty entries are not emitted.
    for (name, value) in vars.iter() {
        if !value.is_empty() {
            scope = scope.decl(format!("{}{}", VAR_PREFIX, name), value);
        }
    }

    // Theme variables overriding the logo and background images
    scope = scope
        .decl("--keycloak-logo-url", format!("url('{}')", logo_url))
        .decl("--keycloak-bg-logo-url", format!("url('{}')", bg_url));

    if let Some(height) = vars.get(LOGO_HEIGHT_VAR).filter(|v| !v.is_empty()) {
        scope = scope.decl("--keycloak-logo-height", height);
    }
    if let Some(width) = vars.get(LOGO_WIDTH_VAR).filter(|v| !v.is_empty()) {
        scope = scope.decl("--keycloak-logo-width", width);
    }

    let mut sheet = Stylesheet::new();
    sheet.push(scope);

    // Background on the html-scope element
    sheet.push(
        CssRule::new(format!(".{}.{}", SCOPE_CLASS, template.html_class))
            .decl(
                "background",
                "var(--keycloak-bg-logo-url) no-repeat center center",
            )
            .decl("background-size", "cover"),
    );

    // Keep the login container legible at admin-console widths
    sheet.push(
        CssRule::new(format!(".{} .{}", SCOPE_CLASS, template.login))
            .decl("min-height", "70vh"),
    );

    // Force single-column layout
    sheet.push(
        CssRule::new(format!(".{} .{}", SCOPE_CLASS, template.login_container))
            .decl("grid-template-columns", "34rem !important")
            .decl("grid-template-areas", "\"header\" \"main\" !important"),
    );

    sheet
}

fn build_markup(template: &LoginTemplate) -> Node {
    let header = Element::new("header")
        .id("kc-header")
        .class(template.login_header)
        .child(
            Element::new("div")
                .id("kc-header-wrapper")
                .class(template.brand)
                .child(
                    Element::new("div")
                        .class(template.logo_text)
                        .child(Element::new("span").text(template.brand_text)),
                ),
        );

    let main = Element::new("main")
        .class(template.login_main)
        .child(
            Element::new("div").class(template.login_main_header).child(
                Element::new("h1")
                    .class(template.login_main_title)
                    .id("kc-page-title")
                    .text(template.page_title),
            ),
        )
        .child(
            Element::new("div")
                .class(template.login_main_body)
                .child(
                    Element::new("div").id("kc-form").child(
                        Element::new("div").id("kc-form-wrapper").child(
                            Element::new("form")
                                .id("kc-form-login")
                                .class(template.form)
                                .attr("novalidate", "")
                                .child(username_group(template))
                                .child(password_group(template))
                                .child(submit_group(template)),
                        ),
                    ),
                )
                .child(Element::new("div").class(template.login_main_footer)),
        )
        .child(Element::new("div").class(template.login_main_footer));

    let container = Element::new("div")
        .class(template.login_container)
        .child(header)
        .child(main);

    Element::new("div")
        .class(WRAPPER_CLASS)
        .child(
            Element::new("div")
                .class(format!("{} {}", SCOPE_CLASS, template.html_class))
                .child(
                    Element::new("div")
                        .id("keycloak-bg")
                        .attr("data-page-id", PAGE_ID)
                        .child(
                            Element::new("div")
                                .class(template.login)
                                .child(container),
                        ),
                ),
        )
        .into()
}

fn username_group(template: &LoginTemplate) -> Element {
    Element::new("div")
        .class(template.form_group)
        .child(
            Element::new("div").class(template.form_group_label).child(
                Element::new("label")
                    .attr("for", "username")
                    .class(template.form_label)
                    .child(
                        Element::new("span")
                            .class(template.form_label_text)
                            .text(template.username_label),
                    ),
            ),
        )
        .child(
            Element::new("span").class(template.input).child(
                Element::new("input")
                    .id("username")
                    .attr("name", "username")
                    .attr("value", "")
                    .attr("type", "text")
                    .attr("autocomplete", "username")
                    .attr("readonly", ""),
            ),
        )
        .child(Element::new("div").id("input-error-container-username"))
}

fn password_group(template: &LoginTemplate) -> Element {
    let input_item = Element::new("div")
        .class(format!("{} {}", template.input_group_item, template.fill))
        .child(
            Element::new("span").class(template.input).child(
                Element::new("input")
                    .id("password")
                    .attr("name", "password")
                    .attr("value", "")
                    .attr("type", "password")
                    .attr("autocomplete", "current-password")
                    .attr("readonly", ""),
            ),
        );

    // Presentational only; wired to nothing
    let toggle_item = Element::new("div").class(template.input_group_item).child(
        Element::new("button")
            .class(template.password_toggle_button)
            .attr("type", "button")
            .attr("aria-label", template.show_password_label)
            .child(
                Element::new("i")
                    .class(template.password_toggle_icon)
                    .attr("aria-hidden", "true"),
            ),
    );

    Element::new("div")
        .class(template.form_group)
        .child(
            Element::new("div").class(template.form_group_label).child(
                Element::new("label")
                    .attr("for", "password")
                    .class(template.form_label)
                    .child(
                        Element::new("span")
                            .class(template.form_label_text)
                            .text(template.password_label),
                    ),
            ),
        )
        .child(
            Element::new("div")
                .class(template.input_group)
                .child(input_item)
                .child(toggle_item),
        )
        .child(
            Element::new("div")
                .class(template.form_helper_text)
                .attr("aria-live", "polite")
                .child(Element::new("div").class(template.input_helper_text)),
        )
        .child(Element::new("div").id("input-error-container-password"))
}

fn submit_group(template: &LoginTemplate) -> Element {
    Element::new("div").class(template.form_group).child(
        Element::new("div").class(template.form_action_group).child(
            Element::new("button")
                .class(format!(
                    "{} {}",
                    template.button_primary, template.button_block
                ))
                .attr("name", "login")
                .id("kc-login")
                .attr("type", "submit")
                .text(template.submit_label),
        ),
    )
}
