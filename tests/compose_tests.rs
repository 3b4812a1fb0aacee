use login_preview::{compose, PreviewConfig, PreviewError, StyleVars};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn get_fixture_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("fixtures");
    path.push(filename);
    path
}

fn load_config(filename: &str) -> PreviewConfig {
    let path = get_fixture_path(filename);
    let yaml = fs::read_to_string(&path).unwrap();
    PreviewConfig::from_yaml(&yaml).unwrap()
}

// Valid fixtures

#[test]
fn test_basic_fixture_composes() {
    let preview = load_config("basic.yaml").compose().unwrap();
    let css = preview.style_text();
    assert!(css.contains("--pf-v5-global--accent: #123456;"));
    assert!(css.contains("--pf-v5-global--BackgroundColor: #0b0e14;"));
}

#[test]
fn test_custom_assets_fixture_embeds_overrides() {
    let preview = load_config("custom-assets.yaml").compose().unwrap();
    let css = preview.style_text();
    assert!(css.contains("--keycloak-logo-url: url('https://cdn.example.com/acme-logo.svg');"));
    assert!(css.contains("--keycloak-bg-logo-url: url('https://cdn.example.com/acme-bg.png');"));
    assert!(css.contains("--keycloak-logo-width: 150px;"));
    assert!(css.contains("--keycloak-logo-height: 48px;"));
}

#[test]
fn test_no_vars_fixture_still_renders_full_page() {
    let preview = load_config("no-vars.yaml").compose().unwrap();
    let html = preview.markup_html();
    assert_eq!(html.matches("id=\"username\"").count(), 1);
    assert_eq!(html.matches("id=\"password\"").count(), 1);
    assert_eq!(html.matches("id=\"kc-login\"").count(), 1);
    assert!(html.contains("Sign in to your account"));
}

// Invalid fixtures

#[test]
fn test_invalid_var_name_fixture() {
    let result = load_config("invalid-var-name.yaml").compose();
    assert!(matches!(
        result.unwrap_err(),
        PreviewError::InvalidVarName { .. }
    ));
}

#[test]
fn test_invalid_var_value_fixture() {
    let result = load_config("invalid-var-value.yaml").compose();
    assert!(matches!(
        result.unwrap_err(),
        PreviewError::InvalidVarValue { .. }
    ));
}

#[test]
fn test_invalid_url_fixture() {
    let result = load_config("invalid-url.yaml").compose();
    assert!(matches!(
        result.unwrap_err(),
        PreviewError::InvalidResourceUrl { .. }
    ));
}

// Composer properties

#[test]
fn test_determinism_across_calls() {
    let mut vars = StyleVars::new();
    vars.set("accent", "#123456");
    vars.set("logoWidth", "120px");

    let a = compose(&vars, Some("L"), None, "/resources/v1");
    let b = compose(&vars, Some("L"), None, "/resources/v1");
    assert_eq!(a.to_document(), b.to_document());
}

#[test]
fn test_default_fallback_and_exact_overrides() {
    let vars = StyleVars::new();

    let defaults = compose(&vars, None, None, "/resources/v1");
    assert!(defaults.style_text().contains(
        "--keycloak-logo-url: url('/resources/v1/login/keycloak.v2/img/keycloak-logo-text.svg');"
    ));
    assert!(defaults.style_text().contains(
        "--keycloak-bg-logo-url: url('/resources/v1/login/keycloak.v2/img/keycloak-bg-darken.svg');"
    ));

    let overridden = compose(&vars, Some("L"), Some("B"), "/resources/v1");
    assert!(overridden
        .style_text()
        .contains("--keycloak-logo-url: url('L');"));
    assert!(overridden
        .style_text()
        .contains("--keycloak-bg-logo-url: url('B');"));
}

#[test]
fn test_passthrough_declarations_appear_exactly_once() {
    let mut vars = StyleVars::new();
    vars.set("accent", "#123456");
    vars.set("FontFamily--heading", "RedHatDisplay");

    let css = compose(&vars, None, None, "/resources/v1").style_text();
    assert_eq!(css.matches("--pf-v5-global--accent: #123456;").count(), 1);
    assert_eq!(
        css.matches("--pf-v5-global--FontFamily--heading: RedHatDisplay;")
            .count(),
        1
    );
}

#[test]
fn test_conditional_logo_width_emission() {
    let mut vars = StyleVars::new();
    vars.set("accent", "#123456");
    let css = compose(&vars, None, None, "/resources/v1").style_text();
    assert!(!css.contains("--keycloak-logo-width"));

    vars.set("logoWidth", "");
    let css = compose(&vars, None, None, "/resources/v1").style_text();
    assert!(!css.contains("--keycloak-logo-width"));

    vars.set("logoWidth", "200px");
    let css = compose(&vars, None, None, "/resources/v1").style_text();
    assert!(css.contains("--keycloak-logo-width: 200px;"));
}

#[test]
fn test_markup_is_independent_of_vars() {
    let mut vars = StyleVars::new();
    vars.set("accent", "#123456");
    vars.set("logoWidth", "200px");

    let styled = compose(&vars, None, None, "/resources/v1");
    let bare = compose(&StyleVars::new(), None, None, "/resources/v1");
    assert_eq!(styled.markup_html(), bare.markup_html());
}

#[test]
fn test_spec_scenario() {
    let mut vars = StyleVars::new();
    vars.set("accent", "#123456");

    let preview = compose(&vars, None, Some("https://x/bg.png"), "/resources/v1");
    let css = preview.style_text();

    assert!(css.contains("--pf-v5-global--accent: #123456;"));
    assert!(css.contains("--keycloak-bg-logo-url: url('https://x/bg.png');"));
    assert!(css.contains("background: var(--keycloak-bg-logo-url) no-repeat center center;"));
    assert!(css.contains(
        "--keycloak-logo-url: url('/resources/v1/login/keycloak.v2/img/keycloak-logo-text.svg');"
    ));
}

#[test]
fn test_document_is_self_contained() {
    let preview = load_config("basic.yaml").compose().unwrap();
    let doc = preview.to_document();

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert_eq!(doc.matches("<link rel=\"stylesheet\"").count(), 3);
    assert_eq!(doc.matches("<style>").count(), 1);
    // Inert markup: no scripts, no handlers, fields read-only
    assert!(!doc.contains("<script"));
    assert!(!doc.contains("onclick"));
    assert_eq!(doc.matches("readonly").count(), 2);
}
