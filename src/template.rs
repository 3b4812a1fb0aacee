/// Class-token contract and fixed placeholder text of the login page.
///
/// The tokens must match the class names the real login theme styles against
/// for the preview to be visually faithful; the composer itself treats them
/// as opaque configuration. All fields are `'static` — the template is a
/// compile-time constant, not user data.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginTemplate {
    // Scope and layout tokens
    pub html_class: &'static str,
    pub login: &'static str,
    pub login_container: &'static str,
    pub login_header: &'static str,
    pub brand: &'static str,
    pub logo_text: &'static str,
    pub login_main: &'static str,
    pub login_main_header: &'static str,
    pub login_main_title: &'static str,
    pub login_main_body: &'static str,
    pub login_main_footer: &'static str,

    // Form tokens
    pub form: &'static str,
    pub form_group: &'static str,
    pub form_group_label: &'static str,
    pub form_label: &'static str,
    pub form_label_text: &'static str,
    pub input: &'static str,
    pub input_group: &'static str,
    pub input_group_item: &'static str,
    pub fill: &'static str,
    pub password_toggle_button: &'static str,
    pub password_toggle_icon: &'static str,
    pub form_helper_text: &'static str,
    pub input_helper_text: &'static str,
    pub form_action_group: &'static str,
    pub button_primary: &'static str,
    pub button_block: &'static str,

    // Placeholder text (inert; the surrounding console owns translation)
    pub brand_text: &'static str,
    pub page_title: &'static str,
    pub username_label: &'static str,
    pub password_label: &'static str,
    pub submit_label: &'static str,
    pub show_password_label: &'static str,
}

impl LoginTemplate {
    /// Class contract of the `keycloak.v2` login theme (PatternFly v5)
    pub const DEFAULT: LoginTemplate = LoginTemplate {
        html_class: "login-pf",
        login: "pf-v5-c-login",
        login_container: "pf-v5-c-login__container",
        login_header: "pf-v5-c-login__header",
        brand: "pf-v5-c-brand",
        logo_text: "kc-logo-text",
        login_main: "pf-v5-c-login__main",
        login_main_header: "pf-v5-c-login__main-header",
        login_main_title: "pf-v5-c-title pf-m-3xl",
        login_main_body: "pf-v5-c-login__main-body",
        login_main_footer: "pf-v5-c-login__main-footer",

        form: "pf-v5-c-form",
        form_group: "pf-v5-c-form__group",
        form_group_label: "pf-v5-c-form__group-label",
        form_label: "pf-v5-c-form__label",
        form_label_text: "pf-v5-c-form__label-text",
        input: "pf-v5-c-form-control",
        input_group: "pf-v5-c-input-group",
        input_group_item: "pf-v5-c-input-group__item",
        fill: "pf-m-fill",
        password_toggle_button: "pf-v5-c-button pf-m-control",
        password_toggle_icon: "fa fa-eye",
        form_helper_text: "pf-v5-c-form__helper-text",
        input_helper_text: "pf-v5-c-helper-text__item-text",
        form_action_group: "pf-v5-c-form__actions",
        button_primary: "pf-v5-c-button pf-m-primary",
        button_block: "pf-m-block",

        brand_text: "Keycloak",
        page_title: "Sign in to your account",
        username_label: "Username or email",
        password_label: "Password",
        submit_label: "Sign In",
        show_password_label: "Show password",
    };
}

impl Default for LoginTemplate {
    fn default() -> Self {
        Self::DEFAULT.clone()
    }
}
