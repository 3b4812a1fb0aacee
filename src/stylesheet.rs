use serde::{Deserialize, Serialize};

/// A single CSS rule: selector plus ordered declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssRule {
    /// Full CSS selector, e.g. `.login-preview`
    pub selector: String,
    /// CSS declarations, e.g. `[("min-height", "70vh")]`
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration. Declarations are rendered in append order.
    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }
}

/// An ordered list of CSS rules rendered deterministically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stylesheet {
    pub rules: Vec<CssRule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: CssRule) {
        self.rules.push(rule);
    }

    /// Render all rules to CSS text. Byte-identical for identical input.
    pub fn render(&self) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            css.push_str(&rule.selector);
            css.push_str(" {");
            for (prop, val) in &rule.declarations {
                css.push(' ');
                css.push_str(prop);
                css.push_str(": ");
                css.push_str(val);
                css.push(';');
            }
            css.push_str(" }\n");
        }
        css
    }
}
