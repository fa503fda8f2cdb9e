//! Script templates with the color substitution token.

use thiserror::Error;

use crate::color::Rgb;

/// Placeholder replaced by the picked color's `"r,g,b"` channel string.
pub const COLOR_TOKEN: &str = "$COLOR$";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("script template {0:?} does not contain the $COLOR$ token")]
    MissingToken(String),
}

/// A viewer script with a mandatory color placeholder.
///
/// The token is checked at construction, so a color box can never be
/// registered with a template that would be forwarded unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTemplate {
    template: String,
}

impl ScriptTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, TemplateError> {
        let template = template.into();
        if !template.contains(COLOR_TOKEN) {
            return Err(TemplateError::MissingToken(template));
        }
        Ok(Self { template })
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Substitute every occurrence of the token with `"r,g,b"`.
    pub fn fill(&self, color: Rgb) -> String {
        self.template.replace(COLOR_TOKEN, &color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_token_verbatim() {
        let t = ScriptTemplate::new("select carbon; color atom $COLOR$;").unwrap();
        assert_eq!(t.fill(Rgb::new(1, 2, 3)), "select carbon; color atom 1,2,3;");
    }

    #[test]
    fn test_fill_replaces_every_occurrence() {
        let t = ScriptTemplate::new("color atom $COLOR$; color bond $COLOR$;").unwrap();
        assert_eq!(
            t.fill(Rgb::new(0, 255, 0)),
            "color atom 0,255,0; color bond 0,255,0;"
        );
    }

    #[test]
    fn test_missing_token_fails_fast() {
        assert_eq!(
            ScriptTemplate::new("spin on"),
            Err(TemplateError::MissingToken("spin on".to_string()))
        );
    }
}
