
/// Namespace of the login branding keys in the realm attribute bag.
pub const LOGIN_STYLE_PREFIX: &str = "_providerConfig.assets.login.";

pub const SAVE_SUCCESS_MESSAGE: &str = "Attributes for realm have been updated.";
pub const SAVE_FAILURE_MESSAGE: &str = "Failed to update realm.";

/// The four realm attributes the login styles panel edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginStyleField {
    PrimaryColor,
    SecondaryColor,
    BackgroundColor,
    Css,
}

impl LoginStyleField {
    pub const ALL: [LoginStyleField; 4] = [
        LoginStyleField::PrimaryColor,
        LoginStyleField::SecondaryColor,
        LoginStyleField::BackgroundColor,
        LoginStyleField::Css,
    ];

    /// Key relative to [`LOGIN_STYLE_PREFIX`].
    pub fn key(&self) -> &'static str {
        match self {
            LoginStyleField::PrimaryColor => "primaryColor",
            LoginStyleField::SecondaryColor => "secondaryColor",
            LoginStyleField::BackgroundColor => "backgroundColor",
            LoginStyleField::Css => "css",
        }
    }

    /// Full key in the realm attribute bag.
    pub fn attribute_key(&self) -> String {
        format!("{}{}", LOGIN_STYLE_PREFIX, self.key())
    }

    pub fn is_color(&self) -> bool {
        !matches!(self, LoginStyleField::Css)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoginStyleField::PrimaryColor => "Primary color",
            LoginStyleField::SecondaryColor => "Secondary color",
            LoginStyleField::BackgroundColor => "Background color",
            LoginStyleField::Css => "CSS",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            LoginStyleField::PrimaryColor => "Main accent color of the login page, used for buttons and links.",
            LoginStyleField::SecondaryColor => "Color used for secondary actions and highlights.",
            LoginStyleField::BackgroundColor => "Page background color behind the login card.",
            LoginStyleField::Css => "Custom stylesheet appended to the login theme.",
        }
    }

    pub fn invalid_help_text(&self) -> &'static str {
        match self {
            LoginStyleField::Css => "CSS is required.",
            _ => "Enter a hex color such as #fff or #1a2b3c.",
        }
    }

    /// DOM id of the field's input.
    pub fn input_id(&self) -> String {
        format!("kc-styles-{}", self.key())
    }
}

/// Typed view of the login branding attributes; `None` means the key is
/// absent from the realm.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoginStyles {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub background_color: Option<String>,
    pub css: Option<String>,
}

impl LoginStyles {
    pub fn get(&self, field: LoginStyleField) -> Option<&str> {
        match field {
            LoginStyleField::PrimaryColor => self.primary_color.as_deref(),
            LoginStyleField::SecondaryColor => self.secondary_color.as_deref(),
            LoginStyleField::BackgroundColor => self.background_color.as_deref(),
            LoginStyleField::Css => self.css.as_deref(),
        }
    }

    pub fn set(&mut self, field: LoginStyleField, value: Option<String>) {
        let slot = match field {
            LoginStyleField::PrimaryColor => &mut self.primary_color,
            LoginStyleField::SecondaryColor => &mut self.secondary_color,
            LoginStyleField::BackgroundColor => &mut self.background_color,
            LoginStyleField::Css => &mut self.css,
        };
        *slot = value;
    }
}

/// Text values bound to the form inputs. Empty string means "unset".
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoginStylesForm {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub css: String,
}

impl LoginStylesForm {
    pub fn get(&self, field: LoginStyleField) -> &str {
        match field {
            LoginStyleField::PrimaryColor => &self.primary_color,
            LoginStyleField::SecondaryColor => &self.secondary_color,
            LoginStyleField::BackgroundColor => &self.background_color,
            LoginStyleField::Css => &self.css,
        }
    }

    pub fn set(&mut self, field: LoginStyleField, value: String) {
        match field {
            LoginStyleField::PrimaryColor => self.primary_color = value,
            LoginStyleField::SecondaryColor => self.secondary_color = value,
            LoginStyleField::BackgroundColor => self.background_color = value,
            LoginStyleField::Css => self.css = value,
        }
    }

    /// Presence view of the draft: empty inputs become absent keys.
    pub fn to_styles(&self) -> LoginStyles {
        let mut styles = LoginStyles::default();
        for field in LoginStyleField::ALL {
            let value = self.get(field);
            styles.set(field, (!value.is_empty()).then(|| value.to_string()));
        }
        styles
    }
}

impl From<&LoginStyles> for LoginStylesForm {
    fn from(styles: &LoginStyles) -> Self {
        let mut form = LoginStylesForm::default();
        for field in LoginStyleField::ALL {
            form.set(field, styles.get(field).unwrap_or_default().to_string());
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_keys() {
        assert_eq!(
            LoginStyleField::PrimaryColor.attribute_key(),
            "_providerConfig.assets.login.primaryColor"
        );
        assert_eq!(LoginStyleField::Css.attribute_key(), "_providerConfig.assets.login.css");
    }

    #[test]
    fn test_form_to_styles_drops_empty() {
        let form = LoginStylesForm {
            primary_color: "#fff".to_string(),
            css: String::new(),
            ..Default::default()
        };
        let styles = form.to_styles();
        assert_eq!(styles.primary_color.as_deref(), Some("#fff"));
        assert_eq!(styles.css, None);
        assert_eq!(styles.secondary_color, None);
    }

    #[test]
    fn test_styles_to_form_defaults_to_empty() {
        let styles = LoginStyles {
            css: Some("body {}".to_string()),
            ..Default::default()
        };
        let form = LoginStylesForm::from(&styles);
        assert_eq!(form.css, "body {}");
        assert_eq!(form.primary_color, "");
    }
}
