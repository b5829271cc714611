//! View-state owned by the portfolio page.
//!
//! Everything here is plain data so the page components stay thin wrappers
//! around signals holding these values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class applied to the `<html>` element.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// A stored preference wins, otherwise the system theme is followed.
    pub fn resolve(stored: Option<Theme>, system: Theme) -> Self {
        stored.unwrap_or(system)
    }

    /// Nothing is written to storage until the user picks a theme other
    /// than the system one, so an unset preference keeps following it.
    pub fn needs_storing(self, stored: Option<Theme>, system: Theme) -> bool {
        stored.is_some() || self != system
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Values captured when the contact form is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Takes the current values and leaves every field empty.
    ///
    /// Required-field checks are left to the browser.
    pub fn submit(&mut self) -> Submission {
        let ContactForm {
            name,
            email,
            message,
        } = std::mem::take(self);
        Submission {
            name,
            email,
            message,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Expanded timeline entries, in the order they were opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenItems(Vec<String>);

impl OpenItems {
    pub fn toggle(&mut self, id: &str) {
        if let Some(i) = self.0.iter().position(|item| item == id) {
            self.0.remove(i);
        } else {
            self.0.push(id.to_string());
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.0.iter().any(|item| item == id)
    }

    #[cfg(test)]
    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);

        assert!(Theme::Dark.is_dark());
        assert_ne!(Theme::Light.toggle_label(), Theme::Dark.toggle_label());
    }

    #[test]
    fn test_theme_follows_system_until_chosen() {
        let system = Theme::from_system(true);
        assert_eq!(system, Theme::Dark);
        assert_eq!(Theme::from_system(false), Theme::Light);

        assert_eq!(Theme::resolve(None, system), Theme::Dark);
        assert_eq!(Theme::resolve(Some(Theme::Light), system), Theme::Light);

        // restoring the system theme stores nothing
        assert!(!Theme::Dark.needs_storing(None, system));
        // the first toggle away from it does
        assert!(Theme::Light.needs_storing(None, system));
        // and once stored, every change is written
        assert!(Theme::Dark.needs_storing(Some(Theme::Light), system));
    }

    #[test]
    fn test_theme_storage_format() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"light\"").unwrap(),
            Theme::Light
        );
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert!(serde_json::from_str::<Theme>("\"system\"").is_err());
    }

    #[test]
    fn test_submit_returns_values_and_clears() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada".to_string());
        form.set(ContactField::Email, "ada@example.com".to_string());
        form.set(ContactField::Message, "Hello there".to_string());
        assert_eq!(form.get(ContactField::Email), "ada@example.com");

        let submission = form.submit();
        assert_eq!(
            submission,
            Submission {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello there".to_string(),
            }
        );
        assert!(form.is_empty());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_submit_empty_form() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit(), Submission::default());
        assert!(form.is_empty());
    }

    #[test]
    fn test_submission_log_format() {
        let submission = Submission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&submission).unwrap(),
            r#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#
        );
    }

    #[test]
    fn test_open_items_toggle() {
        let mut open = OpenItems::default();
        assert!(!open.is_open("a"));

        open.toggle("a");
        open.toggle("b");
        assert!(open.is_open("a"));
        assert!(open.is_open("b"));
        assert_eq!(open.ids(), &["a".to_string(), "b".to_string()]);

        open.toggle("a");
        assert!(!open.is_open("a"));
        assert_eq!(open.ids(), &["b".to_string()]);

        open.toggle("a");
        assert_eq!(open.ids(), &["b".to_string(), "a".to_string()]);
    }
}
