use rust_embed::Embed;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(|| {
    let file = Content::get(PORTFOLIO_FILE).ok_or(ContentError::Missing(PORTFOLIO_FILE))?;
    Portfolio::from_json(&file.data)
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not embedded: {0}")]
    Missing(&'static str),
    #[error("couldn't parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate timeline entry id: {0}")]
    DuplicateEntry(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub tagline: String,
    pub socials: Vec<Social>,
    pub skills: Vec<SkillGroup>,
    pub timeline: Vec<TimelineEntry>,
    pub projects: Vec<Project>,
    pub contact: ContactCopy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Social {
    pub kind: SocialKind,
    pub label: String,
    pub href: Option<String>,
}

impl Social {
    /// Link target for the social button. Bare addresses on email entries
    /// become `mailto:` links.
    pub fn target(&self) -> Option<String> {
        let href = self.href.as_deref()?;
        match self.kind {
            SocialKind::Email if !href.starts_with("mailto:") => Some(format!("mailto:{href}")),
            _ => Some(href.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Education,
    Work,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Education => "Education",
            EntryKind::Work => "Work",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub kind: EntryKind,
    pub title: String,
    pub organization: String,
    pub period: String,
    pub summary: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactCopy {
    pub heading: String,
    pub title: String,
    pub description: String,
}

impl Portfolio {
    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_slice(data)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    // Timeline ids key the expanded-entry state, so they have to be unique.
    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for entry in &self.timeline {
            if !seen.insert(entry.id.as_str()) {
                return Err(ContentError::DuplicateEntry(entry.id.clone()));
            }
        }
        Ok(())
    }
}

/// The embedded portfolio, parsed on first use.
pub fn portfolio() -> Result<&'static Portfolio, &'static ContentError> {
    PORTFOLIO.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = portfolio().expect("embedded portfolio should parse");
        assert_eq!(portfolio.name, "Joshua Philip");
        assert!(!portfolio.skills.is_empty());
        assert!(!portfolio.timeline.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert_eq!(portfolio.contact.heading, "Get in Touch");

        let kinds = portfolio.socials.iter().map(|s| s.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![SocialKind::GitHub, SocialKind::LinkedIn, SocialKind::Email]
        );
    }

    #[test]
    fn test_duplicate_timeline_ids_rejected() {
        let json = r#"{
            "name": "n", "tagline": "t", "socials": [], "skills": [], "projects": [],
            "contact": { "heading": "h", "title": "t", "description": "d" },
            "timeline": [
                { "id": "a", "kind": "work", "title": "t", "organization": "o", "period": "p", "summary": "s" },
                { "id": "a", "kind": "education", "title": "t", "organization": "o", "period": "p", "summary": "s" }
            ]
        }"#;
        let err = Portfolio::from_json(json.as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateEntry(id) if id == "a"));
    }

    #[test]
    fn test_malformed_content_is_parse_error() {
        let err = Portfolio::from_json(b"{ \"name\": 3 }").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_social_targets() {
        let mut social = Social {
            kind: SocialKind::Email,
            label: "Email".to_string(),
            href: None,
        };
        assert_eq!(social.target(), None);

        social.href = Some("me@example.com".to_string());
        assert_eq!(social.target().as_deref(), Some("mailto:me@example.com"));

        social.href = Some("mailto:me@example.com".to_string());
        assert_eq!(social.target().as_deref(), Some("mailto:me@example.com"));

        let github = Social {
            kind: SocialKind::GitHub,
            label: "GitHub".to_string(),
            href: Some("https://github.com/example".to_string()),
        };
        assert_eq!(
            github.target().as_deref(),
            Some("https://github.com/example")
        );
    }
}
