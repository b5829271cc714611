use chrono::{DateTime, Datelike};

/// In-page navigation target. The desktop bar has room for the long label,
/// the mobile drawer uses the short one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub mobile_label: &'static str,
}

impl NavLink {
    /// Id of the section this link scrolls to, `None` for the page top.
    pub fn section_id(&self) -> Option<&'static str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        href: "#",
        label: "Home",
        mobile_label: "Home",
    },
    NavLink {
        href: "#timeline",
        label: "Education & Work Experience",
        mobile_label: "Education & Experience",
    },
    NavLink {
        href: "#skills",
        label: "Skills",
        mobile_label: "Skills",
    },
    NavLink {
        href: "#projects",
        label: "Projects",
        mobile_label: "Projects",
    },
    NavLink {
        href: "#contact",
        label: "Contact",
        mobile_label: "Contact",
    },
];

pub const SECTION_SKILLS: &str = "skills";
pub const SECTION_TIMELINE: &str = "timeline";
pub const SECTION_PROJECTS: &str = "projects";
pub const SECTION_CONTACT: &str = "contact";

pub const BUILD_TIME: &str = env!("BUILD_TIME");

const FALLBACK_YEAR: i32 = 2023;

/// Year shown in the copyright notices, taken from the build timestamp.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|built| built.year())
        .unwrap_or(FALLBACK_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_link_has_no_section() {
        assert_eq!(NAV_LINKS[0].section_id(), None);
        assert_eq!(NAV_LINKS[1].section_id(), Some(SECTION_TIMELINE));
    }

    #[test]
    fn test_mobile_labels_not_longer() {
        for link in NAV_LINKS {
            assert!(link.mobile_label.len() <= link.label.len());
        }
    }

    #[test]
    fn test_copyright_year_matches_build_time() {
        let built = DateTime::parse_from_rfc3339(BUILD_TIME).expect("build time is rfc3339");
        assert_eq!(copyright_year(), built.year());
        assert!(copyright_year() > FALLBACK_YEAR);
    }
}
