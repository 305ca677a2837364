use std::fmt;
use std::str::FromStr;

use super::error::ContentError;

/// The fixed set of content blocks the site renders from local files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentKey {
    Home,
    Services,
    Faq,
    Testimonials,
    CaseStudies,
}

impl ContentKey {
    pub const ALL: [ContentKey; 5] = [
        ContentKey::Home,
        ContentKey::Services,
        ContentKey::Faq,
        ContentKey::Testimonials,
        ContentKey::CaseStudies,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKey::Home => "home",
            ContentKey::Services => "services",
            ContentKey::Faq => "faq",
            ContentKey::Testimonials => "testimonials",
            ContentKey::CaseStudies => "case-studies",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKey {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ContentError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_key_back() {
        for key in ContentKey::ALL {
            assert_eq!(key.as_str().parse::<ContentKey>().unwrap(), key);
        }
    }

    #[test]
    fn file_names() {
        assert_eq!(ContentKey::CaseStudies.file_name(), "case-studies.json");
        assert_eq!(ContentKey::Faq.file_name(), "faq.json");
    }

    #[test]
    fn unknown_key_errors() {
        let err = "pricing".parse::<ContentKey>().unwrap_err();
        assert_eq!(err.to_string(), "unknown content key: pricing");
    }
}
