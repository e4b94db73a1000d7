use std::{fmt, str::FromStr};
use thiserror::Error;

/// The craft type of a point.
///
/// Values that are stored remotely but not known by this
/// version are preserved as [`Category::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Batik,
    Gerabah,
    Perak,
    Kayu,
    Kulit,
    Anyaman,
    Unknown(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const KNOWN: [Category; 6] = [
        Category::Batik,
        Category::Gerabah,
        Category::Perak,
        Category::Kayu,
        Category::Kulit,
        Category::Anyaman,
    ];

    pub const TAG_BATIK: &'static str = "batik";
    pub const TAG_GERABAH: &'static str = "gerabah";
    pub const TAG_PERAK: &'static str = "perak";
    pub const TAG_KAYU: &'static str = "kayu";
    pub const TAG_KULIT: &'static str = "kulit";
    pub const TAG_ANYAMAN: &'static str = "anyaman";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Batik => Self::TAG_BATIK,
            Self::Gerabah => Self::TAG_GERABAH,
            Self::Perak => Self::TAG_PERAK,
            Self::Kayu => Self::TAG_KAYU,
            Self::Kulit => Self::TAG_KULIT,
            Self::Anyaman => Self::TAG_ANYAMAN,
            Self::Unknown(tag) => tag,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Decodes a stored value without ever failing.
    pub fn decode(s: &str) -> Self {
        s.parse()
            .unwrap_or_else(|UnknownCategory(tag)| Self::Unknown(tag))
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        let category = match tag.as_str() {
            Self::TAG_BATIK => Self::Batik,
            Self::TAG_GERABAH => Self::Gerabah,
            Self::TAG_PERAK => Self::Perak,
            Self::TAG_KAYU => Self::Kayu,
            Self::TAG_KULIT => Self::Kulit,
            Self::TAG_ANYAMAN => Self::Anyaman,
            _ => return Err(UnknownCategory(s.trim().to_owned())),
        };
        Ok(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_categories() {
        assert_eq!(Ok(Category::Batik), "batik".parse());
        assert_eq!(Ok(Category::Gerabah), " Gerabah ".parse());
        assert_eq!(Ok(Category::Anyaman), "ANYAMAN".parse());
        for c in Category::KNOWN {
            assert_eq!(Ok(c.clone()), c.as_str().parse());
            assert!(c.is_known());
        }
    }

    #[test]
    fn keep_unknown_categories() {
        assert_eq!(
            Err(UnknownCategory("tenun".into())),
            "tenun".parse::<Category>()
        );
        let c = Category::decode("tenun");
        assert_eq!(Category::Unknown("tenun".into()), c);
        assert_eq!("tenun", c.to_string());
        assert!(!c.is_known());
    }
}
