use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// Subjective tag describing the character of a craft location.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumCount, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mood {
    Inspirational,
    Handmade,
    Aesthetic,
    Heritage,
    Modern,
}

impl Mood {
    /// Stored in place of a mood if none has been assigned yet.
    pub const NONE: &'static str = "none";

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Inspirational => "Inspirational",
            Self::Handmade => "Handmade",
            Self::Aesthetic => "Aesthetic",
            Self::Heritage => "Heritage",
            Self::Modern => "Modern",
        }
    }

    /// Decodes an optional stored mood.
    ///
    /// `"none"`, blank and unrecognized values all mean "no mood".
    pub fn decode(s: Option<&str>) -> Option<Self> {
        s.map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(Self::NONE))
            .and_then(|s| s.parse().ok())
    }

    pub fn encode(mood: Option<Self>) -> &'static str {
        mood.map(Self::as_str).unwrap_or(Self::NONE)
    }

    /// Parses user input, `"none"` explicitly clears the mood.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, ParseMoodError> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(Self::NONE) {
            return Ok(None);
        }
        s.parse()
            .map(Some)
            .map_err(|_| ParseMoodError(s.to_owned()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown mood '{0}'")]
pub struct ParseMoodError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parse_moods() {
        assert_eq!(Ok(Mood::Heritage), "heritage".parse());
        assert_eq!(Ok(Mood::Modern), "Modern".parse());
        assert!("none".parse::<Mood>().is_err());
        assert_eq!(5, Mood::COUNT);
        for m in Mood::iter() {
            assert_eq!(Ok(m), m.to_string().parse());
            assert_eq!(m.as_str(), m.to_string());
        }
    }

    #[test]
    fn decode_optional_moods() {
        assert_eq!(None, Mood::decode(None));
        assert_eq!(None, Mood::decode(Some("none")));
        assert_eq!(None, Mood::decode(Some("NONE")));
        assert_eq!(None, Mood::decode(Some("  ")));
        assert_eq!(None, Mood::decode(Some("grumpy")));
        assert_eq!(Some(Mood::Aesthetic), Mood::decode(Some(" aesthetic ")));
    }

    #[test]
    fn parse_user_input() {
        assert_eq!(Ok(None), Mood::parse_optional("None"));
        assert_eq!(Ok(Some(Mood::Inspirational)), Mood::parse_optional(" inspirational"));
        assert_eq!(Err(ParseMoodError("".into())), Mood::parse_optional(" "));
        assert_eq!(Err(ParseMoodError("grumpy".into())), Mood::parse_optional("grumpy"));
    }

    #[test]
    fn encode_optional_moods() {
        assert_eq!("none", Mood::encode(None));
        assert_eq!("handmade", Mood::encode(Some(Mood::Handmade)));
    }
}
