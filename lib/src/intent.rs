use serde::Serialize;

use crate::spread::Spread;

/// Represents who a reading is drawn for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", content = "name", rename_all = "camelCase")]
pub enum Intent {
    #[serde(rename = "self")]
    Myself,
    SomeoneElse(String),
}

impl Default for Intent {
    fn default() -> Self {
        Self::Myself
    }
}

impl Intent {
    /// Builds an intent from an optional free-text target name. The name
    /// is trimmed, and a blank name means the reading is for oneself.
    pub fn from_target_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(name) if !name.is_empty() => Self::SomeoneElse(name.to_owned()),
            _ => Self::Myself,
        }
    }

    /// Returns the trimmed target name, if the intent carries a non-blank
    /// one.
    pub fn target_name(&self) -> Option<&str> {
        match self {
            Self::Myself => None,
            Self::SomeoneElse(name) => Some(name.trim()).filter(|name| !name.is_empty()),
        }
    }

    /// Query parameters sent along with the reading request.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        match self.target_name() {
            None => vec![("intent", "self")],
            Some(name) => vec![("intent", "someoneElse"), ("name", name)],
        }
    }
}

/// Represents one reading to fetch: which spread, and for whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingRequest {
    pub spread: Spread,
    pub intent: Intent,
}

impl ReadingRequest {
    pub fn new(spread: Spread, intent: Intent) -> Self {
        Self { spread, intent }
    }

    pub fn for_self(spread: Spread) -> Self {
        Self::new(spread, Intent::Myself)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_trim_target_names() {
        assert_eq!(
            Intent::SomeoneElse("Ayşe".into()),
            Intent::from_target_name(Some(" Ayşe "))
        );
        assert_eq!(
            vec![("intent", "someoneElse"), ("name", "Ayşe")],
            Intent::from_target_name(Some(" Ayşe ")).query_pairs()
        );
    }

    #[test]
    fn it_should_default_to_self() {
        assert_eq!(Intent::Myself, Intent::from_target_name(None));
        assert_eq!(Intent::Myself, Intent::from_target_name(Some("   ")));
        assert_eq!(vec![("intent", "self")], Intent::default().query_pairs());
        assert_eq!(None, Intent::Myself.target_name());
    }

    #[test]
    fn it_should_trim_names_of_built_variants() {
        assert_eq!(
            vec![("intent", "someoneElse"), ("name", "Ayşe")],
            Intent::SomeoneElse(" Ayşe ".into()).query_pairs()
        );
        assert_eq!(
            vec![("intent", "self")],
            Intent::SomeoneElse("  ".into()).query_pairs()
        );
        assert_eq!(None, Intent::SomeoneElse("".into()).target_name());
    }
}
