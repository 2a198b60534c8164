use std::{borrow::Borrow, fmt};

/// Stable public identifier of a listing or review.
///
/// Identifiers of the static data are short literals like `"1"` or
/// `"extra-7"`, so no particular format is enforced beyond being non-empty.
#[derive(Default, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(String);

impl Id {
    #[cfg(any(test, feature = "builders"))]
    pub fn new() -> Self {
        uuid::Uuid::new_v4().as_simple().to_string().into()
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for Id {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Id {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl From<Id> for String {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_invalid() {
        assert!(!Id::default().is_valid());
        assert!(Id::from("1").is_valid());
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(Id::new(), Id::new());
    }

    #[test]
    fn compare_with_str() {
        let id = Id::from("extra-3");
        assert!(id == *"extra-3");
        assert_eq!(id.to_string(), "extra-3");
    }
}
