//! String backed identifiers so group and member ids can't be mixed up.

use uuid::Uuid;

/// Identifiers that can mint a fresh value on their own.
pub trait InitId: Sized {
    fn init() -> Self;

    /// Keeps drawing new ids until `taken` rejects none of them.
    fn fresh(taken: impl Fn(&Self) -> bool) -> Self {
        loop {
            let id = Self::init();
            if !taken(&id) {
                return id;
            }
        }
    }
}

macro_rules! id_impls {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl InitId for $name {
            fn init() -> Self {
                Self(Uuid::new_v4().to_string())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_impls!(GroupId);
id_impls!(MemberId);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_init_ids_are_distinct() {
        let ids = (0..100).map(|_| GroupId::init()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_fresh_skips_taken_ids() {
        let taken = (0..10).map(|_| MemberId::init()).collect::<HashSet<_>>();
        let id = MemberId::fresh(|id| taken.contains(id));
        assert!(!taken.contains(&id));
    }

    #[test]
    fn test_literal_ids_keep_their_text() {
        let id = MemberId::from("m1");
        assert_eq!(id.as_str(), "m1");
        assert_eq!(id.to_string(), "m1");
        assert_eq!(&*id, "m1");
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&GroupId::new("2")).unwrap();
        assert_eq!(json, "\"2\"");
        let back: GroupId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GroupId::from("2"));
    }
}
