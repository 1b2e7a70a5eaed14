use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user: String,
    pub host: String,
    pub port: u16,
}

impl Profile {
    pub fn new(user: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.user, self.host, self.port)
    }
}

/// Profiles keyed by name, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileCatalog {
    entries: Vec<(String, Profile)>,
}

impl ProfileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `profile`, replacing an existing entry of the same name in place.
    /// Returns the replaced profile, if any.
    pub fn insert(&mut self, name: impl Into<String>, profile: Profile) -> Option<Profile> {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, profile)),
            None => {
                self.entries.push((name, profile));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, profile)| profile)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Profile)> {
        self.entries
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Profile)> for ProfileCatalog {
    fn from_iter<I: IntoIterator<Item = (N, Profile)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (name, profile) in iter {
            catalog.insert(name, profile);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let catalog: ProfileCatalog = [
            ("ZULU", Profile::new("u1", "h1", 1)),
            ("ALPHA", Profile::new("u2", "h2", 2)),
            ("MIKE", Profile::new("u3", "h3", 3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.names().collect::<Vec<_>>(), ["ZULU", "ALPHA", "MIKE"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut catalog = ProfileCatalog::new();
        catalog.insert("A", Profile::new("u1", "h1", 1));
        catalog.insert("B", Profile::new("u2", "h2", 2));

        let replaced = catalog.insert("A", Profile::new("u9", "h9", 9));

        assert_eq!(replaced, Some(Profile::new("u1", "h1", 1)));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(catalog.get("A").map(|p| p.port), Some(9));
    }

    #[test]
    fn displays_connection_string() {
        assert_eq!(Profile::new("u1", "h1", 443).to_string(), "u1@h1:443");
    }
}
