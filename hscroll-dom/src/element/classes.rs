use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Ordered set of class names attached to an element.
///
/// Every insertion stamps the class with a fresh revision taken from a
/// process-wide counter. Removing a class and adding it back therefore
/// yields a different revision even though `contains` reports the same
/// thing before and after, which is what the animation layer keys
/// transition restarts on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    entries: Vec<(String, u64)>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(class, _)| class == name)
    }

    /// Add a class. Returns false if it was already present.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        let revision = NEXT_REVISION.fetch_add(1, Ordering::Relaxed);
        self.entries.push((name, revision));
        true
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(class, _)| class != name);
        self.entries.len() != before
    }

    /// Add the class when `on` is true, remove it otherwise.
    /// Returns true if the list changed.
    pub fn toggle(&mut self, name: &str, on: bool) -> bool {
        if on {
            self.add(name)
        } else {
            self.remove(name)
        }
    }

    /// Revision stamped when the class was last added.
    pub fn revision(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(class, _)| class == name)
            .map(|(_, revision)| *revision)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(class, _)| class.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for name in iter {
            list.add(name);
        }
        list
    }
}
