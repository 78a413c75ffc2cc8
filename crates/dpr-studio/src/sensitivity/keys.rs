use std::collections::HashSet;

/// Insertion-ordered set of string keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedKeys {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedKeys {
    /// Returns `false` when the key was already present; its position is kept.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_string());
        self.order.push(key.to_string());
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        if !self.contains(key) {
            return None;
        }
        self.order.iter().position(|existing| existing == key)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for OrderedKeys {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut keys = Self::default();
        for key in iter {
            keys.insert(key);
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_insertion_position() {
        let keys: OrderedKeys = ["b", "a", "b", "c", "a"].into_iter().collect();
        assert_eq!(keys.as_slice(), ["b", "a", "c"]);
        assert_eq!(keys.position("c"), Some(2));
        assert_eq!(keys.position("z"), None);
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn insert_reports_novelty() {
        let mut keys = OrderedKeys::default();
        assert!(keys.is_empty());
        assert!(keys.insert("+10%"));
        assert!(!keys.insert("+10%"));
        assert!(keys.contains("+10%"));
    }
}
