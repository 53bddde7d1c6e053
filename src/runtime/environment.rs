use std::collections::{BTreeMap, HashMap};

use crate::runtime::Value;

/// Variable storage for one program run
///
/// A single flat scope: created empty, written only by assignments, and alive for the
/// whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    /// Sets a variable, returning the value it replaced
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.variables.insert(name.into(), value)
    }

    /// Gets the value of a variable by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Checks if a variable has been assigned
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if no variable has been assigned
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Variables in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        let mut entries: Vec<_> = self
            .variables
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// Returns a sorted copy of all variables
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.variables
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut env = Environment::new();
        assert!(env.is_empty());
        assert_eq!(env.set("a", Value::from(5u64)), None);
        assert_eq!(env.get("a"), Some(&Value::from(5u64)));
        assert!(env.get("A").is_none());
    }

    #[test]
    fn test_later_assignment_overwrites() {
        let mut env = Environment::new();
        env.set("x", Value::from(1u64));
        assert_eq!(env.set("x", Value::from(2u64)), Some(Value::from(1u64)));
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("x"), Some(&Value::from(2u64)));
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let mut env = Environment::new();
        env.set("b", Value::from(3u64));
        env.set("a", Value::from(5u64));
        let names: Vec<_> = env.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);

        let snapshot = env.snapshot();
        assert_eq!(snapshot.get("b"), Some(&Value::from(3u64)));
    }
}
