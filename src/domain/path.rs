// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted key path resolution over a configuration document.

use crate::domain::{ConfigKey, ConfigValue, Mapping};

/// Resolves `key` against `root`, descending one mapping level per segment.
///
/// Returns `None` when the key is empty, when a segment is missing, or when a
/// segment other than the last lands on something that is not a mapping.
/// Sequences cannot be indexed; they are only returned whole.
pub(crate) fn find<'a>(root: &'a Mapping, key: &ConfigKey) -> Option<&'a ConfigValue> {
    if key.is_empty() {
        return None;
    }

    let mut segments = key.segments();
    let first = segments.next()?;
    let mut current = root.get(first)?;
    for segment in segments {
        current = current.as_map()?.get(segment)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mapping {
        let mut memory = Mapping::new();
        memory.insert("DefaultExpirationSeconds".to_string(), ConfigValue::Int(3600));

        let mut cache = Mapping::new();
        cache.insert("memory".to_string(), ConfigValue::Map(memory));

        let mut root = Mapping::new();
        root.insert("cache".to_string(), ConfigValue::Map(cache));
        root.insert(
            "safeHosts".to_string(),
            ConfigValue::List(vec!["x".into(), "y".into()]),
        );
        root.insert("name".to_string(), "svc".into());
        root
    }

    #[test]
    fn test_find_top_level() {
        let root = sample();
        assert_eq!(find(&root, &"name".into()), Some(&ConfigValue::from("svc")));
    }

    #[test]
    fn test_find_nested() {
        let root = sample();
        assert_eq!(
            find(&root, &"cache.memory.DefaultExpirationSeconds".into()),
            Some(&ConfigValue::Int(3600))
        );
    }

    #[test]
    fn test_find_intermediate_map() {
        let root = sample();
        let memory = find(&root, &"cache.memory".into()).unwrap();
        assert!(memory.as_map().is_some());
    }

    #[test]
    fn test_find_empty_key() {
        let root = sample();
        assert_eq!(find(&root, &"".into()), None);
    }

    #[test]
    fn test_find_missing_segment() {
        let root = sample();
        assert_eq!(find(&root, &"cache.disk".into()), None);
        assert_eq!(find(&root, &"notexist".into()), None);
    }

    #[test]
    fn test_find_through_scalar() {
        let root = sample();
        assert_eq!(find(&root, &"name.first".into()), None);
    }

    #[test]
    fn test_find_no_sequence_indexing() {
        let root = sample();
        assert_eq!(find(&root, &"safeHosts.0".into()), None);
        assert!(find(&root, &"safeHosts".into()).is_some());
    }

    #[test]
    fn test_find_case_sensitive() {
        let root = sample();
        assert_eq!(find(&root, &"Cache.memory".into()), None);
    }

    #[test]
    fn test_find_trailing_dot() {
        let root = sample();
        assert_eq!(find(&root, &"cache.".into()), None);
    }

    #[test]
    fn test_find_empty_segment_key() {
        let mut root = Mapping::new();
        root.insert(String::new(), ConfigValue::Bool(true));
        assert_eq!(find(&root, &".".into()), None);
        let mut inner = Mapping::new();
        inner.insert(String::new(), ConfigValue::Int(1));
        root.insert("a".to_string(), ConfigValue::Map(inner));
        assert_eq!(find(&root, &"a.".into()), Some(&ConfigValue::Int(1)));
    }
}
