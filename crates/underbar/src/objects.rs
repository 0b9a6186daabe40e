//! Object helpers
//!
//! Objects are JSON maps. Merges copy values; sources are never modified.

use serde_json::{Map, Value};

/// JSON object
pub type Object = Map<String, Value>;

/// Copy every property of each source into `target`
///
/// Sources are applied in order, so a later source overwrites an earlier one
/// and both overwrite `target`.
///
/// ```
/// use serde_json::{json, Value};
/// use underbar::objects::{extend, Object};
///
/// let mut target = Object::new();
/// let a = json!({"x": 1}).as_object().cloned().unwrap();
/// let b = json!({"x": 2, "y": null}).as_object().cloned().unwrap();
///
/// extend(&mut target, &[&a, &b]);
/// assert_eq!(Value::Object(target.clone()), json!({"x": 2, "y": null}));
/// ```
pub fn extend<'a>(target: &'a mut Object, sources: &[&Object]) -> &'a mut Object {
    for source in sources {
        for (key, value) in source.iter() {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// Copy properties that `target` does not have yet
///
/// A key already present in `target` is kept even if its value is `null`.
/// Among sources, the first one to supply a key wins.
pub fn defaults<'a>(target: &'a mut Object, sources: &[&Object]) -> &'a mut Object {
    for source in sources {
        for (key, value) in source.iter() {
            if !target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    target
}

/// Call `f(value, key, object)` for every property
pub fn each_entry<F>(object: &Object, mut f: F)
where
    F: FnMut(&Value, &str, &Object),
{
    for (key, value) in object.iter() {
        f(value, key, object);
    }
}

/// Check whether any property holds `target`
pub fn contains_value(object: &Object, target: &Value) -> bool {
    object.values().any(|value| value == target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Object {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn test_extend_overwrites_in_order() {
        let mut target = object(json!({"a": 1, "b": 1}));
        let first = object(json!({"b": 2, "c": 2}));
        let second = object(json!({"c": 3}));

        extend(&mut target, &[&first, &second]);

        assert_eq!(Value::Object(target), json!({"a": 1, "b": 2, "c": 3}));
    }

    #[test]
    fn test_extend_copies_falsy_values() {
        let mut target = object(json!({"a": true}));
        let source = object(json!({"a": false, "b": 0, "c": "", "d": null}));

        extend(&mut target, &[&source]);

        assert_eq!(
            Value::Object(target),
            json!({"a": false, "b": 0, "c": "", "d": null})
        );
    }

    #[test]
    fn test_extend_leaves_sources_alone() {
        let mut target = Object::new();
        let source = object(json!({"a": 1}));

        extend(&mut target, &[&source]).insert("a".to_string(), json!(99));

        assert_eq!(source["a"], json!(1));
        assert_eq!(target["a"], json!(99));
    }

    #[test]
    fn test_defaults_keeps_existing_keys() {
        let mut target = object(json!({"a": 1, "b": null}));
        let first = object(json!({"a": 9, "b": 9, "c": 3}));
        let second = object(json!({"c": 9, "d": 4}));

        defaults(&mut target, &[&first, &second]);

        assert_eq!(
            Value::Object(target),
            json!({"a": 1, "b": null, "c": 3, "d": 4})
        );
    }

    #[test]
    fn test_defaults_with_no_sources() {
        let mut target = object(json!({"a": 1}));

        defaults(&mut target, &[]);

        assert_eq!(Value::Object(target), json!({"a": 1}));
    }

    #[test]
    fn test_each_entry_visits_every_property() {
        let source = object(json!({"a": 1, "b": 2, "c": 3}));
        let mut keys = Vec::new();
        let mut total = 0;

        each_entry(&source, |value, key, all| {
            assert_eq!(all.len(), 3);
            keys.push(key.to_string());
            total += value.as_i64().unwrap_or(0);
        });

        keys.sort();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(total, 6);
    }

    #[test]
    fn test_contains_value() {
        let source = object(json!({"a": 1, "b": "two", "c": null}));

        assert!(contains_value(&source, &json!(1)));
        assert!(contains_value(&source, &json!("two")));
        assert!(contains_value(&source, &Value::Null));
        // Keys are not values
        assert!(!contains_value(&source, &json!("a")));
        assert!(!contains_value(&Object::new(), &json!(1)));
    }
}
