//! Sequence helpers
//!
//! Everything here works on slices and returns fresh values. Only `invoke`
//! and the `sort_by*` functions touch their input.

use std::cmp::Ordering;
use std::hash::Hash;
use ahash::AHashSet;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

use crate::error::{Error, Result};

/// First element, or `None` when empty
pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// The first `n` elements (all of them if there are fewer than `n`)
pub fn first_n<T>(items: &[T], n: usize) -> &[T] {
    &items[..n.min(items.len())]
}

/// Last element, or `None` when empty
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// The last `n` elements (all of them if there are fewer than `n`)
pub fn last_n<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Call `f(item, index, items)` for every element, in order
pub fn each<T, F>(items: &[T], mut f: F)
where
    F: FnMut(&T, usize, &[T]),
{
    for (index, item) in items.iter().enumerate() {
        f(item, index, items);
    }
}

/// Position of the first element equal to `target`
pub fn index_of<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

/// Elements that pass `pred`
pub fn filter<T, P>(items: &[T], mut pred: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    items.iter().filter(|item| pred(item)).cloned().collect()
}

/// Elements that fail `pred`
pub fn reject<T, P>(items: &[T], mut pred: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter(items, |item| !pred(item))
}

/// Duplicate-free copy, keeping the first occurrence of each value
pub fn uniq<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = AHashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Apply `f` to every element
pub fn map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(f).collect()
}

/// Value of property `name` in each object; `Null` where it is missing
///
/// ```
/// use serde_json::json;
/// use underbar::collections::pluck;
///
/// let people = vec![json!({"name": "moe", "age": 30}), json!({"name": "curly"})];
/// assert_eq!(pluck(&people, "age"), vec![json!(30), json!(null)]);
/// ```
pub fn pluck(objects: &[Value], name: &str) -> Vec<Value> {
    objects
        .iter()
        .map(|object| object.get(name).cloned().unwrap_or(Value::Null))
        .collect()
}

/// Call `method` on every element in place, collecting what it returns
pub fn invoke<T, R, F>(items: &mut [T], method: F) -> Vec<R>
where
    F: FnMut(&mut T) -> R,
{
    items.iter_mut().map(method).collect()
}

/// Fold the elements left to right, starting from `init`
pub fn reduce<T, A, F>(items: &[T], init: A, f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    items.iter().fold(init, f)
}

/// Fold the elements left to right, starting from the first element
pub fn reduce_first<T, F>(items: &[T], f: F) -> Option<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (head, rest) = items.split_first()?;
    Some(rest.iter().fold(head.clone(), f))
}

/// Check whether any element equals `target`
pub fn contains<T: PartialEq>(items: &[T], target: &T) -> bool {
    items.contains(target)
}

/// Check that every element passes `pred` (true for an empty slice)
pub fn every<T, P>(items: &[T], pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().all(pred)
}

/// Check that at least one element passes `pred` (false for an empty slice)
pub fn some<T, P>(items: &[T], pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    items.iter().any(pred)
}

/// JavaScript truthiness of a JSON value
///
/// `null`, `false`, zero and the empty string are falsy. Arrays and objects
/// are truthy even when empty.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Check that every value is truthy
pub fn every_truthy(values: &[Value]) -> bool {
    every(values, truthy)
}

/// Check that at least one value is truthy
pub fn some_truthy(values: &[Value]) -> bool {
    some(values, truthy)
}

/// Randomly permuted copy, using the thread-local generator
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Randomly permuted copy, using the given generator
pub fn shuffle_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Stable in-place sort by a derived key
pub fn sort_by<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    items.sort_by_key(key);
}

/// Stable in-place sort of objects by one of their properties
///
/// Objects missing the property (or holding `null`) sort first. The present
/// values must all be numbers, all strings, or all booleans.
///
/// # Returns
/// * `Ok(())` - Sorted
/// * `Err(Error::NotAnObject)` - An element is not an object; nothing moved
/// * `Err(Error::Incomparable)` - Values cannot be ordered; nothing moved
pub fn sort_by_property(objects: &mut [Value], name: &str) -> Result<()> {
    if let Some(index) = objects.iter().position(|object| !object.is_object()) {
        return Err(Error::NotAnObject(index));
    }

    let mut present = objects
        .iter()
        .filter_map(|object| property_of(object, name));
    if let Some(anchor) = present.next() {
        let orderable = compare_values(anchor, anchor).is_some()
            && present.all(|value| compare_values(anchor, value).is_some());
        if !orderable {
            return Err(Error::Incomparable {
                property: name.to_string(),
            });
        }
    }

    objects.sort_by(|a, b| match (property_of(a, name), property_of(b, name)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => compare_values(x, y).unwrap_or(Ordering::Equal),
    });
    Ok(())
}

fn property_of<'a>(object: &'a Value, name: &str) -> Option<&'a Value> {
    object.get(name).filter(|value| !value.is_null())
}

fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// Group elements by index across several arrays
///
/// Row `i` holds the `i`-th element of every array, `None` where an array is
/// too short. There are as many rows as the longest array has elements.
pub fn zip<T, A>(arrays: &[A]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    A: AsRef<[T]>,
{
    let longest = arrays
        .iter()
        .map(|array| array.as_ref().len())
        .max()
        .unwrap_or(0);
    (0..longest)
        .map(|i| {
            arrays
                .iter()
                .map(|array| array.as_ref().get(i).cloned())
                .collect()
        })
        .collect()
}

/// Leaves of an arbitrarily nested array, depth first
pub fn flatten(nested: &Value) -> Result<Vec<Value>> {
    fn dig(items: &[Value], flat: &mut Vec<Value>) {
        for item in items {
            match item {
                Value::Array(inner) => dig(inner, flat),
                leaf => flat.push(leaf.clone()),
            }
        }
    }

    let items = nested.as_array().ok_or(Error::NotAnArray)?;
    let mut flat = Vec::new();
    dig(items, &mut flat);
    Ok(flat)
}

/// Unique elements of the first array that appear in every other array
pub fn intersection<T, A>(arrays: &[A]) -> Vec<T>
where
    T: Eq + Hash + Clone,
    A: AsRef<[T]>,
{
    let Some((head, rest)) = arrays.split_first() else {
        return Vec::new();
    };

    let others: Vec<AHashSet<&T>> = rest
        .iter()
        .map(|array| array.as_ref().iter().collect())
        .collect();
    let mut seen = AHashSet::new();
    head.as_ref()
        .iter()
        .filter(|item| others.iter().all(|set| set.contains(*item)) && seen.insert(*item))
        .cloned()
        .collect()
}

/// Elements of `first` that appear in none of `others`
pub fn difference<T, A>(first: &[T], others: &[A]) -> Vec<T>
where
    T: Eq + Hash + Clone,
    A: AsRef<[T]>,
{
    let excluded: AHashSet<&T> = others
        .iter()
        .flat_map(|array| array.as_ref().iter())
        .collect();
    first
        .iter()
        .filter(|item| !excluded.contains(*item))
        .cloned()
        .collect()
}
