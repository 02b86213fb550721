// src/diff.rs
//! Array difference: what one key list has that the other lacks
//!
//! `diff` intersects the two inputs, then subtracts the intersection from
//! each side. Outputs are duplicate-free and keep first-occurrence order.

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

// 2^63: the first float past i64::MAX
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// A primitive key: the "string or number" element type of a key list
///
/// Numbers compare like JavaScript's `===`: `Float(2.0)`, `Float(-0.0)` and
/// `Number(2)`/`Number(0)` are equal keys. Integers beyond the i64 range are
/// read as floats, so they lose precision the same way a JS number does.
/// A number never equals a string, so `1` and `"1"` stay distinct.
#[derive(Debug, Clone)]
pub enum ArrayKey {
    Number(i64),
    Float(f64),
    Text(String),
}

/// Equality/hash form of a key: integral floats fold into `Int`
#[derive(PartialEq, Eq, Hash)]
enum Canonical<'a> {
    Int(i64),
    Float(u64),
    Text(&'a str),
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f >= -I64_UPPER_BOUND && f < I64_UPPER_BOUND)
        .then_some(f as i64)
}

impl ArrayKey {
    fn canonical(&self) -> Canonical<'_> {
        match self {
            ArrayKey::Number(n) => Canonical::Int(*n),
            ArrayKey::Float(f) => match integral(*f) {
                Some(n) => Canonical::Int(n),
                None if f.is_nan() => Canonical::Float(f64::NAN.to_bits()),
                None => Canonical::Float(f.to_bits()),
            },
            ArrayKey::Text(s) => Canonical::Text(s),
        }
    }

    /// Parse a comma-separated key list, as typed on a command line
    ///
    /// Entries are trimmed and empty entries skipped; each entry then goes
    /// through [`FromStr`].
    pub fn parse_list(list: &str) -> Vec<ArrayKey> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| match s.parse() {
                Ok(key) => key,
                Err(never) => match never {},
            })
            .collect()
    }
}

impl PartialEq for ArrayKey {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for ArrayKey {}

impl Hash for ArrayKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl From<i64> for ArrayKey {
    fn from(n: i64) -> Self {
        ArrayKey::Number(n)
    }
}

impl From<u64> for ArrayKey {
    fn from(n: u64) -> Self {
        i64::try_from(n)
            .map(ArrayKey::Number)
            .unwrap_or(ArrayKey::Float(n as f64))
    }
}

/// Integral floats inside the i64 range become `Number`
impl From<f64> for ArrayKey {
    fn from(f: f64) -> Self {
        integral(f)
            .map(ArrayKey::Number)
            .unwrap_or(ArrayKey::Float(f))
    }
}

impl From<&str> for ArrayKey {
    fn from(s: &str) -> Self {
        ArrayKey::Text(s.to_owned())
    }
}

impl From<String> for ArrayKey {
    fn from(s: String) -> Self {
        ArrayKey::Text(s)
    }
}

/// Only canonical integers (`42`, `-7`) become `Number`; `01`, `+5`, `-0`,
/// `1.0` and anything else stay `Text`
impl FromStr for ArrayKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => ArrayKey::Number(n),
            _ => ArrayKey::Text(s.to_owned()),
        })
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Number(n) => write!(f, "{n}"),
            ArrayKey::Float(x) => write!(f, "{x}"),
            ArrayKey::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for ArrayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ArrayKey::Number(n) => serializer.serialize_i64(*n),
            ArrayKey::Float(x) => serializer.serialize_f64(*x),
            ArrayKey::Text(s) => serializer.serialize_str(s),
        }
    }
}

struct ArrayKeyVisitor;

impl<'de> Visitor<'de> for ArrayKeyVisitor {
    type Value = ArrayKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<ArrayKey, E> {
        Ok(ArrayKey::from(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<ArrayKey, E> {
        Ok(ArrayKey::from(n))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<ArrayKey, E> {
        Ok(ArrayKey::from(f))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<ArrayKey, E> {
        Ok(ArrayKey::from(s))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<ArrayKey, E> {
        Ok(ArrayKey::Text(s))
    }
}

impl<'de> Deserialize<'de> for ArrayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ArrayKeyVisitor)
    }
}

/// Split the symmetric difference of `a` and `b` into `(only_in_a, only_in_b)`
///
/// ```
/// use request_helper::diff::diff;
///
/// assert_eq!(diff(&[1, 2, 3], &[2, 3, 4]), (vec![1], vec![4]));
/// ```
pub fn diff<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> (Vec<T>, Vec<T>) {
    let set_a: HashSet<&T> = a.iter().collect();
    let set_b: HashSet<&T> = b.iter().collect();
    let common: HashSet<&T> = set_a.intersection(&set_b).copied().collect();

    let only_in_a = except(a, &common);
    let only_in_b = except(b, &common);
    trace!(
        common = common.len(),
        only_in_a = only_in_a.len(),
        only_in_b = only_in_b.len(),
        "computed array diff"
    );
    (only_in_a, only_in_b)
}

fn except<T: Eq + Hash + Clone>(source: &[T], excluded: &HashSet<&T>) -> Vec<T> {
    let mut seen = HashSet::new();
    source
        .iter()
        .filter(|item| !excluded.contains(item) && seen.insert(*item))
        .cloned()
        .collect()
}

/// Named form of a [`diff`] result: `increase` is only in the new list,
/// `decrease` only in the old one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff<T> {
    pub increase: Vec<T>,
    pub decrease: Vec<T>,
}

impl<T: Eq + Hash + Clone> Diff<T> {
    pub fn between(a: &[T], b: &[T]) -> Self {
        let (increase, decrease) = diff(a, b);
        Diff { increase, decrease }
    }
}

impl<T> Diff<T> {
    pub fn is_empty(&self) -> bool {
        self.increase.is_empty() && self.decrease.is_empty()
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.increase, self.decrease)
    }
}
