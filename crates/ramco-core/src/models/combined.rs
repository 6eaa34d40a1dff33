//! Pages of one logical query, concatenated in fetch order.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct CombinedResult {
    fragments: Vec<Value>,
}

impl CombinedResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(fragment: Value) -> Self {
        Self {
            fragments: vec![fragment],
        }
    }

    pub fn push(&mut self, fragment: Value) {
        self.fragments.push(fragment);
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn fragments(&self) -> &[Value] {
        &self.fragments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.fragments.iter()
    }

    pub fn into_fragments(self) -> Vec<Value> {
        self.fragments
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.fragments.clone())
    }
}

impl IntoIterator for CombinedResult {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> IntoIterator for &'a CombinedResult {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

impl From<Vec<Value>> for CombinedResult {
    fn from(fragments: Vec<Value>) -> Self {
        Self { fragments }
    }
}
