use std::collections::{hash_map, HashMap};

use crate::Value;

/// A schemaless record stored in a vellum collection, made up of named, typed fields.
///
/// Field order is not preserved. Inserting a field under an existing name replaces the previous
/// value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Document {
    fields: HashMap<String, Value>,
}

impl Document {
    /// Create a new, empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field `name` to `value`, returning the previous value if the field already
    /// existed.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Look up the value of the field `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Remove the field `name`, returning its value if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    /// Whether the document contains a field named `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the document's fields, in no particular order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.fields.iter()
    }
}

impl From<HashMap<String, Value>> for Document {
    fn from(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Document;
    use crate::Value;

    #[test]
    fn insert_get_remove() {
        let mut doc = Document::new();
        assert!(doc.is_empty());

        assert_eq!(None, doc.insert("name", "aurelia"));
        assert_eq!(None, doc.insert("age", 3));
        assert_eq!(2, doc.len());
        assert_eq!(Some(&Value::from("aurelia")), doc.get("name"));
        assert!(doc.contains("age"));

        assert_eq!(Some(Value::from("aurelia")), doc.insert("name", "livia"));
        assert_eq!(Some(&Value::from("livia")), doc.get("name"));

        assert_eq!(Some(Value::from(3)), doc.remove("age"));
        assert_eq!(None, doc.get("age"));
        assert_eq!(1, doc.len());
    }

    #[test]
    fn doc_macro() {
        let doc = crate::doc!("name" => "aurelia", "age" => 3, "tags" => crate::list!["a", "b"]);

        assert_eq!(3, doc.len());
        assert_eq!(Some(&Value::from("aurelia")), doc.get("name"));
        assert_eq!(Some(&Value::from(3)), doc.get("age"));
        assert_eq!(
            Some(&Value::List(vec![Value::from("a"), Value::from("b")])),
            doc.get("tags")
        );
    }

    #[test]
    fn collect_from_pairs() {
        let doc = [("a".to_owned(), Value::from(1))]
            .into_iter()
            .collect::<Document>();
        assert_eq!(Some(&Value::from(1)), doc.get("a"));
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn serialize_round_trip() {
        let doc = crate::doc!("id" => 7_u64, "ok" => true);
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(doc, serde_json::from_str::<Document>(&json).unwrap());
    }
}
