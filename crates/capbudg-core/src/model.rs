use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Decoded content of a single worksheet cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// Insertion-ordered mapping with unique string keys.
///
/// Inserting an existing key replaces its value in place, so the original
/// position is kept and names never repeat.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields<V> {
    entries: Vec<(String, V)>,
}

impl<V> Fields<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for Fields<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Fields<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

impl<V: Serialize> Serialize for Fields<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Row name to a single value.
pub type Record = Fields<CellValue>;

/// Row name to an ordered, time-indexed sequence of values.
pub type SeriesRecord = Fields<Vec<CellValue>>;

/// One named section of the worksheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Table {
    Scalar(Record),
    Series(SeriesRecord),
    /// One record per period, all sharing the same field schema.
    Records(Vec<Record>),
}

impl Table {
    /// Row names in source order. For a record list these are the field
    /// names of its first record.
    pub fn row_names(&self) -> Vec<String> {
        match self {
            Table::Scalar(record) => record.names(),
            Table::Series(series) => series.names(),
            Table::Records(records) => records.first().map(Fields::names).unwrap_or_default(),
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Table::Scalar(_) => "scalar",
            Table::Series(_) => "series",
            Table::Records(_) => "records",
        }
    }
}

/// All tables extracted from one worksheet, in extraction order.
///
/// Built once and never mutated afterwards. An empty collection means
/// extraction did not succeed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TableCollection {
    tables: Fields<Table>,
}

impl TableCollection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.tables.names()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Table)> for TableCollection {
    fn from_iter<I: IntoIterator<Item = (K, Table)>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}
