use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One row supplied by the host table.
///
/// The host is schema-less from our side: only `id` is lifted out, every
/// other column stays in `fields` as raw JSON and is interpreted by the
/// mapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl SourceRecord {
    /// Create an empty record with the given row id
    pub fn new(id: i64) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    /// Builder-style field setter, mostly for fixtures and the CLI.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Raw field value, `None` when the column is absent or null
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    /// Field rendered as display text.
    ///
    /// Strings pass through; numbers and booleans are stringified; anything
    /// else counts as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        value_text(self.field(name)?)
    }
}

/// Lenient row id: integral numbers and numeric text are accepted, anything
/// else (null, junk text, objects) becomes 0 instead of failing the batch.
fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(id_from_value(&value))
}

#[allow(clippy::cast_possible_truncation)]
fn round_finite(n: f64) -> Option<i64> {
    n.is_finite().then(|| n.round() as i64)
}

fn id_from_value(value: &Value) -> i64 {
    let number = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(round_finite)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(round_finite))
        }
        _ => None,
    };
    number.unwrap_or(0)
}

pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A sub-page entry inside a menu tile's `Pages` cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubRecord {
    pub id: i64,
    pub page_name: String,
}

/// Decoded `Pages` cell: `[tableName, [subRecord, ...]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesRef {
    pub table: String,
    pub records: Vec<SubRecord>,
}

impl PagesRef {
    /// Decode the host's nested table reference.
    ///
    /// Returns `None` unless the value is a two-element array whose second
    /// element is a list. Sub-records may carry `page_name` either at the top
    /// level or under a nested `fields` object. Entries that are not objects
    /// still count as sub-pages, with id 0 and an empty name.
    pub fn from_value(value: &Value) -> Option<Self> {
        let pair = value.as_array()?;
        let [table, records] = pair.as_slice() else {
            return None;
        };
        let table = value_text(table).unwrap_or_default();
        let records = records
            .as_array()?
            .iter()
            .map(|entry| {
                let Some(obj) = entry.as_object() else {
                    return SubRecord::default();
                };
                let nested = obj.get("fields").and_then(Value::as_object);
                let id = obj.get("id").map_or(0, id_from_value);
                let page_name = obj
                    .get("page_name")
                    .or_else(|| nested.and_then(|f| f.get("page_name")))
                    .and_then(value_text)
                    .unwrap_or_default();
                SubRecord { id, page_name }
            })
            .collect();
        Some(Self { table, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
