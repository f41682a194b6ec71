use crate::core::value::{FieldValue, Value};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::collections::HashMap;

/// One record of a source table: column values in select order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .map(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }
}

/// Serialized as a JSON object keyed by column name, in column order.
///
/// Result sets from joins can repeat a column name. The second `id` is
/// written as `id_2`, the third as `id_3`, so no value is shadowed.
impl Serialize for RowData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut map = serializer.serialize_map(Some(self.field_values.len()))?;
        for field in &self.field_values {
            let count = seen.entry(field.name.as_str()).or_default();
            *count += 1;
            if *count == 1 {
                map.serialize_entry(&field.name, &field.value)?;
            } else {
                map.serialize_entry(&format!("{}_{}", field.name, count), &field.value)?;
            }
        }
        map.end()
    }
}
