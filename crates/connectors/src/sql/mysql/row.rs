use model::{
    core::value::{FieldValue, Value},
    records::row::RowData,
};
use mysql_async::{Row as MySqlRow, Value as MySqlValue, consts::ColumnType};
use tracing::warn;

/// Converts a driver row into a `RowData`, keeping column order.
pub fn to_row_data(row: &MySqlRow, table: &str) -> RowData {
    let fields = row
        .columns_ref()
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let value = row
                .as_ref(idx)
                .map(|raw| convert_value(column.column_type(), raw))
                .unwrap_or(Value::Null);
            FieldValue::new(column.name_str().into_owned(), value)
        })
        .collect();

    RowData::new(table, fields)
}

/// Maps one driver value to a model value.
///
/// The binary protocol sends DECIMAL as text and the text protocol sends
/// everything as text, so textual payloads are decoded by column type.
pub fn convert_value(column_type: ColumnType, raw: &MySqlValue) -> Value {
    match raw {
        MySqlValue::NULL => Value::Null,
        MySqlValue::Int(i) => Value::Int(*i),
        MySqlValue::UInt(u) => i64::try_from(*u)
            .map(Value::Int)
            .unwrap_or_else(|_| Value::String(u.to_string())),
        MySqlValue::Float(f) => Value::Float(*f as f64),
        MySqlValue::Double(d) => Value::Float(*d),
        MySqlValue::Bytes(bytes) => decode_text(column_type, bytes),
        MySqlValue::Date(year, month, day, hour, minute, second, micros) => {
            if column_type == ColumnType::MYSQL_TYPE_DATE {
                Value::String(format!("{year:04}-{month:02}-{day:02}"))
            } else if *micros > 0 {
                Value::String(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}.{micros:06}"
                ))
            } else {
                Value::String(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            }
        }
        MySqlValue::Time(negative, days, hours, minutes, seconds, _) => {
            let sign = if *negative { "-" } else { "" };
            let total_hours = *days * 24 + u32::from(*hours);
            Value::String(format!("{sign}{total_hours:02}:{minutes:02}:{seconds:02}"))
        }
    }
}

fn decode_text(column_type: ColumnType, bytes: &[u8]) -> Value {
    let text = String::from_utf8_lossy(bytes);

    match column_type {
        ColumnType::MYSQL_TYPE_TINY
        | ColumnType::MYSQL_TYPE_SHORT
        | ColumnType::MYSQL_TYPE_LONG
        | ColumnType::MYSQL_TYPE_INT24
        | ColumnType::MYSQL_TYPE_LONGLONG
        | ColumnType::MYSQL_TYPE_YEAR => text
            .parse::<i64>()
            .map(Value::Int)
            .unwrap_or_else(|_| Value::String(text.into_owned())),
        ColumnType::MYSQL_TYPE_DECIMAL
        | ColumnType::MYSQL_TYPE_NEWDECIMAL
        | ColumnType::MYSQL_TYPE_FLOAT
        | ColumnType::MYSQL_TYPE_DOUBLE => decode_number(&text),
        _ => Value::String(text.into_owned()),
    }
}

fn decode_number(text: &str) -> Value {
    if let Ok(i) = text.parse::<i64>() {
        return Value::Int(i);
    }
    match text.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && !text.contains(['e', 'E']) && f.abs() < i64::MAX as f64 => {
            Value::Int(f as i64)
        }
        Ok(f) => Value::Float(f),
        Err(_) => {
            warn!("Unparsable numeric value: {}", text);
            Value::String(text.to_string())
        }
    }
}
