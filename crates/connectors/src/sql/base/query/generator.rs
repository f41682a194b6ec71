use crate::sql::base::{error::DbError, requests::FetchRowsRequest};
use model::core::value::Value;

/// Renders requests into MySQL statements with positional parameters.
pub struct QueryGenerator;

impl QueryGenerator {
    /// Generates a SQL SELECT statement and its parameters.
    ///
    /// Page bounds are always bound as parameters, never interpolated.
    pub fn select(request: &FetchRowsRequest) -> Result<(String, Vec<Value>), DbError> {
        let columns = if request.columns.is_empty() {
            "*".to_string()
        } else {
            request
                .columns
                .iter()
                .map(|c| quote_ident(c))
                .collect::<Result<Vec<_>, _>>()?
                .join(", ")
        };

        let mut sql = format!("SELECT {columns} FROM {}", quote_ident(&request.table)?);
        let mut params = Vec::new();

        if let Some(order_by) = &request.order_by {
            sql.push_str(&format!(" ORDER BY {}", quote_ident(order_by)?));
        }

        if let Some(limit) = request.limit {
            sql.push_str(" LIMIT ? OFFSET ?");
            params.push(Value::Int(to_i64(limit.get())?));
            params.push(Value::Int(to_i64(request.offset)?));
        }

        Ok((sql, params))
    }
}

/// Checks that `name` is a plain identifier (ASCII letters, digits, `_`).
pub fn validate_ident(name: &str) -> Result<(), DbError> {
    let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(DbError::InvalidIdentifier(name.to_string()))
    }
}

pub fn quote_ident(name: &str) -> Result<String, DbError> {
    validate_ident(name)?;
    Ok(format!("`{name}`"))
}

fn to_i64(n: usize) -> Result<i64, DbError> {
    i64::try_from(n).map_err(|_| DbError::QueryBuildError(format!("{n} does not fit in BIGINT")))
}
