use crate::file::csv::error::FileError;
use model::core::value::Value;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// One normalized row of the users CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl UserRecord {
    /// Parameters in `user_data` column order.
    pub fn to_params(&self) -> Vec<Value> {
        vec![
            Value::String(self.user_id.clone()),
            Value::String(self.name.clone()),
            Value::String(self.email.clone()),
            Value::Int(self.age),
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawUser {
    user_id: Option<String>,
    id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    age: Option<String>,
}

impl From<RawUser> for UserRecord {
    fn from(raw: RawUser) -> Self {
        let user_id = [raw.user_id, raw.id]
            .into_iter()
            .flatten()
            .map(|id| id.trim().to_string())
            .find(|id| !id.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        UserRecord {
            user_id,
            name: trimmed(raw.name),
            email: trimmed(raw.email),
            age: parse_age(raw.age.as_deref()),
        }
    }
}

fn trimmed(field: Option<String>) -> String {
    field.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Ages are read as floats and truncated; anything unparsable becomes 0.
fn parse_age(raw: Option<&str>) -> i64 {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or("0");
    match raw.parse::<f64>() {
        Ok(age) if age.is_finite() => age.trunc() as i64,
        _ => {
            warn!("Unparsable age '{}', defaulting to 0", raw);
            0
        }
    }
}

/// Reads every record of a users CSV file with a header row.
pub fn read_users(path: &Path) -> Result<Vec<UserRecord>, FileError> {
    if !path.exists() {
        return Err(FileError::NotFound(path.to_path_buf()));
    }

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(::csv::Trim::Headers)
        .flexible(true)
        .from_path(path)?;

    let records = reader
        .deserialize::<RawUser>()
        .map(|raw| raw.map(UserRecord::from))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Read {} user records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_and_normalizes_records() {
        let file = csv_file(
            "user_id,name,email,age\n\
             00234e50-34eb-4ce2-94ec-26e3fa749796, Dan Altenwerth Jr. ,Molly59@gmail.com,67\n\
             006bfede-724d-4cdd-a2a6-59700f40d0da,Glenda Wisozk,Miriam21@gmail.com,119.6\n",
        );

        let users = read_users(file.path()).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Dan Altenwerth Jr.");
        assert_eq!(users[0].age, 67);
        assert_eq!(users[1].user_id, "006bfede-724d-4cdd-a2a6-59700f40d0da");
        assert_eq!(users[1].age, 119);
    }

    #[test]
    fn test_id_fallbacks() {
        let file = csv_file("id,name,email,age\nabc,Ann,ann@example.com,30\n,Bob,bob@example.com,31\n");

        let users = read_users(file.path()).unwrap();
        assert_eq!(users[0].user_id, "abc");
        // Missing ids get a generated UUID.
        assert!(uuid::Uuid::parse_str(&users[1].user_id).is_ok());
    }

    #[test]
    fn test_bad_age_defaults_to_zero() {
        assert_eq!(parse_age(Some("forty")), 0);
        assert_eq!(parse_age(Some("")), 0);
        assert_eq!(parse_age(None), 0);
        assert_eq!(parse_age(Some(" 28 ")), 28);
    }

    #[test]
    fn test_missing_file() {
        let err = read_users(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
    }

    #[test]
    fn test_record_params_order() {
        let record = UserRecord {
            user_id: "u1".into(),
            name: "Ann".into(),
            email: "ann@example.com".into(),
            age: 30,
        };
        assert_eq!(
            record.to_params(),
            vec![
                Value::String("u1".into()),
                Value::String("Ann".into()),
                Value::String("ann@example.com".into()),
                Value::Int(30),
            ]
        );
    }
}
