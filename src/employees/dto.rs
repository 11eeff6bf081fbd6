use serde::{Deserialize, Deserializer, Serialize};
use time::Date;

use super::repo_types::{ymd, DeletedEmployee};

/// Create/update body. Every field is optional here; absent or blank values bind as NULL
/// and the table's NOT NULL constraints decide what is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[serde(default, deserialize_with = "non_blank")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub contact_number: Option<String>,
    #[serde(default, deserialize_with = "finite_number")]
    pub salary: Option<f64>,
    #[serde(default, deserialize_with = "non_blank")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "date_or_blank")]
    pub dob: Option<Date>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub age: Option<i32>,
    #[serde(default, deserialize_with = "non_blank")]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub deleted: DeletedEmployee,
}

impl DeleteResponse {
    pub fn new(deleted: DeletedEmployee) -> Self {
        Self {
            message: "Employee deleted successfully",
            deleted,
        }
    }
}

fn non_blank<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(de)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

/// HTML forms submit numbers as strings, so both `1000` and `"1000"` are accepted.
fn number_or_string<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + std::str::FromStr,
{
    match Option::<NumberOrString<T>>::deserialize(de)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| <D::Error as serde::de::Error>::custom(format!("invalid number: {s}"))),
    }
}

/// Like `number_or_string`, but refuses `NaN` and the infinities that `f64::from_str` accepts.
fn finite_number<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match number_or_string::<D, f64>(de)? {
        Some(n) if !n.is_finite() => Err(<D::Error as serde::de::Error>::custom(
            "salary must be a finite number",
        )),
        other => Ok(other),
    }
}

fn date_or_blank<'de, D>(de: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(de)? {
        Some(s) if !s.trim().is_empty() => {
            let parsed = Date::parse(s.trim(), ymd::FORMAT)
                .map_err(|_| <D::Error as serde::de::Error>::custom(format!("invalid date: {s}")))?;
            Ok(Some(parsed))
        }
        _ => Ok(None),
    }
}
