use serde::Serialize;
use sqlx::FromRow;
use time::{Date, OffsetDateTime};

/// `YYYY-MM-DD` encoding for calendar dates.
pub(crate) mod ymd {
    use serde::Serializer;
    use time::{format_description::FormatItem, macros::format_description, Date};

    pub(crate) const FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

    pub fn serialize<S: Serializer>(date: &Date, s: S) -> Result<S::Ok, S::Error> {
        let text = date.format(FORMAT).map_err(serde::ser::Error::custom)?;
        s.serialize_str(&text)
    }
}

/// Employee row as stored, serialized with the public camelCase field names.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub salary: f64,
    pub address: String,
    #[serde(with = "ymd")]
    pub dob: Date,
    pub age: Option<i32>,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// What a delete reports back about the removed row.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DeletedEmployee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}
