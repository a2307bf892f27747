//! Wire types for the spreadsheet endpoint.
//!
//! The endpoint is a spreadsheet script that serializes whatever the cells
//! contain, so the same column can arrive as a string, a number or `null`.
//! Each field is captured as a [`RawValue`] at the boundary and only
//! interpreted by the normalizer.
//!
//! ```text
//! { "status": "SUCCESS",
//!   "data": [ { "date": "2025-10-30T18:00:00.000Z",
//!               "time": "1899-12-30T12:07:51.000Z",
//!               "temperaturec": "21.5", "humidity1": 58.2 } ],
//!   "message": "optional" }
//! ```

use core::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use time::OffsetDateTime;

use crate::error::{Error, Result};

/// Status string the endpoint uses for a successful response.
pub const SUCCESS_STATUS: &str = "SUCCESS";

/// One cell value as delivered by the endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    /// Absent field or JSON `null`.
    #[default]
    Missing,
    /// JSON string.
    Text(String),
    /// JSON number.
    Number(f64),
    /// JSON boolean.
    Bool(bool),
    /// A structured date/time value, read through its own offset.
    DateTime(OffsetDateTime),
    /// Any other JSON shape (arrays, objects).
    Other(Value),
}

impl RawValue {
    /// Classify a JSON value.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::String(s) => Self::Text(s.clone()),
            // Beyond f64 range this is an infinity, resolved later like any
            // other non-finite number.
            Value::Number(n) => Self::Number(
                n.as_f64()
                    .unwrap_or_else(|| n.to_string().parse().unwrap_or(f64::NAN)),
            ),
            Value::Bool(b) => Self::Bool(*b),
            other => Self::Other(other.clone()),
        }
    }

    /// Whether the value counts as absent: missing, empty text, zero, NaN
    /// or `false`.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => *n == 0.0 || n.is_nan(),
            Self::Bool(b) => !b,
            Self::DateTime(_) | Self::Other(_) => false,
        }
    }
}

impl fmt::Display for RawValue {
    /// Last-resort textual form of the value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<OffsetDateTime> for RawValue {
    fn from(dt: OffsetDateTime) -> Self {
        Self::DateTime(dt)
    }
}

/// One row of the sheet.
///
/// Rows that are not JSON objects deserialize to an all-missing row rather
/// than failing the whole response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    pub date: RawValue,
    pub time: RawValue,
    /// Primary temperature column.
    pub temperaturec: RawValue,
    /// Alternate temperature column.
    pub temperature: RawValue,
    /// Primary humidity column.
    pub humidity: RawValue,
    /// Alternate humidity column.
    pub humidity1: RawValue,
}

impl RawRow {
    /// Extract the known columns from a JSON value.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let field = |name: &str| value.get(name).map(RawValue::from_json).unwrap_or_default();
        Self {
            date: field("date"),
            time: field("time"),
            temperaturec: field("temperaturec"),
            temperature: field("temperature"),
            humidity: field("humidity"),
            humidity1: field("humidity1"),
        }
    }
}

impl<'de> Deserialize<'de> for RawRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

/// Response envelope returned by the endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Option<Vec<RawRow>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// A successful envelope carrying `rows`.
    #[must_use]
    pub fn success(rows: Vec<RawRow>) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            data: Some(rows),
            message: None,
        }
    }

    /// A failed envelope with the given status and message.
    #[must_use]
    pub fn failure(status: &str, message: &str) -> Self {
        Self {
            status: status.to_string(),
            data: None,
            message: Some(message.to_string()),
        }
    }

    /// Parse an envelope from a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::InvalidResponse(e.to_string()))
    }

    /// Whether the endpoint reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Consume the envelope, returning its rows only if it is a success that
    /// carries data.
    pub fn into_rows(self) -> Result<Vec<RawRow>> {
        if !self.is_success() {
            return Err(Error::EndpointStatus {
                status: self.status,
                message: self.message,
            });
        }
        self.data.ok_or(Error::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_value_classification() {
        assert_eq!(RawValue::from_json(&json!(null)), RawValue::Missing);
        assert_eq!(RawValue::from_json(&json!("x")), RawValue::Text("x".into()));
        assert_eq!(RawValue::from_json(&json!(21.5)), RawValue::Number(21.5));
        assert_eq!(RawValue::from_json(&json!(true)), RawValue::Bool(true));
        assert!(matches!(
            RawValue::from_json(&json!([1, 2])),
            RawValue::Other(_)
        ));
    }

    #[test]
    fn test_raw_value_absent() {
        assert!(RawValue::Missing.is_absent());
        assert!(RawValue::Text(String::new()).is_absent());
        assert!(RawValue::Number(0.0).is_absent());
        assert!(RawValue::Number(f64::NAN).is_absent());
        assert!(RawValue::Bool(false).is_absent());
        assert!(!RawValue::Text("0".into()).is_absent());
        assert!(!RawValue::Number(-1.0).is_absent());
        assert!(!RawValue::Other(json!({})).is_absent());
    }

    #[test]
    fn test_raw_value_textual_form() {
        assert_eq!(RawValue::Number(45_000.0).to_string(), "45000");
        assert_eq!(RawValue::Number(1.25).to_string(), "1.25");
        assert_eq!(RawValue::Bool(true).to_string(), "true");
        assert_eq!(RawValue::Other(json!({"a": 1})).to_string(), r#"{"a":1}"#);
    }

    #[test]
    fn test_row_from_object() {
        let row: RawRow = serde_json::from_value(json!({
            "date": "2025-10-30",
            "time": "12:07:51",
            "temperaturec": 21.5,
            "humidity1": "58.2",
            "extra": "ignored"
        }))
        .unwrap();

        assert_eq!(row.date, RawValue::Text("2025-10-30".into()));
        assert_eq!(row.temperaturec, RawValue::Number(21.5));
        assert_eq!(row.temperature, RawValue::Missing);
        assert_eq!(row.humidity1, RawValue::Text("58.2".into()));
    }

    #[test]
    fn test_row_from_non_object_is_empty() {
        let row: RawRow = serde_json::from_value(json!(["2025-10-30", 21.5])).unwrap();
        assert_eq!(row, RawRow::default());
    }

    #[test]
    fn test_envelope_success() {
        let envelope = Envelope::from_json(
            r#"{"status":"SUCCESS","data":[{"date":"2025-10-30","time":"12:00:00"}]}"#,
        )
        .unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.into_rows().unwrap().len(), 1);
    }

    #[test]
    fn test_envelope_error_status() {
        let envelope =
            Envelope::from_json(r#"{"status":"ERROR","message":"quota exceeded"}"#).unwrap();
        assert!(!envelope.is_success());
        match envelope.into_rows() {
            Err(Error::EndpointStatus { status, message }) => {
                assert_eq!(status, "ERROR");
                assert_eq!(message.as_deref(), Some("quota exceeded"));
            }
            other => panic!("expected EndpointStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_envelope_success_without_data() {
        let envelope = Envelope::from_json(r#"{"status":"SUCCESS"}"#).unwrap();
        assert!(matches!(envelope.into_rows(), Err(Error::MissingData)));
    }

    #[test]
    fn test_out_of_range_number_is_infinite() {
        let value: Value = serde_json::from_str("1e400").unwrap();
        assert_eq!(RawValue::from_json(&value), RawValue::Number(f64::INFINITY));
    }

    #[test]
    fn test_envelope_with_out_of_range_number_keeps_every_row() {
        let envelope = Envelope::from_json(
            r#"{"status":"SUCCESS","data":[
                {"date":"2025-10-30","time":"12:00:00","temperaturec":21.5,"humidity":80},
                {"date":"2025-10-30","time":"12:01:00","temperaturec":1e400,"humidity":81}
            ]}"#,
        )
        .unwrap();

        let readings = crate::normalize::normalize_rows(&envelope.into_rows().unwrap());
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].temperature, 21.5);
        assert_eq!(readings[1].temperature, 0.0);
        assert_eq!(readings[1].humidity, 81.0);
    }

    #[test]
    fn test_envelope_malformed() {
        let result = Envelope::from_json("<html>Moved</html>");
        assert!(matches!(result, Err(Error::InvalidResponse(_))));
    }
}
