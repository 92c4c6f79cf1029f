// World Bank indicator payload parsing
use crate::model::{CountryField, FetchError, IndicatorRow, IndicatorTable};
use serde_json::{Map, Value};

/// Parses an indicator response body.
///
/// The API answers with `[metadata, rows]`. Returns `Ok(None)` when there is
/// no usable row array (error envelope with a single element, `null` or empty
/// rows). Any other shape is an `InvalidResponse`.
pub fn parse_payload(payload: &Value) -> Result<Option<IndicatorTable>, FetchError> {
    let parts = payload
        .as_array()
        .ok_or_else(|| FetchError::InvalidResponse("expected a top-level JSON array".into()))?;

    let rows = match parts.get(1) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(rows)) if rows.is_empty() => return Ok(None),
        Some(Value::Array(rows)) => rows,
        Some(other) => {
            return Err(FetchError::InvalidResponse(format!(
                "expected an array of rows, got {}",
                other
            )));
        }
    };

    let rows = rows
        .iter()
        .map(|row| match row {
            Value::Object(fields) => parse_row(fields),
            other => Err(FetchError::InvalidResponse(format!(
                "expected a row object, got {}",
                other
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(IndicatorTable { rows }))
}

fn parse_row(fields: &Map<String, Value>) -> Result<IndicatorRow, FetchError> {
    let country = match fields.get("country") {
        None | Some(Value::Null) => CountryField::Absent,
        Some(Value::String(name)) => CountryField::Plain(name.clone()),
        Some(Value::Object(coded)) => match coded.get("value") {
            Some(Value::String(name)) => CountryField::Coded(name.clone()),
            _ => {
                return Err(FetchError::InvalidResponse(
                    "country object without a display name".into(),
                ));
            }
        },
        Some(other) => {
            return Err(FetchError::InvalidResponse(format!(
                "unexpected country field {}",
                other
            )));
        }
    };

    Ok(IndicatorRow {
        country,
        value: fields.get("value").cloned().unwrap_or(Value::Null),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_coded_countries_and_raw_values() {
        let payload = json!([
            { "page": 1, "pages": 1, "per_page": 1000, "total": 2 },
            [
                {
                    "indicator": { "id": "SP.POP.65UP.TO.ZS", "value": "Population ages 65 and above" },
                    "country": { "id": "US", "value": "United States" },
                    "countryiso3code": "USA",
                    "date": "2022",
                    "value": 17.1
                },
                {
                    "country": { "id": "CN", "value": "China" },
                    "date": "2022",
                    "value": null
                }
            ]
        ]);

        let table = parse_payload(&payload).unwrap().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].country, CountryField::Coded("United States".into()));
        assert_eq!(table.rows[0].value, json!(17.1));
        assert_eq!(table.rows[1].value, Value::Null);
    }

    #[test]
    fn plain_and_missing_countries() {
        let payload = json!([{}, [
            { "country": "Japan", "value": "12.5" },
            { "value": 3 }
        ]]);

        let table = parse_payload(&payload).unwrap().unwrap();
        assert_eq!(table.rows[0].country, CountryField::Plain("Japan".into()));
        assert_eq!(table.rows[1].country, CountryField::Absent);
        assert!(table.has_country_column());
    }

    #[test]
    fn error_envelope_and_empty_rows_are_skipped() {
        let envelope = json!([{ "message": [{ "id": "120", "key": "Invalid value" }] }]);
        assert!(parse_payload(&envelope).unwrap().is_none());
        assert!(parse_payload(&json!([{}, null])).unwrap().is_none());
        assert!(parse_payload(&json!([{}, []])).unwrap().is_none());
    }

    #[test]
    fn non_array_payload_is_rejected() {
        let err = parse_payload(&json!({ "message": "nope" })).unwrap_err();
        assert!(!err.is_recoverable());
    }

    #[test]
    fn coded_country_without_name_is_rejected() {
        let payload = json!([{}, [{ "country": { "id": "US" }, "value": 1 }]]);
        assert!(matches!(
            parse_payload(&payload),
            Err(FetchError::InvalidResponse(_))
        ));
    }
}
