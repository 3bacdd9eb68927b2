use serde_json::Value;

use crate::error::{Result, XReportError};
use crate::model::Geometry;

/// Render the coordinates of a report's GeoJSON payload as `[x:y]`.
///
/// Absent geometry (or an empty `geom`) is not an error and renders empty. A
/// payload that is present but unreadable is.
pub fn render(document_id: u64, geometry: Option<&Geometry>) -> Result<String> {
    let Some(geom) = geometry
        .and_then(|g| g.geom.as_deref())
        .filter(|g| !g.is_empty())
    else {
        return Ok(String::new());
    };

    let payload: Value = serde_json::from_str(geom)
        .map_err(|e| XReportError::malformed_geometry(document_id, e))?;

    let coordinates = payload
        .get("coordinates")
        .and_then(Value::as_array)
        .ok_or_else(|| XReportError::malformed_geometry(document_id, "no coordinates array"))?;

    let parts = coordinates
        .iter()
        .map(|c| {
            coordinate(c).ok_or_else(|| {
                XReportError::malformed_geometry(document_id, format!("unexpected coordinate {c}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("[{}]", parts.join(":")))
}

/// A bare number, or a position nested one level down (line strings).
fn coordinate(value: &Value) -> Option<String> {
    match value {
        Value::Number(_) => number(value),
        Value::Array(items) => items
            .iter()
            .map(coordinate)
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(",")),
        _ => None,
    }
}

/// Integral values print without a fractional part: `45.0` renders `45`.
fn number(value: &Value) -> Option<String> {
    if let Some(i) = value.as_i64() {
        return Some(i.to_string());
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f.abs() < 1e15 {
        Some((f as i64).to_string())
    } else {
        Some(f.to_string())
    }
}
