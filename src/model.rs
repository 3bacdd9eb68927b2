//! Wire types for the camptocamp x-reports endpoints.
//!
//! Everything the API may omit is either an `Option` or a collection that
//! defaults to empty, so a sparse report deserializes without error. Coded
//! fields stay raw strings: translating them is the flattener's job.

use serde::{Deserialize, Deserializer, Serialize};

/// `null` and a missing key both become the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Coded single-value fields: strings pass through, booleans and numbers
/// become their token (`true`, `false`, `3`), anything else is treated as
/// absent.
fn lenient_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Counts and elevations: integers pass through, floats are rounded and
/// numeric strings are parsed. Anything else is treated as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// A coded field the API sends either as one code or as a list of codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Codes {
    One(String),
    Many(Vec<String>),
}

impl Codes {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Codes::One(code) => std::slice::from_ref(code),
            Codes::Many(codes) => codes,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct XReportLocale {
    pub lang: String,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub place: Option<String>,
    pub route_study: Option<String>,
    pub conditions: Option<String>,
    pub training: Option<String>,
    pub motivations: Option<String>,
    pub group_management: Option<String>,
    pub risk: Option<String>,
    pub time_management: Option<String>,
    pub safety: Option<String>,
    pub reduce_impact: Option<String>,
    pub increase_impact: Option<String>,
    pub modifications: Option<String>,
    pub other_comments: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub version: Option<i64>,
    /// Serialized GeoJSON, e.g. `{"type":"Point","coordinates":[6.5,45.9]}`.
    pub geom: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AreaLocale {
    pub lang: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Area {
    #[serde(default, deserialize_with = "null_as_default")]
    pub locales: Vec<AreaLocale>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: Option<String>,
    #[serde(default)]
    pub user_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Association {
    pub document_id: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Associations {
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<Association>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub routes: Vec<Association>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub outings: Vec<Association>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<Association>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Association>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub waypoints: Vec<Association>,
}

/// A fully detailed x-report as returned by `GET /xreports/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct XReport {
    pub document_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_langs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locales: Vec<XReportLocale>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub areas: Vec<Area>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub associations: Associations,

    /// Current API: a single activity code.
    #[serde(default, deserialize_with = "lenient_code")]
    pub event_activity: Option<String>,
    /// Legacy API: a list of activity codes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: Vec<String>,
    pub event_type: Option<Codes>,

    #[serde(default, deserialize_with = "lenient_code")]
    pub quality: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub rescue: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub avalanche_level: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub avalanche_slope: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub author_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub autonomy: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub activity_rate: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub nb_outings: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub previous_injuries: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub qualification: Option<String>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub supervision: Option<String>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub elevation: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub nb_participants: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub nb_impacted: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub age: Option<i64>,
    pub date: Option<String>,

    pub author: Option<Author>,
    pub geometry: Option<Geometry>,
}

/// One entry of the listing endpoint. Only the id is needed to fetch details.
#[derive(Debug, Clone, Deserialize)]
pub struct XReportSummary {
    pub document_id: u64,
}

/// One page of `GET /xreports?offset=N`.
#[derive(Debug, Clone, Deserialize)]
pub struct XReportsPage {
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<XReportSummary>,
}
