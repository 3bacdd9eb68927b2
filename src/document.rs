//! Redacted report documents for the legacy document-store export.
//!
//! Identity fields (document id, languages, areas, associations, quality) are
//! dropped; the single kept locale carries no language tag.

use serde::Serialize;

use crate::error::Result;
use crate::flatten::report_locale;
use crate::model::{Author, Codes, XReport, XReportLocale};

#[derive(Debug, Serialize)]
pub struct RedactedLocale<'a> {
    pub title: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub description: Option<&'a str>,
    pub place: Option<&'a str>,
    pub route_study: Option<&'a str>,
    pub conditions: Option<&'a str>,
    pub training: Option<&'a str>,
    pub motivations: Option<&'a str>,
    pub group_management: Option<&'a str>,
    pub risk: Option<&'a str>,
    pub time_management: Option<&'a str>,
    pub safety: Option<&'a str>,
    pub reduce_impact: Option<&'a str>,
    pub increase_impact: Option<&'a str>,
    pub modifications: Option<&'a str>,
    pub other_comments: Option<&'a str>,
}

impl<'a> From<&'a XReportLocale> for RedactedLocale<'a> {
    fn from(l: &'a XReportLocale) -> Self {
        Self {
            title: l.title.as_deref(),
            summary: l.summary.as_deref(),
            description: l.description.as_deref(),
            place: l.place.as_deref(),
            route_study: l.route_study.as_deref(),
            conditions: l.conditions.as_deref(),
            training: l.training.as_deref(),
            motivations: l.motivations.as_deref(),
            group_management: l.group_management.as_deref(),
            risk: l.risk.as_deref(),
            time_management: l.time_management.as_deref(),
            safety: l.safety.as_deref(),
            reduce_impact: l.reduce_impact.as_deref(),
            increase_impact: l.increase_impact.as_deref(),
            modifications: l.modifications.as_deref(),
            other_comments: l.other_comments.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RedactedReport<'a> {
    pub elevation: Option<i64>,
    pub nb_participants: Option<i64>,
    pub geometry: Option<&'a str>,
    pub age: Option<i64>,
    pub author: Option<&'a Author>,
    pub autonomy: Option<&'a str>,
    pub avalanche_slope: Option<&'a str>,
    pub activities: Vec<&'a str>,
    pub nb_outings: Option<&'a str>,
    pub gender: Option<&'a str>,
    pub nb_impacted: Option<i64>,
    pub date: Option<&'a str>,
    pub rescue: Option<&'a str>,
    pub author_status: Option<&'a str>,
    pub event_type: Option<&'a Codes>,
    pub severity: Option<&'a str>,
    pub activity_rate: Option<&'a str>,
    pub previous_injuries: Option<&'a str>,
    pub avalanche_level: Option<&'a str>,
    pub locales: Vec<RedactedLocale<'a>>,
}

pub fn redact<'a>(report: &'a XReport, preference: &[String]) -> Result<RedactedReport<'a>> {
    let locale = report_locale(report, preference)?;

    Ok(RedactedReport {
        elevation: report.elevation,
        nb_participants: report.nb_participants,
        geometry: report.geometry.as_ref().and_then(|g| g.geom.as_deref()),
        age: report.age,
        author: report.author.as_ref(),
        autonomy: report.autonomy.as_deref(),
        avalanche_slope: report.avalanche_slope.as_deref(),
        activities: report
            .event_activity
            .iter()
            .chain(&report.activities)
            .map(String::as_str)
            .collect(),
        nb_outings: report.nb_outings.as_deref(),
        gender: report.gender.as_deref(),
        nb_impacted: report.nb_impacted,
        date: report.date.as_deref(),
        rescue: report.rescue.as_deref(),
        author_status: report.author_status.as_deref(),
        event_type: report.event_type.as_ref(),
        severity: report.severity.as_deref(),
        activity_rate: report.activity_rate.as_deref(),
        previous_injuries: report.previous_injuries.as_deref(),
        avalanche_level: report.avalanche_level.as_deref(),
        locales: vec![RedactedLocale::from(locale)],
    })
}
