//! One detailed x-report in, one display row out.

use crate::error::{Result, XReportError};
use crate::geometry;
use crate::i18n::{Category, Translations};
use crate::locale::{default_preference, select_locale};
use crate::model::{Area, Association, Codes, XReport, XReportLocale};
use crate::schema::{Column, Schema};

pub const SITE_URL: &str = "https://www.camptocamp.org";

/// Join non-empty values with `,`.
pub fn join<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter(|v| !v.as_ref().is_empty())
        .fold(String::new(), |mut acc, v| {
            if !acc.is_empty() {
                acc.push(',');
            }
            acc.push_str(v.as_ref());
            acc
        })
}

/// The locale a report is displayed in.
///
/// Selection runs against `available_langs` first. If that yields a language
/// with no matching locale entry (or the list is empty) it runs again against
/// the locales actually present.
pub fn report_locale<'r>(
    report: &'r XReport,
    preference: &[String],
) -> Result<&'r XReportLocale> {
    let by_lang = |lang: &str| report.locales.iter().find(|l| l.lang == lang);

    if let Some(locale) = select_locale(&report.available_langs, preference).and_then(by_lang) {
        return Ok(locale);
    }

    let present: Vec<&str> = report.locales.iter().map(|l| l.lang.as_str()).collect();
    select_locale(&present, preference)
        .and_then(by_lang)
        .ok_or(XReportError::NoLocaleAvailable {
            document_id: report.document_id,
        })
}

fn area_title<'a>(area: &'a Area, preference: &[String]) -> Option<&'a str> {
    let langs: Vec<&str> = area.locales.iter().map(|l| l.lang.as_str()).collect();
    let lang = select_locale(&langs, preference)?;
    area.locales
        .iter()
        .find(|l| l.lang == lang)
        .and_then(|l| l.title.as_deref())
}

fn number(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct Flattener {
    pub site_url: String,
    pub preference: Vec<String>,
    pub translations: Translations,
    pub schema: Schema,
}

impl Default for Flattener {
    fn default() -> Self {
        Self {
            site_url: SITE_URL.to_string(),
            preference: default_preference(),
            translations: Translations::default(),
            schema: Schema::default(),
        }
    }
}

impl Flattener {
    pub fn header(&self) -> Vec<&'static str> {
        self.schema.header()
    }

    /// Fails only on a report without any locale or with an unreadable
    /// geometry payload. Every other missing value becomes an empty cell.
    pub fn flatten(&self, report: &XReport) -> Result<Vec<String>> {
        let locale = report_locale(report, &self.preference)?;
        let geometry = geometry::render(report.document_id, report.geometry.as_ref())?;

        Ok(self
            .schema
            .columns()
            .iter()
            .map(|&column| self.cell(column, report, locale, &geometry))
            .collect())
    }

    fn url(&self, kind: &str, id: u64) -> String {
        format!("{}/{kind}/{id}", self.site_url.trim_end_matches('/'))
    }

    fn associated(&self, items: &[Association], kind: &str) -> String {
        join(items.iter().map(|a| self.url(kind, a.document_id)))
    }

    fn code(&self, category: Category, code: &Option<String>) -> String {
        code.as_deref()
            .and_then(|c| self.translations.translate_in(category, c))
            .unwrap_or_default()
            .to_string()
    }

    fn codes<'a>(
        &self,
        category: Category,
        codes: impl IntoIterator<Item = &'a String>,
    ) -> String {
        join(
            codes
                .into_iter()
                .filter_map(|c| self.translations.translate_in(category, c)),
        )
    }

    fn cell(
        &self,
        column: Column,
        report: &XReport,
        locale: &XReportLocale,
        geometry: &str,
    ) -> String {
        match column {
            Column::Document => report.document_id.to_string(),
            Column::DocumentUrl => self.url("xreports", report.document_id),
            Column::Title => text(&locale.title),
            Column::Activities => self.codes(
                Category::Activity,
                report.event_activity.iter().chain(&report.activities),
            ),
            Column::Quality => self.code(Category::Quality, &report.quality),
            Column::Geometry => geometry.to_string(),
            Column::Elevation => number(report.elevation),
            Column::Areas => join(
                report
                    .areas
                    .iter()
                    .filter_map(|area| area_title(area, &self.preference)),
            ),
            Column::Author => report
                .author
                .as_ref()
                .and_then(|a| a.name.clone())
                .unwrap_or_default(),
            Column::AuthorUrl => report
                .author
                .as_ref()
                .and_then(|a| a.user_id)
                .map(|id| self.url("users", id))
                .unwrap_or_default(),
            Column::Date => text(&report.date),
            Column::EventType => self.codes(
                Category::EventType,
                report.event_type.as_ref().map(Codes::as_slice).unwrap_or_default(),
            ),
            Column::NbParticipants => number(report.nb_participants),
            Column::AssociatedUsers => self.associated(&report.associations.users, "users"),
            Column::NbImpacted => number(report.nb_impacted),
            Column::Rescue => self.code(Category::Boolean, &report.rescue),
            Column::Severity => self.code(Category::Severity, &report.severity),
            Column::AvalancheLevel => self.code(Category::AvalancheLevel, &report.avalanche_level),
            Column::AvalancheSlope => self.code(Category::AvalancheSlope, &report.avalanche_slope),
            Column::Age => number(report.age),
            Column::Gender => self.code(Category::Gender, &report.gender),
            Column::AuthorStatus => self.code(Category::AuthorStatus, &report.author_status),
            Column::Autonomy => self.code(Category::Autonomy, &report.autonomy),
            Column::ActivityRate => self.code(Category::ActivityRate, &report.activity_rate),
            Column::NbOutings => self.code(Category::NbOutings, &report.nb_outings),
            Column::PreviousInjuries => {
                self.code(Category::PreviousInjuries, &report.previous_injuries)
            }
            Column::Qualification => self.code(Category::Qualification, &report.qualification),
            Column::Supervision => self.code(Category::Supervision, &report.supervision),
            Column::Summary => text(&locale.summary),
            Column::Description => text(&locale.description),
            Column::Place => text(&locale.place),
            Column::RouteStudy => text(&locale.route_study),
            Column::Conditions => text(&locale.conditions),
            Column::Training => text(&locale.training),
            Column::Motivations => text(&locale.motivations),
            Column::GroupManagement => text(&locale.group_management),
            Column::Risk => text(&locale.risk),
            Column::TimeManagement => text(&locale.time_management),
            Column::Safety => text(&locale.safety),
            Column::ReduceImpact => text(&locale.reduce_impact),
            Column::IncreaseImpact => text(&locale.increase_impact),
            Column::Modifications => text(&locale.modifications),
            Column::OtherComments => text(&locale.other_comments),
            Column::AssociatedRoutes => self.associated(&report.associations.routes, "routes"),
            Column::AssociatedOutings => self.associated(&report.associations.outings, "outings"),
            Column::AssociatedArticles => {
                self.associated(&report.associations.articles, "articles")
            }
        }
    }
}
