//! End-to-end export against an in-memory API.

use std::collections::HashMap;
use std::fs;

use extract_serac::client::XReportsApi;
use extract_serac::error::{Result, XReportError};
use extract_serac::export::{export_csv, export_documents};
use extract_serac::flatten::Flattener;
use extract_serac::locale::default_preference;
use extract_serac::model::{XReport, XReportSummary, XReportsPage};
use extract_serac::schema::Schema;
use tempfile::TempDir;

const REPORTS: &[&str] = &[
    r#"{
        "document_id": 101,
        "available_langs": ["de", "fr"],
        "locales": [
            {"lang": "de", "title": "Lawine"},
            {"lang": "fr", "title": "Avalanche au col", "summary": "Plaque, \"grosse\" frayeur", "place": "Col du Lac"}
        ],
        "areas": [
            {"locales": [{"lang": "it", "title": "Piemonte"}, {"lang": "fr", "title": "Piémont"}]},
            {"locales": [{"lang": "fr", "title": "Haute-Savoie"}]}
        ],
        "associations": {
            "users": [{"document_id": 5}],
            "routes": [{"document_id": 56}, {"document_id": 57}],
            "outings": [],
            "articles": [],
            "images": [],
            "waypoints": []
        },
        "event_activity": "skitouring",
        "event_type": ["avalanche"],
        "quality": "great",
        "rescue": true,
        "severity": "1d_to_3d",
        "avalanche_level": "level_3",
        "avalanche_slope": "slope_35_40",
        "gender": "male",
        "author_status": "primary_impacted",
        "autonomy": "autonomous",
        "activity_rate": "activity_rate_m2",
        "previous_injuries": "no",
        "qualification": "federal_trainer",
        "supervision": "no_supervision",
        "elevation": 2450,
        "nb_participants": 3,
        "nb_impacted": 1,
        "age": 34,
        "date": "2021-02-14",
        "author": {"name": "skieur", "user_id": 5},
        "geometry": {"version": 1, "geom": "{\"type\": \"Point\", \"coordinates\": [6.5, 45.9]}"}
    }"#,
    r#"{
        "document_id": 102,
        "available_langs": ["pt"],
        "locales": [{"lang": "pt", "title": "Queda"}],
        "areas": [],
        "associations": {"users": [], "routes": [], "outings": [{"document_id": 9}], "articles": []},
        "event_activity": "bogus_activity",
        "quality": "draft",
        "geometry": null
    }"#,
    r#"{
        "document_id": 103,
        "available_langs": ["en"],
        "locales": [{"lang": "en", "title": "Crevasse fall"}],
        "activities": ["snowshoeing"],
        "event_type": "crevasse_fall",
        "previous_injuries": "previous_injuries_3"
    }"#,
];

struct InMemoryApi {
    reports: HashMap<u64, XReport>,
    order: Vec<u64>,
    page_size: usize,
}

impl InMemoryApi {
    fn new(page_size: usize) -> Self {
        let reports: Vec<XReport> = REPORTS
            .iter()
            .map(|json| serde_json::from_str(json).expect("fixture should deserialize"))
            .collect();
        Self {
            order: reports.iter().map(|r| r.document_id).collect(),
            reports: reports.into_iter().map(|r| (r.document_id, r)).collect(),
            page_size,
        }
    }
}

impl XReportsApi for InMemoryApi {
    fn page(&self, offset: u64) -> Result<XReportsPage> {
        Ok(XReportsPage {
            total: self.order.len() as u64,
            documents: self
                .order
                .iter()
                .skip(offset as usize)
                .take(self.page_size)
                .map(|&document_id| XReportSummary { document_id })
                .collect(),
        })
    }

    fn report(&self, document_id: u64) -> Result<XReport> {
        self.reports
            .get(&document_id)
            .cloned()
            .ok_or_else(|| XReportError::api(404, format!("/xreports/{document_id}")))
    }
}

fn read_csv(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader.headers().unwrap().iter().map(String::from).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (header, rows)
}

#[test]
fn csv_export_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("xreports.csv");
    let flattener = Flattener::default();

    let written = export_csv(&InMemoryApi::new(2), &flattener, &path).unwrap();
    assert_eq!(written, 3);

    let (header, rows) = read_csv(&path);
    assert_eq!(header.len(), 45);
    assert_eq!(header[0], "Document");
    assert!(rows.iter().all(|row| row.len() == header.len()));

    let col = |name: &str| header.iter().position(|h| h == name).unwrap();

    let first = &rows[0];
    assert_eq!(first[col("Document")], "101");
    assert_eq!(first[col("Document (lien)")], "https://www.camptocamp.org/xreports/101");
    assert_eq!(first[col("Titre")], "Avalanche au col");
    assert_eq!(first[col("Activités")], "ski de randonnée");
    assert_eq!(first[col("Complétude")], "excellent");
    assert_eq!(first[col("Localisation")], "[6.5:45.9]");
    assert_eq!(first[col("Altitude")], "2450");
    assert_eq!(first[col("Régions")], "Piémont,Haute-Savoie");
    assert_eq!(first[col("Contributeur (lien)")], "https://www.camptocamp.org/users/5");
    assert_eq!(first[col("Type d'évènement")], "avalanche");
    assert_eq!(first[col("Participants associés")], "https://www.camptocamp.org/users/5");
    assert_eq!(first[col("Intervention des services de secours")], "oui");
    assert_eq!(first[col("Gravité")], "De 1 à 3 jours");
    assert_eq!(first[col("Niveau de risque d'avalanche")], "3 - marqué");
    assert_eq!(first[col("Pente de la zone de départ")], "35-40");
    assert_eq!(first[col("Sexe")], "H");
    assert_eq!(first[col("Blessures antérieures")], "non");
    assert_eq!(first[col("Qualification")], "Entraineur fédéral");
    assert_eq!(first[col("Encadrement")], "Non encadré");
    assert_eq!(first[col("Résumé")], "Plaque, \"grosse\" frayeur");
    assert_eq!(
        first[col("Itinéraires associés")],
        "https://www.camptocamp.org/routes/56,https://www.camptocamp.org/routes/57"
    );
    assert_eq!(first[col("Sorties associées")], "");

    let second = &rows[1];
    assert_eq!(second[col("Titre")], "Queda");
    assert_eq!(second[col("Activités")], "");
    assert_eq!(second[col("Localisation")], "");
    assert_eq!(second[col("Contributeur (lien)")], "");
    assert_eq!(second[col("Sorties associées")], "https://www.camptocamp.org/outings/9");

    let third = &rows[2];
    assert_eq!(third[col("Activités")], "raquettes");
    assert_eq!(third[col("Type d'évènement")], "chute en crevasse");
    assert_eq!(third[col("Blessures antérieures")], "autres blessures");
}

#[test]
fn csv_fields_are_all_quoted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");

    export_csv(&InMemoryApi::new(30), &Flattener::default(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let first_line = text.lines().next().unwrap();
    assert!(first_line.starts_with("\"Document\",\"Document (lien)\",\"Titre\""));
    assert!(text.contains("\"101\""));
}

#[test]
fn legacy_schema_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.csv");
    let flattener = Flattener {
        schema: Schema::V1,
        ..Default::default()
    };

    export_csv(&InMemoryApi::new(1), &flattener, &path).unwrap();

    let (header, rows) = read_csv(&path);
    assert_eq!(header.len(), 44);
    assert!(header.contains(&"Nombre de sorties".to_string()));
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.len() == 44));
}

#[test]
fn malformed_geometry_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never.csv");
    let mut api = InMemoryApi::new(30);
    api.reports.get_mut(&102).unwrap().geometry = Some(
        serde_json::from_str(r#"{"version": 1, "geom": "{broken"}"#).unwrap(),
    );

    let err = export_csv(&api, &Flattener::default(), &path).unwrap_err();

    assert!(matches!(err, XReportError::MalformedGeometry { document_id: 102, .. }));
    assert!(!path.exists());
}

#[test]
fn document_export_writes_one_redacted_line_per_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("xreports.jsonl");

    let written = export_documents(&InMemoryApi::new(2), &default_preference(), &path).unwrap();
    assert_eq!(written, 3);

    let text = fs::read_to_string(&path).unwrap();
    let docs: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(docs.len(), 3);
    assert!(docs.iter().all(|d| d.get("document_id").is_none()));
    assert_eq!(docs[0]["locales"][0]["title"], "Avalanche au col");
    assert_eq!(docs[0]["rescue"], "true");
    assert_eq!(docs[2]["activities"], serde_json::json!(["snowshoeing"]));
}
