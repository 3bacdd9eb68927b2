//! Output column layouts and their French header labels.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Document,
    DocumentUrl,
    Title,
    Activities,
    Quality,
    Geometry,
    Elevation,
    Areas,
    Author,
    AuthorUrl,
    Date,
    EventType,
    NbParticipants,
    AssociatedUsers,
    NbImpacted,
    Rescue,
    Severity,
    AvalancheLevel,
    AvalancheSlope,
    Age,
    Gender,
    AuthorStatus,
    Autonomy,
    ActivityRate,
    NbOutings,
    PreviousInjuries,
    Qualification,
    Supervision,
    Summary,
    Description,
    Place,
    RouteStudy,
    Conditions,
    Training,
    Motivations,
    GroupManagement,
    Risk,
    TimeManagement,
    Safety,
    ReduceImpact,
    IncreaseImpact,
    Modifications,
    OtherComments,
    AssociatedRoutes,
    AssociatedOutings,
    AssociatedArticles,
}

impl Column {
    pub fn label(self) -> &'static str {
        match self {
            Column::Document => "Document",
            Column::DocumentUrl => "Document (lien)",
            Column::Title => "Titre",
            Column::Activities => "Activités",
            Column::Quality => "Complétude",
            Column::Geometry => "Localisation",
            Column::Elevation => "Altitude",
            Column::Areas => "Régions",
            Column::Author => "Contributeur",
            Column::AuthorUrl => "Contributeur (lien)",
            Column::Date => "Date",
            Column::EventType => "Type d'évènement",
            Column::NbParticipants => "Nombre de participants",
            Column::AssociatedUsers => "Participants associés",
            Column::NbImpacted => "Nombre de personnes touchées",
            Column::Rescue => "Intervention des services de secours",
            Column::Severity => "Gravité",
            Column::AvalancheLevel => "Niveau de risque d'avalanche",
            Column::AvalancheSlope => "Pente de la zone de départ",
            Column::Age => "Âge",
            Column::Gender => "Sexe",
            Column::AuthorStatus => "Implication dans la situation",
            Column::Autonomy => "Niveau de pratique",
            Column::ActivityRate => "Fréquence de pratique dans l'activité",
            Column::NbOutings => "Nombre de sorties",
            Column::PreviousInjuries => "Blessures antérieures",
            Column::Qualification => "Qualification",
            Column::Supervision => "Encadrement",
            Column::Summary => "Résumé",
            Column::Description => "Description",
            Column::Place => "Lieu",
            Column::RouteStudy => "Étude de l'itinéraire",
            Column::Conditions => "Conditions",
            Column::Training => "Préparation physique et niveau technique",
            Column::Motivations => "Motivations",
            Column::GroupManagement => "Gestion du groupe",
            Column::Risk => "Niveau de l'attention et évaluation des risques",
            Column::TimeManagement => "Gestion de l'horaire",
            Column::Safety => "Mesures et techniques de sécurité mises en oeuvre",
            Column::ReduceImpact => "Éléments ayant atténué les conséquences de l'évènement",
            Column::IncreaseImpact => "Éléments ayant aggravé les conséquences de l'évènement",
            Column::Modifications => "Conséquences sur les pratiques",
            Column::OtherComments => "Conséquences physiques et autres commentaires",
            Column::AssociatedRoutes => "Itinéraires associés",
            Column::AssociatedOutings => "Sorties associées",
            Column::AssociatedArticles => "Articles associés",
        }
    }
}

/// Layout revision of the CSV export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Schema {
    /// Older exports: outing count, no qualification or supervision.
    V1,
    /// Current exports.
    #[default]
    V2,
}

const V1: &[Column] = &[
    Column::Document,
    Column::DocumentUrl,
    Column::Title,
    Column::Activities,
    Column::Quality,
    Column::Geometry,
    Column::Elevation,
    Column::Areas,
    Column::Author,
    Column::AuthorUrl,
    Column::Date,
    Column::EventType,
    Column::NbParticipants,
    Column::AssociatedUsers,
    Column::NbImpacted,
    Column::Rescue,
    Column::Severity,
    Column::AvalancheLevel,
    Column::AvalancheSlope,
    Column::Age,
    Column::Gender,
    Column::AuthorStatus,
    Column::Autonomy,
    Column::ActivityRate,
    Column::NbOutings,
    Column::PreviousInjuries,
    Column::Summary,
    Column::Description,
    Column::Place,
    Column::RouteStudy,
    Column::Conditions,
    Column::Training,
    Column::Motivations,
    Column::GroupManagement,
    Column::Risk,
    Column::TimeManagement,
    Column::Safety,
    Column::ReduceImpact,
    Column::IncreaseImpact,
    Column::Modifications,
    Column::OtherComments,
    Column::AssociatedRoutes,
    Column::AssociatedOutings,
    Column::AssociatedArticles,
];

const V2: &[Column] = &[
    Column::Document,
    Column::DocumentUrl,
    Column::Title,
    Column::Activities,
    Column::Quality,
    Column::Geometry,
    Column::Elevation,
    Column::Areas,
    Column::Author,
    Column::AuthorUrl,
    Column::Date,
    Column::EventType,
    Column::NbParticipants,
    Column::AssociatedUsers,
    Column::NbImpacted,
    Column::Rescue,
    Column::Severity,
    Column::AvalancheLevel,
    Column::AvalancheSlope,
    Column::Age,
    Column::Gender,
    Column::AuthorStatus,
    Column::Autonomy,
    Column::ActivityRate,
    Column::PreviousInjuries,
    Column::Qualification,
    Column::Supervision,
    Column::Summary,
    Column::Description,
    Column::Place,
    Column::RouteStudy,
    Column::Conditions,
    Column::Training,
    Column::Motivations,
    Column::GroupManagement,
    Column::Risk,
    Column::TimeManagement,
    Column::Safety,
    Column::ReduceImpact,
    Column::IncreaseImpact,
    Column::Modifications,
    Column::OtherComments,
    Column::AssociatedRoutes,
    Column::AssociatedOutings,
    Column::AssociatedArticles,
];

impl Schema {
    pub fn columns(self) -> &'static [Column] {
        match self {
            Schema::V1 => V1,
            Schema::V2 => V2,
        }
    }

    pub fn header(self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.label()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_counts() {
        assert_eq!(Schema::V1.header().len(), 44);
        assert_eq!(Schema::V2.header().len(), 45);
    }

    #[test]
    fn v2_swaps_outings_for_qualification_and_supervision() {
        let v1 = Schema::V1.columns();
        let v2 = Schema::V2.columns();
        assert!(v1.contains(&Column::NbOutings));
        assert!(!v2.contains(&Column::NbOutings));
        assert!(v2.contains(&Column::Qualification));
        assert!(v2.contains(&Column::Supervision));
        assert_eq!(v1[..24], v2[..24]);
        assert_eq!(v1[26..], v2[27..]);
    }

    #[test]
    fn header_edges() {
        let header = Schema::V2.header();
        assert_eq!(header[0], "Document");
        assert_eq!(header[26], "Encadrement");
        assert_eq!(header.last(), Some(&"Articles associés"));
    }
}
