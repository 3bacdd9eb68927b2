//! French display labels for the coded fields of an x-report.
//!
//! Labels are stored per [`Category`] so that a code shared by two
//! categories (`other` is both an activity and an event type) keeps a
//! distinct label in each. [`Translations::translate`] still offers the flat,
//! category-less lookup, resolving collisions in favour of the category that
//! comes last in [`Category::ALL`].

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Boolean,
    Activity,
    Quality,
    EventType,
    Severity,
    AvalancheLevel,
    AvalancheSlope,
    Gender,
    AuthorStatus,
    Autonomy,
    ActivityRate,
    NbOutings,
    PreviousInjuries,
    Qualification,
    Supervision,
}

type Labels = &'static [(&'static str, &'static str)];

impl Category {
    /// Flat lookup precedence: later entries win.
    pub const ALL: [Category; 15] = [
        Category::Boolean,
        Category::Activity,
        Category::Quality,
        Category::EventType,
        Category::Severity,
        Category::AvalancheLevel,
        Category::AvalancheSlope,
        Category::Gender,
        Category::AuthorStatus,
        Category::Autonomy,
        Category::ActivityRate,
        Category::NbOutings,
        Category::PreviousInjuries,
        Category::Qualification,
        Category::Supervision,
    ];

    fn labels(self) -> Labels {
        match self {
            Category::Boolean => &[("true", "oui"), ("false", "non")],
            Category::Activity => &[
                ("sport_climbing", "escalade en falaise"),
                ("multipitch_climbing", "escalade en grande voie"),
                ("alpine_climbing", "rocher montagne (TA)"),
                ("ice_climbing", "cascade de glace"),
                ("skitouring", "ski de randonnée"),
                ("other", "autres activités"),
            ],
            Category::Quality => &[
                ("empty", "vide"),
                ("draft", "ébauche"),
                ("medium", "moyen"),
                ("fine", "bon"),
                ("great", "excellent"),
            ],
            Category::EventType => &[
                ("avalanche", "avalanche"),
                ("stone_ice_fall", "chute de pierre/glace/sérac"),
                ("ice_cornice_collapse", "effondrement cascade ou corniche"),
                ("person_fall", "chute d'une personne"),
                ("crevasse_fall", "chute en crevasse"),
                ("physical_failure", "défaillance physique"),
                ("blocked_person", "personne bloquée"),
                ("weather_event", "évènement météo"),
                ("safety_operation", "manœuvre de sécurité"),
                ("critical_situation", "situation complexe sans incident"),
                ("other", "autre"),
            ],
            Category::Severity => &[
                ("severity_no", "pas de blessure"),
                ("1d_to_3d", "De 1 à 3 jours"),
                ("4d_to_1m", "De 4 jours à 1 mois"),
                ("1m_to_3m", "De 1 à 3 mois"),
                ("more_than_3m", "supérieur à 3 mois"),
            ],
            Category::AvalancheLevel => &[
                ("level_1", "1 - faible"),
                ("level_2", "2 - limité"),
                ("level_3", "3 - marqué"),
                ("level_4", "4 - fort"),
                ("level_5", "5 - très fort"),
                ("level_na", "non renseigné"),
            ],
            Category::AvalancheSlope => &[
                ("slope_lt_30", "<30"),
                ("slope_30_35", "30-35"),
                ("slope_35_40", "35-40"),
                ("slope_40_45", "40-45"),
                ("slope_gt_45", ">45"),
            ],
            Category::Gender => &[("female", "F"), ("male", "H")],
            Category::AuthorStatus => &[
                ("primary_impacted", "victime principale"),
                ("secondary_impacted", "victime secondaire"),
                ("internal_witness", "témoin direct"),
                ("external_witness", "témoin extérieur"),
            ],
            Category::Autonomy => &[
                ("non_autonomous", "non autonome"),
                ("autonomous", "autonome"),
                ("expert", "expert"),
            ],
            Category::ActivityRate => &[
                ("activity_rate_y5", "5 fois par an"),
                ("activity_rate_m2", "2 fois par mois"),
                ("activity_rate_w1", "1 fois par semaine"),
            ],
            Category::NbOutings => &[],
            Category::PreviousInjuries => &[
                ("no", "non"),
                ("previous_injuries_2", "autres blessures"),
            ],
            Category::Qualification => &[
                ("federal_supervisor", "Initiateur fédéral"),
                ("federal_trainer", "Entraineur fédéral"),
                ("professional_diploma", "Diplôme professionnel"),
            ],
            Category::Supervision => &[
                ("no_supervision", "Non encadré"),
                ("federal_supervision", "Encadrement fédéral"),
                ("professional_supervision", "Encadrement professionnel"),
            ],
        }
    }

    /// Codes only older reports still carry. A current label for the same
    /// code always takes precedence.
    fn deprecated_labels(self) -> Labels {
        match self {
            Category::Activity => &[
                ("hiking", "randonnée"),
                ("ice_climbing", "cascade de glace"),
                ("mountain_biking", "VTT"),
                ("mountain_climbing", "rocher haute-montagne"),
                ("paragliding", "parapente"),
                ("rock_climbing", "escalade"),
                ("skitouring", "ski de randonnée"),
                ("slacklining", "slackline"),
                ("snowshoeing", "raquettes"),
                ("snow_ice_mixed", "neige glace mixte"),
                ("via_ferrata", "via ferrata"),
            ],
            Category::EventType => &[
                ("stone_fall", "chute de pierres"),
                ("falling_ice", "chute de glace"),
                ("roped_fall", "chute encordé"),
                ("lightning", "foudre"),
            ],
            Category::Autonomy => &[("initiator", "débrouillé")],
            Category::ActivityRate => &[
                ("activity_rate_1", "1ère fois de sa vie"),
                ("activity_rate_10", "moins d'1 fois par mois"),
                ("activity_rate_150", "au moins 3 fois par semaine"),
                ("activity_rate_20", "1 fois par mois"),
                ("activity_rate_30", "2 à 3 fois par mois"),
                ("activity_rate_5", "moins d'1 fois par an"),
                ("activity_rate_50", "1 à 2 fois par semaine"),
            ],
            Category::NbOutings => &[
                ("nb_outings_4", "de 0 à 4"),
                ("nb_outings_9", "de 5 à 9"),
                ("nb_outings_14", "de 10 à 14"),
                ("nb_outings_15", "15 et plus"),
            ],
            // TODO: previous_injuries_2 and previous_injuries_3 share a label
            // upstream; confirm the intended wording for _3 with the data owner
            // (overridable with `--previous-injuries-3-label` meanwhile).
            Category::PreviousInjuries => &[
                ("previous_injuries_2", "autres blessures"),
                ("previous_injuries_3", "autres blessures"),
            ],
            _ => &[],
        }
    }
}

/// The assembled lookup table.
#[derive(Debug, Clone)]
pub struct Translations {
    labels: HashMap<Category, HashMap<String, String>>,
}

impl Default for Translations {
    fn default() -> Self {
        Self::french()
    }
}

impl Translations {
    pub fn french() -> Self {
        let labels = Category::ALL
            .iter()
            .map(|&category| {
                let entries = category
                    .deprecated_labels()
                    .iter()
                    .chain(category.labels())
                    .map(|&(code, label)| (code.to_string(), label.to_string()))
                    .collect();
                (category, entries)
            })
            .collect();

        Self { labels }
    }

    /// Replace (or add) the label of one code.
    pub fn with_label(
        mut self,
        category: Category,
        code: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.labels
            .entry(category)
            .or_default()
            .insert(code.into(), label.into());
        self
    }

    pub fn translate_in(&self, category: Category, code: &str) -> Option<&str> {
        self.labels
            .get(&category)?
            .get(code)
            .map(String::as_str)
    }

    /// Category-less lookup. Unknown and empty codes yield `None`.
    pub fn translate(&self, code: &str) -> Option<&str> {
        Category::ALL
            .iter()
            .rev()
            .find_map(|&category| self.translate_in(category, code))
    }
}
