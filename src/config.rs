use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::debug;

use crate::client::API_URL;
use crate::flatten::{Flattener, SITE_URL};
use crate::i18n::{Category, Translations};
use crate::locale::default_preference;
use crate::schema::Schema;
use crate::sink::Format;

/// Export every camptocamp.org x-report to a CSV file.
#[derive(Parser, Debug)]
#[command(
    name = "extract-serac",
    version,
    about = "Export camptocamp.org x-reports to CSV",
    override_usage = "extract-serac -u <username> -p <password> [-o <file>]",
    disable_version_flag = true
)]
pub struct Cli {
    /// Username for authentication
    #[arg(short, long, env = "C2C_USER")]
    pub user: String,

    /// Password for authentication
    #[arg(short, long, env = "C2C_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Where to store the output file
    #[arg(short, long, default_value = "xreports.csv")]
    pub output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// CSV column layout
    #[arg(long, value_enum, default_value_t = Schema::V2)]
    pub schema: Schema,

    /// Language preference, most wanted first (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = default_preference())]
    pub langs: Vec<String>,

    /// Base URL of the camptocamp API
    #[arg(long, env = "C2C_API_URL", default_value = API_URL)]
    pub api_url: String,

    /// Base URL used to build document links
    #[arg(long, env = "C2C_SITE_URL", default_value = SITE_URL)]
    pub site_url: String,

    /// Label for the `previous_injuries_3` code, which currently shares
    /// "autres blessures" with `previous_injuries_2`
    #[arg(long = "previous-injuries-3-label")]
    pub previous_injuries_3_label: Option<String>,

    /// Show version information
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    pub fn translations(&self) -> Translations {
        let translations = Translations::french();
        match &self.previous_injuries_3_label {
            Some(label) => translations.with_label(
                Category::PreviousInjuries,
                "previous_injuries_3",
                label.as_str(),
            ),
            None => translations,
        }
    }

    pub fn flattener(&self) -> Flattener {
        Flattener {
            site_url: self.site_url.clone(),
            preference: self.langs.clone(),
            translations: self.translations(),
            schema: self.schema,
        }
    }
}

/// Everything a run needs besides the credentials.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub output: PathBuf,
    pub format: Format,
    pub preference: Vec<String>,
    pub flattener: Flattener,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
            output: cli.output.clone(),
            format: cli.format,
            preference: cli.langs.clone(),
            flattener: cli.flattener(),
        }
    }
}

/// Pick up credentials and URLs from a `.env` file when there is one.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "Loaded environment file"),
        Err(e) => debug!(error = %e, "No environment file loaded"),
    }
}
