use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use gut_health_lib::{
    advice::{AdviceQuery, AdviceRequester, AdviceResponse, AdviceSite, OpenAiClient},
    config::{self, AdvisorConfig},
    home,
    journal::{self, JournalEntry},
    models::{AbdominalPain, Bloating, Diarrhea, SymptomRecord},
    predictor, rewards, tracker,
};

#[derive(Parser)]
#[command(name = "gut-health", version)]
#[command(about = "Gut health management platform")]
struct Cli {
    /// Path to the predictor artifact (defaults to ~/GutHealth/models)
    #[arg(long, global = true, env = "GUT_HEALTH_PREDICTOR")]
    predictor: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the welcome page
    Home,
    /// Log symptoms and get a gut health status
    Symptoms {
        /// None, Mild or Severe
        #[arg(long, default_value = "None")]
        bloating: Bloating,
        /// None, Mild or Severe
        #[arg(long, default_value = "None")]
        abdominal_pain: AbdominalPain,
        /// None, Occasional or Frequent
        #[arg(long, default_value = "None")]
        diarrhea: Diarrhea,
        /// Date of the entry (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print the entry as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Log a food and lifestyle journal entry
    Journal {
        /// Date of the entry (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Describe your meals for the day
        #[arg(long, default_value = "")]
        food: String,
        /// Exercise duration in minutes (0-120)
        #[arg(long, default_value_t = journal::DEFAULT_EXERCISE_MINUTES)]
        exercise: u8,
        /// Stress level (1-5)
        #[arg(long, default_value_t = journal::DEFAULT_STRESS_LEVEL)]
        stress: u8,
        /// Sleep hours (0-12)
        #[arg(long, default_value_t = journal::DEFAULT_SLEEP_HOURS)]
        sleep: u8,
    },
    /// Get a personalized treatment plan
    Treatment {
        /// Describe your current symptoms or issues
        query: String,
    },
    /// Ask the virtual doctor a question
    Consult {
        /// Ask a question about your gut health
        query: String,
    },
    /// Redeem engagement points
    Redeem {
        /// Points earned
        #[arg(long, default_value_t = 0)]
        points: u32,
    },
}

fn main() -> ExitCode {
    gut_health_lib::init_tracing();
    tracing::debug!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let cli = Cli::parse();

    let predictor_path = cli.predictor.unwrap_or_else(config::predictor_path);
    let _predictor = predictor::load_at_startup(&predictor_path);

    match run(cli.command.unwrap_or(Commands::Home)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Home => {
            println!("{}", home::welcome_text());
        }
        Commands::Symptoms {
            bloating,
            abdominal_pain,
            diarrhea,
            date,
            json,
        } => {
            let record = SymptomRecord::new(bloating, abdominal_pain, diarrhea);
            let entry = tracker::log_symptoms(date.unwrap_or_else(today), record);
            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                println!("{}", entry.summary());
            }
        }
        Commands::Journal {
            date,
            food,
            exercise,
            stress,
            sleep,
        } => {
            let entry =
                JournalEntry::new(date.unwrap_or_else(today), food, exercise, stress, sleep)?;
            println!("{}", journal::LOGGED_MESSAGE);
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Commands::Treatment { query } => ask(AdviceSite::TreatmentPlan, &query),
        Commands::Consult { query } => ask(AdviceSite::DoctorConsultation, &query),
        Commands::Redeem { points } => {
            for rule in rewards::EARNING_RULES {
                println!("- {rule}");
            }
            println!("{}", rewards::redeem_points(points));
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Run one advice request for `site`. Blank queries send nothing.
fn ask(site: AdviceSite, raw_query: &str) {
    let Some(query) = AdviceQuery::parse(raw_query) else {
        tracing::debug!(site = ?site, "Empty query, no request sent");
        return;
    };

    let response = match OpenAiClient::new(&AdvisorConfig::from_env()) {
        Ok(client) => AdviceRequester::new(client).advise(site, &query),
        Err(e) => {
            tracing::warn!(error = %e, "Cannot build advice client, using fallback");
            AdviceResponse::Fallback(site.fallback_text().to_string())
        }
    };

    match response {
        AdviceResponse::Generated(text) => {
            println!("{}", site.reply_heading());
            println!("{text}");
        }
        AdviceResponse::Fallback(text) => {
            println!("{}", site.fallback_heading());
            println!("{text}");
        }
    }
}
