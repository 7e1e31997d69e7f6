use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use aquaguardian_notice::alert::severity::SeverityLevel;
use aquaguardian_notice::analysis::groupings::{at_or_above, group_by_farm_area, severity_histogram};
use aquaguardian_notice::config::{AppConfig, DEFAULT_CONFIG_PATH};
use aquaguardian_notice::dev_mode::{DevMode, DryRunSink};
use aquaguardian_notice::ingest::aquaguardian::ApiClient;
use aquaguardian_notice::logging::{self, Component};
use aquaguardian_notice::model::ExaminationSample;
use aquaguardian_notice::notice::{NoticeBatch, NoticeSink, pick_by_ids};
use aquaguardian_notice::report;

#[derive(Parser)]
#[command(name = "aquaguardian_notice", about = "Compose and send AquaGuardian water-quality notices")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Replay examinations from a JSON file instead of calling the API
    #[arg(long, global = true)]
    fixture: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the examination table
    List,
    /// Per-farm-area summary of examinations
    Summary,
    /// Compose notices and print them as JSON without sending
    Preview(SelectArgs),
    /// Compose notices and send them to the farm areas' stakeholders
    Notify(SelectArgs),
    /// List notices already sent by this manager
    Notices,
    /// List the users following the manager's region
    Recipients,
}

#[derive(clap::Args)]
struct SelectArgs {
    /// Examination id to include; repeat to select several, in order
    #[arg(long = "exam")]
    exams: Vec<String>,

    /// Only keep examinations at or above this severity (low, moderate, high, severe)
    #[arg(long, value_parser = parse_severity)]
    min_severity: Option<SeverityLevel>,
}

fn parse_severity(name: &str) -> Result<SeverityLevel, String> {
    SeverityLevel::from_name(name)
        .ok_or_else(|| format!("unknown severity '{}' (expected low, moderate, high or severe)", name))
}

// ---------------------------------------------------------------------------
// Data sources
// ---------------------------------------------------------------------------

enum Source {
    Api(ApiClient),
    Fixture(DevMode),
}

impl Source {
    fn open(cli: &Cli, config: &AppConfig) -> Result<Self, Box<dyn Error>> {
        match &cli.fixture {
            Some(path) => {
                logging::info(Component::System, None, &format!("dev mode: replaying {}", path));
                Ok(Source::Fixture(DevMode::new(path)))
            }
            None => Ok(Source::Api(ApiClient::new(&config.api)?)),
        }
    }

    /// The manager id is only needed to ask the API; a fixture is read as is.
    fn examinations(&self, config: &AppConfig) -> Result<Vec<ExaminationSample>, Box<dyn Error>> {
        match self {
            Source::Api(client) => {
                let user_id = config.require_user_id()?;
                client.fetch_examinations_of_user(user_id).map_err(|e| {
                    logging::log_api_failure(user_id, "Fetch examinations", &e);
                    Box::new(e) as Box<dyn Error>
                })
            }
            Source::Fixture(dev) => dev.load_samples(),
        }
    }
}

/// Applies `--exam` ids and `--min-severity` to the fetched examinations.
fn select(samples: Vec<ExaminationSample>, args: &SelectArgs) -> Vec<ExaminationSample> {
    let selected = if args.exams.is_empty() {
        samples
    } else {
        let (picked, unknown) = pick_by_ids(&samples, &args.exams);
        for id in unknown {
            logging::warn(Component::Notice, Some(&id), "no such examination; skipped");
        }
        picked
    };

    match args.min_severity {
        Some(min) => at_or_above(&selected, min),
        None => selected,
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load(&cli.config)?;
    logging::init_logger(
        config.logging.min_level(),
        config.logging.file.as_deref(),
        config.logging.timestamps,
    );

    let source = Source::open(&cli, &config)?;

    match &cli.command {
        Command::List => {
            let samples = source.examinations(&config)?;
            println!("{}", report::examination_header());
            for sample in &samples {
                let row = report::ExaminationRow::from_sample(sample);
                println!("{}", report::render_examination_row(&row));
            }
        }
        Command::Summary => {
            let samples = source.examinations(&config)?;
            for summary in group_by_farm_area(&samples) {
                println!(
                    "{}\t{}\t{} exams\tworst: {}\tlatest: {}",
                    summary.name,
                    summary.farm_type,
                    summary.exam_count,
                    summary.worst_severity,
                    report::format_date_time(summary.latest_exam)
                );
            }
            for (severity, count) in severity_histogram(&samples) {
                println!("{}: {}", severity, count);
            }
        }
        Command::Preview(args) => {
            let user_id = config.require_user_id()?;
            let mut batch = NoticeBatch::new(user_id);
            batch.select(&select(source.examinations(&config)?, args));
            println!("{}", serde_json::to_string_pretty(batch.pending())?);
        }
        Command::Notify(args) => {
            let user_id = config.require_user_id()?;
            let mut batch = NoticeBatch::new(user_id);
            batch.select(&select(source.examinations(&config)?, args));

            let dry_run;
            let sink: &dyn NoticeSink = match &source {
                Source::Api(client) => client,
                Source::Fixture(_) => {
                    dry_run = DryRunSink::new();
                    &dry_run
                }
            };

            match batch.dispatch(sink) {
                Ok(sent) => println!("Send notice to area success! ({} notices)", sent),
                Err(e) => return Err(e.into()),
            }
        }
        Command::Notices => match &source {
            Source::Api(client) => {
                let user_id = config.require_user_id()?;
                let notices = client.fetch_notifications_by_manager(user_id).map_err(|e| {
                    logging::log_api_failure(user_id, "Fetch notifications", &e);
                    e
                })?;
                for notice in &notices {
                    println!("{}", report::render_notice(notice));
                }
            }
            Source::Fixture(_) => {
                logging::warn(Component::System, None, "no sent notices in dev mode");
            }
        },
        Command::Recipients => match &source {
            Source::Api(client) => {
                let region_id = config.require_region_id()?;
                let users = client.fetch_preferred_users(region_id).map_err(|e| {
                    logging::log_api_failure(region_id, "Fetch preferred users", &e);
                    e
                })?;
                println!("{}", report::RECIPIENT_HEADER);
                for (i, user) in users.iter().enumerate() {
                    println!("{}", report::render_recipient(i + 1, user));
                }
            }
            Source::Fixture(_) => {
                logging::warn(Component::System, None, "no recipients in dev mode");
            }
        },
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
