use anyhow::Context;
use clap::{Parser, ValueEnum};
use jyotish::report::export::render;
use jyotish::{save_report, BirthData, Gender, ReportFormat, ReportGenerator, ReportType};
use jyotish_config::ReportSettings;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a gender-aware Vedic astrology report")]
struct Args {
    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Local birth time, HH:MM or HH:MM:SS.
    #[arg(long)]
    time: String,

    /// Birth place.
    #[arg(long)]
    place: String,

    /// male, female, or anything else for the inclusive branch.
    #[arg(long, default_value = "other")]
    gender: String,

    /// personality, compatibility, career, health, spirituality, marriage or full_reading.
    #[arg(long, default_value = "full_reading")]
    report_type: String,

    /// Output format (default: from config, else json).
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Seed for reproducible positions and id suffix.
    #[arg(long)]
    seed: Option<u64>,

    /// Save the report to the output directory instead of printing it.
    #[arg(long)]
    save: bool,

    /// Output directory override for --save.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Config file (default: configs/jyotish.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Settings after applying command-line overrides to the config file.
#[derive(Debug, Clone, PartialEq)]
struct Resolved {
    format: ReportFormat,
    seed: Option<u64>,
    output_dir: PathBuf,
}

/// Flags win over config values; config fills whatever was not given.
fn resolve(args: &Args, settings: ReportSettings) -> Resolved {
    Resolved {
        format: args.format.map(ReportFormat::from).unwrap_or(settings.format),
        seed: args.seed.or(settings.seed),
        output_dir: args.out_dir.clone().unwrap_or(settings.output_dir),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = jyotish_config::load_report_settings(args.config.as_deref())?;
    let Resolved { format, seed, output_dir } = resolve(&args, settings);

    let birth = BirthData::parse(&args.date, &args.time, &args.place, &args.gender)
        .context("Invalid birth data")?;
    if birth.gender == Gender::Other && !args.gender.eq_ignore_ascii_case("other") {
        log::debug!("Gender '{}' uses the inclusive analysis branch", args.gender);
    }

    let report_type: ReportType = match args.report_type.parse() {
        Ok(t) => t,
        Err(never) => match never {},
    };
    if report_type == ReportType::Unrecognized {
        log::warn!(
            "Unknown report type '{}', generating a generic report",
            args.report_type
        );
    }

    let generator = ReportGenerator::new();
    let report = match seed {
        Some(seed) => generator.generate_report_seeded(report_type, &birth, seed),
        None => generator.generate_report(report_type, &birth),
    };
    log::info!("Generated {} ({})", report.id, report.report_type);

    if args.save {
        let path = save_report(&report, &output_dir, format)?;
        println!("{}", path.display());
    } else {
        println!("{}", render(&report, format)?);
    }
    Ok(())
}
