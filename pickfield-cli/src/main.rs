mod args;
mod demo;
mod error;
mod terminal;

use std::fs::{self, File};
use std::path::Path;

use clap::Parser;
use log::info;
use pickfield::rank::TieredRanker;
use pickfield::{
    Binding, Color, DropdownField, FieldConfig, FuzzyRanker, MultiSelect, PrefillPolicy, Ranker,
};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::args::{Args, Command};
use crate::demo::Widget;
use crate::error::CliError;

const SAMPLE_OPTIONS: &[&str] = &[
    "Amsterdam",
    "Athens",
    "Berlin",
    "Bern",
    "Brussels",
    "Copenhagen",
    "Dublin",
    "Helsinki",
    "Lisbon",
    "London",
    "Madrid",
    "New York",
    "Oslo",
    "Paris",
    "Prague",
    "Rome",
    "St. Petersburg",
    "Stockholm",
    "Sydney",
    "Vienna",
    "Warsaw",
];

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let args = Args::parse();

    let log_file = File::create(&args.log_file)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let options = match &args.options {
        Some(path) => load_options(path)?,
        None => SAMPLE_OPTIONS.iter().map(|s| s.to_string()).collect(),
    };
    let config = load_config(&args)?;
    info!("{} options, config {:?}", options.len(), config);

    match &args.command {
        Command::Rank { query } => {
            print_ranking(query, &options, args.fuzzy);
            Ok(())
        }
        Command::Single => {
            let text = Binding::new(args.prefill.first().cloned().unwrap_or_default());
            let field = DropdownField::new(text, Binding::new(false), options, config)?;
            let field = if args.fuzzy {
                field.with_ranker(FuzzyRanker)
            } else {
                field
            };
            run_demo(Widget::Single(field))
        }
        Command::Multi => {
            let selected = Binding::new(args.prefill.clone());
            let multi = MultiSelect::new(Binding::new(false), selected, options, config)?;
            let multi = if args.fuzzy {
                multi.with_ranker(FuzzyRanker)
            } else {
                multi
            };
            run_demo(Widget::Multi(multi))
        }
    }
}

fn run_demo(mut widget: Widget) -> Result<(), CliError> {
    demo::run(&mut widget)?;
    println!("{}", widget.summary());
    Ok(())
}

/// Read one option per line, skipping blank lines.
fn load_options(path: &Path) -> Result<Vec<String>, CliError> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Config file first, then command-line flags on top.
fn load_config(args: &Args) -> Result<FieldConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_reader(File::open(path)?)?,
        None => {
            // Default text color is meant for light backgrounds
            let mut config = FieldConfig::new("Search...");
            config.palette.text = Color::rgb(220, 220, 220);
            config
        }
    };

    if args.add_new {
        config = config.allow_add_new(true);
    }
    if let Some(max) = args.max {
        config = config.max_selections(max);
    }
    if args.keep_prefill {
        config = config.prefill(PrefillPolicy::Keep);
    }
    Ok(config)
}

fn print_ranking(query: &str, options: &[String], fuzzy: bool) {
    if fuzzy {
        for (i, option) in FuzzyRanker.rank(query, options).iter().enumerate() {
            println!("{:>3}. {}", i + 1, option);
        }
        return;
    }

    if query.trim().is_empty() {
        for (i, option) in options.iter().enumerate() {
            println!("{:>3}. {}", i + 1, option);
        }
        return;
    }

    for (i, (option, tier)) in TieredRanker
        .rank_with_tiers(query, options)
        .iter()
        .enumerate()
    {
        println!("{:>3}. {} ({:?})", i + 1, option, tier);
    }
}
