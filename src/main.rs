use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use doggo_discriminator::config::Config;
use doggo_discriminator::render::{AsciiPresenter, Presenter, TextPresenter};
use doggo_discriminator::session::{LabelSet, Session, prompt_labeler};
use doggo_discriminator::sink::{JsonlSink, LabelCounts};
use doggo_discriminator::source::{DogSource, Source};

fn setup_logging(level: &str) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(env!("CARGO_PKG_NAME"))
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join(format!("{}.log", env!("CARGO_PKG_NAME")));

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let command = cli.command.clone().unwrap_or_else(Commands::default_label);
    match command {
        Commands::Label {
            name,
            email,
            output,
            overwrite,
            no_render,
        } => handle_label_command(name, email, output, overwrite, no_render, config),
        Commands::Show => handle_show_command(config),
        Commands::Summary { output } => handle_summary_command(output, config),
    }
}

fn build_presenter(source: &DogSource, config: &Config, no_render: bool) -> Box<dyn Presenter> {
    if config.render.enabled && !no_render {
        Box::new(AsciiPresenter::new(source.client().clone(), config.render.width))
    } else {
        Box::new(TextPresenter)
    }
}

fn handle_label_command(
    name: Option<String>,
    email: Option<String>,
    output: Option<PathBuf>,
    overwrite: bool,
    no_render: bool,
    config: &Config,
) -> Result<()> {
    let sink_path = output.unwrap_or_else(|| config.sink.path.clone());
    info!("Labeling session writing to {}", sink_path.display());

    let mut source = DogSource::new(&config.source).context("Failed to create dog source")?;
    let mut presenter = build_presenter(&source, config, no_render);
    let sink = JsonlSink::new(&sink_path);
    let labels = LabelSet::from_config(&config.labels).context("Invalid label configuration")?;

    let mut input = io::stdin().lock();
    let labeler =
        prompt_labeler(&mut input, &mut io::stdout(), name, email).context("Failed to set up labeler")?;

    let summary = Session::new(
        labeler,
        labels,
        &mut source,
        &sink,
        presenter.as_mut(),
        input,
        io::stdout(),
    )
    .with_overwrite(overwrite)
    .run()
    .context("Labeling session failed")?;

    println!(
        "{} {} labeled, {} skipped, saved to {}",
        "Done:".green(),
        summary.labeled,
        summary.skipped,
        sink_path.display()
    );
    Ok(())
}

fn handle_show_command(config: &Config) -> Result<()> {
    info!("Showing a random dog");
    let mut source = DogSource::new(&config.source).context("Failed to create dog source")?;
    let mut presenter = build_presenter(&source, config, false);

    let dog = source.fetch().context("Failed to fetch a dog")?;
    let mut stdout = io::stdout();
    presenter.present(&dog, &mut stdout).context("Failed to show dog")?;
    stdout.flush()?;
    Ok(())
}

fn handle_summary_command(output: Option<PathBuf>, config: &Config) -> Result<()> {
    let sink_path = output.unwrap_or_else(|| config.sink.path.clone());
    info!("Summarizing {}", sink_path.display());

    let items = JsonlSink::new(&sink_path)
        .read_all()
        .context(format!("Failed to read {}", sink_path.display()))?;
    let counts = LabelCounts::from_items(&items);

    println!(
        "{} {} item(s), {} assignment(s) in {}",
        "Summary:".green(),
        counts.items,
        counts.assignments,
        sink_path.display()
    );
    for (name, values) in &counts.by_label {
        println!("  {}", name.cyan());
        for (value, count) in values {
            println!("    {:<20} {}", value, count);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging
    let level = if cli.is_verbose() {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };
    setup_logging(level).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
