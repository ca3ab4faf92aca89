// algostep: step-by-step algorithm visualizer

use std::fs::OpenOptions;
use std::io;

use algostep::config::{Cli, Config};
use algostep::input;
use algostep::navigator::Simulation;
use algostep::ui::App;
use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

fn init_logging(config: &Config) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // No ANSI colors in the log file
        .init();
    Ok(())
}

/// Print the step sequence and explanations without starting the TUI
fn dump(cli: &Cli, config: &Config) -> Result<()> {
    let Some(algorithm) = config.algorithm else {
        bail!("--dump needs an algorithm (--algorithm or default_algorithm in the config file)");
    };
    let array = cli.array.as_deref().unwrap_or_default();

    let input = input::validate(algorithm, array, cli.target.as_deref())
        .context("Invalid simulation input")?;
    let simulation = Simulation::start(&input)?;

    println!("{}", simulation.steps_json()?);
    for (n, explanation) in simulation.explanations().iter().enumerate() {
        println!("{:>4}. {}", n + 1, explanation);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli)?;
    init_logging(&config)?;
    tracing::info!(?config, "Starting algostep");

    if cli.dump {
        return dump(&cli, &config);
    }

    let mut app = App::new(&config);
    if let Some(algorithm) = config.algorithm {
        if cli.algorithm.is_some() || cli.array.is_some() {
            app.open_form(algorithm);
            if let Some(array) = &cli.array {
                app.prefill_form(array, cli.target.as_deref());
            }
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with an error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
