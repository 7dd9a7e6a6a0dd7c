use amountect::{
    VERSION,
    core::{config::AmountConfig, session::AmountSession},
    shell::{self, Command, ShellError},
};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "amount_shell", version = VERSION, about = "Drive an amount field from the terminal")]
struct Args {
    #[arg(short, long, default_value_t = 18, help = "Decimals of the asset")]
    decimals: u32,

    #[arg(short, long, help = "TOML file with field settings")]
    config: Option<PathBuf>,

    #[arg(short, long, default_value = "", help = "Initial display text")]
    initial: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ShellError> {
    let config = match &args.config {
        Some(path) => AmountConfig::load(path)?,
        None => AmountConfig::default(),
    };
    info!(decimals = args.decimals, ?config, "starting amount shell");

    let mut session = AmountSession::with_config(config, args.initial, args.decimals);
    let mut editor = DefaultEditor::new()?;

    println!("amount_shell {VERSION}, :help for commands");

    loop {
        let line = match editor.readline("amount> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if let Err(err) = editor.add_history_entry(line.as_str()) {
            warn!(%err, "failed to record history");
        }

        let command = match shell::parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        match shell::run_command(&mut session, &command) {
            Ok(out) => println!("{out}"),
            Err(err) => warn!(%err, "command failed"),
        }
    }

    Ok(())
}
