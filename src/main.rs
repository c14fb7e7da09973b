use std::path::PathBuf;

use clap::Parser;

use searchdesk::shell::repl::Repl;

/// In-memory inverted-index search over organizations, tickets and users.
#[derive(Parser, Debug)]
#[command(name = "searchdesk")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing organizations.json, tickets.json and users.json.
    /// When omitted, `load-database` uses the bundled datasets.
    #[arg(short, long, env = "SEARCHDESK_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut repl = Repl::new(args.data_dir)?;
    repl.run()?;
    Ok(())
}
