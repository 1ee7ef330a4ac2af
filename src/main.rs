use anyhow::Result;
use changeset::areas::data_dir::DataDir;
use changeset::areas::refs::CommitResolver;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "changeset",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Print the commit ID a build was made from",
    long_about = "This command reads HEAD, loose refs and packed-refs from the data directory \
    (KO_DATA_PATH by default) and prints the commit ID they point to.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short,
        long,
        help = "The data directory to read instead of KO_DATA_PATH"
    )]
    data_dir: Option<PathBuf>,
    #[arg(short, long, help = "Print the abbreviated commit ID")]
    short: bool,
    #[arg(
        short,
        long,
        help = "Print 'unknown' instead of failing when no commit ID can be resolved"
    )]
    fallback: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let resolved = match &cli.data_dir {
        Some(path) => Ok(DataDir::new(path)),
        None => DataDir::from_env(),
    }
    .and_then(|data_dir| {
        debug!(path = %data_dir.path().display(), "resolving commit ID");
        CommitResolver::new(data_dir).resolve()
    });

    let output = match resolved {
        Ok(commit_id) if cli.short => commit_id.to_short_oid(),
        resolved if cli.fallback => changeset::or_unknown(resolved),
        resolved => resolved?.to_string(),
    };

    println!("{}", output);

    Ok(())
}
