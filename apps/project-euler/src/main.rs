use clap::Parser;
use project_euler::{PROBLEMS, run_problem};

#[derive(Parser)]
#[command(name = "project-euler")]
#[command(about = "Run Project Euler solutions")]
struct Cli {
    /// Run a specific problem by number
    #[arg(short, long)]
    problem: Option<u32>,

    /// Run all available problems
    #[arg(short, long)]
    all: bool,

    /// Print intermediate values and debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::WARN.into()
            }),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if cli.all {
        // Run all problems quietly for cleaner output
        for &id in PROBLEMS {
            if let Some(answer) = run_problem(id, false) {
                println!("The answer to Problem {} is: {}", id, answer);
            }
        }
    } else if let Some(id) = cli.problem {
        match run_problem(id, cli.verbose) {
            Some(answer) => println!("The answer to Problem {} is: {}", id, answer),
            None => anyhow::bail!("Problem {} not implemented", id),
        }
    } else {
        eprintln!("Usage: project-euler --problem <N> [--verbose] or --all");
        eprintln!("Available problems: {:?}", PROBLEMS);
    }

    Ok(())
}
