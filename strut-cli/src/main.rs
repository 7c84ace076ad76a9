use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strut_cli::commands::{self, helper, model, routes};

#[derive(Parser)]
#[command(name = "strut", version, about = "strut CLI - inspect HTTP bindings of RPC services")]
struct Cli {
    /// Config profile (`strut-{profile}.yaml`); `STRUT_PROFILE` takes precedence
    #[arg(long, global = true, default_value = "dev")]
    profile: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every HTTP route of a service
    Routes {
        /// Service description (YAML, or JSON by extension)
        file: PathBuf,
    },
    /// Print the binding model as JSON
    Model {
        /// Service description (YAML, or JSON by extension)
        file: PathBuf,
    },
    /// Print the matcher source bundle embedded into generated servers
    Helper,
}

fn main() {
    strut_cli::init_tracing();
    let cli = Cli::parse();

    let result = commands::settings(&cli.profile).and_then(|settings| match cli.command {
        Commands::Routes { file } => routes::run(&file, &settings),
        Commands::Model { file } => model::run(&file, &settings),
        Commands::Helper => helper::run(&settings),
    });

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
