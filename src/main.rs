use clap::Parser;
use log::Level;
use zen_typecheck::cli::{self, Cli, Commands};
use zen_typecheck::config::CheckerLimits;
use zen_typecheck::diagnostics::StderrSink;
use zen_typecheck::semantic::TypeChecker;

fn main() {
    std::process::exit(match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    });
}

fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let level = if args.verbose { Level::Debug } else { Level::Info };
    simple_logger::init_with_level(level).ok();

    match args.command {
        Commands::Check(check_args) => check_command(check_args),
    }
}

fn check_command(args: cli::CheckArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let limits = CheckerLimits::from_project_toml("project.toml")?;
    let mut root = cli::load_fixture(&args)?;

    let mut checker = TypeChecker::new(Box::new(StderrSink), limits);
    Ok(checker.check_program(&mut root))
}
