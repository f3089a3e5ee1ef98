mod cli;

use cli::Args;
use govdeps::prelude::*;
use std::process;

fn main() {
    // clap exits with ExitCode::InvalidArguments on its own
    let args = Args::parse_args();

    if let Err(e) = run(&args) {
        // {:#} keeps the whole cause chain on one line
        eprintln!("error: {:#}", e);
        process::exit(ExitCode::Failure.as_i32());
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.to_config()?;

    let json = if config.reads_stdin() && !config.pretty() && !config.verbose() {
        parse_dependencies()?
    } else {
        extract(&config)?
    };

    let presenter =
        PresenterFactory::create(PresenterType::from_output_path(config.output_path()));
    presenter.present(&format!("{}\n", json))?;

    Ok(())
}

fn extract(config: &ExtractConfig) -> Result<String> {
    let progress_reporter = if config.verbose() {
        StderrProgressReporter::new()
    } else {
        StderrProgressReporter::quiet()
    };
    let source = SourceFactory::create(config.input_files().to_vec());

    let mut use_case = ExtractDependenciesUseCase::new(source, progress_reporter);
    let response = use_case.execute()?;

    let formatter = FormatterFactory::create(FormatterType::from_pretty(config.pretty()));
    formatter.format(&response.dependencies)
}
