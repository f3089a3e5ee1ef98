use clap::Parser;
use govdeps::application::dto::ExtractConfig;
use govdeps::shared::Result;
use std::path::PathBuf;

/// Parse Go dependencies from `go version -v -m` output and print them as JSON
#[derive(Parser, Debug)]
#[command(name = "govdeps")]
#[command(version)]
#[command(
    about = "Parses Go dependencies from files or standard input and returns JSON output",
    long_about = "Parses Go dependencies from files or standard input and returns JSON output.\n\
                  Input is the output of the Go command: `go version -v -m <go-binary>`"
)]
pub struct Args {
    /// Files containing `go version -v -m` output, read in order (defaults to standard input)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Report progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Converts the arguments into a validated extraction config
    pub fn to_config(&self) -> Result<ExtractConfig> {
        let mut builder = ExtractConfig::builder()
            .input_files(self.files.clone())
            .pretty(self.pretty)
            .verbose(self.verbose);
        if let Some(output) = &self.output {
            builder = builder.output_path(output.clone());
        }
        builder.build()
    }
}
