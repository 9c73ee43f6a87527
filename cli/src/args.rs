use bpaf::*;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Dec,
    Hex,
    Real,
    Bool,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "dec" => Ok(OutputFormat::Dec),
            "hex" => Ok(OutputFormat::Hex),
            "real" => Ok(OutputFormat::Real),
            "bool" => Ok(OutputFormat::Bool),
            _ => Err("Invalid format; expected 'dec', 'hex', 'real', or 'bool'"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub seed: u64,
    pub worker: u64,
    pub count: usize,
    pub format: OutputFormat,
}

#[derive(Debug, Clone)]
pub struct CheckpointParams {
    pub seed: u64,
    pub worker: u64,
    pub skip: usize,
    pub out_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ResumeParams {
    pub in_file: PathBuf,
    pub count: usize,
    pub format: OutputFormat,
}

#[derive(Debug, Clone)]
pub enum Command {
    Version,
    Generate(GenerateParams),
    Checkpoint(CheckpointParams),
    Resume(ResumeParams),
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Command::Version => "version",
            Command::Generate(_) => "generate",
            Command::Checkpoint(_) => "checkpoint",
            Command::Resume(_) => "resume",
        };
        write!(f, "{}", name)
    }
}

fn seed_parser() -> impl Parser<u64> {
    long("seed")
        .short('s')
        .argument::<u64>("SEED")
        .help("Seed shared by all workers")
        .fallback(42)
}

fn worker_parser() -> impl Parser<u64> {
    long("worker")
        .short('w')
        .argument::<u64>("WORKER")
        .help("Worker index; selects the jumped substream")
        .fallback(0)
}

fn count_parser() -> impl Parser<usize> {
    long("count")
        .short('n')
        .argument::<usize>("COUNT")
        .help("Number of values to print")
        .fallback(10)
}

fn format_parser() -> impl Parser<OutputFormat> {
    long("format")
        .short('f')
        .argument::<OutputFormat>("FORMAT")
        .help("Output format: dec, hex, real, or bool")
        .fallback(OutputFormat::Dec)
}

fn generate_parser() -> impl Parser<GenerateParams> {
    let seed = seed_parser();
    let worker = worker_parser();
    let count = count_parser();
    let format = format_parser();
    construct!(GenerateParams {
        seed,
        worker,
        count,
        format
    })
}

fn checkpoint_parser() -> impl Parser<CheckpointParams> {
    let seed = seed_parser();
    let worker = worker_parser();
    let skip = long("skip")
        .short('k')
        .argument::<usize>("SKIP")
        .help("Outputs to discard before saving")
        .fallback(0);
    let out_file = long("out")
        .short('o')
        .argument::<PathBuf>("OUT_FILE")
        .help("Path to write the JSON checkpoint");
    construct!(CheckpointParams {
        seed,
        worker,
        skip,
        out_file
    })
}

fn resume_parser() -> impl Parser<ResumeParams> {
    let in_file = long("in")
        .short('i')
        .argument::<PathBuf>("IN_FILE")
        .help("Path to a JSON checkpoint");
    let count = count_parser();
    let format = format_parser();
    construct!(ResumeParams {
        in_file,
        count,
        format
    })
}

pub(crate) fn command_parser() -> impl Parser<Command> {
    let version = pure(Command::Version)
        .to_options()
        .command("version")
        .help("Display version information and exit");

    let generate = construct!(Command::Generate(generate_parser()))
        .to_options()
        .command("generate")
        .help("Print outputs for a seed and worker");

    let checkpoint = construct!(Command::Checkpoint(checkpoint_parser()))
        .to_options()
        .command("checkpoint")
        .help("Save generator state after skipping outputs");

    let resume = construct!(Command::Resume(resume_parser()))
        .to_options()
        .command("resume")
        .help("Continue printing outputs from a checkpoint");

    construct!([version, generate, checkpoint, resume])
}
