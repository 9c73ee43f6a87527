//! xoroshiro - command line front end for the xoroshiro128+ engine.
//!
//! Set `RUST_LOG=debug` to see seeding and checkpoint activity.

mod args;

use anyhow::{Context, Error};
use bpaf::Parser;
use std::io::{BufWriter, Write};
use xoroshiro_core_rs::{sampling, EngineCheckpoint, XoroshiroEngine};

use crate::args::{command_parser, CheckpointParams, Command, GenerateParams, OutputFormat, ResumeParams};

fn main() -> Result<(), Error> {
    env_logger::init();

    let command = command_parser().to_options().run();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let command_result = match &command {
        Command::Version => {
            println!("xoroshiro v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Generate(params) => generate(params, &mut out),
        Command::Checkpoint(params) => checkpoint(params),
        Command::Resume(params) => resume(params, &mut out),
    };

    match command_result.and_then(|_| out.flush().map_err(Error::from)) {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("Command '{}' failed: {}", command, e);
            for cause in e.chain().skip(1) {
                eprintln!("Caused by: {}", cause);
            }
            std::process::exit(1);
        }
    }
}

fn write_values<W: Write>(
    out: &mut W,
    rng: &mut XoroshiroEngine,
    count: usize,
    format: OutputFormat,
) -> Result<(), Error> {
    for _ in 0..count {
        match format {
            OutputFormat::Dec => writeln!(out, "{}", rng.next_u64())?,
            OutputFormat::Hex => writeln!(out, "{:#018x}", rng.next_u64())?,
            OutputFormat::Real => writeln!(out, "{}", sampling::unit_f64(rng))?,
            OutputFormat::Bool => writeln!(out, "{}", sampling::boolean(rng))?,
        }
    }
    Ok(())
}

fn generate<W: Write>(params: &GenerateParams, out: &mut W) -> Result<(), Error> {
    let mut rng = XoroshiroEngine::new(params.seed, params.worker);
    write_values(out, &mut rng, params.count, params.format)
}

fn checkpoint(params: &CheckpointParams) -> Result<(), Error> {
    let mut rng = XoroshiroEngine::new(params.seed, params.worker);
    for _ in 0..params.skip {
        rng.next_u64();
    }

    let json = rng.checkpoint().to_json()?;
    std::fs::write(&params.out_file, json)
        .with_context(|| format!("writing checkpoint to {}", params.out_file.display()))?;

    log::info!(
        "Saved checkpoint (seed={}, worker={}, skipped={}) to {}",
        params.seed,
        params.worker,
        params.skip,
        params.out_file.display()
    );
    Ok(())
}

fn resume<W: Write>(params: &ResumeParams, out: &mut W) -> Result<(), Error> {
    let json = std::fs::read_to_string(&params.in_file)
        .with_context(|| format!("reading checkpoint from {}", params.in_file.display()))?;
    let checkpoint = EngineCheckpoint::from_json(&json)?;
    let mut rng = XoroshiroEngine::restore(&checkpoint)?;

    write_values(out, &mut rng, params.count, params.format)
}
