//! `code-drill`: build a problem set from one source file.
//!
//! ```text
//! code-drill src/app.py --reorder 5 --fill-in-the-blank 5 --tuple 0:2 --seed 42
//! ```
//!
//! Writes `<name>.json` into the output directory (or prints it with
//! `--stdout`) and logs how many problems of each type were produced.

mod telemetry;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use code_drill_gen::{
    export, source, GeneratorConfig, LineTuple, ProblemSetRequest, ProblemType,
};

#[derive(Parser, Debug)]
#[command(name = "code-drill")]
#[command(about = "Generate reorder and fill-in-the-blank problems from a code file")]
struct Cli {
    #[arg(help = "Source file (.js .jsx .ts .tsx .go .py .java .html .c .cpp)")]
    file: PathBuf,
    #[arg(long, help = "Problem set name (defaults to the file stem)")]
    name: Option<String>,
    #[arg(long, help = "Number of reorder problems")]
    reorder: Option<i64>,
    #[arg(long, help = "Number of fill-in-the-blank problems")]
    fill_in_the_blank: Option<i64>,
    #[arg(long, help = "Number of multiple-choice problems (no generator yet, yields none)")]
    multiple_choice: Option<i64>,
    #[arg(
        long = "tuple",
        value_parser = parse_line_tuple,
        help = "Interchangeable line range START:END (zero-based, inclusive); repeatable"
    )]
    tuples: Vec<LineTuple>,
    #[arg(long, help = "RNG seed for a reproducible set (overrides the config)")]
    seed: Option<u64>,
    #[arg(long, help = "TOML generator config")]
    config: Option<PathBuf>,
    #[arg(long, help = "Output directory (overrides the config)")]
    out_dir: Option<PathBuf>,
    #[arg(long, help = "Print the set to stdout instead of writing a file", default_value_t = false)]
    stdout: bool,
}

fn parse_line_tuple(s: &str) -> Result<LineTuple, String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got '{s}'"))?;
    let start = start.trim().parse::<usize>().map_err(|e| format!("bad start '{start}': {e}"))?;
    let end = end.trim().parse::<usize>().map_err(|e| format!("bad end '{end}': {e}"))?;
    Ok(LineTuple::new(start, end))
}

fn run(cli: Cli) -> code_drill_gen::Result<()> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    let code = source::read_source(&cli.file)?;
    let name = cli.name.clone().unwrap_or_else(|| {
        cli.file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let mut request = ProblemSetRequest::new(code, name).with_line_tuples(cli.tuples.clone());
    for (problem_type, count) in [
        (ProblemType::Reorder, cli.reorder),
        (ProblemType::MultipleChoice, cli.multiple_choice),
        (ProblemType::FillInTheBlank, cli.fill_in_the_blank),
    ] {
        if let Some(count) = count {
            request = request.with_count(problem_type, count);
        }
    }
    request.rng_seed = cli.seed.or(config.rng_seed);
    request.blank_scale = config.blank_scale;

    let set = code_drill_gen::generate_problem_set(&request)?;
    info!(summary = %export::summary(&set), "problem set ready");

    if cli.stdout {
        println!("{}", export::to_json(&set)?);
    } else {
        let dir = cli.out_dir.clone().unwrap_or(config.output_dir);
        std::fs::create_dir_all(&dir)?;
        let path = export::write_problem_set(&set, &dir)?;
        println!("{}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    telemetry::init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "generation failed");
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
