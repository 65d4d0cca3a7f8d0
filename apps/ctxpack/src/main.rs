use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use ctxpack_generate::{AggregateError, Config, DocsConfig, GenerateResult};
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "ctxpack")]
#[command(about = "Bundle a source file and its imports into versioned context documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Aggregate a JS/TS file with its direct imports and record a snapshot
    Generate(Config),
    /// Print the snapshot index
    Docs(DocsConfig),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Generate(cfg) => {
            info!("Generating report for {}", cfg.file.display());
            let print_report = cfg.stdout || cfg.dry_run;

            let result = match ctxpack_generate::run_generate(cfg) {
                Ok(result) => result,
                Err(e) => {
                    if let Some(AggregateError::UnsupportedRoot(file)) =
                        e.downcast_ref::<AggregateError>()
                    {
                        ctxpack_generate::print_unsupported_root(&mut stdout, file)?;
                        std::process::exit(1);
                    }
                    return Err(e);
                }
            };

            // stdout carries only the report bytes when it is printed
            if print_report {
                ctxpack_generate::print_report(&mut stdout, &result.report)?;
                let mut stderr = BufWriter::new(std::io::stderr());
                print_summary(&mut stderr, &result, start)
            } else {
                print_summary(&mut stdout, &result, start)
            }
        }
        Commands::Docs(cfg) => {
            let index = ctxpack_generate::run_docs(cfg)?;
            ctxpack_generate::print_docs_index(&mut stdout, &index)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn print_summary<W: Write>(writer: &mut W, result: &GenerateResult, start: Instant) -> Result<()> {
    ctxpack_generate::print_generate_result(writer, result)?;
    writeln!(
        writer,
        "\n{} Finished in {}ms.",
        "●".bright_blue(),
        start.elapsed().as_millis().to_string().cyan()
    )?;
    writer.flush()?;
    Ok(())
}
