use anyhow::Context;
use clap::Parser;

use saraf::{cli::Args, pipeline::run_files, utils::command_line_str};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.level.to_level_filter())
        .init();
    tracing::debug!("cmd: {}", command_line_str());
    tracing::info!("Starting saraf with args: {}", args);

    let command = args.to_command();
    let io = args.io();
    let report = run_files(&io.input, &io.output, &command, &args.options()).with_context(|| {
        format!(
            "{} failed, input: {}, output: {}",
            command,
            io.input.display(),
            io.output.display()
        )
    })?;

    if let Some(msg) = &report.message {
        tracing::info!("{}", msg);
    }
    tracing::info!(
        "{}: {} records in, {} records out, saved to {}",
        command,
        report.records_in,
        report.records_out,
        io.output.display()
    );

    Ok(())
}
