//! perfeval CLI entry point.

use anyhow::Result;
use clap::Parser;

use perfeval::init_logger;

mod commands;

use commands::{
    evaluate_predictions, run_threshold_sweep, select_fasta_records, Cli, Commands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Evaluate {
            predictions,
            threshold,
            full,
        } => evaluate_predictions(&predictions, threshold, full),

        Commands::Sweep {
            predictions,
            output,
            points,
            base,
        } => run_threshold_sweep(&predictions, output.as_ref(), points, base),

        Commands::Select {
            ids,
            fasta,
            field,
            output,
        } => select_fasta_records(&ids, &fasta, field, output.as_ref()),
    }
}
