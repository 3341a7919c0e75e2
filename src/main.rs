//! Word Freq - word frequency analysis for text files
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::io;
use std::process;

use word_freq::cli::Args;
use word_freq::processor::{Processor, ProcessorConfig};
use word_freq::progress::{print_error, print_header, print_info};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging, RUST_LOG wins over the flags
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Create processor configuration
    let config = ProcessorConfig::from_args(&args)?;

    // Show configuration
    if args.verbose {
        print_config(&config);
    }

    // Create and run processor
    let processor = Processor::new(config);
    processor.run(io::stdout().lock())?;

    if args.stats {
        processor.stats().print_summary();
    }

    Ok(())
}

/// Print configuration summary
fn print_config(config: &ProcessorConfig) {
    print_header("Configuration");

    print_info(&format!("Text file:     {:?}", config.text_file));
    match config.blacklist_file {
        Some(ref path) => print_info(&format!("Blacklist:     {:?}", path)),
        None => print_info("Blacklist:     built-in only"),
    }
    print_info(&format!("Min occur:     {}", config.min_frequency));
    print_info(&format!("Sorted words:  {}", config.sort_words));
    match config.threads {
        Some(n) => print_info(&format!("Threads:       {}", n)),
        None => print_info("Threads:       1 (sequential)"),
    }
}
