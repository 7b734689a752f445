use clap::Parser;
use std::process;
use stockpilot::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Stockpilot - Inventory Reorder Analyzer");
    println!("=======================================");
    println!();
    println!("Derive reorder-risk classifications, stock-out forecasts and suggested");
    println!("reorder dates from a human-maintained inventory sheet export.");
    println!();
    println!("USAGE:");
    println!("    stockpilot <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Analyze a sheet export and print the derived views");
    println!("    export      Export the flattened report CSV or the advisor context JSON");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Analyze an export with today's date:");
    println!("    stockpilot analyze --input inventory.csv");
    println!();
    println!("    # Reproducible run with an injected date, excluding actioned rows:");
    println!("    stockpilot analyze --input inventory.csv --as-of 2025-03-15 \\");
    println!("                       --actioned row-3,row-7");
    println!();
    println!("    # Write the advisor context for the recommendation service:");
    println!("    stockpilot export --input inventory.csv --kind advisor -o context.json");
    println!();
    println!("    # Demo mode on the built-in sample sheet:");
    println!("    stockpilot analyze");
    println!();
    println!("For detailed help on any command, use:");
    println!("    stockpilot <COMMAND> --help");
}
