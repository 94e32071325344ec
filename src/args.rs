use clap::Parser;

#[derive(Parser, Clone)]
#[command(
    display_name = "Cup Processor",
    long_about = "Computes result tables, points and multicup standings for a time-trial cup platform"
)]
pub struct Args {
    /// Path to a JSON batch document with players, submissions and cup
    /// settings
    #[arg(short, long, env, help = "Input batch file")]
    pub input: String,

    /// Operation to run over the batch
    #[arg(
        short,
        long,
        value_parser = ["table", "points", "rating", "multicup", "online-cup"],
        help = "Engine operation"
    )]
    pub mode: String,

    /// Remove outside-competition entries from table output
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub filter_outside: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
