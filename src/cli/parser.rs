use clap::{ArgGroup, Parser};

/// Command-line interface definition for timetrack
/// CLI application to record wake up / sleep events with SQLite
#[derive(Parser, Debug)]
#[command(
    name = "timetrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record wake up and sleep events and print weekly work time stats",
    long_about = None,
    group(ArgGroup::new("record").args(["wakeup", "sleep"]))
)]
pub struct Cli {
    #[arg(short = 'w', long = "wakeup", help = "Record wake up event")]
    pub wakeup: bool,

    #[arg(short = 's', long = "sleep", help = "Record sleep event")]
    pub sleep: bool,

    #[arg(short = 'p', long = "print-stats", help = "Print stats of the current week")]
    pub print_stats: bool,

    /// Specific datetime, e.g. "31.12.2016 23:59", or a bare "23:59" for today.
    /// With a record option the event is recorded on that datetime; with
    /// --print-stats the stats are printed as seen at that datetime.
    #[arg(short = 'd', long = "datetime", value_name = "DATETIME")]
    pub datetime: Option<String>,

    /// Force the recorded event. Even if an earlier wake up or a later sleep
    /// event exists, the forced event is used to compute the work time of
    /// its day. Mostly useful together with --datetime.
    #[arg(short = 'f', long = "force", requires = "record")]
    pub force: bool,

    /// Database location folder (default: 'db' in the working directory)
    #[arg(long = "database", value_name = "LOCATION")]
    pub database: Option<String>,

    #[arg(long = "log", help = "Print rows from the internal log table")]
    pub log: bool,

    #[arg(long = "print-config", help = "Print the effective configuration")]
    pub print_config: bool,
}

impl Cli {
    /// True when at least one flag asks for something to be done.
    pub fn has_action(&self) -> bool {
        self.wakeup || self.sleep || self.print_stats || self.log || self.print_config
    }

    pub fn needs_database(&self) -> bool {
        self.wakeup || self.sleep || self.print_stats || self.log
    }
}
