use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use mahana::cli::{
    handle_add, handle_alerts, handle_category_command, handle_config, handle_currency,
    handle_cycle_command, handle_export, handle_limit_command, handle_list, handle_progress,
    handle_reset, handle_setup_done, handle_summary, parse_date, AddArgs, CategoryCommands,
    CycleArgs, CycleCommands, ExportArgs, LimitCommands, ListArgs,
};
use mahana::config::paths::DATA_DIR_ENV;
use mahana::config::MahanaPaths;
use mahana::logging::init_tracing;
use mahana::services::Session;

#[derive(Parser)]
#[command(
    name = "mahana",
    version,
    about = "Personal budget tracker with monthly budget cycles",
    long_about = "Mahana records income and expenses, totals them per budget cycle \
                  (a month that can start on any day), and warns when spending \
                  approaches the limits you set per category."
)]
struct Cli {
    /// Directory holding the data files
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_name = "DATE")]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an income or expense
    Add(AddArgs),

    /// List transactions of a budget cycle
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show income, expenses and balance for a budget cycle
    Summary(CycleArgs),

    /// Show categories at or above 70% of their limit
    Alerts(CycleArgs),

    /// Show spending against every budget limit
    Progress(CycleArgs),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget limit commands
    #[command(subcommand)]
    Limit(LimitCommands),

    /// Budget cycle commands
    #[command(subcommand)]
    Cycle(CycleCommands),

    /// Show supported currencies or switch the display currency
    Currency {
        /// Currency code, e.g. USD
        code: Option<String>,
    },

    /// Delete all transactions (categories and limits are kept)
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Export transactions (CSV) or the full ledger (JSON)
    Export(ExportArgs),

    /// Dismiss the first-run budget setup reminder
    SetupDone,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let today: NaiveDate = match &cli.today {
        Some(date) => parse_date(date)?,
        None => Local::now().date_naive(),
    };

    let paths = MahanaPaths::resolve(cli.data_dir)?;
    let mut session = Session::open_files(paths.clone());

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut session, today, args)?,
        Some(Commands::List(args)) => handle_list(&session, today, args)?,
        Some(Commands::Summary(args)) => handle_summary(&session, today, args)?,
        Some(Commands::Alerts(args)) => handle_alerts(&session, today, args)?,
        Some(Commands::Progress(args)) => handle_progress(&session, today, args)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut session, cmd)?,
        Some(Commands::Limit(cmd)) => handle_limit_command(&mut session, cmd)?,
        Some(Commands::Cycle(cmd)) => handle_cycle_command(&mut session, today, cmd)?,
        Some(Commands::Currency { code }) => handle_currency(&mut session, code)?,
        Some(Commands::Reset { yes }) => handle_reset(&mut session, yes)?,
        Some(Commands::Export(args)) => handle_export(&session, today, args)?,
        Some(Commands::SetupDone) => handle_setup_done(&mut session)?,
        Some(Commands::Config) => handle_config(&session, &paths)?,
        None => {
            println!("Mahana - personal budget tracker");
            println!();
            println!("Run 'mahana --help' for usage information.");
            println!("Run 'mahana summary' to see the current budget cycle.");
        }
    }

    Ok(())
}
