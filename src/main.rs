use anyhow::Result;
use clap::Parser;
use usermgr::cli::{setup, Cli, Commands};
use usermgr::commands::{self, Submission};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    setup::init_logging(cli.verbose);

    match cli.command {
        Commands::Process {
            name,
            email,
            age,
            format,
        } => {
            let config = setup::resolve_config(cli.config.as_deref())?;
            commands::handle_process(&config, Submission { name, email, age }, format)
        }
        Commands::Batch { input, format } => {
            let config = setup::resolve_config(cli.config.as_deref())?;
            commands::handle_batch(&config, &input, format)
        }
        Commands::CheckEmail { email } => {
            if !commands::handle_check_email(&email) {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::SystemInfo => {
            commands::handle_system_info();
            Ok(())
        }
        Commands::Divide { dividend, divisor } => commands::handle_divide(dividend, divisor),
        Commands::Count { times } => {
            commands::handle_count(times);
            Ok(())
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
