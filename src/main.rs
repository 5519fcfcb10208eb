use clap::Parser;
use fleet_secrets::cli::{commands, output, Cli, Commands};
use fleet_secrets::config::Settings;
use fleet_secrets::errors::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::load(&std::env::current_dir()?)?;
    fleet_secrets::logging::init(cli.verbose, &settings.log_level)?;

    match cli.command {
        Commands::Encrypt { ref value } => {
            commands::encrypt::execute(cli, &settings, value.as_deref())
        }
        Commands::Decrypt { ref envelope } => commands::decrypt::execute(cli, &settings, envelope),
        Commands::Token { length, uniform } => commands::token::execute(&settings, length, uniform),
        Commands::HashPassword => commands::password::execute_hash(),
        Commands::VerifyPassword { ref hash } => commands::password::execute_verify(hash),
        Commands::CheckEmail { ref email } => commands::check::execute_email(email),
        Commands::CheckAlnum { ref value } => commands::check::execute_alnum(value),
        Commands::EncodeFile { ref path } => commands::encode_file::execute(path),
        Commands::Completions { ref shell } => commands::completions::execute(shell),
    }
}
