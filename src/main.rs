use cidr_overlap::cli::CommandLine;
use cidr_overlap::config::Config;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let commands = CommandLine::parse_args();
    let config = Config::from_env();
    config.init_logging()?;
    log::info!("#Start main() {:?}", commands.command);

    if let Err(e) = cidr_overlap::run(commands.command) {
        log::error!("{e}");
        return Err(e);
    }

    Ok(())
}
