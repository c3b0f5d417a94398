use std::error::Error;
use subnet_mask_table::config::Config;
use subnet_mask_table::logging::{init_logging, LOG_CONFIG_FILE};
use subnet_mask_table::print_masks;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging(LOG_CONFIG_FILE)?;
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let config = Config::from_env()?;
    print_masks(&config)?;

    log::info!("#End main()");
    Ok(())
}
