use log::{error, info};

use travelpro::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting TravelPro page scripts");
    if let Err(e) = travelpro::start() {
        error!("Startup failed: {:?}", e);
    }
}
