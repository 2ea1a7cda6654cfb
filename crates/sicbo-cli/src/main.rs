//! `sicbo-pick`: reads `{"history": "..."}` on stdin, writes `{"pick": "..."}`
//! on stdout, and always exits 0.

use std::io;

use sicbo_cli::{install_dir, respond, tracing_setup};
use sicbo_core::constants::VERSION;
use sicbo_core::PickConfig;
use sicbo_inference::load_model;
use tracing::{debug, warn};

fn main() {
    let base_dir = install_dir();

    let (config, config_error) = match PickConfig::load(&base_dir) {
        Ok(config) => (config, None),
        Err(e) => (PickConfig::from_env(), Some(e)),
    };

    tracing_setup::init_tracing(&config.log_filter);
    tracing_setup::install_panic_hook();

    if let Some(e) = config_error {
        warn!(error = %e, "ignoring config file, using defaults");
    }

    let model_path = config.resolve_model_path(&base_dir);
    debug!(version = VERSION, model = %model_path.display(), "sicbo-pick starting");
    let model = load_model(&model_path, config.intra_threads);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = respond(stdin.lock(), stdout.lock(), model.as_deref()) {
        debug!(error = %e, "failed to write pick");
    }
}
