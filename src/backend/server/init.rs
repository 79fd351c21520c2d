/**
 * Server Initialization
 *
 * Builds the directory from the configured seeds and wires it into the
 * router.
 *
 * # Initialization Process
 *
 * 1. Load seeds (`DIRECTORY_SEED` file, or the demo set)
 * 2. Hash passwords and build the `Directory`
 * 3. Create `AppState` and the router
 */

use axum::Router;

use crate::backend::directory::{demo_seeds, load_seeds, Directory};
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing directory server");

    let seeds = match &config.seed_path {
        Some(path) => load_seeds(path)?,
        None => {
            tracing::warn!("DIRECTORY_SEED not set, using demo accounts");
            demo_seeds()
        }
    };
    let directory = Directory::from_seeds(seeds, config.page_size, config.bcrypt_cost)?;

    Ok(create_app_with_directory(directory, config))
}

/// Router over an already-built directory
pub fn create_app_with_directory(directory: Directory, config: &ServerConfig) -> Router<()> {
    let app_state = AppState::new(directory, config.jwt_secret.as_str());
    let app = create_router(app_state, &config.public_dir);

    tracing::info!("Router configured");
    app
}
