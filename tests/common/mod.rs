//! Common test infrastructure for Particle News integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;
pub mod mock_server;

pub use mock_server::MockHttpServer;

use particle_news::error::AppError;
use particle_news::models::FetchConfig;
use particle_news::services::Fetcher;

/// Run blocking fetcher work off the async test runtime.
///
/// reqwest's blocking client panics when created or used on a runtime thread.
pub async fn with_fetcher<T, F>(f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&Fetcher) -> Result<T, AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let fetcher = Fetcher::new(&FetchConfig::default())?;
        f(&fetcher)
    })
    .await
    .expect("Blocking task panicked")
}
