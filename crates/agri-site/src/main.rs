//! KropKraft Marketing Site
//!
//! Server-side rendering entry point.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    agri_site::server::init_tracing();

    match agri_site::server::run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server failed: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser build starts through `hydrate`
}
