use anyhow::Context;
use leptos::prelude::*;

mod errors;

use errors::{Error, Result};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    report(run().await).context("The portfolio server stopped")
}

/// Logs whatever stopped the server before it bubbles up to `main`.
fn report<T>(result: Result<T>) -> Result<T> {
    result.inspect_err(|error| log::error!("{}", error))
}

async fn run() -> Result<()> {
    // Reads [workspace.metadata.leptos] from Cargo.toml, LEPTOS_* variables take precedence.
    let conf = get_configuration(None).map_err(|error| Error::Configuration {
        error: error.to_string(),
    })?;
    serve(conf.leptos_options).await
}

fn router(leptos_options: LeptosOptions) -> axum::Router {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let app_fn = {
        let leptos_options = leptos_options.clone();
        move || app::shell(leptos_options.clone())
    };

    axum::Router::new()
        .leptos_routes(&leptos_options, routes, app_fn)
        // Serves the profile picture and the compiled bundle out of the site root, and
        // renders the shell with a 404 for everything else.
        .fallback(leptos_axum::file_and_error_handler(app::shell))
        .with_state(leptos_options)
}

async fn serve(leptos_options: LeptosOptions) -> Result<()> {
    let addr = leptos_options.site_addr;
    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|error| Error::Bind { error, addr })?;
    axum::serve(listener, router(leptos_options).into_make_service())
        .await
        .map_err(|error| Error::Serve { error })
}
