use echo_lambda::config::env_vars_line;
use echo_lambda::{handler, init_tracing, Config};
use lambda_runtime::{service_fn, Error};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::from_env();
    info!("Starting {} {}", config.function_name, config.function_version);

    // cold start diagnostics, off by default
    if config.print_env {
        info!("{}", env_vars_line());
    }

    if let Err(e) = lambda_runtime::run(service_fn(handler)).await {
        error!("Runtime error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
