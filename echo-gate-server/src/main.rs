use std::net::SocketAddr;

use clap::Parser;
use echo_gate_runner::InvocationHandler;
use tower_http::trace::TraceLayer;
use tracing::info;

mod params;
mod routes;

#[derive(Parser)]
#[command(name = "echo-gate")]
#[command(about = "Forwards the `123` request parameter to `echo`", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let app = routes::router(InvocationHandler::system()).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("Server listening on http://{}", args.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
