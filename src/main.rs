use std::{net::SocketAddr, path::PathBuf};

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use consumption_gateway::{config, error, info, server, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Location of static files to serve
    #[clap(long = "static", value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Address to listen on (overrides SERVER_ADDRESS)
    #[clap(long, value_name = "ADDR")]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    info!("--- Starting server ---");
    config::load_env();

    // Missing credentials stop the process before anything is bound.
    let mut config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            warning!("Cannot load configuration. Err: {}", e);
            std::process::exit(0);
        }
    };

    if let Some(addr) = cli.addr {
        config.server_addr = addr;
    }

    if let Err(e) = server::start_api_server(config, cli.static_dir.as_deref()).await {
        error!("Server error: {}", e);
    }
}
