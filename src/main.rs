mod api;
mod cli;
mod error;
mod metrics;
mod models;
mod scanner;

const DEFAULT_HOST: std::net::IpAddr = std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 5001;
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_SERVER_URL: &str = "http://localhost:5001";

#[derive(clap::Parser)]
#[command(name = "medscan")]
#[command(about = "Medical image scan service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the scan HTTP server
    Serve {
        #[arg(long, default_value_t = DEFAULT_HOST)]
        host: std::net::IpAddr,
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Largest accepted request body
        #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
        max_body_bytes: usize,
    },
    /// Send an image file to a running server
    Scan {
        #[arg(short, long)]
        file: std::path::PathBuf,
        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        server: String,
    },
}

fn main() {
    let cli = <Cli as clap::Parser>::parse();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            max_body_bytes,
        }) => serve(std::net::SocketAddr::new(host, port), max_body_bytes),
        Some(Commands::Scan { file, server }) => {
            if let Err(e) = run_scan(&file, &server) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => serve(
            std::net::SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
            DEFAULT_MAX_BODY_BYTES,
        ),
    }
}

fn serve(addr: std::net::SocketAddr, max_body_bytes: usize) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_server(addr, max_body_bytes)) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run_server(
    addr: std::net::SocketAddr,
    max_body_bytes: usize,
) -> crate::error::ServerResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medscan=info,tower_http=debug".into()),
        )
        .init();

    tracing::info!("Starting medscan");

    let scanner: std::sync::Arc<dyn crate::scanner::Scanner> =
        std::sync::Arc::new(crate::scanner::StubScanner);
    tracing::info!("Using {} scanner", scanner.name());

    let app = crate::api::create_router(scanner, max_body_bytes);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| crate::error::ServerError::Bind { addr, source })?;
    tracing::info!("Scan server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(crate::error::ServerError::Serve)?;

    tracing::info!("medscan stopped");

    Ok(())
}

fn run_scan(file: &std::path::Path, server: &str) -> crate::error::CliResult<()> {
    let client = crate::cli::CliClient::new(server);
    let response = client.scan_file(file)?;

    println!("{}: {}", file.display(), response.status);

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
