use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use collab_action::auth::Authenticator;
use collab_action::config::Config;
use collab_action::trust;
use collab_action::{create_app, AppState, VERSION};

fn print_banner(addr: &SocketAddr) {
    let display_host = if addr.ip().is_unspecified() {
        "localhost".to_string()
    } else {
        addr.ip().to_string()
    };
    println!();
    println!("  \x1b[36m╔══════════════════════════════════════════╗\x1b[0m");
    println!("  \x1b[36m║\x1b[0m  \x1b[1;35m⚡ collab-action\x1b[0m                        \x1b[36m║\x1b[0m");
    println!("  \x1b[36m║\x1b[0m  \x1b[90mDiscord actions via Collab.Land\x1b[0m         \x1b[36m║\x1b[0m");
    println!("  \x1b[36m╚══════════════════════════════════════════╝\x1b[0m");
    println!();
    println!(
        "  \x1b[32m→\x1b[0m Server running at \x1b[1;4mhttp://{}:{}\x1b[0m",
        display_host,
        addr.port()
    );
    println!("  \x1b[32m→\x1b[0m Version: \x1b[33m{}\x1b[0m", VERSION);
    println!();
    println!("  \x1b[90mEndpoints:\x1b[0m");
    println!("    \x1b[32mGET \x1b[0m /                           \x1b[90m← Health check\x1b[0m");
    println!("    \x1b[32mGET \x1b[0m /health                     \x1b[90m← JSON status\x1b[0m");
    println!("    \x1b[34mPOST\x1b[0m /hello-action/interactions  \x1b[90m← Discord interactions\x1b[0m");
    println!();
    println!("  \x1b[90mPress Ctrl+C to stop\x1b[0m");
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();

    // Trust material must be in place before any webhook traffic is
    // accepted; a failed fetch aborts the boot.
    let trust = trust::fetch_trust_material(config.api_base_url()).await?;
    let auth = Authenticator::new(Arc::new(trust), config.skip_verification);

    let state = AppState {
        config: config.clone(),
        auth,
    };

    let app = create_app(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    print_banner(&addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
