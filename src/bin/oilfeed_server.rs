//! OilFeed API Server binary
//!
//! Upload a catalog workbook, download the eBay feed or its HTML preview.

use clap::Parser;
use oilfeed::api::{run_api_server, ApiConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "oilfeed-server")]
#[command(version)]
#[command(author = "RoyalBit Inc. <admin@royalbit.ca>")]
#[command(about = "OilFeed API Server - catalog to eBay feed conversion over HTTP")]
#[command(long_about = r#"
OilFeed API Server

Endpoints (request body = catalog .xlsx bytes):
  - POST /api/v1/convert   - eBay workbook download (?template=full|minimal)
  - POST /api/v1/preview   - HTML preview of the listing descriptions
  - POST /api/v1/columns   - Detected and missing columns (JSON)

Additional endpoints:
  - GET  /health           - Health check
  - GET  /version          - Server version info
  - GET  /                 - API documentation

Features:
  - CORS enabled for cross-origin requests
  - Graceful shutdown on SIGINT/SIGTERM
  - JSON error responses with request IDs
  - Tracing and structured logging

Example usage:
  oilfeed-server                           # Start on localhost:8080
  oilfeed-server --host 0.0.0.0 --port 3000 --constants constants.yaml

  curl -X POST 'http://localhost:8080/api/v1/convert?template=full' \
    --data-binary @catalogo.xlsx -o ebay_output.xlsx
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "OILFEED_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "OILFEED_PORT")]
    port: u16,

    /// YAML file overriding the catalog constants
    #[arg(short, long, env = "OILFEED_CONSTANTS")]
    constants: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        constants_path: args.constants,
    };

    run_api_server(config).await
}
