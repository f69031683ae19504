use tonic::transport::Server;
use tonic_reflection::server::Builder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_grpc::{CardioService, pb::cardio_server::CardioServer};
use api_shared::{FILE_DESCRIPTOR_SET, ServerConfig};

/// Main entry point for the Cardio application
///
/// Starts both gRPC and REST servers concurrently:
/// - gRPC server on port 50051 (configurable via CARDIO_ADDR)
/// - REST server on port 3000 (configurable via CARDIO_REST_ADDR), serving the form page,
///   the JSON API and Swagger UI
///
/// # Environment Variables
/// - `CARDIO_ADDR`: gRPC server address (default: "0.0.0.0:50051")
/// - `CARDIO_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CARDIO_ENABLE_REFLECTION`: expose gRPC server reflection (default: "false")
///
/// # Errors
/// Returns an error if the configuration is invalid, an address cannot be bound, or either
/// server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cardio_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("api_grpc=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServerConfig::from_env()?;
    let grpc_addr = cfg.grpc_addr();
    let rest_addr = cfg.rest_addr();

    tracing::info!("++ Starting Cardio gRPC on {}", grpc_addr);
    tracing::info!("++ Starting Cardio REST on {}", rest_addr);

    // Start REST server
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    let rest_server = tokio::spawn(async move { axum::serve(listener, api_rest::router()).await });

    // Start gRPC server
    let mut grpc_builder =
        Server::builder().add_service(CardioServer::new(CardioService::default()));
    if cfg.enable_reflection() {
        let reflection_service = Builder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()?;
        grpc_builder = grpc_builder.add_service(reflection_service);
        tracing::info!("gRPC server reflection enabled");
    }
    let grpc_server = grpc_builder.serve(grpc_addr);

    // Run both
    let (rest_result, grpc_result) = tokio::join!(rest_server, grpc_server);
    rest_result??;
    grpc_result?;

    Ok(())
}
