//! Standalone gRPC server binary.
//!
//! ## Purpose
//! Runs the gRPC API server on its own.
//!
//! ## Intended use
//! Useful for development when only the gRPC surface is needed. The workspace's main
//! `cardio-run` binary runs both gRPC and REST concurrently.

use tonic::transport::Server;
use tonic_reflection::server::Builder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_grpc::{pb::cardio_server::CardioServer, CardioService};
use api_shared::{ServerConfig, FILE_DESCRIPTOR_SET};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_grpc=info".parse()?)
                .add_directive("cardio_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ServerConfig::from_env()?;
    let addr = cfg.grpc_addr();

    tracing::info!("-- Starting Cardio gRPC on {}", addr);

    let mut server_builder =
        Server::builder().add_service(CardioServer::new(CardioService::default()));

    if cfg.enable_reflection() {
        let reflection_service = Builder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()?;
        server_builder = server_builder.add_service(reflection_service);
        tracing::info!("gRPC server reflection enabled");
    } else {
        tracing::info!("gRPC server reflection disabled");
    }

    server_builder.serve(addr).await?;

    Ok(())
}
