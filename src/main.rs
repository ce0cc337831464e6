use anyhow::Result;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use dotenvy::dotenv;

use dealership_inventory::config::environment::EnvironmentConfig;
use dealership_inventory::routes::create_app_router;
use dealership_inventory::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging (RUST_LOG tiene prioridad)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚗 Dealership Inventory API");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    info!("⚙️ Entorno: {}", config.environment);
    if config.is_development() && config.cors_origins.is_empty() {
        info!("🔓 CORS permisivo (sin CORS_ORIGINS)");
    }

    let app_state = AppState::from_config(config.clone())?;
    let app = create_app_router(app_state);

    let addr = config.server_url();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Vehículos:");
    info!("   POST /api/vehicles - Crear vehículo");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   GET  /api/vehicles/available - Disponibles");
    info!("   GET  /api/vehicles/featured - Destacados");
    info!("   GET  /api/vehicles/sold - Vendidos");
    info!("   GET  /api/vehicles/catalog - Catálogo con filtros");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   PUT  /api/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo");
    info!("   GET  /api/vehicles/:id/quote - Precio cotizado");
    info!("   POST /api/vehicles/:id/features - Agregar adicional");
    info!("   PUT  /api/vehicles/:id/features/:feature_id - Seleccionar adicional");
    info!("   POST /api/vehicles/:id/sell - Registrar venta");
    info!("   GET  /api/vehicles/:id/contact - Enlace de contacto");
    info!("🧩 Adicionales:");
    info!("   GET  /api/features - Listar catálogo");
    info!("   POST /api/features - Crear adicional");
    info!("   DELETE /api/features/:id - Eliminar adicional");
    info!("📊 Dashboard:");
    info!("   GET  /api/dashboard/stats - Estadísticas del inventario");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
