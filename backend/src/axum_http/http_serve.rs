use crate::{axum_http::default_routers, axum_http::routers, config::config_model::DotEnvyConfig};
use anyhow::Result;
use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use crates::{
    infra::db::postgres::postgres_connection::PgPoolSquad,
    mailer::zeptomail_client::ZeptoMailClient, media::cloudinary_client::CloudinaryClient,
    payments::paystack_client::PaystackClient,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

pub async fn start(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Result<()> {
    let paystack_client = Arc::new(PaystackClient::new(config.paystack.secret_key.clone())?);
    let mailer = Arc::new(ZeptoMailClient::new(
        config.zeptomail.token.clone(),
        config.zeptomail.from_address.clone(),
        config.zeptomail.from_name.clone(),
    )?);
    let media_storage = Arc::new(CloudinaryClient::new(
        config.cloudinary.cloud_name.clone(),
        config.cloudinary.api_key.clone(),
        config.cloudinary.api_secret.clone(),
    )?);

    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest(
            "/v2/api/auth",
            routers::auth::routes(
                Arc::clone(&db_pool),
                Arc::clone(&mailer),
                config.zeptomail.clone(),
            )
            .nest(
                "/admin/transactions",
                routers::transactions::routes(Arc::clone(&paystack_client)),
            ),
        )
        .nest(
            "/v2/api/care-givers",
            routers::caregivers::routes(
                Arc::clone(&db_pool),
                Arc::clone(&media_storage),
                Arc::clone(&mailer),
                config.zeptomail.caregiver_welcome_template.clone(),
            ),
        )
        .nest(
            "/v2/api/partners",
            routers::partners::routes(
                Arc::clone(&db_pool),
                Arc::clone(&media_storage),
                Arc::clone(&mailer),
                config.zeptomail.welcome_template.clone(),
            ),
        )
        .nest(
            "/v2/api/subscriptions",
            routers::subscriptions::routes(Arc::clone(&db_pool))
                .nest(
                    "/farewell-cover",
                    routers::farewell_cover::routes(
                        Arc::clone(&db_pool),
                        Arc::clone(&paystack_client),
                        Arc::clone(&media_storage),
                        config.paystack.farewell_plan_codes.clone(),
                    ),
                )
                .nest(
                    "/healthy-elders-club",
                    routers::healthy_elders_club::routes(
                        Arc::clone(&db_pool),
                        Arc::clone(&paystack_client),
                        config.paystack.healthy_elders_plan_code.clone(),
                    ),
                ),
        )
        .nest(
            "/v2/api/lace-ai/waitlist",
            routers::waitlist::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/v2/api/paystack-webhook-handler",
            routers::paystack_webhook::routes(
                Arc::clone(&db_pool),
                Arc::clone(&paystack_client),
                Arc::clone(&mailer),
                config.zeptomail.subscription_template.clone(),
            ),
        )
        .route("/v2/api/health-check", get(default_routers::health_check))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.backend_server.timeout,
        )))
        .layer(RequestBodyLimitLayer::new(
            (config.backend_server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(Any), // TODO restrict to the dashboard domains
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.backend_server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.backend_server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
