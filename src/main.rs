use crate::{
    configuration::Configuration, configuration_handler::ConfigurationHandler, http::create_app,
    local_bookings::LocalBookings,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod configuration;
mod configuration_handler;
mod engine;
mod http;
mod local_bookings;
mod schedule;
mod store;
#[cfg(test)]
mod testutils;
mod types;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("####################");
    println!("# Booking Calendar #");
    println!("####################");

    let configuration = ConfigurationHandler::parse_arguments();

    let address = format!("0.0.0.0:{}", configuration.port());
    println!("Accessible at:\n{}", address.clone());
    let listener = tokio::net::TcpListener::bind(address).await.unwrap();

    info!(
        start_hour = configuration.start_hour(),
        end_hour = configuration.end_hour(),
        slot_minutes = configuration.slot_minutes(),
        "Serving slot grid"
    );

    let store = LocalBookings::default();
    let app = create_app(store, configuration);

    axum::serve(listener, app).await.unwrap();
}
