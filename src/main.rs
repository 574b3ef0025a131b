use std::sync::Arc;

use dotenvy::dotenv;
use ticket_service::config::Settings;
use ticket_service::domain::ports::{SeatReservationService, TicketPaymentService};
use ticket_service::infrastructure::in_memory::{InMemoryPaymentGateway, InMemorySeatReservation};
use ticket_service::{build_server, PurchaseService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(std::io::Error::other)?;

    let payments: Arc<dyn TicketPaymentService> = Arc::new(InMemoryPaymentGateway::new());
    let seats: Arc<dyn SeatReservationService> = Arc::new(InMemorySeatReservation::new());
    let service = PurchaseService::new(payments, seats);

    log::info!("Starting server at http://{}:{}", settings.host, settings.port);

    build_server(service, &settings.host, settings.port)?.await
}
