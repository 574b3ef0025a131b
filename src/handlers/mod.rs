use actix_web::HttpResponse;
use utoipa::OpenApi;

pub mod purchases;

#[derive(OpenApi)]
#[openapi(
    paths(purchases::purchase_tickets, purchases::list_prices),
    components(schemas(
        purchases::TicketCategoryDto,
        purchases::TicketLineRequest,
        purchases::PurchaseTicketsRequest,
        purchases::PurchaseTicketsResponse,
        purchases::TariffResponse,
    )),
    tags((name = "tickets", description = "Ticket pricing and purchase"))
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
