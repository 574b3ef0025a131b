use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::purchase_service::{PurchaseReceipt, SharedPurchaseService};
use crate::domain::ticket::{PurchaseRequest, TicketCategory, TicketRequest};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategoryDto {
    Infant,
    Child,
    Adult,
}

impl From<TicketCategoryDto> for TicketCategory {
    fn from(dto: TicketCategoryDto) -> Self {
        match dto {
            TicketCategoryDto::Infant => TicketCategory::Infant,
            TicketCategoryDto::Child => TicketCategory::Child,
            TicketCategoryDto::Adult => TicketCategory::Adult,
        }
    }
}

impl From<TicketCategory> for TicketCategoryDto {
    fn from(category: TicketCategory) -> Self {
        match category {
            TicketCategory::Infant => TicketCategoryDto::Infant,
            TicketCategory::Child => TicketCategoryDto::Child,
            TicketCategory::Adult => TicketCategoryDto::Adult,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TicketLineRequest {
    pub category: TicketCategoryDto,
    pub quantity: i32,
}

/// Both fields may be omitted or `null`; entries in `tickets` may be `null`.
/// Such requests are rejected by the purchase rules, not by deserialization.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PurchaseTicketsRequest {
    pub account_id: Option<i64>,
    #[schema(value_type = Option<Vec<TicketLineRequest>>)]
    pub tickets: Option<Vec<Option<TicketLineRequest>>>,
}

impl From<PurchaseTicketsRequest> for PurchaseRequest {
    fn from(body: PurchaseTicketsRequest) -> Self {
        PurchaseRequest {
            account_id: body.account_id,
            tickets: body.tickets.map(|lines| {
                lines
                    .into_iter()
                    .map(|line| {
                        line.map(|l| TicketRequest::new(l.category.into(), l.quantity))
                    })
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PurchaseTicketsResponse {
    pub account_id: i64,
    pub total_price: u32,
    pub seats_reserved: u32,
    pub ticket_count: u32,
}

impl From<PurchaseReceipt> for PurchaseTicketsResponse {
    fn from(receipt: PurchaseReceipt) -> Self {
        Self {
            account_id: receipt.account_id,
            total_price: receipt.total_price,
            seats_reserved: receipt.seats_reserved,
            ticket_count: receipt.ticket_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TariffResponse {
    pub category: TicketCategoryDto,
    pub unit_price: u32,
    pub occupies_seat: bool,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /purchases
///
/// Validates the whole batch, then charges the account and reserves seats.
/// A rejected batch has no side effects.
#[utoipa::path(
    post,
    path = "/purchases",
    request_body = PurchaseTicketsRequest,
    responses(
        (status = 201, description = "Tickets purchased", body = PurchaseTicketsResponse),
        (status = 400, description = "Purchase violates a ticket rule"),
        (status = 502, description = "Payment or reservation service failed"),
    ),
    tag = "tickets"
)]
pub async fn purchase_tickets(
    service: web::Data<SharedPurchaseService>,
    body: web::Json<PurchaseTicketsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = PurchaseRequest::from(body.into_inner());

    let receipt = web::block(move || service.purchase_tickets(&request))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(PurchaseTicketsResponse::from(receipt)))
}

/// GET /tickets/prices
#[utoipa::path(
    get,
    path = "/tickets/prices",
    responses(
        (status = 200, description = "Unit price and seating rule per category", body = [TariffResponse]),
    ),
    tag = "tickets"
)]
pub async fn list_prices() -> HttpResponse {
    let prices: Vec<TariffResponse> = TicketCategory::ALL
        .into_iter()
        .map(|category| {
            let tariff = category.tariff();
            TariffResponse {
                category: category.into(),
                unit_price: tariff.unit_price,
                occupies_seat: tariff.occupies_seat,
            }
        })
        .collect();

    HttpResponse::Ok().json(prices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_with_nulls_maps_to_absent_domain_values() {
        let body: PurchaseTicketsRequest = serde_json::from_value(serde_json::json!({
            "tickets": [{ "category": "ADULT", "quantity": 2 }, null]
        }))
        .expect("valid body");

        let request = PurchaseRequest::from(body);

        assert_eq!(request.account_id, None);
        assert_eq!(
            request.tickets,
            Some(vec![
                Some(TicketRequest::new(TicketCategory::Adult, 2)),
                None
            ])
        );
    }

    #[test]
    fn empty_body_has_no_tickets() {
        let body: PurchaseTicketsRequest =
            serde_json::from_str("{}").expect("empty object is a valid body");
        assert_eq!(PurchaseRequest::from(body), PurchaseRequest::default());
    }

    #[test]
    fn category_names_are_upper_case_on_the_wire() {
        assert_eq!(
            serde_json::to_value(TicketCategoryDto::Infant).expect("serializable"),
            serde_json::json!("INFANT")
        );
        assert!(serde_json::from_str::<TicketCategoryDto>("\"adult\"").is_err());
    }
}
