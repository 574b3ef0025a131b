use std::sync::Arc;

use crate::domain::errors::{InvalidPurchase, PurchaseError};
use crate::domain::ports::{SeatReservationService, TicketPaymentService};
use crate::domain::ticket::{
    AggregatedTotals, PurchaseRequest, TicketCategory, TicketRequest, MAX_TICKETS_PER_PURCHASE,
};

/// Service wired with type-erased collaborators, as shared by the HTTP layer.
pub type SharedPurchaseService =
    PurchaseService<Arc<dyn TicketPaymentService>, Arc<dyn SeatReservationService>>;

/// Outcome of an accepted purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub account_id: i64,
    pub total_price: u32,
    pub seats_reserved: u32,
    pub ticket_count: u32,
}

/// Validates and prices ticket purchases, then charges the account and
/// reserves seats. Nothing is charged or reserved unless every rule passes.
pub struct PurchaseService<P, R> {
    payments: P,
    reservations: R,
}

impl<P: TicketPaymentService, R: SeatReservationService> PurchaseService<P, R> {
    pub fn new(payments: P, reservations: R) -> Self {
        Self {
            payments,
            reservations,
        }
    }

    pub fn purchase_tickets(
        &self,
        request: &PurchaseRequest,
    ) -> Result<PurchaseReceipt, PurchaseError> {
        let (account_id, totals) = match validate(request) {
            Ok(accepted) => accepted,
            Err(reason) => {
                log::warn!(
                    "Rejected purchase for account {:?}: {}",
                    request.account_id,
                    reason.code()
                );
                return Err(reason.into());
            }
        };

        let total_price = totals.total_price();
        let seats = totals.seats_to_reserve();

        self.payments
            .make_payment(account_id, total_price)
            .inspect_err(|e| log::error!("Payment failed for account {}: {}", account_id, e))?;
        self.reservations
            .reserve_seat(account_id, seats)
            .inspect_err(|e| {
                log::error!("Seat reservation failed for account {}: {}", account_id, e)
            })?;

        log::info!(
            "Purchase completed for account {}: price={} seats={}",
            account_id,
            total_price,
            seats
        );

        Ok(PurchaseReceipt {
            account_id,
            total_price,
            seats_reserved: seats,
            ticket_count: totals.total_tickets(),
        })
    }
}

/// Runs every rule in order and stops at the first violation.
fn validate(request: &PurchaseRequest) -> Result<(i64, AggregatedTotals), InvalidPurchase> {
    let account_id = match request.account_id {
        Some(id) if id > 0 => id,
        _ => return Err(InvalidPurchase::InvalidAccount),
    };

    let tickets = structurally_valid(request.tickets.as_deref())?;
    let totals = AggregatedTotals::from_requests(tickets);
    log::debug!("Aggregated totals for account {}: {:?}", account_id, totals);

    check_business_rules(&totals)?;
    Ok((account_id, totals))
}

fn structurally_valid(
    tickets: Option<&[Option<TicketRequest>]>,
) -> Result<Vec<&TicketRequest>, InvalidPurchase> {
    let tickets = match tickets {
        Some(t) if !t.is_empty() => t,
        _ => return Err(InvalidPurchase::NoTicketsRequested),
    };

    tickets
        .iter()
        .map(|entry| match entry {
            None => Err(InvalidPurchase::NullTicketRequest),
            Some(r) if r.quantity <= 0 => Err(InvalidPurchase::NonPositiveQuantity),
            Some(r) => Ok(r),
        })
        .collect()
}

// Children have no ratio cap beyond the shared ticket limit and the
// one-adult rule; only infants are bounded by the adult count.
fn check_business_rules(totals: &AggregatedTotals) -> Result<(), InvalidPurchase> {
    let infants = totals.count(TicketCategory::Infant);
    let children = totals.count(TicketCategory::Child);
    let adults = totals.count(TicketCategory::Adult);

    if totals.total_tickets() > MAX_TICKETS_PER_PURCHASE {
        return Err(InvalidPurchase::TooManyTickets);
    }
    if (infants > 0 || children > 0) && adults == 0 {
        return Err(InvalidPurchase::MissingAdult);
    }
    if infants > adults {
        return Err(InvalidPurchase::TooManyInfants);
    }
    Ok(())
}
