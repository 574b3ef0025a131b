use std::sync::{Mutex, PoisonError};

use crate::domain::errors::ServiceError;
use crate::domain::ports::{SeatReservationService, TicketPaymentService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentRecord {
    pub account_id: i64,
    pub amount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationRecord {
    pub account_id: i64,
    pub seat_count: u32,
}

/// Payment gateway that keeps every accepted payment in memory.
#[derive(Debug, Default)]
pub struct InMemoryPaymentGateway {
    payments: Mutex<Vec<PaymentRecord>>,
}

impl InMemoryPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payments(&self) -> Vec<PaymentRecord> {
        self.payments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TicketPaymentService for InMemoryPaymentGateway {
    fn make_payment(&self, account_id: i64, amount: u32) -> Result<(), ServiceError> {
        let mut payments = self
            .payments
            .lock()
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
        payments.push(PaymentRecord { account_id, amount });
        log::info!("Charged account {} amount {}", account_id, amount);
        Ok(())
    }
}

/// Seat booking ledger held in memory.
#[derive(Debug, Default)]
pub struct InMemorySeatReservation {
    reservations: Mutex<Vec<ReservationRecord>>,
}

impl InMemorySeatReservation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reservations(&self) -> Vec<ReservationRecord> {
        self.reservations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn seats_reserved_for(&self, account_id: i64) -> u32 {
        self.reservations()
            .iter()
            .filter(|r| r.account_id == account_id)
            .map(|r| r.seat_count)
            .sum()
    }
}

impl SeatReservationService for InMemorySeatReservation {
    fn reserve_seat(&self, account_id: i64, seat_count: u32) -> Result<(), ServiceError> {
        let mut reservations = self
            .reservations
            .lock()
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
        reservations.push(ReservationRecord {
            account_id,
            seat_count,
        });
        log::info!("Reserved {} seat(s) for account {}", seat_count, account_id);
        Ok(())
    }
}
