use std::sync::Arc;

use super::errors::ServiceError;

pub trait TicketPaymentService: Send + Sync + 'static {
    fn make_payment(&self, account_id: i64, amount: u32) -> Result<(), ServiceError>;
}

pub trait SeatReservationService: Send + Sync + 'static {
    fn reserve_seat(&self, account_id: i64, seat_count: u32) -> Result<(), ServiceError>;
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: i64, amount: u32) -> Result<(), ServiceError> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: i64, seat_count: u32) -> Result<(), ServiceError> {
        (**self).reserve_seat(account_id, seat_count)
    }
}
