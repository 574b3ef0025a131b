use thiserror::Error;

/// Reasons a purchase is rejected before any collaborator is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidPurchase {
    #[error("Invalid account ID")]
    InvalidAccount,
    #[error("No tickets requested")]
    NoTicketsRequested,
    #[error("Ticket request cannot be null")]
    NullTicketRequest,
    #[error("Number of tickets must be positive")]
    NonPositiveQuantity,
    #[error("Cannot purchase more than 25 tickets")]
    TooManyTickets,
    #[error("Child or Infant tickets cannot be purchased without an Adult ticket")]
    MissingAdult,
    #[error("Number of Infant tickets cannot exceed number of Adult tickets")]
    TooManyInfants,
}

impl InvalidPurchase {
    /// Stable machine-readable name of the violated rule.
    pub fn code(&self) -> &'static str {
        match self {
            InvalidPurchase::InvalidAccount => "InvalidAccount",
            InvalidPurchase::NoTicketsRequested => "NoTicketsRequested",
            InvalidPurchase::NullTicketRequest => "NullTicketRequest",
            InvalidPurchase::NonPositiveQuantity => "NonPositiveQuantity",
            InvalidPurchase::TooManyTickets => "TooManyTickets",
            InvalidPurchase::MissingAdult => "MissingAdult",
            InvalidPurchase::TooManyInfants => "TooManyInfants",
        }
    }
}

/// Failure raised by a payment or reservation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    Invalid(#[from] InvalidPurchase),
    #[error(transparent)]
    Collaborator(#[from] ServiceError),
}
