use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Upper bound on the number of tickets (infants included) in one purchase.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketCategory {
    Infant,
    Child,
    Adult,
}

/// Per-category pricing and seating rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tariff {
    pub unit_price: u32,
    pub occupies_seat: bool,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Infant,
        TicketCategory::Child,
        TicketCategory::Adult,
    ];

    pub const fn tariff(self) -> Tariff {
        match self {
            TicketCategory::Infant => Tariff {
                unit_price: 0,
                occupies_seat: false,
            },
            TicketCategory::Child => Tariff {
                unit_price: 15,
                occupies_seat: true,
            },
            TicketCategory::Adult => Tariff {
                unit_price: 25,
                occupies_seat: true,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TicketCategory::Infant => "INFANT",
            TicketCategory::Child => "CHILD",
            TicketCategory::Adult => "ADULT",
        }
    }

    const fn index(self) -> usize {
        match self {
            TicketCategory::Infant => 0,
            TicketCategory::Child => 1,
            TicketCategory::Adult => 2,
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown ticket category '{0}'")]
pub struct ParseTicketCategoryError(pub String);

impl FromStr for TicketCategory {
    type Err = ParseTicketCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseTicketCategoryError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketRequest {
    pub category: TicketCategory,
    pub quantity: i32,
}

impl TicketRequest {
    pub fn new(category: TicketCategory, quantity: i32) -> Self {
        Self { category, quantity }
    }
}

/// One purchase attempt. `None` stands for a missing account, a missing
/// request list or a null entry inside the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub account_id: Option<i64>,
    pub tickets: Option<Vec<Option<TicketRequest>>>,
}

impl PurchaseRequest {
    pub fn new(account_id: i64, tickets: impl IntoIterator<Item = TicketRequest>) -> Self {
        Self {
            account_id: Some(account_id),
            tickets: Some(tickets.into_iter().map(Some).collect()),
        }
    }
}

/// Per-category counts for a batch of already-validated requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregatedTotals {
    counts: [u32; 3],
}

impl AggregatedTotals {
    /// Sums quantities per category. Non-positive quantities count as zero;
    /// sums saturate at `u32::MAX`.
    pub fn from_requests<'a>(requests: impl IntoIterator<Item = &'a TicketRequest>) -> Self {
        let mut totals = Self::default();
        for request in requests {
            let slot = &mut totals.counts[request.category.index()];
            *slot = slot.saturating_add(request.quantity.max(0) as u32);
        }
        totals
    }

    pub fn count(&self, category: TicketCategory) -> u32 {
        self.counts[category.index()]
    }

    pub fn total_tickets(&self) -> u32 {
        self.counts.iter().fold(0u32, |acc, n| acc.saturating_add(*n))
    }

    pub fn total_price(&self) -> u32 {
        TicketCategory::ALL.iter().fold(0u32, |acc, c| {
            acc.saturating_add(self.count(*c).saturating_mul(c.tariff().unit_price))
        })
    }

    pub fn seats_to_reserve(&self) -> u32 {
        TicketCategory::ALL
            .iter()
            .filter(|c| c.tariff().occupies_seat)
            .fold(0u32, |acc, c| acc.saturating_add(self.count(*c)))
    }
}
