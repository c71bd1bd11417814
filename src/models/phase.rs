use serde::Serialize;

/// Where a status sits relative to a given instant.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum StatusPhase {
    Upcoming, // now < start
    Active,   // start <= now < end
    Expired,  // now >= end
}

impl StatusPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusPhase::Upcoming => "upcoming",
            StatusPhase::Active => "active",
            StatusPhase::Expired => "expired",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, StatusPhase::Active)
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, StatusPhase::Expired)
    }
}
