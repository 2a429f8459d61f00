//! Merchant API write operation enum.

use std::fmt;

use crate::schema::Schema;
use crate::schemas;

/// All write operations whose payloads are validated before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapiOperation {
    // Users
    /// Create a merchant user.
    CreateUser,
    /// Update a merchant user.
    UpdateUser,

    // Points of sale
    /// Register a point of sale.
    CreatePos,
    /// Update a point of sale.
    UpdatePos,

    // Shortlinks
    /// Create a shortlink.
    CreateShortlink,
    /// Update a shortlink.
    UpdateShortlink,

    // Payments
    /// Create a payment request.
    CreatePaymentRequest,
    /// Update (capture, abort, refund, ...) a payment request.
    UpdatePaymentRequest,
    /// Attach tickets to a payment request.
    UpdateTicket,
    /// Ask a customer for permission to a scope.
    CreatePermissionRequest,

    // Ledgers
    /// Create a ledger.
    CreateLedger,
    /// Update a ledger.
    UpdateLedger,
    /// Close a ledger report.
    CloseReport,
}

impl MapiOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::CreateUser,
        Self::UpdateUser,
        Self::CreatePos,
        Self::UpdatePos,
        Self::CreateShortlink,
        Self::UpdateShortlink,
        Self::CreatePaymentRequest,
        Self::UpdatePaymentRequest,
        Self::UpdateTicket,
        Self::CreatePermissionRequest,
        Self::CreateLedger,
        Self::UpdateLedger,
        Self::CloseReport,
    ];

    /// Returns the snake_case operation name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateUser => "create_user",
            Self::UpdateUser => "update_user",
            Self::CreatePos => "create_pos",
            Self::UpdatePos => "update_pos",
            Self::CreateShortlink => "create_shortlink",
            Self::UpdateShortlink => "update_shortlink",
            Self::CreatePaymentRequest => "create_payment_request",
            Self::UpdatePaymentRequest => "update_payment_request",
            Self::UpdateTicket => "update_ticket",
            Self::CreatePermissionRequest => "create_permission_request",
            Self::CreateLedger => "create_ledger",
            Self::UpdateLedger => "update_ledger",
            Self::CloseReport => "close_report",
        }
    }

    /// Parse an operation name string into a `MapiOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// HTTP method the operation is sent with.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Self::CreateUser
            | Self::CreatePos
            | Self::CreateShortlink
            | Self::CreatePaymentRequest
            | Self::CreatePermissionRequest
            | Self::CreateLedger => "POST",
            Self::UpdateUser
            | Self::UpdatePos
            | Self::UpdateShortlink
            | Self::UpdatePaymentRequest
            | Self::UpdateTicket
            | Self::UpdateLedger
            | Self::CloseReport => "PUT",
        }
    }

    /// The schema payloads for this operation must satisfy.
    #[must_use]
    pub fn schema(&self) -> &'static Schema {
        match self {
            Self::CreateUser => &schemas::CREATE_USER,
            Self::UpdateUser => &schemas::UPDATE_USER,
            Self::CreatePos => &schemas::CREATE_POS,
            Self::UpdatePos => &schemas::UPDATE_POS,
            Self::CreateShortlink => &schemas::CREATE_SHORTLINK,
            Self::UpdateShortlink => &schemas::UPDATE_SHORTLINK,
            Self::CreatePaymentRequest => &schemas::CREATE_PAYMENT_REQUEST,
            Self::UpdatePaymentRequest => &schemas::UPDATE_PAYMENT_REQUEST,
            Self::UpdateTicket => &schemas::UPDATE_TICKET,
            Self::CreatePermissionRequest => &schemas::CREATE_PERMISSION_REQUEST,
            Self::CreateLedger => &schemas::CREATE_LEDGER,
            Self::UpdateLedger => &schemas::UPDATE_LEDGER,
            Self::CloseReport => &schemas::CLOSE_REPORT,
        }
    }
}

impl fmt::Display for MapiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
