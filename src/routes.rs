//! Logical navigation targets consumed by the routing collaborator.

use serde::{Deserialize, Serialize};

/// Where the UI should go next.
///
/// The crate only ever picks a destination; navigating there belongs to the
/// app router.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Destination {
    /// Customer landing page.
    Home,
    /// Host landing page.
    PartnershipHome,
    /// Driver landing page.
    DriverDashboard,
    Login,
    Signup,
    Help,
}

impl Destination {
    /// Route string understood by the app router.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::PartnershipHome => "/CarPartnershipHome",
            Self::DriverDashboard => "/DriverDashboard",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Help => "/help",
        }
    }
}
