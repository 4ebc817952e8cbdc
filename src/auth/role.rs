//! Account roles and their landing destinations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routes::Destination;

/// Closed set of account roles offered on the signup screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Customer,
    Host,
    Driver,
}

impl Role {
    /// Select options, in screen order.
    pub const ALL: [Self; 3] = [Self::Customer, Self::Host, Self::Driver];

    /// Stored `userType` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Host => "Host",
            Self::Driver => "Driver",
        }
    }

    /// Landing page for a signed-in account of this role.
    #[must_use]
    pub const fn destination(self) -> Destination {
        match self {
            Self::Customer => Destination::Home,
            Self::Host => Destination::PartnershipHome,
            Self::Driver => Destination::DriverDashboard,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A stored `userType` value outside the closed set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized role {0:?}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| RoleParseError(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Role, RoleParseError};
    use crate::routes::Destination;

    #[test]
    fn as_str_round_trips_through_parse() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn parse_rejects_values_outside_the_set() {
        assert_eq!(
            "Admin".parse::<Role>(),
            Err(RoleParseError("Admin".to_string()))
        );
        assert!("customer".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn destinations_follow_the_role() {
        assert_eq!(Role::Customer.destination(), Destination::Home);
        assert_eq!(Role::Host.destination(), Destination::PartnershipHome);
        assert_eq!(Role::Driver.destination(), Destination::DriverDashboard);
    }

    #[test]
    fn serde_names_match_stored_values() {
        for role in Role::ALL {
            let value = serde_json::to_value(role).expect("role serializes");
            assert_eq!(value, role.as_str());
        }
    }
}
