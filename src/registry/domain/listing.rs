use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A collection kept by the relief registry contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Listing {
    /// State-level disaster management authorities
    State,
    /// Ground authorities operating relief centers
    Ground,
    /// Open supply requests
    Supply,
    /// Open demand requests
    Demand,
}

impl Listing {
    /// Every listing, in display order
    pub const ALL: [Listing; 4] = [
        Listing::State,
        Listing::Ground,
        Listing::Supply,
        Listing::Demand,
    ];

    /// Short identifier used on the command line, in config and snapshots
    pub fn key(self) -> &'static str {
        match self {
            Listing::State => "state",
            Listing::Ground => "ground",
            Listing::Supply => "supply",
            Listing::Demand => "demand",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Listing::State => "State Authorities",
            Listing::Ground => "Ground Authorities",
            Listing::Supply => "Supply Requests",
            Listing::Demand => "Demand Requests",
        }
    }

    /// Header of the name column
    pub fn name_column(self) -> &'static str {
        match self {
            Listing::State | Listing::Ground => "Authority Name",
            Listing::Supply | Listing::Demand => "Requester Name",
        }
    }

    /// Signature of the contract's read method for this listing
    pub fn default_method(self) -> &'static str {
        match self {
            Listing::State => "getStateData()",
            Listing::Ground => "getGroundData()",
            Listing::Supply => "getSupplyRequests()",
            Listing::Demand => "getDemandRequests()",
        }
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Listing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "state" | "states" => Ok(Listing::State),
            "ground" | "grounds" => Ok(Listing::Ground),
            "supply" => Ok(Listing::Supply),
            "demand" => Ok(Listing::Demand),
            _ => Err(format!(
                "Invalid listing: {}. Please specify 'state', 'ground', 'supply' or 'demand'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_from_str() {
        assert_eq!(Listing::from_str("state").unwrap(), Listing::State);
        assert_eq!(Listing::from_str("GROUND").unwrap(), Listing::Ground);
        assert_eq!(Listing::from_str(" supply ").unwrap(), Listing::Supply);
        assert_eq!(Listing::from_str("Demand").unwrap(), Listing::Demand);
    }

    #[test]
    fn test_listing_from_str_invalid() {
        let error = Listing::from_str("donations").unwrap_err();
        assert!(error.contains("Invalid listing: donations"));
        assert!(error.contains("'state'"));
    }

    #[test]
    fn test_listing_key_round_trips_through_from_str() {
        for listing in Listing::ALL {
            assert_eq!(Listing::from_str(listing.key()).unwrap(), listing);
        }
    }

    #[test]
    fn test_name_column_per_listing() {
        assert_eq!(Listing::State.name_column(), "Authority Name");
        assert_eq!(Listing::Ground.name_column(), "Authority Name");
        assert_eq!(Listing::Supply.name_column(), "Requester Name");
    }

    #[test]
    fn test_default_method() {
        assert_eq!(Listing::State.default_method(), "getStateData()");
        assert_eq!(Listing::Demand.default_method(), "getDemandRequests()");
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(
            serde_json::to_value(Listing::Supply).unwrap(),
            serde_json::json!("supply")
        );
    }
}
