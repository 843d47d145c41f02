use crate::registry::domain::Listing;
use std::str::FromStr;

/// ListingRequest - which listings to load, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    listings: Vec<Listing>,
}

impl ListingRequest {
    /// Creates a request, dropping repeated listings
    ///
    /// An empty selection falls back to the state authorities listing.
    pub fn new(listings: Vec<Listing>) -> Self {
        let mut unique: Vec<Listing> = Vec::with_capacity(listings.len());
        for listing in listings {
            if !unique.contains(&listing) {
                unique.push(listing);
            }
        }
        if unique.is_empty() {
            unique.push(Listing::State);
        }
        Self { listings: unique }
    }

    /// Every listing the registry keeps
    pub fn all() -> Self {
        Self::new(Listing::ALL.to_vec())
    }

    /// Parses listing names as given on the command line or in config
    ///
    /// `all` expands to every listing in display order.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, String> {
        let mut listings = Vec::new();
        for name in names {
            let name = name.as_ref();
            if name.trim().eq_ignore_ascii_case("all") {
                listings.extend(Listing::ALL);
            } else {
                listings.push(Listing::from_str(name)?);
            }
        }
        Ok(Self::new(listings))
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }
}
