//! Demonstration data for the LFWMS store.
//!
//! Candidates are plain literals. Listings refer to providers by display name
//! and express expiry as a day offset from the run date, so reruns on later
//! days produce fresh listings.

/// A provider or receiver to seed. Both tables share this shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyCandidate {
    pub name: &'static str,
    /// Category label: Restaurant, NGO, Shelter, ...
    pub kind: &'static str,
    pub location: &'static str,
    pub contact: &'static str,
}

impl PartyCandidate {
    pub const fn new(
        name: &'static str,
        kind: &'static str,
        location: &'static str,
        contact: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            location,
            contact,
        }
    }
}

/// A food listing to seed, attached to a provider by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingCandidate {
    pub food_name: &'static str,
    pub quantity: i32,
    /// Days from the run date until expiry
    pub expiry_offset_days: i64,
    pub provider_name: &'static str,
    pub food_type: &'static str,
    pub meal_type: &'static str,
    /// Replaces the provider's location when set
    pub location_override: Option<&'static str>,
}

impl ListingCandidate {
    pub const fn new(
        food_name: &'static str,
        quantity: i32,
        expiry_offset_days: i64,
        provider_name: &'static str,
        food_type: &'static str,
        meal_type: &'static str,
        location_override: Option<&'static str>,
    ) -> Self {
        Self {
            food_name,
            quantity,
            expiry_offset_days,
            provider_name,
            food_type,
            meal_type,
            location_override,
        }
    }
}

pub const PROVIDERS: &[PartyCandidate] = &[
    PartyCandidate::new("GreenHarvest Restaurant", "Restaurant", "Bengaluru", "080-111-222"),
    PartyCandidate::new("CityCare NGO", "NGO", "Delhi", "011-234-567"),
    PartyCandidate::new("Sunrise Bakery", "Bakery", "Pune", "020-555-222"),
    PartyCandidate::new("FreshMart Supermarket", "Supermarket", "Mumbai", "022-888-111"),
    PartyCandidate::new("Lotus Hotel", "Hotel", "Chennai", "044-909-101"),
    PartyCandidate::new("Campus Community Kitchen", "Community", "Hyderabad", "040-303-909"),
    PartyCandidate::new("Coastal Caterers", "Caterer", "Kochi", "0484-303-000"),
    PartyCandidate::new("ByteWorks Cafeteria", "Corporate", "Noida", "0120-787-888"),
];

pub const RECEIVERS: &[PartyCandidate] = &[
    PartyCandidate::new("Food For All Trust", "NGO", "Delhi", "011-101-202"),
    PartyCandidate::new("Shelter+ Night Home", "Shelter", "Mumbai", "022-343-454"),
    PartyCandidate::new("Govt School #77", "School", "Bengaluru", "080-787-909"),
    PartyCandidate::new("Hope Food Bank", "Food Bank", "Pune", "020-202-303"),
    PartyCandidate::new("Mother\u{2019}s Care Orphanage", "Orphanage", "Chennai", "044-990-880"),
    PartyCandidate::new("StreetCare Foundation", "NGO", "Hyderabad", "040-212-313"),
];

#[rustfmt::skip]
pub const LISTINGS: &[ListingCandidate] = &[
    ListingCandidate::new("Veg Pulao Trays", 50, 2, "GreenHarvest Restaurant", "Vegetarian", "Lunch", None),
    ListingCandidate::new("Bread Loaves", 80, 1, "Sunrise Bakery", "Vegetarian", "Breakfast", None),
    ListingCandidate::new("Fruit Baskets", 30, 5, "FreshMart Supermarket", "Vegetarian", "Snack", Some("Mumbai")),
    ListingCandidate::new("Cooked Rice", 120, 2, "Campus Community Kitchen", "Vegetarian", "Lunch", None),
    ListingCandidate::new("Chicken Curry", 60, 2, "Lotus Hotel", "Non-Vegetarian", "Dinner", None),
    ListingCandidate::new("Veg Sandwiches", 100, 1, "ByteWorks Cafeteria", "Vegetarian", "Snack", None),
    ListingCandidate::new("Samosa Packs", 90, 1, "GreenHarvest Restaurant", "Vegetarian", "Snack", None),
    ListingCandidate::new("Curd Cups", 150, 3, "FreshMart Supermarket", "Vegetarian", "Lunch", Some("Mumbai")),
    ListingCandidate::new("Dal Tadka", 70, 2, "Coastal Caterers", "Vegetarian", "Dinner", None),
    ListingCandidate::new("Idli Packs", 110, 1, "Lotus Hotel", "Vegetarian", "Breakfast", None),
    ListingCandidate::new("Pastry Boxes", 40, 1, "Sunrise Bakery", "Vegetarian", "Dessert", None),
    ListingCandidate::new("Veg Biryani", 75, 2, "GreenHarvest Restaurant", "Vegetarian", "Dinner", None),
    ListingCandidate::new("Chapati Bundles", 200, 2, "Campus Community Kitchen", "Vegetarian", "Dinner", None),
    ListingCandidate::new("Salad Bowls", 60, 2, "ByteWorks Cafeteria", "Vegetarian", "Lunch", None),
    ListingCandidate::new("Fish Curry", 40, 1, "Coastal Caterers", "Non-Vegetarian", "Dinner", None),
];

/// Statuses handed out to seeded claims, cycled by position.
pub const CLAIM_STATUSES: &[&str] = &["Pending", "Approved", "Completed"];

/// How many of the latest-expiring listings receive a claim per run.
pub const LATEST_LISTING_LIMIT: u64 = 8;

/// Fixed data set written by the reset variant.
pub mod reset {
    use super::{ListingCandidate, PartyCandidate};

    pub const PROVIDERS: &[PartyCandidate] = &[
        PartyCandidate::new("FreshMart", "Supermarket", "Mumbai", "+91-9876543210"),
        PartyCandidate::new("City Hospital", "Hospital", "Delhi", "+91-8765432109"),
        PartyCandidate::new("GreenFarm", "NGO", "Bangalore", "+91-7654321098"),
        PartyCandidate::new("Star Hotel", "Restaurant", "Mumbai", "+91-6543210987"),
        PartyCandidate::new("Happy Foods", "Caterer", "Chennai", "+91-5432109876"),
    ];

    pub const RECEIVERS: &[PartyCandidate] = &[
        PartyCandidate::new("Hope Foundation", "NGO", "Mumbai", "+91-9123456780"),
        PartyCandidate::new("Helping Hands", "NGO", "Delhi", "+91-9234567890"),
        PartyCandidate::new("Food Bank", "NGO", "Bangalore", "+91-9345678901"),
        PartyCandidate::new("Sunrise Shelter", "Orphanage", "Chennai", "+91-9456789012"),
    ];

    #[rustfmt::skip]
    pub const LISTINGS: &[ListingCandidate] = &[
        ListingCandidate::new("Rice Packets", 100, 5, "FreshMart", "Grain", "Lunch", None),
        ListingCandidate::new("Vegetables", 50, 3, "GreenFarm", "Veg", "Dinner", None),
        ListingCandidate::new("Bread Loaves", 30, 2, "Star Hotel", "Bakery", "Breakfast", None),
        ListingCandidate::new("Milk Cartons", 200, 7, "City Hospital", "Dairy", "Breakfast", None),
        ListingCandidate::new("Dal Packets", 80, 4, "Happy Foods", "Grain", "Lunch", None),
    ];

    /// Claims as (listing position, receiver position, status), positions
    /// indexing into [`LISTINGS`] and [`RECEIVERS`].
    pub const CLAIMS: &[(usize, usize, &str)] = &[
        (0, 0, "Pending"),
        (1, 1, "Completed"),
        (2, 2, "Pending"),
        (3, 0, "Cancelled"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_listing_names_a_catalog_provider() {
        let providers: HashSet<_> = PROVIDERS.iter().map(|p| p.name).collect();
        for listing in LISTINGS {
            assert!(
                providers.contains(listing.provider_name),
                "{} names unknown provider {}",
                listing.food_name,
                listing.provider_name
            );
        }
    }

    #[test]
    fn reset_claims_point_inside_fixed_sets() {
        for (listing, receiver, _) in reset::CLAIMS {
            assert!(*listing < reset::LISTINGS.len());
            assert!(*receiver < reset::RECEIVERS.len());
        }
    }

    #[test]
    fn candidate_names_are_distinct() {
        let providers: HashSet<_> = PROVIDERS.iter().map(|p| p.name).collect();
        let receivers: HashSet<_> = RECEIVERS.iter().map(|r| r.name).collect();
        assert_eq!(providers.len(), PROVIDERS.len());
        assert_eq!(receivers.len(), RECEIVERS.len());
    }
}
