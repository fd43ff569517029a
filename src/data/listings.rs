//! The immutable listing dataset. Built once at startup; the search pipeline
//! only ever reads it.

use chrono::{Duration, Utc};

use crate::models::listingmodel::{Availability, Listing, ListingFeatures, PropertyKind};

fn listing(
    id: &str,
    title: &str,
    subtitle: &str,
    kind: PropertyKind,
    price: i64,
    amenities: &[&str],
    features: ListingFeatures,
    available: bool,
    move_in_days: Option<i64>,
    location: &str,
    university: &str,
    rating: f32,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        kind,
        price,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        features,
        availability: Availability {
            available,
            move_in_date: move_in_days.map(|d| Utc::now() + Duration::days(d)),
        },
        location: location.to_string(),
        university: university.to_string(),
        rating,
    }
}

pub fn seed_listings() -> Vec<Listing> {
    vec![
        listing(
            "p1",
            "Obz Square Student Studios",
            "Modern studios five minutes from main campus",
            PropertyKind::Studio,
            5200,
            &["WiFi", "Laundry", "Study Room", "Security", "Backup Power"],
            ListingFeatures {
                furnished: true,
                parking: false,
                pet_friendly: false,
                bedrooms: 1,
                bathrooms: 1,
            },
            true,
            None,
            "Observatory",
            "University of Cape Town",
            4.6,
        ),
        listing(
            "p2",
            "Rondebosch Garden House",
            "Shared six-bedroom house with a large garden",
            PropertyKind::SharedHouse,
            3900,
            &["WiFi", "Laundry", "Garden", "Parking", "Cleaning Service"],
            ListingFeatures {
                furnished: true,
                parking: true,
                pet_friendly: true,
                bedrooms: 6,
                bathrooms: 3,
            },
            true,
            None,
            "Rondebosch",
            "University of Cape Town",
            4.2,
        ),
        listing(
            "p3",
            "Hatfield Heights",
            "En-suite rooms above the Hatfield Gautrain station",
            PropertyKind::Ensuite,
            4700,
            &["WiFi", "Gym", "Study Room", "Security", "Shuttle Service"],
            ListingFeatures {
                furnished: true,
                parking: true,
                pet_friendly: false,
                bedrooms: 1,
                bathrooms: 1,
            },
            false,
            Some(45),
            "Hatfield",
            "University of Pretoria",
            4.8,
        ),
        listing(
            "p4",
            "Braamfontein Lofts",
            "Converted warehouse lofts in the student quarter",
            PropertyKind::Apartment,
            6100,
            &["WiFi", "Laundry", "Rooftop", "Security", "Backup Power"],
            ListingFeatures {
                furnished: false,
                parking: false,
                pet_friendly: false,
                bedrooms: 2,
                bathrooms: 1,
            },
            true,
            None,
            "Braamfontein",
            "Wits University",
            4.1,
        ),
        listing(
            "p5",
            "Stellenbosch Oak Cottage",
            "Quiet two-bedroom cottage near the Eerste River",
            PropertyKind::Cottage,
            4400,
            &["WiFi", "Garden", "Parking", "Pet Friendly"],
            ListingFeatures {
                furnished: false,
                parking: true,
                pet_friendly: true,
                bedrooms: 2,
                bathrooms: 1,
            },
            false,
            Some(20),
            "Die Boord",
            "Stellenbosch University",
            4.4,
        ),
        listing(
            "p6",
            "Summerstrand Surf Residence",
            "University-run residence two blocks from the beach",
            PropertyKind::Residence,
            3200,
            &["WiFi", "Laundry", "Study Room", "Cafeteria", "Security"],
            ListingFeatures {
                furnished: true,
                parking: false,
                pet_friendly: false,
                bedrooms: 1,
                bathrooms: 1,
            },
            true,
            None,
            "Summerstrand",
            "Nelson Mandela University",
            3.9,
        ),
        listing(
            "p7",
            "Hatfield Budget Rooms",
            "No-frills single rooms with shared kitchens",
            PropertyKind::SharedHouse,
            2600,
            &["WiFi", "Laundry"],
            ListingFeatures {
                furnished: false,
                parking: false,
                pet_friendly: false,
                bedrooms: 8,
                bathrooms: 4,
            },
            true,
            None,
            "Hatfield",
            "University of Pretoria",
            3.5,
        ),
        listing(
            "p8",
            "Mowbray Station Apartments",
            "Two-bedroom apartments on the Southern Line",
            PropertyKind::Apartment,
            5600,
            &["WiFi", "Security", "Parking", "Backup Power"],
            ListingFeatures {
                furnished: true,
                parking: true,
                pet_friendly: false,
                bedrooms: 2,
                bathrooms: 2,
            },
            false,
            Some(75),
            "Mowbray",
            "University of Cape Town",
            4.0,
        ),
        listing(
            "p9",
            "Stellenbosch Vine Studios",
            "Compact studios above the Plein Street cafes",
            PropertyKind::Studio,
            4950,
            &["WiFi", "Laundry", "Study Room", "Cleaning Service"],
            ListingFeatures {
                furnished: true,
                parking: false,
                pet_friendly: false,
                bedrooms: 1,
                bathrooms: 1,
            },
            true,
            None,
            "Stellenbosch Central",
            "Stellenbosch University",
            4.7,
        ),
        listing(
            "p10",
            "Auckland Park Commons",
            "Large shared house opposite the Kingsway campus",
            PropertyKind::SharedHouse,
            3400,
            &["WiFi", "Garden", "Laundry", "Security", "Shuttle Service"],
            ListingFeatures {
                furnished: true,
                parking: true,
                pet_friendly: true,
                bedrooms: 5,
                bathrooms: 2,
            },
            true,
            None,
            "Auckland Park",
            "University of Johannesburg",
            4.3,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_ids_are_unique_and_prices_positive() {
        let listings = seed_listings();
        assert!(listings.len() >= 8);

        let ids: HashSet<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), listings.len());

        for l in &listings {
            assert!(l.price > 0, "{} has a non-positive price", l.id);
            assert!(!l.amenities.is_empty(), "{} has no amenities", l.id);
        }
    }

    #[test]
    fn unavailable_fixtures_carry_a_move_in_date() {
        for l in seed_listings() {
            if !l.availability.available {
                assert!(l.availability.move_in_date.is_some(), "{}", l.id);
            }
        }
    }
}
