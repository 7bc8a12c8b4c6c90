//! Demo catalogue used by the binary and tests

use crate::models::{CoverImage, Location, Property};
use chrono::{Duration, Utc};

struct Listing {
    id: &'static str,
    title: &'static str,
    address: &'static str,
    city: &'static str,
    area: &'static str,
    coords: (f64, f64),
    price: i64,
    bedrooms: u8,
    bathrooms: u8,
    property_type: &'static str,
    furnishing: &'static str,
    status: &'static str,
    features: &'static [&'static str],
    days_listed: i64,
}

const LISTINGS: &[Listing] = &[
    Listing {
        id: "bk-park-slope-1",
        title: "Sunny brownstone apartment",
        address: "412 7th Avenue",
        city: "Brooklyn",
        area: "Park Slope",
        coords: (40.6681, -73.9806),
        price: 2_950,
        bedrooms: 2,
        bathrooms: 1,
        property_type: "apartment",
        furnishing: "unfurnished",
        status: "available",
        features: &["Elevator", "Balcony"],
        days_listed: 2,
    },
    Listing {
        id: "bk-williamsburg-2",
        title: "Loft studio near the waterfront",
        address: "88 Kent Avenue",
        city: "Brooklyn",
        area: "Williamsburg",
        coords: (40.7209, -73.9614),
        price: 2_400,
        bedrooms: 1,
        bathrooms: 1,
        property_type: "studio",
        furnishing: "furnished",
        status: "available",
        features: &["Rooftop", "Laundry"],
        days_listed: 5,
    },
    Listing {
        id: "bk-bushwick-3",
        title: "Shared house with garden",
        address: "1207 Willoughby Avenue",
        city: "Brooklyn",
        area: "Bushwick",
        coords: (40.7003, -73.9225),
        price: 4_100,
        bedrooms: 4,
        bathrooms: 2,
        property_type: "house",
        furnishing: "semi-furnished",
        status: "rented",
        features: &["Garden", "Fireplace"],
        days_listed: 11,
    },
    Listing {
        id: "mn-harlem-4",
        title: "Renovated condo with city views",
        address: "301 West 118th Street",
        city: "Manhattan",
        area: "Harlem",
        coords: (40.8052, -73.9536),
        price: 3_600,
        bedrooms: 2,
        bathrooms: 2,
        property_type: "condo",
        furnishing: "unfurnished",
        status: "available",
        features: &["Elevator", "Doorman"],
        days_listed: 1,
    },
    Listing {
        id: "mn-east-village-5",
        title: "Compact walk-up studio",
        address: "155 East 4th Street",
        city: "Manhattan",
        area: "East Village",
        coords: (40.7246, -73.9876),
        price: 1_950,
        bedrooms: 1,
        bathrooms: 1,
        property_type: "studio",
        furnishing: "furnished",
        status: "pending",
        features: &[],
        days_listed: 8,
    },
    Listing {
        id: "qn-astoria-6",
        title: "Family townhouse near the park",
        address: "24-18 29th Street",
        city: "Queens",
        area: "Astoria",
        coords: (40.7730, -73.9199),
        price: 5_200,
        bedrooms: 3,
        bathrooms: 2,
        property_type: "townhouse",
        furnishing: "unfurnished",
        status: "available",
        features: &["Garage", "Garden", "Balcony"],
        days_listed: 3,
    },
    Listing {
        id: "jc-downtown-7",
        title: "High-rise apartment by the PATH",
        address: "70 Christopher Columbus Drive",
        city: "Jersey City",
        area: "Downtown",
        coords: (40.7163, -74.0380),
        price: 3_150,
        bedrooms: 1,
        bathrooms: 1,
        property_type: "apartment",
        furnishing: "semi-furnished",
        status: "available",
        features: &["Gym", "Elevator"],
        days_listed: 14,
    },
];

pub fn properties() -> Vec<Property> {
    let now = Utc::now();

    LISTINGS
        .iter()
        .map(|l| Property {
            id: l.id.to_string(),
            title: l.title.to_string(),
            address: l.address.to_string(),
            location: Location {
                city: l.city.to_string(),
                area: Some(l.area.to_string()),
                latitude: Some(l.coords.0),
                longitude: Some(l.coords.1),
            },
            price: l.price,
            bedrooms: l.bedrooms,
            bathrooms: l.bathrooms,
            property_type: l.property_type.to_string(),
            furnishing: l.furnishing.to_string(),
            status: l.status.to_string(),
            description: format!(
                "{} bedroom {} in {}, {}.",
                l.bedrooms, l.property_type, l.area, l.city
            ),
            features: l.features.iter().map(|f| f.to_string()).collect(),
            images: (1..=3)
                .map(|n| format!("/images/{}/{}.jpg", l.id, n))
                .collect(),
            listed_at: now - Duration::days(l.days_listed),
        })
        .collect()
}

pub fn cover_images() -> Vec<CoverImage> {
    [
        ("cover-1", "Find your next home", Some("Rentals across the city")),
        ("cover-2", "Brooklyn brownstones", Some("Classic homes, modern comfort")),
        ("cover-3", "Move in this month", None),
    ]
    .into_iter()
    .map(|(id, title, subtitle)| CoverImage {
        id: id.to_string(),
        image_url: format!("/images/covers/{}.jpg", id),
        title: title.to_string(),
        subtitle: subtitle.map(str::to_string),
    })
    .collect()
}
