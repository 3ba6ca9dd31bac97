use agora_core::{Catalog, Listing};
use chrono::{DateTime, TimeZone, Utc};

/// Built-in sample catalog, used whenever no catalog file is
/// configured. Covers every category, the community tag vocabulary,
/// and the bucket boundary prices.
pub fn catalog() -> Catalog {
    Catalog::new(listings()).expect("seed catalog is valid")
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    description: &str,
    price: f64,
    category: &str,
    location: &str,
    rating: f64,
    verified: bool,
    tags: &[&str],
    posted_at: DateTime<Utc>,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        location: location.to_string(),
        rating,
        verified,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: format!("/images/listings/{id}.jpg"),
        posted_at,
    }
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

fn listings() -> Vec<Listing> {
    vec![
        listing(
            "1",
            "MacBook Air M2, 16GB",
            "Lightly used laptop, battery health 96%. Charger included.",
            999.0,
            "Electronics",
            "Stanford",
            4.8,
            true,
            &[],
            at(2024, 6, 2),
        ),
        listing(
            "2",
            "iPhone 13, unlocked",
            "Small scratch on the back, screen flawless. Original box.",
            450.0,
            "Electronics",
            "Palo Alto",
            4.3,
            false,
            &[],
            at(2024, 5, 28),
        ),
        listing(
            "3",
            "TI-84 Plus graphing calculator",
            "Survived three quarters of calculus. Works perfectly.",
            99.0,
            "Electronics",
            "Stanford",
            4.5,
            true,
            &[],
            at(2024, 5, 30),
        ),
        listing(
            "4",
            "Winter jacket, men's M",
            "Warm down jacket, worn one season.",
            45.0,
            "Clothing",
            "Berkeley",
            4.0,
            false,
            &[],
            at(2024, 4, 12),
        ),
        listing(
            "5",
            "Vintage denim jacket",
            "Classic 90s wash, women's S. No stains or tears.",
            60.0,
            "Clothing",
            "San Francisco",
            4.7,
            true,
            &[],
            at(2024, 5, 3),
        ),
        listing(
            "6",
            "Organic Chemistry, 11th ed.",
            "Textbook with minimal highlighting. Solutions manual included.",
            100.0,
            "Books",
            "Stanford",
            4.2,
            true,
            &[],
            at(2024, 6, 1),
        ),
        listing(
            "7",
            "Signed first-edition novel",
            "Collector's item, excellent condition, comes with dust jacket.",
            1200.0,
            "Books",
            "Berkeley",
            5.0,
            true,
            &[],
            at(2024, 3, 18),
        ),
        listing(
            "8",
            "Herb garden starter kit",
            "Basil, mint, and thyme seedlings with pots and soil.",
            25.0,
            "Home & Garden",
            "Menlo Park",
            4.1,
            false,
            &[],
            at(2024, 5, 20),
        ),
        listing(
            "9",
            "Mid-century walnut desk",
            "Solid wood, two drawers, light wear. Pickup only.",
            500.0,
            "Home & Garden",
            "Mountain View",
            4.6,
            true,
            &[],
            at(2024, 4, 25),
        ),
        listing(
            "10",
            "Road bike, 54cm",
            "Aluminum frame, new tires, recently tuned.",
            350.0,
            "Vehicles",
            "Palo Alto",
            4.4,
            true,
            &[],
            at(2024, 5, 15),
        ),
        listing(
            "11",
            "2014 Honda Civic LX",
            "One owner, 88k miles, clean title, all records.",
            8500.0,
            "Vehicles",
            "San Jose",
            4.9,
            true,
            &[],
            at(2024, 2, 9),
        ),
        listing(
            "12",
            "Math tutoring, hourly",
            "Calculus and linear algebra. Patient, exam-focused sessions.",
            40.0,
            "Services",
            "Stanford",
            4.9,
            true,
            &[],
            at(2024, 6, 3),
        ),
        listing(
            "13",
            "Weekend moving help",
            "Two movers with a pickup truck, local moves only.",
            120.0,
            "Services",
            "Sunnyvale",
            4.2,
            false,
            &[],
            at(2024, 5, 22),
        ),
        listing(
            "14",
            "Portrait photography session",
            "One hour on location, 20 edited photos delivered.",
            150.0,
            "Services",
            "San Francisco",
            4.8,
            true,
            &[],
            at(2024, 5, 10),
        ),
        listing(
            "15",
            "Dorm room deep clean",
            "Move-out cleaning, supplies included.",
            35.0,
            "Services",
            "Stanford",
            3.9,
            false,
            &[],
            at(2024, 6, 4),
        ),
        listing(
            "16",
            "Library desk assistant",
            "Part-time evening shifts at the front desk, $18/hr.",
            18.0,
            "Campus Job",
            "Stanford",
            4.0,
            true,
            &[],
            at(2024, 5, 27),
        ),
        listing(
            "17",
            "Volunteers for campus garden day",
            "Join us Saturday morning planting the community beds.",
            0.0,
            "Community",
            "Stanford",
            4.7,
            true,
            &["volunteers", "activities"],
            at(2024, 6, 5),
        ),
        listing(
            "18",
            "Carpool to SFO on Friday",
            "Leaving 3pm from campus, two seats, split gas.",
            15.0,
            "Community",
            "Stanford",
            4.1,
            false,
            &["rideshare", "about 1 hour"],
            at(2024, 6, 6),
        ),
        listing(
            "19",
            "Lost: blue water bottle",
            "Left in the main library reading room Tuesday. Reward: gratitude.",
            0.0,
            "Community",
            "Stanford",
            3.5,
            false,
            &["lost+found"],
            at(2024, 6, 6),
        ),
        listing(
            "20",
            "Beginner salsa classes",
            "Tuesday evenings in the gym annex, first class free.",
            10.0,
            "Community",
            "Palo Alto",
            4.6,
            true,
            &["classes", "activities"],
            at(2024, 5, 31),
        ),
        listing(
            "21",
            "Quarterly campus updates",
            "General announcements thread for the neighborhood.",
            0.0,
            "Community",
            "Stanford",
            4.0,
            true,
            &[],
            at(2024, 5, 1),
        ),
    ]
}
