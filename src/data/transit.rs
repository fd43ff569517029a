//! Campus transport and access routes shown alongside listings.

use crate::models::transitmodel::{TransitMode, TransitRoute};

fn route(
    id: &str,
    name: &str,
    mode: TransitMode,
    university: &str,
    stops: &[&str],
    frequency_minutes: u32,
) -> TransitRoute {
    TransitRoute {
        id: id.to_string(),
        name: name.to_string(),
        mode,
        university: university.to_string(),
        stops: stops.iter().map(|s| s.to_string()).collect(),
        frequency_minutes,
    }
}

pub fn seed_routes() -> Vec<TransitRoute> {
    vec![
        route(
            "t1",
            "Jammie Shuttle - Obz Loop",
            TransitMode::Shuttle,
            "University of Cape Town",
            &["Observatory Main Rd", "Mowbray", "Upper Campus"],
            15,
        ),
        route(
            "t2",
            "Southern Line",
            TransitMode::Train,
            "University of Cape Town",
            &["Observatory", "Mowbray", "Rondebosch", "Rosebank"],
            30,
        ),
        route(
            "t3",
            "Gautrain Feeder H1",
            TransitMode::Bus,
            "University of Pretoria",
            &["Hatfield Station", "Burnett St", "Hillcrest Campus"],
            10,
        ),
        route(
            "t4",
            "Campus Square Taxi Rank",
            TransitMode::MinibusTaxi,
            "Wits University",
            &["Braamfontein", "Empire Rd", "Yale Rd Gate"],
            5,
        ),
        route(
            "t5",
            "Matie Bus - Central",
            TransitMode::Shuttle,
            "Stellenbosch University",
            &["Die Boord", "Plein St", "Merriman Ave"],
            20,
        ),
    ]
}

/// Routes serving a university, matched case-insensitively by substring so
/// screens can pass the short campus label.
pub fn routes_for_university(university: &str) -> Vec<TransitRoute> {
    let needle = university.to_lowercase();
    seed_routes()
        .into_iter()
        .filter(|r| r.university.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_university_case_insensitively() {
        let routes = routes_for_university("university of cape town");
        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(|r| r.university == "University of Cape Town"));

        assert!(routes_for_university("pretoria").len() == 1);
        assert!(routes_for_university("unknown campus").is_empty());

        let modes: Vec<&str> = routes.iter().map(|r| r.mode.to_str()).collect();
        assert_eq!(modes, vec!["shuttle", "train"]);
    }
}
