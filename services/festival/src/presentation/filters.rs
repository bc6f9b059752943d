use std::fmt::Display;

use beerfest_domain::abv::Abv;
use beerfest_domain::rating::Rating;

/// `"4.5%"`, or `"TBC"` while the strength is unknown.
pub fn abv(value: Option<&Abv>) -> String {
    match value {
        Some(abv) => abv.to_string(),
        None => "TBC".to_owned(),
    }
}

/// Blank for a missing number, otherwise the number unchanged.
pub fn nullable_number<T: Display>(value: Option<T>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

pub fn rating(value: Option<Rating>) -> String {
    match value {
        Some(rating) => rating.get().to_string(),
        None => "N/A".to_owned(),
    }
}

/// Mean rating to one decimal place, `"N/A"` when nobody has rated.
pub fn average_rating(value: Option<f64>) -> String {
    match value {
        Some(avg) => format!("{avg:.1}"),
        None => "N/A".to_owned(),
    }
}
