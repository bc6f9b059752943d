//! Per-user beer ratings and their per-beer aggregate.

use serde::Serialize;

/// A user's rating of a beer: an integer from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating must be an integer between 1 and 5, got {0}")]
pub struct RatingError(pub i64);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, RatingError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RatingError(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<Rating> for i16 {
    fn from(rating: Rating) -> Self {
        i16::from(rating.0)
    }
}

/// Aggregate of every user's relation rows for one beer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingSummary {
    pub star_count: u64,
    pub rating_count: u64,
    pub rating_sum: u64,
}

impl RatingSummary {
    /// Build a summary from individual rows: `(starred, rating)` pairs.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (bool, Option<Rating>)>,
    {
        rows.into_iter()
            .fold(Self::default(), |mut summary, (starred, rating)| {
                if starred {
                    summary.star_count += 1;
                }
                if let Some(rating) = rating {
                    summary.rating_count += 1;
                    summary.rating_sum += u64::from(rating.get());
                }
                summary
            })
    }

    /// Arithmetic mean of all ratings, or `None` when nobody has rated.
    pub fn average(&self) -> Option<f64> {
        if self.rating_count == 0 {
            return None;
        }
        Some(self.rating_sum as f64 / self.rating_count as f64)
    }
}
