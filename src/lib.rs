#![doc = include_str!("../README.md")]

pub use crate::answer::{
    AttemptOutcome, MAX_ATTEMPTS, judge_typed_answer, stars_for_attempt, stars_for_choice,
};
pub use crate::catalog::Catalog;
pub use crate::distance::{
    EARTH_RADIUS_KM, Verdict, distance_km, evaluate, is_within_tolerance, score_tier,
};
pub use crate::error::{Error, Result, Warning};
pub use crate::robinson::RobinsonProjector;
pub use crate::types::*;

pub mod answer;
mod catalog;
pub mod distance;
mod error;
pub mod robinson;
mod types;
pub mod utils;
