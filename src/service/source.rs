//! Result Sources
//!
//! The expensive side of a lookup: wherever election results actually come
//! from. The service consults the cache before calling a source.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;

use crate::error::{ElectionError, Result};
use crate::models::{CandidateResult, ElectionResult};

/// Something that can produce fresh election results.
pub trait ResultSource: Send + Sync {
    /// Fetches results for one election.
    fn fetch(&self, election_id: &str) -> impl Future<Output = Result<ElectionResult>> + Send;
}

impl<S: ResultSource> ResultSource for Arc<S> {
    fn fetch(&self, election_id: &str) -> impl Future<Output = Result<ElectionResult>> + Send {
        (**self).fetch(election_id)
    }
}

/// Source serving a fixed set of sample results.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleResultSource;

impl SampleResultSource {
    /// Election ids this source knows about.
    pub const KNOWN_IDS: [&'static str; 2] = ["140749", "131582"];
}

impl ResultSource for SampleResultSource {
    async fn fetch(&self, election_id: &str) -> Result<ElectionResult> {
        let (office, district, year, candidates) = match election_id {
            "140749" => (
                "Governor",
                "Statewide",
                2022,
                vec![
                    CandidateResult::new("Healey and Driscoll", Some("Democratic"), 1_584_403),
                    CandidateResult::new("Diehl and Allen", Some("Republican"), 859_343),
                    CandidateResult::new("Reed and Everett", Some("Libertarian"), 39_244),
                ],
            ),
            "131582" => (
                "U.S. Senate",
                "Statewide",
                2020,
                vec![
                    CandidateResult::new("Edward J. Markey", Some("Democratic"), 2_357_809),
                    CandidateResult::new("Kevin J. O'Connor", Some("Republican"), 1_177_765),
                ],
            ),
            other => return Err(ElectionError::NotFound(other.to_string())),
        };

        Ok(ElectionResult {
            election_id: election_id.to_string(),
            office: office.to_string(),
            district: district.to_string(),
            year,
            candidates,
            fetched_at: Utc::now(),
        })
    }
}
