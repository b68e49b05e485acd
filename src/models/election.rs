//! Election result DTOs
//!
//! Defines the shape of an election result as fetched from a source and
//! served from the cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vote tally for a single candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    /// Candidate name as printed on the ballot
    pub name: String,
    /// Party or designation, if any
    #[serde(default)]
    pub party: Option<String>,
    /// Votes received
    pub votes: u64,
}

impl CandidateResult {
    /// Creates a new CandidateResult
    pub fn new(name: impl Into<String>, party: Option<&str>, votes: u64) -> Self {
        Self {
            name: name.into(),
            party: party.map(str::to_string),
            votes,
        }
    }
}

/// Results of one contest in one election.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionResult {
    /// Identifier of the election in the upstream archive
    pub election_id: String,
    /// Office being contested
    pub office: String,
    /// District or "Statewide"
    pub district: String,
    /// Election year
    pub year: u16,
    /// Per-candidate tallies
    pub candidates: Vec<CandidateResult>,
    /// When the result was fetched from its source
    pub fetched_at: DateTime<Utc>,
}

impl ElectionResult {
    /// Sum of votes across all candidates.
    pub fn total_votes(&self) -> u64 {
        self.candidates.iter().map(|c| c.votes).sum()
    }

    /// Candidate with the most votes, if any were recorded.
    pub fn leader(&self) -> Option<&CandidateResult> {
        self.candidates.iter().max_by_key(|c| c.votes)
    }
}
