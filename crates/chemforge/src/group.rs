//! Whole-group scoring and ranking.

use std::cmp::Ordering;
use std::collections::HashSet;

use chemforge_core::{CompatibilityResult, ParticipantRef};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::engine::{canonical_pair, CompatEngine};

/// One scored pair; `id_a` sorts before `id_b` canonically.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairReport {
    pub id_a: String,
    pub id_b: String,
    pub result: CompatibilityResult,
}

impl PairReport {
    pub fn involves(&self, id: &str) -> bool {
        self.id_a == id || self.id_b == id
    }

    /// The other member of the pair, if `id` is one of them.
    pub fn partner_of(&self, id: &str) -> Option<&str> {
        if self.id_a == id {
            Some(self.id_b.as_str())
        } else if self.id_b == id {
            Some(self.id_a.as_str())
        } else {
            None
        }
    }
}

/// Per-member view over a group's pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummary {
    pub id: String,
    pub best_partner: Option<String>,
    pub best_score: Option<f64>,
    pub mean_score: Option<f64>,
    pub pair_count: usize,
}

/// All pairs of a group, best first, plus one summary per member.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupReport {
    pub pairs: Vec<PairReport>,
    pub members: Vec<MemberSummary>,
}

impl GroupReport {
    /// Looks up a pair in either order.
    pub fn pair(&self, id_a: &str, id_b: &str) -> Option<&PairReport> {
        self.pairs
            .iter()
            .find(|p| p.partner_of(id_a) == Some(id_b))
    }

    pub fn member(&self, id: &str) -> Option<&MemberSummary> {
        self.members.iter().find(|m| m.id == id)
    }

    /// The `n` strongest pairs.
    pub fn top(&self, n: usize) -> &[PairReport] {
        &self.pairs[..n.min(self.pairs.len())]
    }
}

/// Ranking order: score descending, then tie-break descending, then ids.
///
/// Total over all reports, so sorting many pairs is stable across runs.
pub fn compare_pairs(a: &PairReport, b: &PairReport) -> Ordering {
    b.result
        .score
        .total_cmp(&a.result.score)
        .then_with(|| b.result.tiebreak.total_cmp(&a.result.tiebreak))
        .then_with(|| a.id_a.cmp(&b.id_a))
        .then_with(|| a.id_b.cmp(&b.id_b))
}

fn summarize(member: &ParticipantRef, pairs: &[PairReport]) -> MemberSummary {
    let own: Vec<&PairReport> = pairs.iter().filter(|p| p.involves(&member.id)).collect();
    let best = own.first();
    let mean_score = if own.is_empty() {
        None
    } else {
        Some(own.iter().map(|p| p.result.score).sum::<f64>() / own.len() as f64)
    };

    MemberSummary {
        id: member.id.clone(),
        best_partner: best.and_then(|p| p.partner_of(&member.id)).map(str::to_string),
        best_score: best.map(|p| p.result.score),
        mean_score,
        pair_count: own.len(),
    }
}

impl CompatEngine {
    /// Scores every unordered pair in `members`.
    ///
    /// Pairs are evaluated in parallel and returned best first (see
    /// [`compare_pairs`]). Members repeating an earlier id are skipped.
    pub fn score_group(&self, members: &[ParticipantRef]) -> GroupReport {
        let mut seen = HashSet::with_capacity(members.len());
        let members: Vec<&ParticipantRef> = members
            .iter()
            .filter(|m| {
                let fresh = seen.insert(m.id.as_str());
                if !fresh {
                    warn!(event = "group_duplicate_member", id = %m.id);
                }
                fresh
            })
            .collect();

        let n = members.len();
        let index_pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();

        info!(
            event = "group_start",
            member_count = n,
            pair_count = index_pairs.len(),
        );

        let mut pairs: Vec<PairReport> = index_pairs
            .par_iter()
            .map(|&(i, j)| {
                let (a, b) = canonical_pair(members[i], members[j]);
                PairReport {
                    id_a: a.id.clone(),
                    id_b: b.id.clone(),
                    result: self.get_compat_score(a, b),
                }
            })
            .collect();
        pairs.sort_by(compare_pairs);

        let summaries = members.iter().map(|m| summarize(m, &pairs)).collect();

        info!(
            event = "group_end",
            pair_count = pairs.len(),
            fallback_count = pairs.iter().filter(|p| p.result.fallback).count(),
        );

        GroupReport {
            pairs,
            members: summaries,
        }
    }
}
