//! Read-side helpers over candidate lists and vote counts.

use std::collections::HashSet;

use crate::models::{Candidate, PartyCount};

/// Candidates whose name or party contains `term`, ignoring case.
/// A blank term matches everyone.
#[must_use]
pub fn search<'a>(candidates: &'a [Candidate], term: &str) -> Vec<&'a Candidate> {
    let term = term.trim().to_lowercase();
    candidates
        .iter()
        .filter(|c| {
            term.is_empty()
                || c.name.to_lowercase().contains(&term)
                || c.party.to_lowercase().contains(&term)
        })
        .collect()
}

/// Number of distinct parties among the candidates.
#[must_use]
pub fn distinct_parties(candidates: &[Candidate]) -> usize {
    candidates
        .iter()
        .map(|c| c.party.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq)]
pub struct TallyRow<'a> {
    pub rank: usize,
    pub party: &'a str,
    pub count: u64,
    /// Share of all votes, one decimal.
    pub percent: f64,
}

/// Vote counts per party, in the order the remote service ranked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteTally {
    parties: Vec<PartyCount>,
}

impl VoteTally {
    #[must_use]
    pub fn new(parties: Vec<PartyCount>) -> Self {
        Self { parties }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    /// Total votes cast.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.parties.iter().map(|p| p.count).sum()
    }

    /// Rows with rank and percentage; every percentage is 0 when no vote
    /// has been cast.
    #[must_use]
    pub fn rows(&self) -> Vec<TallyRow<'_>> {
        let total = self.total();
        self.parties
            .iter()
            .enumerate()
            .map(|(i, p)| TallyRow {
                rank: i + 1,
                party: &p.party,
                count: p.count,
                percent: if total == 0 {
                    0.0
                } else {
                    ((p.count as f64 / total as f64) * 1000.0).round() / 10.0
                },
            })
            .collect()
    }

    /// The party with the most votes; ties go to the one listed first.
    #[must_use]
    pub fn leader(&self) -> Option<&PartyCount> {
        self.parties
            .iter()
            .filter(|p| p.count > 0)
            .reduce(|best, p| if p.count > best.count { p } else { best })
    }

    /// Results as `Party,Votes` CSV for download.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("Party,Votes");
        for party in &self.parties {
            csv.push('\n');
            csv.push_str(&csv_field(&party.party));
            csv.push(',');
            csv.push_str(&party.count.to_string());
        }
        csv
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballotbox_core::CandidateId;

    fn candidate(id: &str, name: &str, party: &str) -> Candidate {
        Candidate {
            id: CandidateId::parse(id).expect("valid id"),
            name: name.to_string(),
            party: party.to_string(),
            age: None,
            position: None,
        }
    }

    fn roster() -> Vec<Candidate> {
        vec![
            candidate("c1", "Ravi Kumar", "Green Party"),
            candidate("c2", "Meera Shah", "Blue Alliance"),
            candidate("c3", "Arjun Green", "Blue Alliance"),
        ]
    }

    fn party(name: &str, count: u64) -> PartyCount {
        PartyCount {
            party: name.to_string(),
            count,
        }
    }

    #[test]
    fn search_matches_name_or_party_ignoring_case() {
        let roster = roster();
        let ids: Vec<_> = search(&roster, "GREEN").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c3"]);
        assert_eq!(search(&roster, "meera").len(), 1);
        assert!(search(&roster, "nobody").is_empty());
    }

    #[test]
    fn blank_search_matches_all() {
        let roster = roster();
        assert_eq!(search(&roster, "  ").len(), roster.len());
    }

    #[test]
    fn counts_distinct_parties() {
        assert_eq!(distinct_parties(&roster()), 2);
        assert_eq!(distinct_parties(&[]), 0);
    }

    #[test]
    fn tally_totals_and_percentages() {
        let tally = VoteTally::new(vec![party("Green", 2), party("Blue", 1)]);
        assert_eq!(tally.total(), 3);
        let rows = tally.rows();
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].percent, 66.7);
        assert_eq!(rows[1].percent, 33.3);
        assert_eq!(tally.leader().map(|p| p.party.as_str()), Some("Green"));
    }

    #[test]
    fn empty_tally_has_zero_percentages() {
        let tally = VoteTally::new(vec![party("Green", 0), party("Blue", 0)]);
        assert_eq!(tally.total(), 0);
        assert!(tally.rows().iter().all(|r| r.percent == 0.0));
        assert!(tally.leader().is_none());
    }

    #[test]
    fn csv_export_quotes_awkward_names() {
        let tally = VoteTally::new(vec![party("Green", 2), party("Left, Right", 1)]);
        assert_eq!(tally.to_csv(), "Party,Votes\nGreen,2\n\"Left, Right\",1");
    }
}
