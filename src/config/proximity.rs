use serde::{Deserialize, Serialize};

/// A known distribution-center-to-demand-point relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPair {
    /// Distribution center label, e.g. "Chicago DC"
    pub dc: String,
    /// Demand point label, e.g. "Detroit"
    pub demand: String,
    /// Whether the DC is closer to the demand point than the primary source
    #[serde(default = "default_closer")]
    pub closer: bool,
}

fn default_closer() -> bool {
    true
}

impl LocationPair {
    pub fn new(dc: impl Into<String>, demand: impl Into<String>, closer: bool) -> Self {
        Self {
            dc: dc.into(),
            demand: demand.into(),
            closer,
        }
    }
}

/// Static lookup of DC/demand-point proximity.
///
/// This is a table, not a distance computation: only exact label matches
/// are known, and unknown pairs are never closer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProximityTable {
    pub pairs: Vec<LocationPair>,
}

impl Default for ProximityTable {
    fn default() -> Self {
        Self {
            pairs: vec![
                LocationPair::new("Chicago DC", "Detroit", true),
                LocationPair::new("Los Angeles DC", "San Francisco", true),
                LocationPair::new("New York DC", "Boston", true),
                LocationPair::new("Dallas DC", "Houston", true),
            ],
        }
    }
}

impl ProximityTable {
    pub fn new(pairs: Vec<LocationPair>) -> Self {
        Self { pairs }
    }

    /// An empty table, for which no DC is ever closer
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// True only for an exact (dc, demand) entry marked closer
    pub fn is_closer(&self, dc: &str, demand: &str) -> bool {
        self.pairs
            .iter()
            .any(|pair| pair.dc == dc && pair.demand == demand && pair.closer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pairs_are_closer() {
        let table = ProximityTable::default();
        assert!(table.is_closer("Chicago DC", "Detroit"));
        assert!(table.is_closer("Los Angeles DC", "San Francisco"));
        assert!(table.is_closer("New York DC", "Boston"));
        assert!(table.is_closer("Dallas DC", "Houston"));
    }

    #[test]
    fn test_unknown_or_reversed_pairs_are_not_closer() {
        let table = ProximityTable::default();
        assert!(!table.is_closer("Detroit", "Chicago DC"));
        assert!(!table.is_closer("Chicago DC", "Boston"));
        assert!(!table.is_closer("chicago dc", "Detroit"));
        assert!(!table.is_closer("Miami DC", "Orlando"));
    }

    #[test]
    fn test_pair_marked_not_closer() {
        let table = ProximityTable::new(vec![LocationPair::new("Denver DC", "Phoenix", false)]);
        assert!(!table.is_closer("Denver DC", "Phoenix"));
    }

    #[test]
    fn test_yaml_closer_defaults_true() {
        let table: ProximityTable =
            serde_yaml::from_str("- dc: Seattle DC\n  demand: Portland\n").unwrap();
        assert!(table.is_closer("Seattle DC", "Portland"));
    }
}
