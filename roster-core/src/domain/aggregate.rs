//! City aggregate: number of users per city

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// One (city, user_count) pair of the aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city: String,
    pub user_count: usize,
}

/// Users grouped by city and counted
///
/// Entries are ordered by city. Serializes as a list of [`CityCount`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityAggregate {
    counts: BTreeMap<String, usize>,
}

impl CityAggregate {
    /// Count occurrences of each city name
    pub fn from_cities<'a>(cities: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts = BTreeMap::new();
        for city in cities {
            *counts.entry(city.to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of users recorded for a city, if the city is known
    pub fn count_for(&self, city: &str) -> Option<usize> {
        self.counts.get(city).copied()
    }

    /// Number of distinct cities
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate (city, user_count) pairs in city order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(city, count)| (city.as_str(), *count))
    }

    /// The aggregate as owned pairs
    pub fn to_pairs(&self) -> Vec<CityCount> {
        self.iter()
            .map(|(city, user_count)| CityCount {
                city: city.to_string(),
                user_count,
            })
            .collect()
    }
}

impl Serialize for CityAggregate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_pairs().serialize(serializer)
    }
}
