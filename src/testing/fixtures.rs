//! Small ready-made datasets for tests and examples.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A person record, the usual subject of key-based stages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    #[must_use]
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }

    /// Coarse age bracket: `"young"` below 40, `"middle-aged"` below 60,
    /// `"senior"` otherwise.
    #[must_use]
    pub const fn age_bracket(&self) -> &'static str {
        if self.age < 40 {
            "young"
        } else if self.age < 60 {
            "middle-aged"
        } else {
            "senior"
        }
    }
}

/// Five people with distinct names spread over every age bracket.
///
/// ```
/// use ironstream::testing::sample_people;
///
/// let people = sample_people();
/// assert_eq!(people.len(), 5);
/// assert_eq!(people[0].name, "Alice");
/// ```
#[must_use]
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("Alice", 30),
        Person::new("Bob", 45),
        Person::new("Charlie", 53),
        Person::new("David", 60),
        Person::new("Eve", 25),
    ]
}

/// People with repeated names (and repeated records), for dedupe tests.
///
/// Alice and Bob each appear twice with identical records; the distinct
/// names in first-seen order are Alice, Bob, Charlie.
#[must_use]
pub fn people_with_duplicates() -> Vec<Person> {
    vec![
        Person::new("Alice", 30),
        Person::new("Bob", 25),
        Person::new("Alice", 30),
        Person::new("Charlie", 35),
        Person::new("Bob", 25),
    ]
}

/// Short words with repeats and varying lengths.
#[must_use]
pub fn sample_words() -> Vec<String> {
    ["apple", "banana", "cherry", "date", "apple", "fig", "banana"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// A web-server log line; the record type for the ETL-style tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleLogEntry {
    pub timestamp: u64,
    pub ip: String,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub bytes: u64,
}

/// Five log entries; `192.168.1.100` appears twice and two requests failed.
///
/// ```
/// use ironstream::testing::sample_log_entries;
///
/// let logs = sample_log_entries();
/// assert!(logs.iter().any(|e| e.status >= 500));
/// ```
#[must_use]
pub fn sample_log_entries() -> Vec<SampleLogEntry> {
    let entry = |timestamp, ip: &str, method: &str, path: &str, status, bytes| SampleLogEntry {
        timestamp,
        ip: ip.to_string(),
        method: method.to_string(),
        path: path.to_string(),
        status,
        bytes,
    };
    vec![
        entry(1_000_000, "192.168.1.100", "GET", "/api/users", 200, 1024),
        entry(1_000_100, "192.168.1.101", "POST", "/api/users", 201, 512),
        entry(1_000_200, "192.168.1.102", "GET", "/api/posts", 200, 2048),
        entry(1_000_300, "192.168.1.100", "GET", "/api/users", 404, 256),
        entry(1_000_400, "192.168.1.103", "DELETE", "/api/posts", 500, 128),
    ]
}
