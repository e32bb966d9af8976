//! Random display-name generation for accounts created without a
//! provider-supplied name.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Alex", "Blake", "Casey", "Drew", "Emery", "Finley", "Gray", "Hunter", "Jamie", "Kelly",
    "Logan", "Morgan", "Nico", "Parker", "Quinn", "River", "Sage", "Taylor", "Avery", "Bailey",
    "Cameron", "Dakota", "Eden", "Frankie", "Haven", "Indigo", "Jordan", "Kendall", "Lane",
    "Mason", "Nova", "Ocean",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Brown", "Davis", "Miller", "Wilson", "Moore", "Taylor", "Anderson",
    "Thomas", "Jackson", "White", "Harris", "Martin", "Garcia", "Martinez", "Robinson", "Clark",
    "Rodriguez", "Lewis", "Lee", "Walker", "Hall", "Allen", "Young", "King", "Wright", "Lopez",
    "Hill", "Scott", "Green", "Adams",
];

/// Generate a display name of the form `FirstLast123`.
///
/// Uniqueness is not required here; usernames are display-only and the
/// store does not constrain them.
pub fn generate() -> String {
    let mut rng = rand::rng();
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    let number: u16 = rng.random_range(1..=999);
    format!("{first}{last}{number}")
}
