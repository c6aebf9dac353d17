// Basque numeral word tables.
//
// Basque counts in twenties below one hundred (vigesimal), so the
// irregular forms are the numbers below twenty and the multiples of
// twenty. Everything else is composed from these tables and the
// connector words below.

/// Spelled forms of 0 through 19, indexed by value.
pub const UNITS: [&str; 20] = [
    "zero",
    "bat",
    "bi",
    "hiru",
    "lau",
    "bost",
    "sei",
    "zazpi",
    "zortzi",
    "bederatzi",
    "hamar",
    "hamaika",
    "hamabi",
    "hamairu",
    "hamalau",
    "hamabost",
    "hamasei",
    "hamazazpi",
    "hamazortzi",
    "hemeretzi",
];

/// Multiples of twenty: entry `i` spells `(i + 1) * 20`.
pub const TWENTIES: [&str; 4] = ["hogei", "berrogei", "hirurogei", "laurogei"];

/// Whole hundreds, indexed by the hundreds digit. Index 0 is unused.
pub const HUNDREDS: [&str; 10] = [
    "",
    "ehun",
    "berrehun",
    "hirurehun",
    "laurehun",
    "bostehun",
    "seiehun",
    "zazpiehun",
    "zortziehun",
    "bederatziehun",
];

/// Suffix joining a multiple of twenty to the units that follow it
/// (`hogei` + `ta ` + `bat` = `hogeita bat`).
pub const TWENTIES_JOINER: &str = "ta ";

/// The general connector word ("and").
pub const CONNECTOR: &str = "eta";

/// The word for one thousand, also used bare for exactly 1000.
pub const THOUSAND: &str = "mila";

/// Numbers up to (but excluding) this value can be spelled.
///
/// The thousands count is spelled with the hundreds rules, so the
/// largest count is 999.
pub const LIMIT: u64 = 1_000_000;
