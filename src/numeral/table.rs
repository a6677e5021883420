/// A named number with a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeEntry {
    pub word:  &'static str,
    pub value: u64,
}

const fn entry(word: &'static str, value: u64) -> MagnitudeEntry {
    MagnitudeEntry { word, value }
}

/// Numbers with fixed English names, largest first.
///
/// Larger powers of one thousand are named by
/// [`latin::group_name`](crate::numeral::latin::group_name).
pub const MAGNITUDE_TABLE: &[MagnitudeEntry] = &[entry("Million", 1_000_000),
                                                 entry("Thousand", 1000),
                                                 entry("Hundred", 100),
                                                 entry("Ninety", 90),
                                                 entry("Eighty", 80),
                                                 entry("Seventy", 70),
                                                 entry("Sixty", 60),
                                                 entry("Fifty", 50),
                                                 entry("Forty", 40),
                                                 entry("Thirty", 30),
                                                 entry("Twenty", 20),
                                                 entry("Nineteen", 19),
                                                 entry("Eighteen", 18),
                                                 entry("Seventeen", 17),
                                                 entry("Sixteen", 16),
                                                 entry("Fifteen", 15),
                                                 entry("Fourteen", 14),
                                                 entry("Thirteen", 13),
                                                 entry("Twelve", 12),
                                                 entry("Eleven", 11),
                                                 entry("Ten", 10),
                                                 entry("Nine", 9),
                                                 entry("Eight", 8),
                                                 entry("Seven", 7),
                                                 entry("Six", 6),
                                                 entry("Five", 5),
                                                 entry("Four", 4),
                                                 entry("Three", 3),
                                                 entry("Two", 2),
                                                 entry("One", 1)];

/// Values below this are spelled from the table alone.
pub const TABLE_LIMIT: u64 = 1_000_000_000;

/// The largest entry not exceeding `n`, for `n >= 1`.
#[must_use]
pub fn largest_at_most(n: u64) -> Option<&'static MagnitudeEntry> {
    MAGNITUDE_TABLE.iter().find(|e| e.value <= n)
}

/// Looks a word up in the table, ignoring case.
#[must_use]
pub fn find_word(word: &str) -> Option<&'static MagnitudeEntry> {
    MAGNITUDE_TABLE.iter().find(|e| e.word.eq_ignore_ascii_case(word))
}
