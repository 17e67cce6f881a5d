//! Reserved language-table keys holding diacritic settings.

/// Two-character string `ab` denoting the inclusive base range `a..=b`.
pub const JOINABLE_RANGE: &str = "diacritics_joinable_range";

pub const LEFT_JOINERS: &str = "left_joining_diacritics";

pub const RIGHT_JOINERS: &str = "right_joining_diacritics";

pub const LEFT_AND_RIGHT_JOINERS: &str = "left_and_right_joiners";

/// All reserved keys, sorted alphabetically.
pub const ALL: [&str; 4] = [
    JOINABLE_RANGE,
    LEFT_AND_RIGHT_JOINERS,
    LEFT_JOINERS,
    RIGHT_JOINERS,
];

/// True if `key` is one of the reserved diacritic setting keys.
pub fn is_setting_key(key: &str) -> bool {
    ALL.contains(&key)
}
