//! Russian adjective endings and the relative-adjective suffix pattern

/// Possessive endings: soft-stem `-ий/-ья/-ью/-ьи...` and hard-stem
/// `-ин-`/`-ов-` with their case and number forms
pub const POSSESSIVE_ENDINGS: &[&str] = &[
    "ий", "ья", "ью", "ьи", "ьим", "ьими", "ьих", "ьем", "ьей", "ьего", "ьему", // soft stem
    "ин", "ина", "ину", "ино", "иной", "ином", "иному", "иного", "ины", "иным", "иных", "иными",
    "ов", "ова", "ову", "ово", "овой", "овому", "овом", "ового", "овы", "овым", "овых", "овыми",
];

/// Full adjectival endings across gender, number and case
pub const QUALITATIVE_RELATIVE_ENDINGS: &[&str] = &[
    "ый", "ым", "ий", "им", "ой", "ом", "ей", "ем", "ая", "яя", "ую", "юю", "ого", "его", "ему",
    "ому", "ые", "ых", "ие", "их", "ыми", "ими",
];

/// Stem, relative-forming suffix, then a two- or three-letter inflection.
///
/// Matched against the start of the word only; trailing characters after
/// the inflection are allowed.
pub const RELATIVE_PATTERN: &str = r"^[а-я]+(?:[ео]нн|(?:те)?льн|(?:ин|ен|ов|иче)ск|озн|аст|ист)[а-я]{2,3}";
