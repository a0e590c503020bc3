//! Name Collation
//!
//! Locale-aware ordering and case folding for item names. Names are mostly
//! Turkish, so letters follow the Turkish alphabet (ç after c, ğ after g,
//! dotless ı before i, ö after o, ş after s, ü after u).

use std::cmp::Ordering;

const ALPHABET: &str = "abcçdefgğhıijklmnoöpqrsştuüvwxyz";

const SEPARATOR_WEIGHT: u32 = 1;
const DIGIT_BASE: u32 = 10;
const LETTER_BASE: u32 = 100;
const OTHER_BASE: u32 = 1_000;

/// Lowercase a single char with Turkish rules for I and İ
fn lower_tr(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Strip accents that are not letters of their own in Turkish
fn base_letter(c: char) -> (char, bool) {
    let base = match c {
        'â' | 'á' | 'à' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'î' | 'í' | 'ì' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' => 'o',
        'ú' | 'ù' | 'û' => 'u',
        'ñ' => 'n',
        _ => return (c, false),
    };
    (base, true)
}

fn primary_weight(lower: char) -> u32 {
    if lower.is_whitespace() || lower.is_ascii_punctuation() {
        return SEPARATOR_WEIGHT;
    }
    if let Some(d) = lower.to_digit(10) {
        return DIGIT_BASE + d;
    }
    match ALPHABET.chars().position(|a| a == lower) {
        Some(rank) => LETTER_BASE + rank as u32,
        None => OTHER_BASE + lower as u32,
    }
}

/// Comparison key for one name: (primary, accent, case) per char
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollationKey {
    primary: Vec<u32>,
    secondary: Vec<bool>,
    tertiary: Vec<bool>,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        let mut primary = Vec::with_capacity(s.len());
        let mut secondary = Vec::with_capacity(s.len());
        let mut tertiary = Vec::with_capacity(s.len());

        for c in s.chars() {
            let lower = lower_tr(c);
            let (base, accented) = base_letter(lower);
            primary.push(primary_weight(base));
            secondary.push(accented);
            tertiary.push(lower != c);
        }

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.primary
            .cmp(&other.primary)
            .then_with(|| self.secondary.cmp(&other.secondary))
            .then_with(|| self.tertiary.cmp(&other.tertiary))
    }
}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Locale-aware name comparison; falls back to code point order on full ties
pub fn compare_names(a: &str, b: &str) -> Ordering {
    CollationKey::new(a)
        .cmp(&CollationKey::new(b))
        .then_with(|| a.cmp(b))
}

/// Case folding for substring search. The four Turkish i forms fold to the
/// same letter so "kirmizi" finds "Kırmızı" and "IŞIK" finds "ışık".
pub fn fold_for_search(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'I' | 'İ' | 'ı' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}
