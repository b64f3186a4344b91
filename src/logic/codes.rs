use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::config::{LayoutConfig, MAX_COMPOUND_SUFFIX};
use crate::error::{LayoutError, Result};

fn letters() -> impl Iterator<Item = char> {
    'A'..='Z'
}

/// Splits a well-formed code into its letter and suffix digits
/// (`"B12"` -> `('B', "12")`, `"B"` -> `('B', "")`).
fn split_code(code: &str) -> Option<(char, &str)> {
    let mut chars = code.chars();
    let letter = chars.next().filter(char::is_ascii_uppercase)?;
    let digits = chars.as_str();
    let well_formed = digits.is_empty()
        || (!digits.starts_with('0') && digits.bytes().all(|b| b.is_ascii_digit()));
    well_formed.then_some((letter, digits))
}

/// True for one uppercase letter optionally followed by a positive integer
/// without leading zero: `A`, `B7`, `Z120`.
pub fn is_valid_letter_code(code: &str) -> bool {
    split_code(code).is_some()
}

/// Total order over codes: letter, then bare before compound, then numeric
/// suffix. Codes that fail validation sort after all valid ones, by text.
pub fn compare_letter_codes(a: &str, b: &str) -> Ordering {
    match (split_code(a), split_code(b)) {
        // Suffixes have no leading zeros, so a longer digit string is a larger number.
        (Some((la, da)), Some((lb, db))) => la
            .cmp(&lb)
            .then_with(|| da.len().cmp(&db.len()))
            .then_with(|| da.cmp(db)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Returns the codes in display order (`A`, `A1`, `A2`, `A10`, `B`, ...).
pub fn sort_letter_codes<S: AsRef<str>>(codes: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = codes.iter().map(|c| c.as_ref().to_string()).collect();
    sorted.sort_by(|a, b| compare_letter_codes(a, b));
    sorted
}

/// Codes in the snapshot that are not well formed, in input order.
pub fn find_invalid_codes<S: AsRef<str>>(codes: &[S]) -> Vec<String> {
    codes
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| !is_valid_letter_code(c))
        .map(String::from)
        .collect()
}

/// Codes occurring more than once in the snapshot, in display order.
pub fn find_duplicate_codes<S: AsRef<str>>(codes: &[S]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for code in codes.iter().map(AsRef::as_ref) {
        if !seen.insert(code) {
            duplicates.insert(code);
        }
    }
    sort_letter_codes(&duplicates.into_iter().collect::<Vec<_>>())
}

/// Picks the next free bed code for a garden from a snapshot of its codes.
///
/// While every letter in use carries the same number of compound codes and
/// some letter is still unused, the next bare letter is handed out. Otherwise
/// the least used letter (alphabetical on ties) gets its next compound code.
#[derive(Debug, Clone, Copy)]
pub struct CodeAllocator {
    max_compound_suffix: u32,
}

impl Default for CodeAllocator {
    fn default() -> Self {
        Self::new(MAX_COMPOUND_SUFFIX)
    }
}

impl CodeAllocator {
    pub fn new(max_compound_suffix: u32) -> Self {
        Self {
            max_compound_suffix,
        }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(config.max_compound_suffix)
    }

    /// The result is only a candidate: callers must write it under a
    /// per-garden uniqueness constraint and retry with a fresh snapshot on
    /// conflict.
    pub fn next_code<S: AsRef<str>>(&self, existing: &[S]) -> Result<String> {
        let taken: BTreeSet<&str> = existing.iter().map(AsRef::as_ref).collect();

        // letter -> number of compound codes under it
        let mut depth: BTreeMap<char, u32> = BTreeMap::new();
        for code in &taken {
            match split_code(code) {
                Some((letter, digits)) => {
                    let count = depth.entry(letter).or_insert(0);
                    if !digits.is_empty() {
                        *count = count.saturating_add(1);
                    }
                }
                None => warn!("ignoring malformed bed code {code:?} in allocation snapshot"),
            }
        }

        let uniform = depth.values().min() == depth.values().max();
        let unused = letters().find(|l| !depth.contains_key(l));
        if let (true, Some(letter)) = (uniform, unused) {
            debug!("allocating bare bed code {letter}");
            return Ok(letter.to_string());
        }

        let mut by_depth: Vec<(u32, char)> = depth.iter().map(|(l, n)| (*n, *l)).collect();
        by_depth.sort_unstable();

        for (count, letter) in by_depth {
            if let Some(code) = self.free_compound(letter, count, &taken) {
                debug!("allocating compound bed code {code} (letter {letter} had {count})");
                return Ok(code);
            }
        }

        // Compound slots are full; a bare letter may still be free, including
        // one whose letter only appears in compound codes.
        if let Some(letter) = letters().find(|l| !taken.contains(l.to_string().as_str())) {
            debug!("compound slots full, allocating bare bed code {letter}");
            return Ok(letter.to_string());
        }

        Err(LayoutError::CapacityExceeded {
            max_suffix: self.max_compound_suffix,
        })
    }

    /// First free suffix from `count + 1` up to the cap, then any gap below.
    fn free_compound(&self, letter: char, count: u32, taken: &BTreeSet<&str>) -> Option<String> {
        let start = count.saturating_add(1);
        let max = self.max_compound_suffix;
        (start..=max)
            .chain(1..start.min(max.saturating_add(1)))
            .map(|n| format!("{letter}{n}"))
            .find(|code| !taken.contains(code.as_str()))
    }
}

/// Next bed code for `existing` with the default suffix cap.
pub fn generate_next_letter_code<S: AsRef<str>>(existing: &[S]) -> Result<String> {
    CodeAllocator::default().next_code(existing)
}
