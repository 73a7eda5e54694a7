//! Decoy words that use up the space the real words left over.

use log::debug;
use rand::Rng;

use crate::difficulty::Difficulty;

/// Hard decoys built from a word's halves are cut to this many letters.
const MAX_ROTATED_LEN: usize = 8;

/// The vocabulary that medium and hard decoys are drawn from.
pub const STATIC_WORDS: [&str; 49] = [
    "closed",
    "haunt",
    "woman",
    "zephyr",
    "wacky",
    "acrid",
    "dinner",
    "intelligent",
    "reading",
    "mean",
    "sidewalk",
    "pour",
    "destroy",
    "quicksand",
    "wholesale",
    "accurate",
    "seemly",
    "remember",
    "berry",
    "shiny",
    "turn",
    "needless",
    "zoom",
    "fly",
    "mitten",
    "synonymous",
    "wealthy",
    "sassy",
    "angle",
    "cabbage",
    "sordid",
    "nutty",
    "coal",
    "crazy",
    "pig",
    "brass",
    "blood",
    "comfortable",
    "island",
    "note",
    "snobbish",
    "smile",
    "barbarous",
    "crib",
    "rail",
    "curl",
    "paste",
    "part",
    "sulky",
];

/// Whether `word` is one of the [`STATIC_WORDS`], ignoring case.
pub fn is_static_word(word: &str) -> bool {
    STATIC_WORDS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(word))
}

/// Returns uppercase decoy words whose letters add up to at least `remaining`.
///
/// Easy puzzles get no decoys. Hard puzzles first get one fragment per real word: the word is
/// split at a random point, equal halves are swapped, otherwise the first half is kept. Medium and
/// hard puzzles are then topped up with words from [`STATIC_WORDS`], the last one cut short so the
/// letter count lands exactly on `remaining`.
///
/// The count is in letters, not in grid cells, so overlaps when the decoys are placed mean the
/// grid may end up fuller or emptier than this suggests.
pub fn dummy_words<S: AsRef<str>, R: Rng + ?Sized>(
    real_words: &[S],
    remaining: usize,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<String> {
    if difficulty == Difficulty::Easy {
        return Vec::new();
    }

    let mut decoys = Vec::new();
    let mut total = 0;

    if difficulty == Difficulty::Hard {
        for word in real_words {
            if let Some(fragment) = split_fragment(word.as_ref(), rng) {
                total += fragment.chars().count();
                decoys.push(fragment);
            }
        }
    }

    while total < remaining {
        let word = STATIC_WORDS[rng.gen_range(0..STATIC_WORDS.len())];
        let room = remaining - total;

        let decoy: String = word.chars().take(room).collect::<String>().to_uppercase();
        total += decoy.chars().count();
        decoys.push(decoy);
    }

    debug!("{difficulty} decoys for {remaining} letters: {decoys:?}");
    decoys
}

/// Splits `word` at a random point strictly inside it. Words shorter than two letters have no such
/// point and give no fragment.
fn split_fragment<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Option<String> {
    let letters: Vec<char> = word.chars().collect();
    if letters.len() < 2 {
        return None;
    }

    let split = rng.gen_range(1..letters.len());
    let (prefix, suffix) = letters.split_at(split);

    let fragment: String = if prefix.len() == suffix.len() {
        suffix
            .iter()
            .chain(prefix)
            .take(MAX_ROTATED_LEN)
            .collect()
    } else {
        prefix.iter().collect()
    };

    Some(fragment.to_uppercase())
}
