//! Heuristic syllable estimation.
//!
//! Vowel-run counting with a silent-`e` correction. Not phonetically exact:
//! the algorithm is a fixed contract that readability scoring depends on,
//! so any change here shifts every downstream index.

/// Estimate the syllable count of a single word. Always at least 1.
///
/// Lower-cases the word, counts maximal runs of `a e i o u y`, subtracts
/// one when the word ends in `e` and more than one run was found, and
/// floors the result at 1. Non-letters are simply never vowels, so raw
/// tokens with attached punctuation are safe to pass.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut syllables: usize = 0;
    let mut previous_was_vowel = false;

    for ch in word.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    // Silent e
    if word.ends_with('e') && syllables > 1 {
        syllables -= 1;
    }

    syllables.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_runs() {
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("world"), 1);
        assert_eq!(count_syllables("beautiful"), 3);
    }

    #[test]
    fn silent_e_from_three_runs() {
        assert_eq!(count_syllables("example"), 2);
        assert_eq!(count_syllables("came"), 1);
    }

    #[test]
    fn silent_e_can_floor_to_one() {
        assert_eq!(count_syllables("apple"), 1);
        assert_eq!(count_syllables("the"), 1);
    }

    #[test]
    fn y_counts_as_a_vowel() {
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("happy"), 2);
    }

    #[test]
    fn never_below_one() {
        assert_eq!(count_syllables("tsk"), 1);
        assert_eq!(count_syllables("123"), 1);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(count_syllables("HELLO"), count_syllables("hello"));
    }

    #[test]
    fn punctuation_is_ignored() {
        assert_eq!(count_syllables("sat."), 1);
        assert_eq!(count_syllables("you?"), 1);
    }
}
