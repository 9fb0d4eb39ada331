//! Reading-time estimates

/// Words per minute assumed when nothing else is configured
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Count whitespace-separated tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated minutes to read `text`, rounded up.
///
/// Empty text reads in 0 minutes. A `words_per_minute` of 0 falls back to
/// [`DEFAULT_WORDS_PER_MINUTE`].
pub fn reading_time(text: &str, words_per_minute: usize) -> usize {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    word_count(text).div_ceil(wpm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("one  two\nthree\tfour"), 4);
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(&words(250), 200), 2);
        assert_eq!(reading_time(&words(199), 200), 1);
        assert_eq!(reading_time(&words(200), 200), 1);
        assert_eq!(reading_time(&words(201), 200), 2);
        assert_eq!(reading_time(&words(1), 200), 1);
        assert_eq!(reading_time("", 200), 0);
    }

    #[test]
    fn test_zero_wpm_uses_default() {
        assert_eq!(reading_time(&words(400), 0), 2);
    }
}
