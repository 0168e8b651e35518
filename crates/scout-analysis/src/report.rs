//! Keyword-driven report used when no chat completion is available.
//!
//! Everything here is deterministic except the introduction and the closing
//! tip, which are drawn from the caller's random source.

use std::fmt::Write as _;

use rand::seq::IndexedRandom;
use rand::Rng;
use scout_core::RedditPost;

use crate::lexicon::{Difficulty, Sentiment, Theme, INTRODUCTIONS, NEGATIVE_WORDS, POSITIVE_WORDS};

/// Themes mentioned anywhere in the given texts, in [`Theme::ALL`] order,
/// each at most once.
#[must_use]
pub fn extract_themes<S: AsRef<str>>(texts: &[S]) -> Vec<Theme> {
    let lowered: Vec<String> = texts.iter().map(|t| t.as_ref().to_lowercase()).collect();
    Theme::ALL
        .into_iter()
        .filter(|theme| {
            lowered
                .iter()
                .any(|text| theme.keywords().iter().any(|kw| text.contains(kw)))
        })
        .collect()
}

/// +1 for every (text, positive word) hit, -1 for every (text, negative word) hit.
#[must_use]
pub fn analyze_sentiment<S: AsRef<str>>(contents: &[S]) -> Sentiment {
    let mut score: i64 = 0;
    for content in contents {
        let text = content.as_ref().to_lowercase();
        score += count_hits(&text, &POSITIVE_WORDS);
        score -= count_hits(&text, &NEGATIVE_WORDS);
    }

    match score {
        s if s > 0 => Sentiment::Positive,
        s if s < 0 => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}

/// Tier with strictly the most keyword hits. `Medium` holds on ties,
/// including when nothing matches at all.
#[must_use]
pub fn assess_difficulty<S: AsRef<str>>(contents: &[S]) -> Difficulty {
    let lowered: Vec<String> = contents
        .iter()
        .map(|c| c.as_ref().to_lowercase())
        .collect();

    let mut best = Difficulty::Medium;
    let mut best_count = 0;
    for tier in Difficulty::ALL {
        let count: i64 = lowered
            .iter()
            .map(|text| count_hits(text, tier.keywords()))
            .sum();
        if count > best_count {
            best = tier;
            best_count = count;
        }
    }
    best
}

fn count_hits(text: &str, words: &[&str]) -> i64 {
    let hits = words.iter().filter(|w| text.contains(*w)).count();
    i64::try_from(hits).unwrap_or(i64::MAX)
}

/// Build the full report for `posts`.
///
/// Themes scan titles and bodies; sentiment and difficulty scan bodies only.
pub fn generate_report<R: Rng + ?Sized>(posts: &[RedditPost], rng: &mut R) -> String {
    let contents: Vec<&str> = posts.iter().map(|p| p.selftext.as_str()).collect();
    let texts: Vec<&str> = posts
        .iter()
        .map(|p| p.title.as_str())
        .chain(contents.iter().copied())
        .collect();

    let themes = extract_themes(&texts);
    let sentiment = analyze_sentiment(&contents);
    let difficulty = assess_difficulty(&contents);

    let intro = INTRODUCTIONS.choose(rng).copied().unwrap_or(INTRODUCTIONS[0]);
    let tips = sentiment.tips();
    let tip = tips.choose(rng).copied().unwrap_or(tips[0]);

    let mut report = String::from(intro);
    report.push_str("\n🔥 Key Takeaways:\n");
    for (index, theme) in themes.iter().enumerate() {
        let _ = writeln!(report, "{}. {}", index + 1, theme.advice());
    }
    let _ = writeln!(report, "\n🎯 Difficulty Level: {difficulty}");
    let _ = write!(report, "\n💡 Pro Tip: {tip} {}", difficulty.remark());
    report
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn post(title: &str, selftext: &str) -> RedditPost {
        RedditPost {
            id: title.to_string(),
            title: title.to_string(),
            url: "https://www.reddit.com/r/ClashOfClans/comments/x/".to_string(),
            author: "chief".to_string(),
            num_comments: 0,
            created: 0,
            score: 0,
            selftext: selftext.to_string(),
            thumbnail: None,
        }
    }

    fn takeaways(report: &str) -> Vec<&str> {
        report
            .lines()
            .skip_while(|l| !l.contains("Key Takeaways"))
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn themes_follow_enumeration_order_and_dedupe() {
        let texts = ["Upgrade order for TH10", "Wall upgrades first", "Raid tips"];
        assert_eq!(
            extract_themes(&texts),
            vec![Theme::Attack, Theme::Defense, Theme::Upgrade]
        );
    }

    #[test]
    fn themes_match_case_insensitively() {
        assert_eq!(extract_themes(&["ARCHER QUEEN"]), vec![Theme::Heroes]);
    }

    #[test]
    fn no_texts_means_no_themes() {
        let empty: [&str; 0] = [];
        assert!(extract_themes(&empty).is_empty());
    }

    #[test]
    fn sentiment_counts_every_word_hit() {
        // "best" and "easy" (+2) outweigh "hard" (-1).
        assert_eq!(
            analyze_sentiment(&["best and easy, not hard"]),
            Sentiment::Positive
        );
        assert_eq!(
            analyze_sentiment(&["they nerfed it", "weak now"]),
            Sentiment::Negative
        );
        assert_eq!(analyze_sentiment(&["great", "fail"]), Sentiment::Neutral);
        assert_eq!(analyze_sentiment(&[""]), Sentiment::Neutral);
    }

    #[test]
    fn difficulty_defaults_to_medium_without_hits() {
        assert_eq!(assess_difficulty(&["hog riders go brr"]), Difficulty::Medium);
        let empty: [&str; 0] = [];
        assert_eq!(assess_difficulty(&empty), Difficulty::Medium);
    }

    #[test]
    fn difficulty_picks_strict_maximum() {
        assert_eq!(
            assess_difficulty(&["a simple beginner plan"]),
            Difficulty::Easy
        );
        assert_eq!(
            assess_difficulty(&["advanced and challenging", "easy"]),
            Difficulty::Hard
        );
    }

    #[test]
    fn difficulty_tie_keeps_earlier_winner() {
        // Easy reaches 1 first; Hard's 1 is not strictly greater.
        assert_eq!(assess_difficulty(&["easy", "hard"]), Difficulty::Easy);
    }

    #[test]
    fn defense_only_posts_produce_single_takeaway() {
        let posts = vec![post("Anti-3 base layout with walls", "")];
        let mut rng = StdRng::seed_from_u64(7);
        let report = generate_report(&posts, &mut rng);
        assert_eq!(
            takeaways(&report),
            vec![format!("1. {}", Theme::Defense.advice())]
        );
    }

    #[test]
    fn report_draws_from_fixed_pools() {
        let posts = vec![post("Queen walk", "This is the best and most effective plan")];
        let mut rng = StdRng::seed_from_u64(42);
        let report = generate_report(&posts, &mut rng);

        let first_line = report.lines().next().expect("intro line");
        assert!(INTRODUCTIONS.contains(&first_line));
        assert!(report.contains("🎯 Difficulty Level: Medium"));

        let tip_line = report
            .lines()
            .find(|l| l.starts_with("💡 Pro Tip: "))
            .expect("tip line");
        assert!(
            Sentiment::Positive
                .tips()
                .iter()
                .any(|tip| tip_line == format!("💡 Pro Tip: {tip} {}", Difficulty::Medium.remark())),
            "unexpected tip line: {tip_line}"
        );
    }

    #[test]
    fn same_seed_gives_same_report() {
        let posts = vec![post("Dragon attack", "hard but effective")];
        let a = generate_report(&posts, &mut StdRng::seed_from_u64(3));
        let b = generate_report(&posts, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_post_set_still_produces_a_report() {
        let report = generate_report(&[], &mut StdRng::seed_from_u64(1));
        assert!(report.contains("Key Takeaways"));
        assert!(takeaways(&report).is_empty());
        assert!(report.contains("Difficulty Level: Medium"));
    }
}
