//! Phrase pools and keyword buckets behind the local report.
//!
//! All keywords are lowercase and matched as substrings of lowercased text.

pub const INTRODUCTIONS: [&str; 5] = [
    "Alright, let me break this down for you in a way that won't put you to sleep:",
    "Listen up, because I'm about to drop some knowledge that might actually be useful:",
    "Let's cut through the noise and get to what actually works:",
    "Time to separate the good advice from the 'I-watched-one-YouTube-video' advice:",
    "Here's what the pros won't tell you (but I will):",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Attack,
    Defense,
    Resources,
    Troops,
    Heroes,
    Clan,
    Upgrade,
}

impl Theme {
    /// Enumeration order, which is also the order takeaways are listed in.
    pub const ALL: [Theme; 7] = [
        Theme::Attack,
        Theme::Defense,
        Theme::Resources,
        Theme::Troops,
        Theme::Heroes,
        Theme::Clan,
        Theme::Upgrade,
    ];

    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Theme::Attack => &[
                "attack", "raid", "push", "offense", "strategy", "combo", "funnel",
            ],
            Theme::Defense => &[
                "defense", "base", "layout", "protect", "wall", "trap", "inferno",
            ],
            Theme::Resources => &["farm", "loot", "gold", "elixir", "dark", "gem", "pass"],
            Theme::Troops => &["troops", "army", "composition", "spells", "siege", "pet"],
            Theme::Heroes => &["hero", "king", "queen", "warden", "champion", "ability"],
            Theme::Clan => &["clan", "war", "league", "capital", "clan games"],
            Theme::Upgrade => &["upgrade", "level", "max", "priority", "order"],
        }
    }

    #[must_use]
    pub fn advice(self) -> &'static str {
        match self {
            Theme::Attack => "Attack Strategy: Master the art of funneling and timing your spells",
            Theme::Defense => {
                "Base Defense: Protect your resources and Town Hall with a well-designed layout"
            }
            Theme::Resources => {
                "Resource Management: Balance farming and upgrades for optimal progress"
            }
            Theme::Troops => {
                "Army Composition: Match troops to your strategy and upgrade priorities"
            }
            Theme::Heroes => {
                "Hero Usage: Level up and time your hero abilities for maximum impact"
            }
            Theme::Clan => "Clan Strategy: Participate in wars and events for better rewards",
            Theme::Upgrade => "Upgrade Priority: Focus on key defenses and troops first",
        }
    }
}

pub const POSITIVE_WORDS: [&str; 6] = ["best", "great", "effective", "success", "win", "easy"];
pub const NEGATIVE_WORDS: [&str; 6] = ["hard", "difficult", "fail", "struggle", "nerf", "weak"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    #[must_use]
    pub fn tips(self) -> &'static [&'static str; 3] {
        match self {
            Sentiment::Positive => &[
                "If it's working, don't fix it. Unless it's your base layout, then definitely fix it.",
                "Success in Clash is like a good meme - it's all about timing and execution.",
                "The best strategy is the one you can actually pull off without panicking.",
            ],
            Sentiment::Negative => &[
                "If at first you don't succeed, blame the matchmaking algorithm.",
                "Remember, even the pros started by accidentally deploying all their troops at once.",
                "Your base might be getting three-starred, but at least you're not using the default layout.",
            ],
            Sentiment::Neutral => &[
                "The only thing more predictable than a three-star attack is a one-star defense.",
                "Your heroes are like your ex - they're never ready when you need them.",
                "If you're still using the same strategy from 2015, it's time to evolve, my friend.",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tier order used when counting hits.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => &["easy", "simple", "basic", "beginner"],
            Difficulty::Medium => &["moderate", "average", "standard"],
            Difficulty::Hard => &["hard", "difficult", "challenging", "advanced"],
        }
    }

    #[must_use]
    pub fn remark(self) -> &'static str {
        match self {
            Difficulty::Easy => "Even a training dummy could pull this off.",
            Difficulty::Medium => "Not too easy, not too hard - just the way we like it.",
            Difficulty::Hard => {
                "This is where the real players separate themselves from the casuals."
            }
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}
