//! Final score grading.

/// Tiered judgment of a final percentage.
///
/// The five bands cover `0..=100` without gaps: `0-20`, `21-40`, `41-60`,
/// `61-80` and `81-100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Novice,
    Apprentice,
    Contender,
    Expert,
    Master,
}

impl Rank {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            0..=20 => Rank::Novice,
            21..=40 => Rank::Apprentice,
            41..=60 => Rank::Contender,
            61..=80 => Rank::Expert,
            _ => Rank::Master,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rank::Novice => "Better luck next time!",
            Rank::Apprentice => "Keep practicing, you're getting there.",
            Rank::Contender => "Not bad at all!",
            Rank::Expert => "Great job, impressive knowledge!",
            Rank::Master => "Outstanding! You're a trivia master!",
        }
    }
}

/// `round(100 * score / total)`, halves rounded up. Zero when `total` is zero.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * score + total) / (2 * total)) as u32
}

/// Score summary shown once the last question has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub rank: Rank,
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            rank: Rank::from_percentage(percentage),
        }
    }
}
