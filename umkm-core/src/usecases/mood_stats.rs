use super::prelude::*;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodStats {
    /// Every mood in declaration order, including those without points.
    pub tally: Vec<(Mood, usize)>,
    pub most_common: Option<(Mood, usize)>,
}

impl MoodStats {
    pub fn count(&self, mood: Mood) -> usize {
        self.tally
            .iter()
            .find(|(m, _)| *m == mood)
            .map(|(_, n)| *n)
            .unwrap_or_default()
    }
}

pub fn mood_stats(points: &[Point]) -> MoodStats {
    let tally: Vec<_> = Mood::iter()
        .map(|mood| {
            let count = points.iter().filter(|p| p.mood == Some(mood)).count();
            (mood, count)
        })
        .collect();
    let most_common = tally
        .iter()
        .copied()
        .filter(|(_, count)| *count > 0)
        .fold(None, |best: Option<(Mood, usize)>, (mood, count)| match best {
            Some((_, max)) if max >= count => best,
            _ => Some((mood, count)),
        });
    MoodStats { tally, most_common }
}
