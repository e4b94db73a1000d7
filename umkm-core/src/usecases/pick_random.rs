use super::prelude::*;
use rand::{seq::SliceRandom, Rng};

/// Picks one of the points with uniform probability.
pub fn pick_random<'a, R>(points: &'a [Point], rng: &mut R) -> Option<&'a Point>
where
    R: Rng + ?Sized,
{
    points.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn pick_from_empty_list() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_random(&[], &mut rng).is_none());
    }

    #[test]
    fn pick_every_point_eventually() {
        let points: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|id| Point::build().id(id).finish())
            .collect();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let p = pick_random(&points, &mut rng).unwrap();
            seen.insert(p.id.clone());
        }
        assert_eq!(3, seen.len());
    }
}
