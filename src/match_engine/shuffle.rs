use rand::Rng;

/// Fisher-Yates shuffle into a new vector; `items` is left untouched.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let input: Vec<u32> = (0..20).collect();
        let mut out = shuffled(&input, &mut rng);
        out.sort_unstable();
        assert_eq!(out, input);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            shuffled(&(0..20).collect::<Vec<_>>(), &mut rng)
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn every_position_is_reachable() {
        // Uniformity smoke check: element 0 should land in every slot eventually.
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 6];
        for _ in 0..500 {
            let out = shuffled(&[0u8, 1, 2, 3, 4, 5], &mut rng);
            if let Some(pos) = out.iter().position(|&x| x == 0) {
                seen[pos] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "positions reached: {seen:?}");
    }

    #[test]
    fn empty_and_single_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffled::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffled(&["only"], &mut rng), vec!["only"]);
    }
}
