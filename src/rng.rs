//! src/rng.rs
//!
//! Eén geseede uniforme bron per engine of strategie. Alle keuzes die van
//! toeval afhangen — tie-breaks, componentselectie, roulette — lopen via
//! dit type, zodat een seed het volledige verloop van een run vastlegt.
//! Een kloon kopieert de streamtoestand en loopt daarna onafhankelijk door.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reproduceerbare bron van uniforme getallen, gebonden aan één seed.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Creëert een bron met de gegeven seed. Elke seed, ook 0, is geldig
    /// en volledig deterministisch.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Trekt een kans in [0, 1).
    #[inline]
    pub fn probability(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Trekt een geheel getal in het inclusieve bereik [min, max].
    #[inline]
    pub fn int_range(&mut self, min: usize, max: usize) -> usize {
        assert!(min <= max, "min mag niet groter zijn dan max");
        self.rng.gen_range(min..=max)
    }

    /// Trekt een index in [0, max). `max` moet positief zijn.
    #[inline]
    pub fn index(&mut self, max: usize) -> usize {
        assert!(max > 0, "max moet positief zijn");
        self.rng.gen_range(0..max)
    }

    /// Trekt een boolean die met kans `p` waar is.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.probability() < p
    }

    /// Breekt een gelijke stand: kiest uniform uit de kandidaten. Bij één
    /// kandidaat wordt de stream niet aangesproken.
    #[inline]
    pub fn break_tie<'a, T>(&mut self, candidates: &'a [T]) -> &'a T {
        if candidates.len() == 1 {
            &candidates[0]
        } else {
            &candidates[self.index(candidates.len())]
        }
    }
}
