//! src/stop.rs
//!
//! Stopcriteria voor de memetische zoektocht. Elk criterium is een
//! predicaat over het beste objectief tot dusver; het wordt gepolst tussen
//! generaties en, voor tijdgebonden criteria, tijdens de initialisatie van
//! de populatie. `CombinedCriterion` combineert meerdere criteria met OR.

use crate::error::{Error, Result};
use std::time::Instant;

/// Predicaat dat bepaalt wanneer de zoektocht stopt.
pub trait StoppingCriterion {
    /// Geeft aan of de zoektocht moet stoppen, gegeven het beste objectief.
    fn should_stop(&mut self, best_obj_value: f64) -> bool;

    /// Naam van het criterium, voor identificatie door de aanroeper.
    fn name(&self) -> &'static str;
}

/// Stopt wanneer het aantal polsbeurten een maximum bereikt.
#[derive(Clone, Debug)]
pub struct MaxIterations {
    max_iterations: usize,
    iterations: usize,
}

impl MaxIterations {
    pub fn new(max_iterations: usize) -> Result<Self> {
        if max_iterations == 0 {
            return Err(Error::InvalidArgument(
                "max_iterations must be a positive integer".into(),
            ));
        }
        Ok(Self {
            max_iterations,
            iterations: 0,
        })
    }
}

impl StoppingCriterion for MaxIterations {
    fn should_stop(&mut self, _best_obj_value: f64) -> bool {
        self.iterations += 1;
        self.iterations >= self.max_iterations
    }

    fn name(&self) -> &'static str {
        "MaxIterations"
    }
}

/// Stopt wanneer de muurkloktijd sinds constructie een limiet overschrijdt.
#[derive(Clone, Debug)]
pub struct MaxRuntime {
    max_runtime_seconds: f64,
    start_time: Instant,
}

impl MaxRuntime {
    pub fn new(max_runtime_seconds: f64) -> Result<Self> {
        if max_runtime_seconds.is_nan() || max_runtime_seconds <= 0.0 {
            return Err(Error::InvalidArgument(
                "max_runtime_seconds must be a positive number".into(),
            ));
        }
        Ok(Self {
            max_runtime_seconds,
            start_time: Instant::now(),
        })
    }
}

impl StoppingCriterion for MaxRuntime {
    fn should_stop(&mut self, _best_obj_value: f64) -> bool {
        self.start_time.elapsed().as_secs_f64() >= self.max_runtime_seconds
    }

    fn name(&self) -> &'static str {
        "MaxRuntime"
    }
}

/// Stopt na een maximum aan opeenvolgende polsbeurten zonder verbetering.
#[derive(Clone, Debug)]
pub struct NoImprovement {
    max_idle_iterations: usize,
    idle_iterations: usize,
    last_best_obj_value: f64,
}

impl NoImprovement {
    pub fn new(max_idle_iterations: usize) -> Result<Self> {
        if max_idle_iterations == 0 {
            return Err(Error::InvalidArgument(
                "max_idle_iterations must be a positive integer".into(),
            ));
        }
        Ok(Self {
            max_idle_iterations,
            idle_iterations: 0,
            last_best_obj_value: f64::INFINITY,
        })
    }
}

impl StoppingCriterion for NoImprovement {
    fn should_stop(&mut self, best_obj_value: f64) -> bool {
        if best_obj_value < self.last_best_obj_value {
            self.last_best_obj_value = best_obj_value;
            self.idle_iterations = 0;
        } else {
            self.idle_iterations += 1;
        }
        self.idle_iterations >= self.max_idle_iterations
    }

    fn name(&self) -> &'static str {
        "NoImprovement"
    }
}

/// OR-combinatie: stopt zodra één van de leden aanslaat en onthoudt welk.
pub struct CombinedCriterion {
    criteria: Vec<Box<dyn StoppingCriterion>>,
    triggered: Option<usize>,
}

impl CombinedCriterion {
    pub fn new(criteria: Vec<Box<dyn StoppingCriterion>>) -> Result<Self> {
        if criteria.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one stopping criterion must be provided".into(),
            ));
        }
        Ok(Self {
            criteria,
            triggered: None,
        })
    }

    /// Het lid dat de stop veroorzaakte, zolang er gestopt is.
    pub fn triggered_criterion(&self) -> Option<&dyn StoppingCriterion> {
        self.triggered.map(|index| self.criteria[index].as_ref())
    }
}

impl StoppingCriterion for CombinedCriterion {
    fn should_stop(&mut self, best_obj_value: f64) -> bool {
        for (index, criterion) in self.criteria.iter_mut().enumerate() {
            if criterion.should_stop(best_obj_value) {
                self.triggered = Some(index);
                return true;
            }
        }
        false
    }

    fn name(&self) -> &'static str {
        "Combined"
    }
}
