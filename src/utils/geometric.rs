/*!
Geometric skip-sampling.

Selecting each element of `0..stop` independently with probability `p` does not require a coin
flip per element: the gaps between selected elements are geometrically distributed. For `p > 1/2`
the gaps between *unselected* elements are sampled instead, so the number of draws never exceeds
`min(p, 1 - p) * stop` in expectation.
*/

use rand::Rng;
use rand_distr::{Distribution, Geometric, StandardGeometric};

use crate::{
    error::*,
    utils::Probability,
};

/// A geometric distribution.
/// As the case for `p = 1/2` can be siginificantly sped up by using `StandardGeometric` instead of
/// `Geometric`, we abstract over both using an enum.
#[derive(Debug, Copy, Clone)]
pub enum GeometricDistribution {
    /// General geometric distribution
    General(Geometric),
    /// Geometric distribution for `p = 1/2`
    OneHalf(StandardGeometric),
}

impl Distribution<u64> for GeometricDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match self {
            GeometricDistribution::General(distr) => distr.sample(rng),
            GeometricDistribution::OneHalf(distr) => distr.sample(rng),
        }
    }
}

impl GeometricDistribution {
    /// Creates a new geometric distribution from a given probability
    pub fn from_prob(prob: f64) -> Result<Self> {
        if prob == 0.5 {
            return Ok(Self::OneHalf(StandardGeometric));
        }

        Geometric::new(prob)
            .map(Self::General)
            .map_err(|err| GraphError::invalid("prob", err.to_string()))
    }
}

/// Selects every element of `0..stop` independently with probability `prob`.
#[derive(Debug, Copy, Clone)]
pub struct GeometricJumper {
    distr: GeometricDistribution,
    /// If set, `distr` samples the gaps between elements that are *not* selected
    inverted: bool,
    stop: u64,
}

impl GeometricJumper {
    /// Creates a new jumper over `0..stop`.
    /// Fails with [`GraphError::InvalidArgument`] if `prob` is not a valid probability.
    pub fn new(prob: f64, stop: u64) -> Result<Self> {
        if !prob.is_valid_probility() {
            return Err(GraphError::invalid(
                "prob",
                format!("{prob} is not within [0, 1]"),
            ));
        }

        let inverted = prob > 0.5;
        let distr = GeometricDistribution::from_prob(if inverted { 1.0 - prob } else { prob })?;

        Ok(Self {
            distr,
            inverted,
            stop,
        })
    }

    /// Creates an iterator over the selected elements in increasing order
    pub fn iter<R: Rng>(self, rng: &mut R) -> GeometricJumperIter<'_, R> {
        let next_skip = if self.inverted {
            rng.sample(self.distr)
        } else {
            0
        };

        GeometricJumperIter {
            jumper: self,
            rng,
            cur: 0,
            next_skip,
        }
    }
}

/// Iterator returned by [`GeometricJumper::iter`]
#[derive(Debug)]
pub struct GeometricJumperIter<'a, R>
where
    R: Rng,
{
    jumper: GeometricJumper,
    rng: &'a mut R,
    cur: u64,
    /// Next element that is not selected (only used if inverted)
    next_skip: u64,
}

impl<R> Iterator for GeometricJumperIter<'_, R>
where
    R: Rng,
{
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let stop = self.jumper.stop;

        if !self.jumper.inverted {
            let jump = self.rng.sample(self.jumper.distr);
            let x = self.cur.checked_add(jump).filter(|&x| x < stop);
            self.cur = x.map_or(stop, |x| x + 1);
            return x;
        }

        while self.cur < stop {
            let x = self.cur;
            self.cur += 1;

            if x < self.next_skip {
                return Some(x);
            }

            self.next_skip = self
                .cur
                .saturating_add(self.rng.sample(self.jumper.distr));
        }

        None
    }
}
