/*!
# Utilities

Provides
- abstractions over [`Set`] for more flexibility in certain algorithms,
- [`IndexedSet`], a set with constant-time uniform sampling used to draw conflict edges,
- [`GeometricJumper`] for skip-sampling independent events,
- the [`Probability`] helper used to validate generator parameters.

You probably do not need to interact with this module directly.
*/

use num::{One, Zero};

pub mod geometric;
pub mod set;

pub use geometric::GeometricJumper;
pub use set::{IndexedSet, Set};

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probabilities() {
        assert!(0.0f64.is_valid_probility());
        assert!(1.0f64.is_valid_probility());
        assert!(0.25f32.is_valid_probility());
        assert!(!(-0.1f64).is_valid_probility());
        assert!(!1.5f64.is_valid_probility());
        assert!(!f64::NAN.is_valid_probility());
    }
}
