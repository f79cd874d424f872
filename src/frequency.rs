//! The frequency (monobit) test on a bit string.
//!
//! For a uniform source, the numbers of zeros and ones should both be close to
//! half the length of the string. The deviation is measured with a
//! $\chi^2$ statistic with one degree of freedom:
//!
//! $$ \chi^2 = \frac{(n_0 - n/2)^2}{n/2} + \frac{(n_1 - n/2)^2}{n/2} $$
//!
//! > **Note**
//! > this is a sanity check of the generator, not a proof of randomness.
use tracing::debug;

use crate::BitString;

/// critical value of $\chi^2$ with one degree of freedom at 5% significance
pub const CHI_SQUARE_CRITICAL_5: f64 = 3.841458820694124;
/// critical value of $\chi^2$ with one degree of freedom at 0.1% significance
pub const CHI_SQUARE_CRITICAL_01: f64 = 10.827566170662733;

/// outcome of [`frequency_test`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyReport {
    pub zeros: usize,
    pub ones: usize,
    pub chi_square: f64,
}

impl FrequencyReport {
    /// the share of ones in the string, $0.5$ for an empty one
    pub fn ones_ratio(&self) -> f64 {
        let total = self.zeros + self.ones;
        if total == 0 {
            return 0.5;
        }
        self.ones as f64 / total as f64
    }

    /// whether the split is compatible with a uniform source at the
    /// significance level of `critical`, e.g. [`CHI_SQUARE_CRITICAL_5`]
    pub fn passes(&self, critical: f64) -> bool {
        self.chi_square <= critical
    }
}

/// counts zeros and ones in `bits` and scores the split with $\chi^2$
pub fn frequency_test(bits: &BitString) -> FrequencyReport {
    let ones = bits.count_ones();
    let zeros = bits.len() - ones;

    let chi_square = if bits.is_empty() {
        0.0
    } else {
        let expected = bits.len() as f64 / 2.0;
        let d0 = zeros as f64 - expected;
        let d1 = ones as f64 - expected;
        (d0 * d0) / expected + (d1 * d1) / expected
    };

    debug!(zeros, ones, chi_square, "frequency test");

    FrequencyReport {
        zeros,
        ones,
        chi_square,
    }
}
