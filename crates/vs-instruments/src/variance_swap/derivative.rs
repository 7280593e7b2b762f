use vs_core::{Real, Size, Time, Variance, Volatility};
use vs_currencies::Currency;

/// A variance swap resolved as of a valuation date.
///
/// Times are year fractions measured from the valuation date and are
/// negative for dates already in the past. `observations` holds the
/// realized fixings strictly before the valuation date, in date order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VarianceSwap {
    time_to_obs_start: Time,
    time_to_obs_end: Time,
    time_to_settlement: Time,
    var_strike: Variance,
    var_notional: Real,
    currency: Currency,
    annualization_factor: Real,
    n_obs_expected: Size,
    n_obs_disrupted: Size,
    observations: Vec<Real>,
    observation_weights: Vec<Real>,
}

impl VarianceSwap {
    /// Assemble a resolved swap from its parts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        time_to_obs_start: Time,
        time_to_obs_end: Time,
        time_to_settlement: Time,
        var_strike: Variance,
        var_notional: Real,
        currency: Currency,
        annualization_factor: Real,
        n_obs_expected: Size,
        n_obs_disrupted: Size,
        observations: Vec<Real>,
        observation_weights: Vec<Real>,
    ) -> Self {
        Self {
            time_to_obs_start,
            time_to_obs_end,
            time_to_settlement,
            var_strike,
            var_notional,
            currency,
            annualization_factor,
            n_obs_expected,
            n_obs_disrupted,
            observations,
            observation_weights,
        }
    }

    /// Years from the valuation date to the first observation.
    pub fn time_to_obs_start(&self) -> Time {
        self.time_to_obs_start
    }

    /// Years from the valuation date to the last observation.
    pub fn time_to_obs_end(&self) -> Time {
        self.time_to_obs_end
    }

    /// Years from the valuation date to cash settlement.
    pub fn time_to_settlement(&self) -> Time {
        self.time_to_settlement
    }

    /// Variance strike.
    pub fn var_strike(&self) -> Variance {
        self.var_strike
    }

    /// Variance notional.
    pub fn var_notional(&self) -> Real {
        self.var_notional
    }

    /// Volatility strike, `sqrt(var_strike)`.
    pub fn vol_strike(&self) -> Volatility {
        self.var_strike.sqrt()
    }

    /// Vega notional, `2 * var_notional * vol_strike`.
    pub fn vol_notional(&self) -> Real {
        2.0 * self.var_notional * self.vol_strike()
    }

    /// Settlement currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Annualization factor.
    pub fn annualization_factor(&self) -> Real {
        self.annualization_factor
    }

    /// Observations expected over the whole window at trade inception.
    pub fn n_obs_expected(&self) -> Size {
        self.n_obs_expected
    }

    /// Good business days so far without a fixing.
    pub fn n_obs_disrupted(&self) -> Size {
        self.n_obs_disrupted
    }

    /// Number of fixings actually realized.
    pub fn n_obs_actual(&self) -> Size {
        self.observations.len()
    }

    /// Realized fixings, oldest first.
    pub fn observations(&self) -> &[Real] {
        &self.observations
    }

    /// Per-observation weights. Empty means equal weighting.
    pub fn observation_weights(&self) -> &[Real] {
        &self.observation_weights
    }
}
