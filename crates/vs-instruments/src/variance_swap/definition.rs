use super::derivative::VarianceSwap;
use crate::instrument::Instrument;
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{debug, trace, warn};
use vs_core::errors::{Error, Result};
use vs_core::{ensure_not_negative, Real, Size, TimeSeries, Variance, Volatility};
use vs_currencies::Currency;
use vs_time::{ActualActualTimeCalculator, Calendar, Frequency, Period, TimeCalculator};

/// Count the good business days in `[start, end]`, visiting one date per
/// `freq` period starting at `start`.
///
/// Returns 0 when `start > end`.
///
/// # Errors
/// * [`Error::UnsupportedConfiguration`] if `freq` has no forward step
///   (`NoFrequency`, `Once`, `OtherFrequency`).
/// * [`Error::Date`] if stepping runs past the supported date range.
pub fn count_expected_good_days(
    start: NaiveDate,
    end: NaiveDate,
    calendar: &dyn Calendar,
    freq: Frequency,
) -> Result<Size> {
    let period = Period::from_frequency(freq)
        .ok()
        .filter(Period::is_positive)
        .ok_or_else(|| {
            Error::UnsupportedConfiguration(format!(
                "cannot step through observation dates with frequency {freq}"
            ))
        })?;
    let mut n_good = 0;
    let mut date = start;
    while date <= end {
        if calendar.is_business_day(date) {
            n_good += 1;
        }
        date = period.advance(date)?;
    }
    trace!(%start, %end, calendar = calendar.name(), n_good, "counted good days");
    Ok(n_good)
}

/// The static terms of a variance swap.
///
/// The variance strike and notional are derived from the vega terms once,
/// at construction:
///
/// * `var_strike = vol_strike²`
/// * `var_notional = 0.5 * vol_notional / vol_strike`, so that the payoff
///   moves by roughly `vol_notional` if volatility realizes one point above
///   the strike.
///
/// Equality and hashing cover the schedule dates, currency, calendar, vol
/// strike, vol notional, and annualization factor. Calendars are compared
/// with [`Calendar::same_as`], so two contracts on differently populated
/// holiday calendars are never equal. Floats are compared bitwise.
#[derive(Debug, Clone)]
pub struct VarianceSwapDefinition {
    currency: Currency,
    vol_strike: Volatility,
    vol_notional: Real,
    var_strike: Variance,
    var_notional: Real,
    obs_start_date: DateTime<FixedOffset>,
    obs_end_date: DateTime<FixedOffset>,
    settlement_date: DateTime<FixedOffset>,
    obs_freq: Frequency,
    n_obs_expected: Size,
    annualization_factor: Real,
    calendar: Arc<dyn Calendar>,
}

impl VarianceSwapDefinition {
    /// Create a definition from the vega (volatility) parameterization.
    ///
    /// `annualization_factor` is the number of observations per year used to
    /// annualize realized variance (typically 252).
    ///
    /// No guard is applied to `vol_strike`: a zero strike produces an
    /// infinite variance notional.
    ///
    /// # Errors
    /// * [`Error::UnsupportedConfiguration`] if `obs_freq` is not daily.
    /// * [`Error::InvalidArgument`] if the observation window ends before it
    ///   starts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        obs_start_date: DateTime<FixedOffset>,
        obs_end_date: DateTime<FixedOffset>,
        settlement_date: DateTime<FixedOffset>,
        obs_freq: Frequency,
        currency: Currency,
        calendar: Arc<dyn Calendar>,
        annualization_factor: Real,
        vol_strike: Volatility,
        vol_notional: Real,
    ) -> Result<Self> {
        // TODO: step weekly / monthly observation schedules once the
        // disruption count is defined for them.
        if !obs_freq.is_daily() {
            return Err(Error::UnsupportedConfiguration(format!(
                "only daily observation frequencies are supported, got {obs_freq}"
            )));
        }
        if obs_start_date > obs_end_date {
            return Err(Error::InvalidArgument(format!(
                "observation window starts ({obs_start_date}) after it ends ({obs_end_date})"
            )));
        }
        if settlement_date < obs_end_date {
            warn!(
                %obs_end_date,
                %settlement_date,
                "variance swap settles before its last observation"
            );
        }

        let n_obs_expected = count_expected_good_days(
            obs_start_date.date_naive(),
            obs_end_date.date_naive(),
            calendar.as_ref(),
            obs_freq,
        )?;
        let var_strike = vol_strike * vol_strike;
        let var_notional = 0.5 * vol_notional / vol_strike;

        debug!(
            %currency,
            %obs_start_date,
            %obs_end_date,
            calendar = calendar.name(),
            n_obs_expected,
            var_strike,
            var_notional,
            "created variance swap definition"
        );

        Ok(Self {
            currency,
            vol_strike,
            vol_notional,
            var_strike,
            var_notional,
            obs_start_date,
            obs_end_date,
            settlement_date,
            obs_freq,
            n_obs_expected,
            annualization_factor,
            calendar,
        })
    }

    /// Create a definition from a vega strike and vega notional.
    ///
    /// Same as [`VarianceSwapDefinition::new`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_vega_params(
        obs_start_date: DateTime<FixedOffset>,
        obs_end_date: DateTime<FixedOffset>,
        settlement_date: DateTime<FixedOffset>,
        obs_freq: Frequency,
        currency: Currency,
        calendar: Arc<dyn Calendar>,
        annualization_factor: Real,
        vol_strike: Volatility,
        vol_notional: Real,
    ) -> Result<Self> {
        Self::new(
            obs_start_date,
            obs_end_date,
            settlement_date,
            obs_freq,
            currency,
            calendar,
            annualization_factor,
            vol_strike,
            vol_notional,
        )
    }

    /// Create a definition from a variance strike and variance notional.
    ///
    /// The vega terms are recovered as `vol_strike = sqrt(var_strike)` and
    /// `vol_notional = 2 * var_notional * vol_strike`.
    ///
    /// A zero `var_strike` is rejected rather than carried through: the
    /// recovered `vol_strike` would be zero and the variance notional
    /// derived from it `NaN`. Callers that need a zero-strike contract must
    /// build it elsewhere.
    ///
    /// # Errors
    /// * [`Error::InvalidMagnitude`] if `var_strike` is negative, zero, or
    ///   `NaN`.
    /// * Any error from [`VarianceSwapDefinition::new`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_variance_params(
        obs_start_date: DateTime<FixedOffset>,
        obs_end_date: DateTime<FixedOffset>,
        settlement_date: DateTime<FixedOffset>,
        obs_freq: Frequency,
        currency: Currency,
        calendar: Arc<dyn Calendar>,
        annualization_factor: Real,
        var_strike: Variance,
        var_notional: Real,
    ) -> Result<Self> {
        ensure_not_negative!(var_strike, "variance strike");
        if var_strike == 0.0 {
            return Err(Error::InvalidMagnitude {
                name: "variance strike".into(),
                value: var_strike,
            });
        }
        let vol_strike = var_strike.sqrt();
        let vol_notional = 2.0 * var_notional * vol_strike;
        Self::new(
            obs_start_date,
            obs_end_date,
            settlement_date,
            obs_freq,
            currency,
            calendar,
            annualization_factor,
            vol_strike,
            vol_notional,
        )
    }

    /// Start a [`VarianceSwapDefinitionBuilder`].
    pub fn builder() -> VarianceSwapDefinitionBuilder {
        VarianceSwapDefinitionBuilder::default()
    }

    // ── Resolution ───────────────────────────────────────────────────────

    /// View the swap as of `valuation_date`, measuring time with
    /// Actual/Actual (ISDA).
    ///
    /// `underlying` holds the underlying's fixings keyed by date; pass an
    /// empty series if observation has not begun.
    ///
    /// # Errors
    /// [`Error::DataInconsistency`] if `underlying` has more fixings between
    /// the observation start and the valuation date than the calendar has
    /// good business days.
    pub fn to_derivative(
        &self,
        valuation_date: &DateTime<FixedOffset>,
        underlying: &TimeSeries<NaiveDate, Real>,
    ) -> Result<VarianceSwap> {
        self.to_derivative_with(
            valuation_date,
            underlying,
            &ActualActualTimeCalculator::default(),
        )
    }

    /// As [`to_derivative`](Self::to_derivative) with a caller-supplied time
    /// convention.
    ///
    /// The realized fixings are those dated from the observation start
    /// (inclusive) to the valuation date (exclusive). The expected count to
    /// date includes the valuation date itself, so a good business day whose
    /// fixing is not yet in the series counts as disrupted.
    pub fn to_derivative_with(
        &self,
        valuation_date: &DateTime<FixedOffset>,
        underlying: &TimeSeries<NaiveDate, Real>,
        time_calculator: &dyn TimeCalculator,
    ) -> Result<VarianceSwap> {
        let time_to_obs_start = time_calculator.years_between(valuation_date, &self.obs_start_date);
        let time_to_obs_end = time_calculator.years_between(valuation_date, &self.obs_end_date);
        let time_to_settlement =
            time_calculator.years_between(valuation_date, &self.settlement_date);

        let observations = if time_to_obs_start > 0.0 {
            Vec::new()
        } else {
            underlying
                .sub_series(
                    &self.obs_start_date.date_naive(),
                    true,
                    &valuation_date.date_naive(),
                    false,
                )
                .values()
        };
        let n_good_business_days = count_expected_good_days(
            self.obs_start_date.date_naive(),
            valuation_date.date_naive(),
            self.calendar.as_ref(),
            self.obs_freq,
        )?;
        let n_obs_disrupted = n_good_business_days
            .checked_sub(observations.len())
            .ok_or_else(|| {
                Error::DataInconsistency(format!(
                    "have more observations ({}) than good business days ({})",
                    observations.len(),
                    n_good_business_days
                ))
            })?;

        debug!(
            %valuation_date,
            time_to_obs_start,
            time_to_obs_end,
            n_obs = observations.len(),
            n_obs_disrupted,
            "resolved variance swap"
        );

        Ok(VarianceSwap::new(
            time_to_obs_start,
            time_to_obs_end,
            time_to_settlement,
            self.var_strike,
            self.var_notional,
            self.currency,
            self.annualization_factor,
            self.n_obs_expected,
            n_obs_disrupted,
            observations,
            Vec::new(),
        ))
    }

    /// Resolve the swap at several valuation dates against one series.
    ///
    /// Each date is resolved independently; the first failure is returned.
    pub fn to_derivatives<'a, I>(
        &self,
        valuation_dates: I,
        underlying: &TimeSeries<NaiveDate, Real>,
    ) -> Result<Vec<VarianceSwap>>
    where
        I: IntoIterator<Item = &'a DateTime<FixedOffset>>,
    {
        valuation_dates
            .into_iter()
            .map(|date| self.to_derivative(date, underlying))
            .collect()
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Date of the first observation.
    pub fn obs_start_date(&self) -> &DateTime<FixedOffset> {
        &self.obs_start_date
    }

    /// Date of the last observation.
    pub fn obs_end_date(&self) -> &DateTime<FixedOffset> {
        &self.obs_end_date
    }

    /// Date of cash settlement.
    pub fn settlement_date(&self) -> &DateTime<FixedOffset> {
        &self.settlement_date
    }

    /// Observation frequency.
    pub fn obs_freq(&self) -> Frequency {
        self.obs_freq
    }

    /// Good business days in the observation window, as seen at inception.
    ///
    /// Fewer fixings may actually occur if the market is disrupted.
    pub fn n_obs_expected(&self) -> Size {
        self.n_obs_expected
    }

    /// Settlement currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Volatility strike.
    pub fn vol_strike(&self) -> Volatility {
        self.vol_strike
    }

    /// Vega notional.
    pub fn vol_notional(&self) -> Real {
        self.vol_notional
    }

    /// Variance strike, `vol_strike²`.
    pub fn var_strike(&self) -> Variance {
        self.var_strike
    }

    /// Variance notional, `0.5 * vol_notional / vol_strike`.
    pub fn var_notional(&self) -> Real {
        self.var_notional
    }

    /// Calendar of good business days.
    pub fn calendar(&self) -> &Arc<dyn Calendar> {
        &self.calendar
    }

    /// Annualization factor.
    pub fn annualization_factor(&self) -> Real {
        self.annualization_factor
    }
}

impl PartialEq for VarianceSwapDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.vol_strike.to_bits() == other.vol_strike.to_bits()
            && self.vol_notional.to_bits() == other.vol_notional.to_bits()
            && self.annualization_factor.to_bits() == other.annualization_factor.to_bits()
            && self.obs_start_date == other.obs_start_date
            && self.obs_end_date == other.obs_end_date
            && self.settlement_date == other.settlement_date
            && self.currency == other.currency
            && (Arc::ptr_eq(&self.calendar, &other.calendar)
                || self.calendar.same_as(other.calendar.as_ref()))
    }
}

impl Eq for VarianceSwapDefinition {}

impl Hash for VarianceSwapDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.obs_end_date.hash(state);
        self.obs_start_date.hash(state);
        self.settlement_date.hash(state);
        // Same calendars share a name; holiday sets are left to `eq`.
        self.calendar.name().hash(state);
        self.vol_notional.to_bits().hash(state);
        self.vol_strike.to_bits().hash(state);
        self.annualization_factor.to_bits().hash(state);
    }
}

impl Instrument for VarianceSwapDefinition {
    fn instrument_type(&self) -> &str {
        "VarianceSwap"
    }

    fn maturity_date(&self) -> DateTime<FixedOffset> {
        self.settlement_date
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Strike {
    Vega { strike: Volatility, notional: Real },
    Variance { strike: Variance, notional: Real },
}

/// Incremental builder for [`VarianceSwapDefinition`].
///
/// Every input is required; [`build`](Self::build) reports the first one
/// missing as [`Error::MissingArgument`].
///
/// ```
/// use std::sync::Arc;
/// use chrono::{FixedOffset, TimeZone};
/// use vs_core::Error;
/// use vs_currencies::currencies::GBP;
/// use vs_instruments::VarianceSwapDefinition;
/// use vs_time::{Frequency, NullCalendar};
///
/// let utc = FixedOffset::east_opt(0).unwrap();
/// let partial = VarianceSwapDefinition::builder()
///     .obs_start_date(utc.with_ymd_and_hms(2012, 1, 2, 0, 0, 0).unwrap())
///     .obs_end_date(utc.with_ymd_and_hms(2012, 1, 31, 0, 0, 0).unwrap())
///     .obs_freq(Frequency::Daily)
///     .currency(GBP)
///     .calendar(Arc::new(NullCalendar))
///     .annualization_factor(252.0)
///     .variance_params(0.04, 2500.0);
/// assert_eq!(
///     partial.build().unwrap_err(),
///     Error::MissingArgument("settlement_date".into())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct VarianceSwapDefinitionBuilder {
    obs_start_date: Option<DateTime<FixedOffset>>,
    obs_end_date: Option<DateTime<FixedOffset>>,
    settlement_date: Option<DateTime<FixedOffset>>,
    obs_freq: Option<Frequency>,
    currency: Option<Currency>,
    calendar: Option<Arc<dyn Calendar>>,
    annualization_factor: Option<Real>,
    strike: Option<Strike>,
}

impl VarianceSwapDefinitionBuilder {
    /// Set the date of the first observation.
    pub fn obs_start_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.obs_start_date = Some(date);
        self
    }

    /// Set the date of the last observation.
    pub fn obs_end_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.obs_end_date = Some(date);
        self
    }

    /// Set the cash settlement date.
    pub fn settlement_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.settlement_date = Some(date);
        self
    }

    /// Set the observation frequency.
    pub fn obs_freq(mut self, freq: Frequency) -> Self {
        self.obs_freq = Some(freq);
        self
    }

    /// Set the settlement currency.
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Set the calendar of good business days.
    pub fn calendar(mut self, calendar: Arc<dyn Calendar>) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Set the annualization factor.
    pub fn annualization_factor(mut self, factor: Real) -> Self {
        self.annualization_factor = Some(factor);
        self
    }

    /// Use the vega parameterization. Replaces any earlier strike terms.
    pub fn vega_params(mut self, vol_strike: Volatility, vol_notional: Real) -> Self {
        self.strike = Some(Strike::Vega {
            strike: vol_strike,
            notional: vol_notional,
        });
        self
    }

    /// Use the variance parameterization. Replaces any earlier strike terms.
    pub fn variance_params(mut self, var_strike: Variance, var_notional: Real) -> Self {
        self.strike = Some(Strike::Variance {
            strike: var_strike,
            notional: var_notional,
        });
        self
    }

    /// Validate the inputs and construct the definition.
    pub fn build(self) -> Result<VarianceSwapDefinition> {
        let obs_start_date = self
            .obs_start_date
            .ok_or_else(|| Error::missing("obs_start_date"))?;
        let obs_end_date = self
            .obs_end_date
            .ok_or_else(|| Error::missing("obs_end_date"))?;
        let settlement_date = self
            .settlement_date
            .ok_or_else(|| Error::missing("settlement_date"))?;
        let obs_freq = self.obs_freq.ok_or_else(|| Error::missing("obs_freq"))?;
        let currency = self.currency.ok_or_else(|| Error::missing("currency"))?;
        let calendar = self.calendar.ok_or_else(|| Error::missing("calendar"))?;
        let annualization_factor = self
            .annualization_factor
            .ok_or_else(|| Error::missing("annualization_factor"))?;
        match self.strike.ok_or_else(|| Error::missing("strike"))? {
            Strike::Vega { strike, notional } => VarianceSwapDefinition::from_vega_params(
                obs_start_date,
                obs_end_date,
                settlement_date,
                obs_freq,
                currency,
                calendar,
                annualization_factor,
                strike,
                notional,
            ),
            Strike::Variance { strike, notional } => VarianceSwapDefinition::from_variance_params(
                obs_start_date,
                obs_end_date,
                settlement_date,
                obs_freq,
                currency,
                calendar,
                annualization_factor,
                strike,
                notional,
            ),
        }
    }
}
