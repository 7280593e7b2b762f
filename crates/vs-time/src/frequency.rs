//! `Frequency` — how often observations or events recur.

/// Observation / event frequency.
///
/// The discriminants are the number of events per year, following the usual
/// fixed-income convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frequency {
    /// No events — used as a sentinel.
    NoFrequency = -1,
    /// Once (maturity only).
    Once = 0,
    /// Annual (once per year).
    Annual = 1,
    /// Semi-annual (twice per year).
    Semiannual = 2,
    /// Every fourth month (three times per year).
    EveryFourthMonth = 3,
    /// Quarterly (four times per year).
    Quarterly = 4,
    /// Bi-monthly (six times per year).
    Bimonthly = 6,
    /// Monthly (twelve times per year).
    Monthly = 12,
    /// Every fourth week (thirteen times per year).
    EveryFourthWeek = 13,
    /// Bi-weekly (twenty-six times per year).
    Biweekly = 26,
    /// Weekly (fifty-two times per year).
    Weekly = 52,
    /// Daily.
    Daily = 365,
    /// Other / custom frequency.
    OtherFrequency = 999,
}

impl Frequency {
    /// Whether this is the daily frequency.
    pub fn is_daily(&self) -> bool {
        matches!(self, Frequency::Daily)
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::NoFrequency => "No-Frequency",
            Frequency::Once => "Once",
            Frequency::Annual => "Annual",
            Frequency::Semiannual => "Semiannual",
            Frequency::EveryFourthMonth => "Every-Fourth-Month",
            Frequency::Quarterly => "Quarterly",
            Frequency::Bimonthly => "Bimonthly",
            Frequency::Monthly => "Monthly",
            Frequency::EveryFourthWeek => "Every-Fourth-Week",
            Frequency::Biweekly => "Biweekly",
            Frequency::Weekly => "Weekly",
            Frequency::Daily => "Daily",
            Frequency::OtherFrequency => "Other-Frequency",
        };
        write!(f, "{s}")
    }
}
