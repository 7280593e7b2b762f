//! Pre-defined currency constants for the major equity-index settlement
//! currencies.

use crate::currency::Currency;

/// US Dollar.
pub const USD: Currency = Currency {
    name: "U.S. Dollar",
    code: "USD",
    numeric_code: 840,
    fractions_per_unit: 100,
};

/// Euro.
pub const EUR: Currency = Currency {
    name: "Euro",
    code: "EUR",
    numeric_code: 978,
    fractions_per_unit: 100,
};

/// British pound sterling.
pub const GBP: Currency = Currency {
    name: "British Pound Sterling",
    code: "GBP",
    numeric_code: 826,
    fractions_per_unit: 100,
};

/// Japanese Yen.
pub const JPY: Currency = Currency {
    name: "Japanese Yen",
    code: "JPY",
    numeric_code: 392,
    fractions_per_unit: 100,
};

/// Swiss Franc.
pub const CHF: Currency = Currency {
    name: "Swiss Franc",
    code: "CHF",
    numeric_code: 756,
    fractions_per_unit: 100,
};

/// Canadian Dollar.
pub const CAD: Currency = Currency {
    name: "Canadian Dollar",
    code: "CAD",
    numeric_code: 124,
    fractions_per_unit: 100,
};

/// Australian Dollar.
pub const AUD: Currency = Currency {
    name: "Australian Dollar",
    code: "AUD",
    numeric_code: 36,
    fractions_per_unit: 100,
};

/// Hong Kong Dollar.
pub const HKD: Currency = Currency {
    name: "Hong Kong Dollar",
    code: "HKD",
    numeric_code: 344,
    fractions_per_unit: 100,
};

/// Korean Won.
pub const KRW: Currency = Currency {
    name: "South-Korean Won",
    code: "KRW",
    numeric_code: 410,
    fractions_per_unit: 100,
};

/// Every built-in currency, searched by [`Currency::from_code`].
pub const ALL: [Currency; 9] = [USD, EUR, GBP, JPY, CHF, CAD, AUD, HKD, KRW];
