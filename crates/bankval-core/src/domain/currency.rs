use std::fmt::{Display, Formatter};

/// ISO 4217 currency descriptor.
///
/// Exposed as a closed set of named constants; a richer catalog can replace
/// the fixed set later without changing the field shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    pub alphabetic_code: &'static str,
    pub numeric_code: u16,
    pub minor_unit: u32,
    pub entity: &'static str,
}

impl Currency {
    pub const USD: Self = Self {
        alphabetic_code: "USD",
        numeric_code: 840,
        minor_unit: 2,
        entity: "United States of America",
    };

    pub const EUR: Self = Self {
        alphabetic_code: "EUR",
        numeric_code: 978,
        minor_unit: 2,
        entity: "European Union",
    };

    pub const JPY: Self = Self {
        alphabetic_code: "JPY",
        numeric_code: 392,
        minor_unit: 0,
        entity: "Japan",
    };

    pub const ALL: [Self; 3] = [Self::USD, Self::EUR, Self::JPY];

    /// Look up a catalog entry by its 3-letter alphabetic code.
    pub fn from_alphabetic_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.alphabetic_code == code)
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.alphabetic_code)
    }
}
