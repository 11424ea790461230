// src/models/country.rs
// DOCUMENTATION: Calling codes offered to clients

use serde::Serialize;

/// A selectable calling code
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Country {
    pub number: &'static str,
    pub name: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { number: "82", name: "South Korea" },
    Country { number: "1", name: "United States / Canada" },
    Country { number: "81", name: "Japan" },
    Country { number: "86", name: "China" },
    Country { number: "852", name: "Hong Kong" },
    Country { number: "886", name: "Taiwan" },
    Country { number: "65", name: "Singapore" },
    Country { number: "84", name: "Vietnam" },
    Country { number: "66", name: "Thailand" },
    Country { number: "63", name: "Philippines" },
    Country { number: "61", name: "Australia" },
    Country { number: "44", name: "United Kingdom" },
    Country { number: "49", name: "Germany" },
    Country { number: "33", name: "France" },
    Country { number: "34", name: "Spain" },
];
