#![warn(missing_docs)]
//! Languages available for the human-readable laser report.
use std::fmt::Display;
use strum::{EnumIter, EnumString};
use uom::si::{f64::Power, power::watt};

/// Language of the messages printed for a [`LaserReport`](super::LaserReport).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    /// english messages
    #[default]
    #[strum(serialize = "en", serialize = "english")]
    English,
    /// russian messages
    #[strum(serialize = "ru", serialize = "russian")]
    Russian,
}
impl Language {
    /// Returns the short code (as accepted on the command line) of this [`Language`].
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }
    /// Message for a laser emitting the given output power. The power is printed in watts with two decimals.
    #[must_use]
    pub fn lasing_message(self, output_power: Power) -> String {
        let output_power = output_power.get::<watt>();
        match self {
            Self::English => format!("Laser is operating. Output power: {output_power:.2} W"),
            Self::Russian => format!("Лазер работает. Выходная мощность: {output_power:.2} Вт"),
        }
    }
    /// Message for a laser staying below its threshold.
    #[must_use]
    pub const fn below_threshold_message(self) -> &'static str {
        match self {
            Self::English => "Lasing threshold not reached. The laser does not emit.",
            Self::Russian => "Порог генерации не достигнут. Лазер не излучает.",
        }
    }
}
impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::Russian => write!(f, "russian"),
        }
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::watt;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    #[test]
    fn default() {
        assert_eq!(Language::default(), Language::English);
    }
    #[test]
    fn from_str() {
        assert_eq!(Language::from_str("en").unwrap(), Language::English);
        assert_eq!(Language::from_str("English").unwrap(), Language::English);
        assert_eq!(Language::from_str("ru").unwrap(), Language::Russian);
        assert_eq!(Language::from_str("RU").unwrap(), Language::Russian);
        assert!(Language::from_str("de").is_err());
    }
    #[test]
    fn code_round_trip() {
        for language in Language::iter() {
            assert_eq!(Language::from_str(language.code()).unwrap(), language);
        }
    }
    #[test]
    fn lasing_message() {
        assert_eq!(
            Language::English.lasing_message(watt!(1.23456)),
            "Laser is operating. Output power: 1.23 W"
        );
        assert_eq!(
            Language::Russian.lasing_message(watt!(1.23456)),
            "Лазер работает. Выходная мощность: 1.23 Вт"
        );
        assert_eq!(
            Language::English.lasing_message(watt!(f64::INFINITY)),
            "Laser is operating. Output power: inf W"
        );
    }
    #[test]
    fn below_threshold_message() {
        assert_eq!(
            Language::English.below_threshold_message(),
            "Lasing threshold not reached. The laser does not emit."
        );
        assert_eq!(
            Language::Russian.below_threshold_message(),
            "Порог генерации не достигнут. Лазер не излучает."
        );
    }
    #[test]
    fn display() {
        assert_eq!(format!("{}", Language::English), "english");
        assert_eq!(format!("{}", Language::Russian), "russian");
    }
}
