// src/i18n.rs
//! Label translation. English is the source language; anything missing
//! from a dictionary falls through unchanged.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    En,
    Pl,
}

impl Language {
    pub fn parse(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "pl" => Some(Language::Pl),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pl => "pl",
        }
    }
}

const PL: [(&str, &str); 18] = [
    ("Brazil", "Brazylia"),
    ("China", "Chiny"),
    ("Europe", "Europa"),
    ("India", "Indie"),
    ("Israel", "Izrael"),
    ("Japan", "Japonia"),
    ("North Korea", "Korea Północna"),
    ("South Korea", "Korea Południowa"),
    ("USSR/Russia", "ZSRR/Rosja"),
    ("Long March", "Długi Marsz"),
    ("Launches", "Starty"),
    ("All Successful Orbital Launches", "Wszystkie udane starty orbitalne"),
    ("Successful Launches", "Udane starty"),
    ("Total or Partial Failures", "Całkowite i częściowe porażki"),
    ("Successes and Failures", "Sukcesy i porażki"),
    ("Launches of Selected Rocket Families", "Starty wybranych rodzin rakiet"),
    (
        "↓ This line marks a hundred launches per year.",
        "↓ Ta linia określa granicę stu startów rocznie.",
    ),
    (
        "← This line marks the end of the Cold War.",
        "← Ta linia wskazuje koniec zimnej wojny.",
    ),
];

pub fn translated(language: Language, label: &str) -> String {
    match language {
        Language::En => s!(label),
        Language::Pl => PL
            .iter()
            .find(|(en, _)| *en == label)
            .map(|(_, pl)| s!(*pl))
            .unwrap_or_else(|| s!(label)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_passes_through() {
        assert_eq!(translated(Language::En, "Launches"), "Launches");
    }

    #[test]
    fn polish_translates_known_labels() {
        assert_eq!(translated(Language::Pl, "Launches"), "Starty");
        assert_eq!(translated(Language::Pl, "USSR/Russia"), "ZSRR/Rosja");
    }

    #[test]
    fn unknown_labels_fall_through() {
        // Country names without an entry (e.g. Iran, USA) stay as-is.
        assert_eq!(translated(Language::Pl, "Iran"), "Iran");
        assert_eq!(translated(Language::Pl, "USA"), "USA");
    }

    #[test]
    fn codes_round_trip() {
        assert_eq!(Language::parse("PL"), Some(Language::Pl));
        assert_eq!(Language::parse(" en "), Some(Language::En));
        assert_eq!(Language::parse("de"), None);
        assert_eq!(Language::Pl.code(), "pl");
    }
}
