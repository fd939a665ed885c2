//! Country names and flag indicators for IOC country codes.

/// (IOC code, ISO 3166-1 alpha-2 code, display name)
const COUNTRIES: &[(&str, &str, &str)] = &[
    ("USA", "US", "United States"),
    ("NOR", "NO", "Norway"),
    ("RUS", "RU", "Russia"),
    ("NED", "NL", "Netherlands"),
    ("FRA", "FR", "France"),
    ("SWE", "SE", "Sweden"),
    ("ITA", "IT", "Italy"),
    ("CAN", "CA", "Canada"),
    ("SUI", "CH", "Switzerland"),
    ("BLR", "BY", "Belarus"),
    ("GER", "DE", "Germany"),
    ("AUT", "AT", "Austria"),
    ("CHN", "CN", "China"),
];

fn lookup(code: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    COUNTRIES.iter().find(|(ioc, _, _)| ioc.eq_ignore_ascii_case(code))
}

/// Whether a flag is known for this code.
pub fn has_flag(code: &str) -> bool {
    lookup(code).is_some()
}

/// Display name for a country code, or the code itself when unknown.
pub fn country_name(code: &str) -> &str {
    lookup(code).map(|(_, _, name)| *name).unwrap_or(code)
}

/// Flag indicator for a country code.
///
/// Known codes render as a regional-indicator emoji pair. Unknown codes
/// render as a bracketed placeholder such as `[XYZ]`.
pub fn flag(code: &str) -> String {
    match lookup(code) {
        Some((_, iso, _)) => iso
            .chars()
            .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect(),
        None => format!("[{}]", code.to_ascii_uppercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_name_known() {
        assert_eq!(country_name("USA"), "United States");
        assert_eq!(country_name("SUI"), "Switzerland");
        assert_eq!(country_name("ger"), "Germany");
    }

    #[test]
    fn test_country_name_falls_back_to_code() {
        assert_eq!(country_name("XYZ"), "XYZ");
    }

    #[test]
    fn test_flag_known_code() {
        assert_eq!(flag("NOR"), "\u{1F1F3}\u{1F1F4}");
        assert_eq!(flag("usa"), "\u{1F1FA}\u{1F1F8}");
        assert!(has_flag("CHN"));
    }

    #[test]
    fn test_flag_placeholder_for_unknown_code() {
        assert_eq!(flag("xyz"), "[XYZ]");
        assert!(!has_flag("XYZ"));
    }

    #[test]
    fn test_every_country_has_two_letter_iso() {
        for (ioc, iso, name) in COUNTRIES {
            assert_eq!(ioc.len(), 3);
            assert_eq!(iso.len(), 2);
            assert!(!name.is_empty());
            assert_eq!(flag(ioc).chars().count(), 2);
        }
    }
}
