//! Human-readable number formatting for metric tiles and tables

/// Formats a value with K/M/B/T magnitude suffixes.
///
/// Values below one thousand are printed plainly with the requested number
/// of decimals.
///
/// # Example
///
/// ```
/// use naijastats::format::format_number;
///
/// assert_eq!(format_number(477_000_000_000.0, 2), "477.00B");
/// assert_eq!(format_number(3.25, 2), "3.25");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let abs = value.abs();
    if abs >= 1e12 {
        format!("{:.*}T", decimals, value / 1e12)
    } else if abs >= 1e9 {
        format!("{:.*}B", decimals, value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.*}M", decimals, value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.*}K", decimals, value / 1e3)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Formats an optional value, with "N/A" standing in for absent data.
pub fn format_option(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format_number(v, decimals),
        None => "N/A".to_string(),
    }
}

/// Formats a value together with its unit hint from the registry.
///
/// Dollar units go in front ("$477.00B"), percent signs attach directly
/// ("33.2%"), and any other unit trails with a space ("54.6 years").
pub fn format_with_unit(value: f64, unit: &str) -> String {
    if unit.contains("US$") {
        format!("${}", format_number(value, 2))
    } else if unit == "%" {
        format!("{:.1}%", value)
    } else if unit.is_empty() {
        format_number(value, 2)
    } else {
        format!("{} {}", format_number(value, 1), unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trillions_billions_millions_thousands() {
        assert_eq!(format_number(2.5e12, 2), "2.50T");
        assert_eq!(format_number(477.4e9, 2), "477.40B");
        assert_eq!(format_number(218.5e6, 1), "218.5M");
        assert_eq!(format_number(12_345.0, 2), "12.35K");
    }

    #[test]
    fn test_small_values_print_plainly() {
        assert_eq!(format_number(3.14159, 2), "3.14");
        assert_eq!(format_number(0.0, 2), "0.00");
        assert_eq!(format_number(999.99, 1), "1000.0");
    }

    #[test]
    fn test_negative_values_keep_their_sign() {
        assert_eq!(format_number(-1.2e9, 2), "-1.20B");
        assert_eq!(format_number(-42.0, 1), "-42.0");
    }

    #[test]
    fn test_option_formats_none_as_na() {
        assert_eq!(format_option(None, 2), "N/A");
        assert_eq!(format_option(Some(1.5e6), 2), "1.50M");
    }

    #[test]
    fn test_unit_placement() {
        assert_eq!(format_with_unit(477.4e9, "US$"), "$477.40B");
        assert_eq!(format_with_unit(33.27, "%"), "33.3%");
        assert_eq!(format_with_unit(54.6, "years"), "54.6 years");
        assert_eq!(format_with_unit(218.5e6, ""), "218.50M");
    }
}
