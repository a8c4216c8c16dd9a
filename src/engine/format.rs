//! Number rendering shared by the engine and the UI
//!
//! Output follows the conventions calculator users expect from a browser:
//! shortest round-trip digits, `Infinity` for overflow, no negative zero, and
//! exponent notation (`1e+21`, `1e-7`) outside `1e-7 < |x| < 1e21`.

/// Render a number the way it is shown in calculation strings and the entry field
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return if value > 0.0 {
            String::from("Infinity")
        } else {
            String::from("-Infinity")
        };
    }
    if value == 0.0 {
        // covers -0.0
        return String::from("0");
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    match exponent.parse::<i32>() {
        Ok(exp) if (-6..21).contains(&exp) => format!("{}", value),
        Ok(exp) if exp > 0 => format!("{}e+{}", mantissa, exp),
        _ => scientific,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_drop_fraction() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-12.0), "-12");
    }

    #[test]
    fn test_shortest_round_trip() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e300), "-1.5e+300");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(2.5e-8), "2.5e-8");
    }

    #[test]
    fn test_positional_range() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1.5e-6), "0.0000015");
    }
}
