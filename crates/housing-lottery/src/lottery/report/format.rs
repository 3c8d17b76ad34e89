/// Renders a probability as a percentage with two decimals, or an em dash
/// for values that are not finite.
pub fn format_pct(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}%", value * 100.0)
    } else {
        "—".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_pct(199.0 / 2457.0), "8.10%");
        assert_eq!(format_pct(0.0), "0.00%");
        assert_eq!(format_pct(1.0), "100.00%");
    }

    #[test]
    fn non_finite_values_render_as_dash() {
        assert_eq!(format_pct(f64::NAN), "—");
        assert_eq!(format_pct(f64::INFINITY), "—");
    }
}
