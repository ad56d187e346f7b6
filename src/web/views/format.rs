//! Pure formatting helpers shared by the views

/// Fixed-decimal rendering
pub fn dec(value: f64, places: usize) -> String {
    format!("{:.*}", places, value)
}

/// Optional value; absent renders blank, never zero
pub fn opt_dec(value: Option<f64>, places: usize) -> String {
    value.map(|v| dec(v, places)).unwrap_or_default()
}

/// Fraction as a percentage with one decimal
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// CSS class for a signed value
pub fn sign_class(value: f64) -> &'static str {
    if value < 0.0 {
        "neg"
    } else {
        "pos"
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        assert_eq!(dec(1234.567, 2), "1234.57");
        assert_eq!(opt_dec(None, 2), "");
        assert_eq!(opt_dec(Some(0.5), 1), "0.5");
        assert_eq!(percent(0.305), "30.5%");
        assert_eq!(sign_class(-0.01), "neg");
        assert_eq!(sign_class(0.0), "pos");
        assert_eq!(month_name(2), "February");
    }
}
