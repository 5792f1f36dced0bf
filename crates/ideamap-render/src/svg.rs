//! Small SVG emission helpers.

/// Formats a coordinate with up to three decimals, trimming trailing zeros.
pub(crate) fn fmt_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.abs() < 0.0005 {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_number_trims_trailing_zeros() {
        assert_eq!(fmt_number(600.0), "600");
        assert_eq!(fmt_number(12.5), "12.5");
        assert_eq!(fmt_number(0.12345), "0.123");
        assert_eq!(fmt_number(-0.0001), "0");
        assert_eq!(fmt_number(f64::NAN), "0");
    }

    #[test]
    fn escape_text_covers_markup_characters() {
        assert_eq!(
            escape_text(r#"R&D <"alpha">'"#),
            "R&amp;D &lt;&quot;alpha&quot;&gt;&#39;"
        );
    }
}
