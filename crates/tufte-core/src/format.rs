// File: crates/tufte-core/src/format.rs
// Summary: Thousands separators for bar labels.

/// Group every run of digits in the integer part into comma-separated
/// triples from the right. Anything after the first `.` is kept as is.
///
/// ```
/// assert_eq!(tufte_core::format_number("1234.56"), "1,234.56");
/// ```
pub fn format_number(s: &str) -> String {
    let (int_part, frac) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };

    let mut out = String::with_capacity(s.len() + s.len() / 3);
    let mut run = String::new();
    for ch in int_part.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
        } else {
            push_grouped(&mut out, &run);
            run.clear();
            out.push(ch);
        }
    }
    push_grouped(&mut out, &run);

    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Format a number the way a script engine prints it, then group it.
/// Integral values drop the `.0`. Magnitudes from `1e21` up, or below `1e-6`,
/// switch to exponent form (`1e+21`, `1.5e-7`) and are left ungrouped.
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    let mag = v.abs();
    if mag.is_finite() && (mag >= 1e21 || mag < 1e-6) {
        let e = format!("{v:e}");
        return match e.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => e,
        };
    }
    format_number(&v.to_string())
}

fn push_grouped(out: &mut String, digits: &str) {
    let n = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
}
