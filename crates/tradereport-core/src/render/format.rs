//! Value formatting.
//!
//! Rules:
//! - Amounts: round to two decimals (exact ties go away from zero, as a
//!   browser's `toFixed` does), group the integer part with `,`, keep `.` as
//!   the decimal point. Negative zero after rounding prints unsigned.
//! - Plain numbers: the shortest round-trip digits laid out the way a browser
//!   stringifies a number (`1020`, `0.25`, `1e-7`, `1.5e+21`).
//! - Split field: whole part plus a raw two-character fragment of the
//!   remainder's plain form (no rounding, no padding).

/// `1234.5` -> `"1,234.50"`.
pub fn format_amount(value: f64) -> String {
    let body = fixed_two(value.abs());
    let (int, frac) = body.split_once('.').unwrap_or((body.as_str(), "00"));
    let is_zero = body.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    format!("{sign}{}.{frac}", group_thousands(int))
}

/// Two-decimal rendering of a non-negative value, ties rounded up.
///
/// A value lies exactly halfway between two cents only when it is an odd
/// multiple of 1/8 (`.125`, `.375`, `.625`, `.875`); `{:.2}` would round those
/// to even.
fn fixed_two(abs: f64) -> String {
    let eighths = abs * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (abs * 100.0).ceil() as u64;
        return format!("{}.{:02}", cents / 100, cents % 100);
    }
    format!("{abs:.2}")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Browser-style number-to-string conversion.
pub fn js_number_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value == 0.0 {
        return "0".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if value < 0.0 {
        return format!("-{}", js_number_string(-value));
    }

    // `{:e}` yields the shortest round-trip digits: "1.02e3", "5e-7".
    let sci = format!("{value:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{value}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return format!("{value}");
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp + 1;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", e.abs())
        }
    }
}

/// Integer prefix of the plain rendering (`"1e-7"` -> 1, `"-0.5"` -> -0).
fn leading_integer(value: f64) -> f64 {
    let s = js_number_string(value);
    let (sign, body) = match s.strip_prefix('-') {
        Some(b) => (-1.0, b),
        None => (1.0, s.as_str()),
    };
    let end = body.find(|c: char| !c.is_ascii_digit()).unwrap_or(body.len());
    body[..end].parse::<f64>().map_or(f64::NAN, |n| sign * n)
}

/// Split `value` into its whole part and a two-character fragment of the
/// remainder: `1020.25` -> `("1020", "25")`, `1020` -> `("1020", "")`.
pub fn split_whole_fraction(value: f64) -> (String, String) {
    let whole = leading_integer(value);
    let fragment: String = js_number_string(value - whole).chars().skip(2).take(2).collect();
    (js_number_string(whole), fragment)
}
