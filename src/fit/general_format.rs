//! printf-style `%g` formatting, which `std::fmt` has no equivalent for.

/// Formats `x` like C's `%.{sig}g`.
///
/// Uses fixed notation when the decimal exponent (after rounding to `sig`
/// significant digits) lies in `-4..sig`, and scientific notation otherwise.
/// Trailing zeros are removed in both cases, and the exponent always has a
/// sign and at least two digits (`1e+06`, `2.5e-07`).
pub(crate) fn general(x: f64, sig: usize) -> String
{
    assert!(sig > 0);

    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return match x > 0.0 {
            true => "inf".to_string(),
            false => "-inf".to_string(),
        };
    }
    if x == 0.0 {
        return match x.is_sign_negative() {
            true => "-0".to_string(),
            false => "0".to_string(),
        };
    }

    // Rounds to `sig` digits, which is what decides the notation.
    let sci = format!("{:.*e}", sig - 1, x);
    let (mantissa, exp) = match sci.find('e') {
        Some(pos) => (&sci[..pos], &sci[pos + 1..]),
        None => unreachable!("LowerExp output without an exponent: {}", sci),
    };
    let exp: i32 = match exp.parse() {
        Ok(exp) => exp,
        Err(_) => unreachable!("LowerExp output with a bad exponent: {}", sci),
    };

    if -4 <= exp && exp < sig as i32 {
        let decimals = (sig as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    }
}

fn trim_fraction(s: &str) -> &str
{
    match s.contains('.') {
        true => s.trim_end_matches('0').trim_end_matches('.'),
        false => s,
    }
}

#[cfg(test)]
mod tests {
    use super::general;

    #[test]
    fn fixed_notation() {
        assert_eq!(general(1.0, 6), "1");
        assert_eq!(general(-1.5, 6), "-1.5");
        assert_eq!(general(2.0 / 3.0, 6), "0.666667");
        assert_eq!(general(123456.0, 6), "123456");
        assert_eq!(general(100000.0, 6), "100000");
        assert_eq!(general(3.14159265, 6), "3.14159");
        assert_eq!(general(0.0001, 6), "0.0001");
        assert_eq!(general(0.000123456789, 6), "0.000123457");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(general(1234567.0, 6), "1.23457e+06");
        assert_eq!(general(1e6, 6), "1e+06");
        assert_eq!(general(0.00001, 6), "1e-05");
        assert_eq!(general(-2.5e-7, 6), "-2.5e-07");
        assert_eq!(general(1e100, 6), "1e+100");
    }

    #[test]
    fn rounding_can_change_notation() {
        assert_eq!(general(999999.7, 6), "1e+06");
        assert_eq!(general(0.000099999999, 6), "0.0001");
    }

    #[test]
    fn special_values() {
        assert_eq!(general(0.0, 6), "0");
        assert_eq!(general(-0.0, 6), "-0");
        assert_eq!(general(::std::f64::INFINITY, 6), "inf");
        assert_eq!(general(::std::f64::NEG_INFINITY, 6), "-inf");
        assert_eq!(general(::std::f64::NAN, 6), "nan");
    }

    #[test]
    fn other_precisions() {
        assert_eq!(general(3.14159265, 3), "3.14");
        assert_eq!(general(1234.0, 2), "1.2e+03");
    }
}
