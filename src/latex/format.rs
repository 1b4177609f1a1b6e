//! Number and matrix rendering. Every scalar that ends up in a document goes
//! through [`NumberFormat::format`].

use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

use crate::error::ReduceError;
use crate::matrix::augmented::{AugmentedMatrix, Scalar};
use crate::steps::step::Operation;

/// How the digits of a number are laid out.
///
/// Exponents are written the way printf writes them, with a sign and at
/// least two digits: `1.23e+03`, not Rust's `1.23e3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Fixed number of decimal places, `.3f`.
    Fixed(usize),
    /// Mantissa and exponent, `.2e`.
    Scientific(usize),
    /// `%g`: the given number of significant digits, in fixed or scientific
    /// notation depending on the exponent, trailing zeros removed.
    General(usize),
    /// Shortest representation that round-trips, `g`.
    Shortest,
}

/// A printf-like number format: `[flags][width][.precision][f|e|g]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub notation: Notation,
    /// Minimum field width.
    pub width: Option<usize>,
    /// `+`: always print a sign.
    pub plus: bool,
    /// ` `: a blank where a plus sign would go.
    pub space: bool,
    /// `0`: pad with zeros after the sign instead of leading blanks.
    pub zero_pad: bool,
    /// `-`: pad on the right.
    pub left_align: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::fixed(3)
    }
}

impl From<Notation> for NumberFormat {
    fn from(notation: Notation) -> Self {
        NumberFormat {
            notation,
            width: None,
            plus: false,
            space: false,
            zero_pad: false,
            left_align: false,
        }
    }
}

impl NumberFormat {
    pub fn fixed(precision: usize) -> Self {
        Notation::Fixed(precision).into()
    }

    pub fn scientific(precision: usize) -> Self {
        Notation::Scientific(precision).into()
    }

    pub fn general(precision: usize) -> Self {
        Notation::General(precision).into()
    }

    pub fn shortest() -> Self {
        Notation::Shortest.into()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn format<T: Scalar>(&self, value: T) -> String {
        let s = match self.notation {
            Notation::Fixed(p) => format!("{:.*}", p, value),
            Notation::Scientific(p) => printf_exponent(&format!("{:.*e}", p, value)),
            Notation::General(p) => general(value, p),
            Notation::Shortest => format!("{}", value),
        };
        self.pad(self.sign(strip_negative_zero(s)))
    }

    fn sign(&self, s: String) -> String {
        if s.starts_with('-') {
            s
        } else if self.plus {
            format!("+{}", s)
        } else if self.space {
            format!(" {}", s)
        } else {
            s
        }
    }

    fn pad(&self, s: String) -> String {
        let width = match self.width {
            Some(w) if w > s.len() => w,
            _ => return s,
        };
        let fill = width - s.len();
        if self.left_align {
            format!("{}{}", s, " ".repeat(fill))
        } else if self.zero_pad && s.chars().any(|c| c.is_ascii_digit()) {
            let sign_len = if s.starts_with(['-', '+', ' ']) { 1 } else { 0 };
            format!("{}{}{}", &s[..sign_len], "0".repeat(fill), &s[sign_len..])
        } else {
            format!("{}{}", " ".repeat(fill), s)
        }
    }
}

// Rust prints `1.5e3` and `1.5e-3`; printf prints `1.5e+03` and `1.5e-03`
fn printf_exponent(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => s.to_string(),
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

// %g: scientific when the exponent is below -4 or not below the precision
fn general<T: Scalar>(value: T, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let exponent = scientific
        .split_once('e')
        .and_then(|(_, x)| x.parse::<i64>().ok())
        .unwrap_or(0);

    if exponent < -4 || exponent >= precision as i64 {
        let (mantissa, _) = scientific.split_once('e').unwrap_or((&scientific, ""));
        printf_exponent(&format!("{}e{}", trim_fraction(mantissa), exponent))
    } else {
        let decimals = (precision as i64 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

// "-0.000" is what a tiny negative residue looks like after rounding
fn strip_negative_zero(s: String) -> String {
    let negative_zero = s
        .strip_prefix('-')
        .and_then(|rest| rest.split('e').next())
        .is_some_and(|m| m.chars().all(|c| c == '0' || c == '.'));
    if negative_zero {
        s[1..].to_string()
    } else {
        s
    }
}

/// Accepts printf conversions such as `%.3f`, `%8.3f`, `%+.2e`, `%08.2f` and
/// `.4g`, with or without the `%`, as well as `{:.3}`, a bare precision like
/// `3`, and the empty string (shortest).
impl FromStr for NumberFormat {
    type Err = ReduceError;

    fn from_str(s: &str) -> Result<Self, ReduceError> {
        let invalid = || ReduceError::InvalidNumberFormat(s.to_string());

        // Leading blanks are the space flag
        let spec = s.trim_end();
        let spec = spec
            .strip_prefix("{:")
            .and_then(|x| x.strip_suffix('}'))
            .unwrap_or(spec);
        let spec = spec.strip_prefix('%').unwrap_or(spec);

        // A lone number is a precision, not a width
        if !spec.is_empty() && spec.bytes().all(|b| b.is_ascii_digit()) {
            let precision = spec.parse::<usize>().map_err(|_| invalid())?;
            return Ok(NumberFormat::fixed(precision));
        }

        let mut format = NumberFormat::shortest();
        let mut rest = spec;
        while let Some(flag) = rest.chars().next() {
            match flag {
                '-' => format.left_align = true,
                '+' => format.plus = true,
                ' ' => format.space = true,
                '0' => format.zero_pad = true,
                _ => break,
            }
            rest = &rest[1..];
        }

        let (width, tail) = split_digits(rest);
        if !width.is_empty() {
            format.width = Some(width.parse::<usize>().map_err(|_| invalid())?);
        }
        rest = tail;

        let precision = match rest.strip_prefix('.') {
            Some(tail) => {
                let (digits, tail) = split_digits(tail);
                rest = tail;
                // printf reads a bare `.` as precision zero
                Some(if digits.is_empty() {
                    0
                } else {
                    digits.parse::<usize>().map_err(|_| invalid())?
                })
            }
            None => None,
        };

        let mut kind = rest.chars();
        let notation = match (kind.next(), precision) {
            (None, None) => Notation::Shortest,
            (None, Some(p)) => Notation::Fixed(p),
            (Some('f' | 'F'), p) => Notation::Fixed(p.unwrap_or(6)),
            (Some('e' | 'E'), p) => Notation::Scientific(p.unwrap_or(6)),
            (Some('g' | 'G'), Some(p)) => Notation::General(p),
            (Some('g' | 'G'), None) => Notation::Shortest,
            _ => return Err(invalid()),
        };
        if kind.next().is_some() {
            return Err(invalid());
        }
        format.notation = notation;
        Ok(format)
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (set, flag) in [
            (self.left_align, '-'),
            (self.plus, '+'),
            (self.space, ' '),
            (self.zero_pad, '0'),
        ] {
            if set {
                write!(f, "{}", flag)?;
            }
        }
        if let Some(width) = self.width {
            write!(f, "{}", width)?;
        }
        match self.notation {
            Notation::Fixed(p) => write!(f, ".{}f", p),
            Notation::Scientific(p) => write!(f, ".{}e", p),
            Notation::General(p) => write!(f, ".{}g", p),
            Notation::Shortest => write!(f, "g"),
        }
    }
}

/// Renders `[A | b]` as a bracketed LaTeX array, with a vertical rule
/// between the two blocks when `b` is present.
pub fn render_matrix<T: Scalar>(m: &AugmentedMatrix<T>, number_format: &NumberFormat) -> String {
    let mut columns = "r".repeat(m.cols);
    if m.is_augmented() {
        columns.push('|');
        columns.push_str(&"r".repeat(m.aug_cols));
    }

    let body = (0..m.rows)
        .map(|r| {
            m.row(r)
                .iter()
                .map(|x| number_format.format(*x))
                .join(" & ")
                + " \\\\"
        })
        .join("\n");

    format!(
        "\\left[\\begin{{array}}{{{}}}\n{}\n\\end{{array}}\\right]",
        columns, body
    )
}

fn row_name(row: usize) -> String {
    format!("R_{{{}}}", row + 1)
}

/// Justification lines for `operation`, one per elementary operation.
/// Rows are printed one-based.
pub fn annotation<T: Scalar>(operation: &Operation<T>, number_format: &NumberFormat) -> Vec<String> {
    match operation {
        Operation::Original => vec!["\\text{Original Matrix}".to_string()],
        Operation::Swap { first, second } => vec![format!(
            "{} \\leftrightarrow {}",
            row_name(*first),
            row_name(*second)
        )],
        Operation::Normalize { row, scale } => vec![format!(
            "{} = {} {}",
            row_name(*row),
            number_format.format(*scale),
            row_name(*row)
        )],
        Operation::Eliminate(eliminations) => eliminations
            .iter()
            .map(|e| {
                let (sign, scale) = if e.scale < T::zero() {
                    ('+', e.scale.abs())
                } else {
                    ('-', e.scale)
                };
                format!(
                    "{} = {} {} {} {}",
                    row_name(e.target),
                    row_name(e.target),
                    sign,
                    number_format.format(scale),
                    row_name(e.pivot)
                )
            })
            .collect(),
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::step::Elimination;

    #[test]
    fn test_number_format_parse() {
        let parse = |s: &str| s.parse::<NumberFormat>().unwrap();
        assert_eq!(parse(".3f"), NumberFormat::fixed(3));
        assert_eq!(parse("%.4f"), NumberFormat::fixed(4));
        assert_eq!(parse("{:.2}"), NumberFormat::fixed(2));
        assert_eq!(parse("5"), NumberFormat::fixed(5));
        assert_eq!(parse("f"), NumberFormat::fixed(6));
        assert_eq!(parse("%.f"), NumberFormat::fixed(0));
        assert_eq!(parse(".2e"), NumberFormat::scientific(2));
        assert_eq!(parse("%E"), NumberFormat::scientific(6));
        assert_eq!(parse("g"), NumberFormat::shortest());
        assert_eq!(parse(""), NumberFormat::shortest());

        assert_eq!(parse("%8.3f"), NumberFormat::fixed(3).with_width(8));
        assert_eq!(parse(".2g"), NumberFormat::general(2));
        assert_eq!(parse("%.3G"), NumberFormat::general(3));
        assert_eq!(
            parse("%+.3f"),
            NumberFormat {
                plus: true,
                ..NumberFormat::fixed(3)
            }
        );
        assert_eq!(
            parse("%08.2f"),
            NumberFormat {
                zero_pad: true,
                ..NumberFormat::fixed(2).with_width(8)
            }
        );
        assert_eq!(
            parse("%-6.1f"),
            NumberFormat {
                left_align: true,
                ..NumberFormat::fixed(1).with_width(6)
            }
        );
        assert_eq!(
            parse("% .1f"),
            NumberFormat {
                space: true,
                ..NumberFormat::fixed(1)
            }
        );
        assert_eq!(
            parse("{:+10.2e}"),
            NumberFormat {
                plus: true,
                ..NumberFormat::scientific(2).with_width(10)
            }
        );

        assert!(matches!(
            ".3x".parse::<NumberFormat>(),
            Err(ReduceError::InvalidNumberFormat(_))
        ));
        assert!(".af".parse::<NumberFormat>().is_err());
        assert!("%.3ff".parse::<NumberFormat>().is_err());
        assert!("%3.2.1f".parse::<NumberFormat>().is_err());
        assert!("%d".parse::<NumberFormat>().is_err());
    }

    #[test]
    fn test_number_format_display_round_trip() {
        for f in [
            NumberFormat::fixed(3),
            NumberFormat::scientific(1),
            NumberFormat::general(4),
            NumberFormat::shortest(),
            "%-+10.2e".parse().unwrap(),
            "%08.3f".parse().unwrap(),
            "% .1g".parse().unwrap(),
        ] {
            assert_eq!(f.to_string().parse::<NumberFormat>().unwrap(), f);
        }
        assert_eq!(NumberFormat::general(2).to_string(), ".2g");
        assert_eq!("%+8.3f".parse::<NumberFormat>().unwrap().to_string(), "+8.3f");
    }

    #[test]
    fn test_format_values() {
        assert_eq!(NumberFormat::fixed(3).format(1.5f64), "1.500");
        assert_eq!(NumberFormat::fixed(0).format(2.0f64), "2");
        assert_eq!(NumberFormat::fixed(2).format(-0.126f32), "-0.13");
        assert_eq!(NumberFormat::shortest().format(0.1f64), "0.1");
    }

    #[test]
    fn test_format_exponent_like_printf() {
        assert_eq!(NumberFormat::scientific(2).format(1234.5f64), "1.23e+03");
        assert_eq!(NumberFormat::scientific(2).format(0.00123f64), "1.23e-03");
        assert_eq!(NumberFormat::scientific(1).format(-2.5e-12f64), "-2.5e-12");
        assert_eq!(NumberFormat::scientific(0).format(3e120f64), "3e+120");
        assert_eq!(NumberFormat::scientific(3).format(0.0f64), "0.000e+00");
    }

    #[test]
    fn test_format_general() {
        assert_eq!(NumberFormat::general(2).format(1234.5f64), "1.2e+03");
        assert_eq!(NumberFormat::general(2).format(0.5f64), "0.5");
        assert_eq!(NumberFormat::general(2).format(12.0f64), "12");
        assert_eq!(NumberFormat::general(3).format(0.0001234f64), "0.000123");
        assert_eq!(NumberFormat::general(3).format(0.00001234f64), "1.23e-05");
        assert_eq!(NumberFormat::general(6).format(100000.0f64), "100000");
        assert_eq!(NumberFormat::general(6).format(1000000.0f64), "1e+06");
        assert_eq!(NumberFormat::general(0).format(7.0f64), "7");
        assert_eq!(NumberFormat::general(3).format(-0.0f64), "0");
    }

    #[test]
    fn test_format_flags_and_width() {
        let format = |spec: &str, value: f64| spec.parse::<NumberFormat>().unwrap().format(value);
        assert_eq!(format("%8.3f", 1.5), "   1.500");
        assert_eq!(format("%8.3f", -1.5), "  -1.500");
        assert_eq!(format("%+.3f", 1.5), "+1.500");
        assert_eq!(format("%+.3f", -1.5), "-1.500");
        assert_eq!(format("%08.2f", -1.5), "-0001.50");
        assert_eq!(format("%+08.2f", 1.5), "+0001.50");
        assert_eq!(format("%-6.1f", 1.5), "1.5   ");
        assert_eq!(format("% .1f", 1.5), " 1.5");
        assert_eq!(format("% .1f", -1.5), "-1.5");
        // Width narrower than the number is ignored
        assert_eq!(format("%2.3f", 123.25), "123.250");
        // `-` wins over `0`
        assert_eq!(format("%-08.1f", 2.0), "2.0     ");
        // A rounded-away negative residue gets the plus sign, not a minus
        assert_eq!(format("%+.2f", -1e-9), "+0.00");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(NumberFormat::fixed(3).format(-0.0f64), "0.000");
        assert_eq!(NumberFormat::fixed(3).format(-1e-12f64), "0.000");
        assert_eq!(NumberFormat::fixed(3).format(-0.001f64), "-0.001");
        assert_eq!(NumberFormat::shortest().format(-0.0f64), "0");
        assert_eq!(NumberFormat::scientific(1).format(-0.0f64), "0.0e+00");
    }

    #[test]
    fn test_render_matrix() {
        let m = AugmentedMatrix::new(vec![vec![4.0, 3.0], vec![6.0, -3.0]], None).unwrap();
        assert_eq!(
            render_matrix(&m, &NumberFormat::fixed(1)),
            "\\left[\\begin{array}{rr}\n\
             4.0 & 3.0 \\\\\n\
             6.0 & -3.0 \\\\\n\
             \\end{array}\\right]"
        );
    }

    #[test]
    fn test_render_augmented_matrix() {
        let m = AugmentedMatrix::new(
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            Some(vec![vec![2.0, 3.0], vec![4.0, 5.0]]),
        )
        .unwrap();
        let text = render_matrix(&m, &NumberFormat::fixed(0));
        assert!(text.starts_with("\\left[\\begin{array}{rr|rr}\n"));
        assert!(text.contains("1 & 0 & 2 & 3 \\\\\n0 & 1 & 4 & 5 \\\\"));
    }

    #[test]
    fn test_annotations() {
        let f = NumberFormat::fixed(3);
        assert_eq!(
            annotation::<f64>(&Operation::Original, &f),
            vec!["\\text{Original Matrix}"]
        );
        assert_eq!(
            annotation::<f64>(&Operation::Swap { first: 0, second: 1 }, &f),
            vec!["R_{1} \\leftrightarrow R_{2}"]
        );
        assert_eq!(
            annotation(&Operation::Normalize { row: 1, scale: 0.25 }, &f),
            vec!["R_{2} = 0.250 R_{2}"]
        );
        assert_eq!(
            annotation(
                &Operation::Eliminate(vec![
                    Elimination {
                        target: 0,
                        pivot: 1,
                        scale: 1.5
                    },
                    Elimination {
                        target: 2,
                        pivot: 1,
                        scale: -2.0
                    },
                ]),
                &f
            ),
            vec!["R_{1} = R_{1} - 1.500 R_{2}", "R_{3} = R_{3} + 2.000 R_{2}"]
        );
    }
}
