//! Text rendering of the processor output.
//!
//! Matrices follow numpy's default `repr` for float arrays: at most eight
//! fractional digits, the shortest digits that round-trip, and one shared
//! width for integer and fractional parts. Scientific notation kicks in when
//! the magnitudes are too far apart or out of range.

use cv_core::{format_point, Matrix3d};
use cv_imgproc::ProcessOutput;

const PRECISION: usize = 8;

pub fn render_report(output: &ProcessOutput) -> String {
    format!(
        "3x3 Matrix:\n {}\nPoint 1: {}\nPoint 2: {}\n",
        render_matrix(&output.matrix),
        format_point(&output.point1),
        format_point(&output.point2),
    )
}

pub fn render_matrix(m: &Matrix3d) -> String {
    let values: Vec<f64> = m.transpose().iter().copied().collect();
    let fmt = FloatFormat::fill(&values);

    let rows: Vec<String> = m
        .row_iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|&v| fmt.format(v)).collect();
            format!("[{}]", cells.join(" "))
        })
        .collect();
    format!("[{}]", rows.join("\n "))
}

/// Layout shared by every element of one array.
#[derive(Debug, Clone, PartialEq)]
struct FloatFormat {
    scientific: bool,
    pad_left: usize,
    pad_right: usize,
    precision: usize,
    exp_size: usize,
}

impl FloatFormat {
    fn fill(values: &[f64]) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let non_zero: Vec<f64> = finite.iter().map(|v| v.abs()).filter(|&v| v != 0.0).collect();

        let scientific = if non_zero.is_empty() {
            false
        } else {
            let max = non_zero.iter().copied().fold(f64::MIN, f64::max);
            let min = non_zero.iter().copied().fold(f64::MAX, f64::min);
            max >= 1e8 || min < 1e-4 || max / min > 1e3
        };

        let mut fmt = Self {
            scientific,
            pad_left: 0,
            pad_right: 0,
            precision: 0,
            exp_size: 0,
        };

        if scientific {
            for &v in &finite {
                let (int, frac, exp) = unique_scientific(v);
                fmt.pad_left = fmt.pad_left.max(int.len());
                fmt.precision = fmt.precision.max(frac.len());
                fmt.exp_size = fmt.exp_size.max(exp.len() - 1);
            }
            fmt.pad_right = fmt.exp_size + 2 + fmt.precision;
        } else {
            for &v in &finite {
                let (int, frac) = unique_positional(v);
                fmt.pad_left = fmt.pad_left.max(int.len());
                fmt.pad_right = fmt.pad_right.max(frac.len());
            }
        }

        if finite.len() != values.len() {
            let neg_inf = values.iter().any(|v| v.is_infinite() && *v < 0.0);
            let offset = fmt.pad_right + 1;
            let inf_len = 3 + usize::from(neg_inf);
            fmt.pad_left = fmt
                .pad_left
                .max(3usize.saturating_sub(offset))
                .max(inf_len.saturating_sub(offset));
        }
        fmt
    }

    fn format(&self, v: f64) -> String {
        if !v.is_finite() {
            let s = if v.is_nan() {
                "nan"
            } else if v > 0.0 {
                "inf"
            } else {
                "-inf"
            };
            let width = self.pad_left + self.pad_right + 1;
            return format!("{s:>width$}");
        }

        let pad_left = self.pad_left;
        if self.scientific {
            let (int, frac, exp) = unique_scientific(v);
            let (sign, digits) = exp.split_at(1);
            let (precision, exp_size) = (self.precision, self.exp_size);
            format!("{int:>pad_left$}.{frac:0<precision$}e{sign}{digits:0>exp_size$}")
        } else {
            let (int, frac) = unique_positional(v);
            let pad_right = self.pad_right;
            format!("{int:>pad_left$}.{frac:<pad_right$}")
        }
    }
}

/// Shortest round-trip digits, cut to `PRECISION` fractional digits, split
/// into integer and fractional parts with trailing zeros removed.
fn unique_positional(v: f64) -> (String, String) {
    let mut s = v.to_string();
    if s.split_once('.').is_some_and(|(_, frac)| frac.len() > PRECISION) {
        s = format!("{:.*}", PRECISION, v);
    }
    match s.split_once('.') {
        Some((int, frac)) => (int.to_string(), frac.trim_end_matches('0').to_string()),
        None => (s, String::new()),
    }
}

/// Scientific counterpart of [`unique_positional`]. The exponent carries its
/// sign and at least two digits, e.g. `+08`.
fn unique_scientific(v: f64) -> (String, String, String) {
    let mut s = format!("{v:e}");
    let too_long = s
        .split_once('e')
        .and_then(|(mantissa, _)| mantissa.split_once('.'))
        .is_some_and(|(_, frac)| frac.len() > PRECISION);
    if too_long {
        s = format!("{:.*e}", PRECISION, v);
    }

    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    (
        int.to_string(),
        frac.trim_end_matches('0').to_string(),
        format!("{sign}{:02}", exp.abs()),
    )
}
