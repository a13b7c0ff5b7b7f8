//! Reading the input forms.
//!
//! Field access goes through [`FormSource`] so the coercion and validation
//! rules can be exercised without a document.

use crate::airfoil::{AirfoilRequest, Naca4, Naca5, Naca6, NACA6_POINT_COUNT};
use crate::error::ValidationError;
use crate::reynolds::{ReynoldsInput, ReynoldsMode, ReynoldsRequest};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Element ids of the form fields.
pub mod ids {
    pub const N4_M: &str = "n4_m";
    pub const N4_P: &str = "n4_p";
    pub const N4_T: &str = "n4_t";
    pub const N4_N: &str = "n4_n";
    pub const N4_TE: &str = "n4_te";

    pub const N5_P: &str = "n5_p";
    pub const N5_T: &str = "n5_t";
    pub const N5_N: &str = "n5_n";
    pub const N5_TE: &str = "n5_te";

    pub const N6_FAMILY: &str = "n6_family";
    pub const N6_T: &str = "n6_t";

    pub const RE_V: &str = "re_V";
    pub const RE_C: &str = "re_c";
    pub const RE_NU: &str = "re_nu";
    pub const RE_RHO: &str = "re_rho";
    pub const RE_MU: &str = "re_mu";
}

/// Read access to form fields by element id.
pub trait FormSource {
    /// Text of an input or select; `None` if the field does not exist.
    fn value(&self, id: &str) -> Option<String>;

    /// Checked state of a checkbox; missing fields are unchecked.
    fn checked(&self, id: &str) -> bool;

    /// Value of the checked Reynolds mode radio, if any.
    fn checked_mode(&self) -> Option<String>;
}

/// Parse an airfoil field the way a browser's `parseFloat` reads it: leading
/// whitespace is skipped and the longest decimal prefix is taken. No prefix,
/// an `inf` or `nan` spelling, or an overflow gives NaN.
pub fn parse_float(raw: Option<&str>) -> f64 {
    raw.map(|text| decimal_prefix(text.trim_start()))
        .and_then(finite)
        .unwrap_or(f64::NAN)
}

/// Parse a Reynolds field the way `Number()` does: the whole trimmed text must
/// be a number, and only finite ones count. Anything else is NaN.
pub fn parse_number(raw: Option<&str>) -> f64 {
    raw.map(str::trim).and_then(finite).unwrap_or(f64::NAN)
}

/// Parse a point count the way `parseInt(text, 10)` does: an optional sign and
/// the digits after it, ignoring whatever follows.
pub fn parse_count(raw: Option<&str>) -> Option<i64> {
    let text = raw?.trim_start();
    let sign = usize::from(text.starts_with(['+', '-']));
    let digits = digit_count(&text.as_bytes()[sign..]);
    if digits == 0 {
        return None;
    }
    text[..sign + digits].parse().ok()
}

fn finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|val| val.is_finite())
}

fn digit_count(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// The longest prefix of `text` shaped like `[sign] digits [. digits] [e [sign] digits]`.
fn decimal_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digit_count(&bytes[end..]);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digit_count(&bytes[end + 1..]);
        if whole > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole == 0 && fraction == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digit_count(&bytes[end + 1 + sign..]);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    &text[..end]
}

fn float<F: FormSource + ?Sized>(form: &F, id: &str) -> f64 {
    parse_float(form.value(id).as_deref())
}

fn number<F: FormSource + ?Sized>(form: &F, id: &str) -> f64 {
    parse_number(form.value(id).as_deref())
}

fn count<F: FormSource + ?Sized>(form: &F, id: &str) -> Option<i64> {
    parse_count(form.value(id).as_deref())
}

/// Read and validate the 4-digit form.
pub fn read_naca4<F: FormSource + ?Sized>(form: &F) -> Result<AirfoilRequest, ValidationError> {
    let naca = Naca4 {
        m: float(form, ids::N4_M),
        p: float(form, ids::N4_P),
        t: float(form, ids::N4_T),
        n: count(form, ids::N4_N),
        closed_te: form.checked(ids::N4_TE),
    };
    naca.validate()?;
    Ok(AirfoilRequest::Naca4(naca))
}

/// Read the 5-digit form. The values are forwarded as they are.
pub fn read_naca5<F: FormSource + ?Sized>(form: &F) -> AirfoilRequest {
    AirfoilRequest::Naca5(Naca5 {
        p_pos: float(form, ids::N5_P),
        t: float(form, ids::N5_T),
        n: count(form, ids::N5_N),
        closed_te: form.checked(ids::N5_TE),
    })
}

/// Read the 6-series form. The values are forwarded as they are.
pub fn read_naca6<F: FormSource + ?Sized>(form: &F) -> AirfoilRequest {
    AirfoilRequest::Naca6(Naca6 {
        family: form.value(ids::N6_FAMILY).unwrap_or_default(),
        t: float(form, ids::N6_T),
        n: NACA6_POINT_COUNT,
    })
}

/// The Reynolds mode selected on the form.
pub fn read_mode<F: FormSource + ?Sized>(form: &F) -> ReynoldsMode {
    ReynoldsMode::from_radio(form.checked_mode().as_deref())
}

/// Read and validate the Reynolds form for its selected mode.
pub fn read_reynolds<F: FormSource + ?Sized>(form: &F) -> Result<ReynoldsRequest, ValidationError> {
    let input = ReynoldsInput {
        velocity: number(form, ids::RE_V),
        chord: number(form, ids::RE_C),
        nu: number(form, ids::RE_NU),
        rho: number(form, ids::RE_RHO),
        mu: number(form, ids::RE_MU),
    };
    ReynoldsRequest::new(&input, read_mode(form))
}
