// integer.rs - Integer allele calls with QC-code cleanup

use super::traits::{Allele, AlleleEncoder, MISSING};

/// Fixed-width QC codes whose trailing digit must not survive letter blanking.
const PLOT_CODES: [&[u8]; 2] = [b"PLOT3", b"PLOT5"];

/// Plain integer allele calls, as written by chewBBACA and friends.
///
/// QC codes (`LNF`, `NIPH`, `ASM`, `PLOT3`...) become [`MISSING`]; inferred
/// calls like `INF-12` keep their number.
#[derive(Debug, Clone)]
pub struct IntegerEncoder;

impl AlleleEncoder for IntegerEncoder {
    fn encode(&self, raw: &[u8]) -> Allele {
        parse_magnitude(&blank_qc_codes(raw))
    }

    fn name(&self) -> &'static str {
        "integer"
    }

    fn description(&self) -> &'static str {
        "Integer allele calls; QC codes are treated as missing"
    }
}

/// Replace `PLOT3`/`PLOT5` and then every ASCII letter with a blank.
///
/// The output always has the same length as the input.
pub fn blank_qc_codes(raw: &[u8]) -> Vec<u8> {
    let mut cleaned = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        let rest = &raw[i..];
        if let Some(code) = PLOT_CODES.iter().find(|code| rest.starts_with(code)) {
            cleaned.extend(std::iter::repeat(b' ').take(code.len()));
            i += code.len();
            continue;
        }
        let byte = raw[i];
        cleaned.push(if byte.is_ascii_alphabetic() { b' ' } else { byte });
        i += 1;
    }
    cleaned
}

/// Read the leading integer of a field and drop its sign.
///
/// Leading blanks are skipped and anything after the first digit run is
/// ignored. No digits means [`MISSING`]. Oversized values wrap.
pub fn parse_magnitude(field: &[u8]) -> Allele {
    let mut rest = field.trim_ascii_start();
    if let Some((&sign, tail)) = rest.split_first() {
        if sign == b'-' || sign == b'+' {
            rest = tail;
        }
    }

    let digits = rest.iter().take_while(|b| b.is_ascii_digit());
    let mut seen = false;
    let value = digits.fold(0u64, |acc, d| {
        seen = true;
        acc.wrapping_mul(10).wrapping_add(u64::from(d - b'0'))
    });
    if seen {
        value
    } else {
        MISSING
    }
}
