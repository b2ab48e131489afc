//! Vector set rendering
//!
//! The text layout matches the reference fixture files: one section per
//! seed, hex for integers and bytes, 36 decimal places for floats.
//!
//! Floats are printed the way Java's `%.036f` prints them: the shortest
//! digits that round-trip the value (widened to f64), zero-padded to 36
//! places. `{:.36}` would print the exact binary expansion instead, e.g.
//! `0.274112820625305175781250...` where the fixtures have
//! `0.274112820625305200...`.

use std::fmt::Write;

use serde::Serialize;
use xoshiro_core_rs::{
    seed_fingerprint, Seed, VectorSet, DOUBLE_MULTIPLIER, FLOAT_MULTIPLIER,
};

use crate::error::CliResult;

const SEPARATOR: &str = "######################################";

/// JSON document: the multiplier bit patterns plus every vector set
#[derive(Debug, Serialize)]
struct VectorReport<'a> {
    float_multiplier_bits: u32,
    double_multiplier_bits: u64,
    sets: &'a [VectorSet],
}

const FRACTION_DIGITS: usize = 36;

/// Render vector sets in the fixture text format
pub fn render_text(sets: &[VectorSet]) -> CliResult<String> {
    let mut out = String::new();
    write_header(&mut out)?;
    for set in sets {
        write_set(&mut out, set)?;
    }
    Ok(out)
}

/// Shortest round-trip digits of `value`, fraction padded to 36 places
fn fixed36(value: f64) -> String {
    shortest_fixed(value, FRACTION_DIGITS).unwrap_or_else(|| format!("{:.36}", value))
}

/// `None` for non-finite values or digits that don't fit in `places`
fn shortest_fixed(value: f64, places: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    // `{:e}` is the shortest round-trip form: "2.741128206253052e-1", "0e0"
    let sci = format!("{:e}", value);
    let (mantissa, exp) = sci.split_once('e')?;
    let exp: i64 = exp.parse().ok()?;
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    // Position of the decimal point within `digits`
    let point = exp + 1;
    let (int_part, frac_part) = if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        ("0".to_string(), format!("{}{}", zeros, digits))
    } else {
        let point = point as usize;
        if point >= digits.len() {
            let zeros = "0".repeat(point - digits.len());
            (format!("{}{}", digits, zeros), String::new())
        } else {
            (digits[..point].to_string(), digits[point..].to_string())
        }
    };

    if frac_part.len() > places {
        return None;
    }
    Some(format!("{}{}.{:0<places$}", sign, int_part, frac_part, places = places))
}

fn write_header(out: &mut String) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "# FLOAT_MULTIPLIER:")?;
    writeln!(out, "\t0x{:x}", FLOAT_MULTIPLIER.to_bits())?;
    writeln!(out, "\t{}", fixed36(FLOAT_MULTIPLIER as f64))?;
    writeln!(out, "# DOUBLE_MULTIPLIER:")?;
    writeln!(out, "\t0x{:x}", DOUBLE_MULTIPLIER.to_bits())?;
    writeln!(out, "\t{}", fixed36(DOUBLE_MULTIPLIER))?;
    writeln!(out, "\n\n")
}

fn write_set(out: &mut String, set: &VectorSet) -> std::fmt::Result {
    writeln!(out, "Seed:")?;
    for word in set.seed.words() {
        writeln!(out, "\t0x{:016x}", word)?;
    }

    writeln!(out, "\n\n\t# State:")?;
    for word in set.state {
        writeln!(out, "\t#\t0x{:016x}", word)?;
    }

    writeln!(out, "\n\nIntegers:")?;
    for value in &set.integers {
        writeln!(out, "\t0x{:08x}", value)?;
    }

    writeln!(out, "\n\nLongs:")?;
    for value in &set.longs {
        writeln!(out, "\t0x{:016x}", value)?;
    }

    writeln!(out, "\n\nFloats:")?;
    for value in &set.floats {
        writeln!(out, "\t{}", fixed36(*value as f64))?;
    }

    writeln!(out, "\n\nDoubles:")?;
    for value in &set.doubles {
        writeln!(out, "\t{}", fixed36(*value))?;
    }

    writeln!(out, "\n\nBytes:")?;
    for value in &set.bytes {
        writeln!(out, "\t0x{:02x}", value)?;
    }

    writeln!(out, "\n\n{}\n", SEPARATOR)
}

/// Render vector sets as pretty JSON
pub fn render_json(sets: &[VectorSet]) -> CliResult<String> {
    let report = VectorReport {
        float_multiplier_bits: FLOAT_MULTIPLIER.to_bits(),
        double_multiplier_bits: DOUBLE_MULTIPLIER.to_bits(),
        sets,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// One line per seed: the seed words and the digest of its first `draws` draws
pub fn render_digests(seeds: &[Seed], draws: usize) -> CliResult<String> {
    let mut out = String::new();
    for seed in seeds {
        let words: Vec<String> = seed.words().iter().map(|w| format!("0x{:016x}", w)).collect();
        writeln!(
            out,
            "{}  sha256({} draws) = {}",
            words.join(","),
            draws,
            seed_fingerprint(*seed, draws)
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xoshiro_core_rs::{APACHE_REFERENCE_SEED, ZERO_SEED};

    #[test]
    fn test_header_shows_exact_multipliers() {
        let text = render_text(&[]).unwrap();
        assert!(text.starts_with("\n# FLOAT_MULTIPLIER:\n\t0x33800000\n"));
        assert!(text.contains("\t0.000000059604644775390625000000000000\n"));
        assert!(text.contains("\t0x3ca0000000000000\n"));
        assert!(text.contains("\t0.000000000000000111022302462515650000\n"));
    }

    #[test]
    fn test_floats_use_shortest_digits_padded() {
        let set = VectorSet::generate(APACHE_REFERENCE_SEED, 1);
        let text = render_text(&[set]).unwrap();

        assert!(text.contains("Floats:\n\t0.274112820625305200000000000000000000\n"));
        assert!(text.contains("Doubles:\n\t0.274112831327786740000000000000000000\n"));
    }

    #[test]
    fn test_fixed36_edge_values() {
        assert_eq!(fixed36(0.0), format!("0.{}", "0".repeat(36)));
        assert_eq!(fixed36(0.5), format!("0.5{}", "0".repeat(35)));
        assert_eq!(fixed36(12.25), format!("12.25{}", "0".repeat(34)));
        assert_eq!(fixed36(1e3), format!("1000.{}", "0".repeat(36)));
        assert_eq!(fixed36(-0.125), format!("-0.125{}", "0".repeat(33)));
        // Too many fractional digits falls back to rounding
        assert_eq!(fixed36(1e-40), format!("0.{}", "0".repeat(36)));
    }

    #[test]
    fn test_text_sections_in_order() {
        let set = VectorSet::generate(APACHE_REFERENCE_SEED, 2);
        let text = render_text(&[set]).unwrap();

        let order = ["Seed:", "# State:", "Integers:", "Longs:", "Floats:", "Doubles:", "Bytes:"];
        let positions: Vec<usize> = order
            .iter()
            .map(|label| text.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(text.contains("\t0x012de1babb3c4104\n"));
        assert!(text.contains("\t0x462c422d\n"));
        assert!(text.contains("\t0xa82f1f60\n"));
        assert!(text.contains("\t0x462c422df780c48e\n"));
        assert!(text.contains("\t0x8e\n\t0xc4\n"));
        assert!(text.contains(SEPARATOR));
    }

    #[test]
    fn test_negative_integers_render_as_unsigned_hex() {
        let set = VectorSet::generate(APACHE_REFERENCE_SEED, 3);
        let text = render_text(&[set]).unwrap();
        assert!(text.contains("\t0x8a113820\n"));
    }

    #[test]
    fn test_json_report_contains_sets() {
        let sets = vec![VectorSet::generate(ZERO_SEED, 2)];
        let json = render_json(&sets).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["float_multiplier_bits"], 0x3380_0000u32);
        assert_eq!(value["sets"][0]["longs"], serde_json::json!([0, 0]));
    }

    #[test]
    fn test_digest_line_per_seed() {
        let text = render_digests(&[APACHE_REFERENCE_SEED, ZERO_SEED], 1000).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(
            "5a331c9c60264901cef909f4f47e2c6aa0eaef2373897a702c87d73b4a18a256"
        ));
    }
}
