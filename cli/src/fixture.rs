//! Fixture text parsing
//!
//! Reads back the text layout written by [`crate::render::render_text`].
//! Blank lines, `#` comments (the multiplier header, `# State:` lines and
//! the separator) and `//` comments are skipped. Values that appear
//! before the first `Seed:` label belong to the header and are ignored.
//!
//! The `# State:` block is not read; under the verbatim seeding policy it
//! always equals the seed.

use xoshiro_core_rs::{Seed, VectorSet};

use crate::error::{CliError, CliResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Section {
    Seed,
    Integers,
    Longs,
    Floats,
    Doubles,
    Bytes,
}

impl Section {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Seed" => Some(Self::Seed),
            "Integers" => Some(Self::Integers),
            "Longs" => Some(Self::Longs),
            "Floats" => Some(Self::Floats),
            "Doubles" => Some(Self::Doubles),
            "Bytes" => Some(Self::Bytes),
            _ => None,
        }
    }
}

/// One `Seed:` block being read
#[derive(Default)]
struct SetBuilder {
    words: Vec<String>,
    integers: Vec<i32>,
    longs: Vec<i64>,
    floats: Vec<f32>,
    doubles: Vec<f64>,
    bytes: Vec<u8>,
}

impl SetBuilder {
    /// `None` if `value` is not valid for `section`
    fn push(&mut self, section: Section, value: &str) -> Option<()> {
        match section {
            // Checked as a whole in `finish`, which reports the word index
            Section::Seed => self.words.push(value.to_string()),
            Section::Integers => self.integers.push(u32::try_from(hex(value)?).ok()? as i32),
            Section::Longs => self.longs.push(hex(value)? as i64),
            Section::Floats => self.floats.push(value.parse::<f64>().ok()? as f32),
            Section::Doubles => self.doubles.push(value.parse().ok()?),
            Section::Bytes => self.bytes.push(u8::try_from(hex(value)?).ok()?),
        }
        Some(())
    }

    fn finish(self) -> CliResult<VectorSet> {
        let seed = Seed::from_hex_words(self.words.as_slice())?;
        Ok(VectorSet {
            seed,
            state: seed.words(),
            integers: self.integers,
            longs: self.longs,
            floats: self.floats,
            doubles: self.doubles,
            bytes: self.bytes,
        })
    }
}

/// Unsigned hex with an optional `0x` prefix and no sign
fn hex(value: &str) -> Option<u64> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

fn error(line: usize, message: String) -> CliError {
    CliError::Fixture { line, message }
}

/// Parse fixture text into one [`VectorSet`] per `Seed:` block
///
/// Sections may hold any number of values; [`VectorSet::verify`] checks
/// each over its own length.
pub fn parse_fixture(text: &str) -> CliResult<Vec<VectorSet>> {
    let mut sets = Vec::new();
    let mut current: Option<SetBuilder> = None;
    let mut section: Option<Section> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        if let Some(label) = line.strip_suffix(':') {
            let next = Section::from_label(label)
                .ok_or_else(|| error(line_no, format!("unknown section '{}'", label)))?;

            if next == Section::Seed {
                if let Some(builder) = current.take() {
                    sets.push(builder.finish()?);
                }
                current = Some(SetBuilder::default());
            } else if current.is_none() {
                return Err(error(line_no, format!("'{}' section before any Seed", label)));
            }
            section = Some(next);
            continue;
        }

        // Header values
        let (Some(builder), Some(section)) = (current.as_mut(), section) else {
            continue;
        };
        builder
            .push(section, line)
            .ok_or_else(|| error(line_no, format!("invalid {:?} value '{}'", section, line)))?;
    }

    if let Some(builder) = current {
        sets.push(builder.finish()?);
    }
    if sets.is_empty() {
        return Err(error(text.lines().count(), "no Seed sections found".to_string()));
    }

    tracing::debug!(sets = sets.len(), "parsed fixture");
    Ok(sets)
}
