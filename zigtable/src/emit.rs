//! Rust source for a strip table.

use gpoint::GPoint;

use crate::generate::StripTable;

/// Significant digits per value, enough to round-trip an `f64`.
pub const DIGITS: usize = 18;

const VALUES_PER_LINE: usize = 4;

/// Element type of the emitted array
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Width {
    F32,
    F64,
}

impl Width {
    pub fn type_name(self) -> &'static str {
        match self {
            Width::F32 => "f32",
            Width::F64 => "f64",
        }
    }

    /// Table bits the sampler uses for this width
    pub fn default_bits(self) -> u32 {
        match self {
            Width::F32 => 6,
            Width::F64 => 7,
        }
    }
}

/// `%.18g` formatting, made into a valid float literal.
pub fn format_value(value: f64) -> String {
    let text = format!("{:.*}", DIGITS, GPoint(value));
    if text.contains(['.', 'e', 'n']) {
        text
    } else {
        // %g drops the point from integral values
        text + ".0"
    }
}

/// Emit `table` as a `pub static` array item named `name`.
pub fn emit_rust(table: &StripTable, name: &str, width: Width) -> String {
    let strips = table.strips();
    let header = format!(
        "/// `table_bits = {}`, {} strips.\npub static {}: [{}; {}] = [\n",
        strips.trailing_zeros(),
        strips,
        name,
        width.type_name(),
        table.values().len()
    );
    let body: String = table
        .values()
        .chunks(VALUES_PER_LINE)
        .map(|line| {
            let values: Vec<String> = line.iter().map(|&v| format!("{},", format_value(v))).collect();
            format!("    {}\n", values.join(" "))
        })
        .collect();
    header + &body + "];\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{GeneratorConfig, build_table, generate};

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3.083228858214214), "3.083228858214214");
        assert_eq!(format_value(2.0), "2.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(-3.0), "-3.0");
        assert_eq!(format_value(3.71308624674036292), "3.71308624674036292");
        assert_eq!(format_value(8.56006539842194211e-08), "8.56006539842194211e-08");
        assert_eq!(format_value(0.000244140625), "0.000244140625");
    }

    #[test]
    fn test_integral_values_stay_float_literals() {
        let table = build_table(2.0, 2).unwrap();
        let source = emit_rust(&table, "TWO", Width::F32);
        assert!(source.contains("pub static TWO: [f32; 3] = [\n"));
        assert!(source.contains(" 2.0,"), "edge 2 must be written as 2.0:\n{}", source);
        assert_eq!(source.lines().count(), 4);
    }

    #[test]
    fn test_emitted_values_round_trip() {
        let table = generate(&GeneratorConfig::with_bits(4)).unwrap();
        let source = emit_rust(&table, "NORMAL_TEST", Width::F64);

        assert!(source.starts_with("/// `table_bits = 4`, 16 strips.\n"));
        assert!(source.contains("pub static NORMAL_TEST: [f64; 17] = [\n"));
        assert!(source.ends_with("];\n"));

        let body = source.lines().filter(|line| line.starts_with("    "));
        let parsed: Vec<f64> = body
            .flat_map(|line| line.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| token.parse().unwrap())
            .collect();
        assert_eq!(parsed, table.values());
    }
}
