//! Equal-area strip tables for the normal ziggurat.
//!
//! A table is determined by its tail edge `x1`. The base strip (rectangle
//! under `x1` plus the tail beyond it) fixes the common area `A`, and each
//! further strip of width `table[i]` must also hold `A`, which fixes the
//! density at its top. The right `x1` makes the last strip top out exactly at
//! the peak density.
//!
//! Edges that are too small give strips that overshoot the peak early; edges
//! that are too large leave the last strip short of it. The objective is `-1`
//! in the first case and the final table entry in the second, so the root is
//! where building switches from failing to succeeding.

use log::{debug, info};
use ziggurat_rs::gauss::{density, inverse_density, tail_mass};

use crate::error::TableError;
use crate::rootfind::{adjacent, bisect, find_bracket};

/// Largest accepted `table_bits`.
pub const MAX_TABLE_BITS: u32 = 16;

/// Knobs for the root search
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// The table has `1 << table_bits` strips
    pub table_bits: u32,
    /// Starting point of the bracket search
    pub seed: f64,
    /// Additive widening per bracket round
    pub delta: f64,
    /// Multiplicative widening per bracket round, must exceed 1
    pub scale: f64,
    /// Bracket rounds before giving up
    pub max_expansions: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            table_bits: 7,
            seed: 1.0,
            delta: 0.0,
            scale: 1.1,
            max_expansions: 256,
        }
    }
}

impl GeneratorConfig {
    pub fn with_bits(table_bits: u32) -> Self {
        Self {
            table_bits,
            ..Self::default()
        }
    }

    /// Number of strips, after checking `table_bits`
    pub fn strips(&self) -> Result<usize, TableError> {
        if !(1..=MAX_TABLE_BITS).contains(&self.table_bits) {
            return Err(TableError::InvalidBits {
                bits: self.table_bits,
                max: MAX_TABLE_BITS,
            });
        }
        Ok(1 << self.table_bits)
    }
}

/// A finished table
#[derive(Debug, Clone, PartialEq)]
pub struct StripTable {
    edge: f64,
    area: f64,
    values: Vec<f64>,
}

impl StripTable {
    /// Tail edge `x1`, also `values()[1]`
    pub fn edge(&self) -> f64 {
        self.edge
    }

    /// Common strip area
    pub fn area(&self) -> f64 {
        self.area
    }

    /// `strips() + 1` entries, `values()[0]` being the base strip's virtual width
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn strips(&self) -> usize {
        // build_table never yields fewer than two values
        self.values.len() - 1
    }
}

/// Area of the base strip for tail edge `edge`.
#[inline]
pub fn strip_area(edge: f64) -> f64 {
    edge * density(edge) + tail_mass(edge)
}

/// Stack `strips` strips of equal area on top of the tail edge `edge`.
pub fn build_table(edge: f64, strips: usize) -> Result<StripTable, TableError> {
    if strips == 0 {
        return Err(TableError::NoStrips);
    }
    let area = strip_area(edge);

    let mut values = vec![0.0; strips + 1];
    values[0] = area / density(edge);
    values[1] = edge;

    let peak = density(0.0);
    let mut top = density(edge);

    for strip in 1..strips {
        top += area / values[strip];
        if top > peak {
            return Err(TableError::Overflow { edge, strip });
        }
        values[strip + 1] = inverse_density(top);
    }

    Ok(StripTable { edge, area, values })
}

/// Signed objective: last table entry, or `-1` when the strips overflow.
pub fn objective(edge: f64, strips: usize) -> f64 {
    build_table(edge, strips).map_or(-1.0, |table| table.values[strips])
}

/// Solve for the tail edge and build the table.
pub fn generate(config: &GeneratorConfig) -> Result<StripTable, TableError> {
    let strips = config.strips()?;
    let g = |edge: f64| objective(edge, strips);

    let (min, max) = find_bracket(g, config.seed, config.delta, config.scale, config.max_expansions)?;
    info!("{} strips: tail edge bracketed in [{}, {}]", strips, min, max);

    let (lo, hi) = bisect(g, min, max, adjacent);
    debug!("g({}) = {}, g({}) = {}", lo, g(lo), hi, g(hi));

    // Only one end of the converged bracket builds; normally the upper one
    let table = build_table(hi, strips)
        .or_else(|_| build_table(lo, strips))
        .map_err(|_| TableError::NoConvergence { lo, hi })?;

    info!(
        "tail edge {:.17}, strip area {:.17e}, last edge {:e}",
        table.edge,
        table.area,
        table.values[strips]
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziggurat_rs::tables::normal::{NORMAL_F32, NORMAL_F64};

    fn assert_matches(generated: &[f64], compiled: &[f64], tolerance: f64) {
        assert_eq!(generated.len(), compiled.len());
        let last = compiled.len() - 1;
        for (i, (&g, &c)) in generated.iter().zip(compiled).enumerate().take(last) {
            assert!(
                ((g - c) / c).abs() < tolerance,
                "entry {}: generated {}, compiled {}",
                i,
                g,
                c
            );
        }
        // The last edge sits at the noise floor next to zero
        assert!(generated[last] >= 0.0 && generated[last] < 1e-6);
        assert!(compiled[last] >= 0.0 && compiled[last] < 1e-6);
    }

    #[test]
    fn test_generate_matches_f64_table() {
        let table = generate(&GeneratorConfig::default()).unwrap();
        assert_eq!(table.strips(), 128);
        assert_matches(&table.values, &NORMAL_F64, 1e-10);
    }

    #[test]
    fn test_generate_matches_f32_table() {
        let table = generate(&GeneratorConfig::with_bits(6)).unwrap();
        assert_eq!(table.strips(), 64);
        let compiled: Vec<f64> = NORMAL_F32.iter().map(|&x| f64::from(x)).collect();
        assert_matches(&table.values, &compiled, 1e-6);
    }

    #[test]
    fn test_generated_strips_have_equal_area() {
        let table = generate(&GeneratorConfig::with_bits(8)).unwrap();
        let values = &table.values;
        assert!((values[0] * density(values[1]) - table.area).abs() < 1e-15);
        for i in 1..table.strips() {
            let area = values[i] * (density(values[i + 1]) - density(values[i]));
            assert!(
                ((area - table.area) / table.area).abs() < 1e-10,
                "strip {} has area {}, expected {}",
                i,
                area,
                table.area
            );
        }
        // Marsaglia and Tsang's 256-strip edge
        assert!((table.edge - 3.6541528853610088).abs() < 1e-12);
    }

    #[test]
    fn test_table_decreases() {
        let table = generate(&GeneratorConfig::default()).unwrap();
        assert!(table.values[0] > table.values[1]);
        for pair in table.values[1..].windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_build_table_overflow() {
        assert!(matches!(
            build_table(1.0, 128),
            Err(TableError::Overflow { strip: 1, .. })
        ));
        assert_eq!(objective(1.0, 128), -1.0);
        // Far too large an edge never reaches the peak
        assert!(objective(5.0, 128) > 0.1);
    }

    #[test]
    fn test_build_table_needs_a_strip() {
        assert_eq!(build_table(3.0, 0), Err(TableError::NoStrips));
        assert_eq!(objective(3.0, 0), -1.0);

        let single = build_table(3.0, 1).unwrap();
        assert_eq!(single.strips(), 1);
        assert_eq!(single.values().len(), 2);
        assert_eq!(single.values()[1], single.edge());
    }

    #[test]
    fn test_invalid_config() {
        assert_eq!(
            generate(&GeneratorConfig::with_bits(0)),
            Err(TableError::InvalidBits { bits: 0, max: 16 })
        );
        let config = GeneratorConfig {
            scale: 0.5,
            ..GeneratorConfig::default()
        };
        assert_eq!(generate(&config), Err(TableError::InvalidScale(0.5)));
        let config = GeneratorConfig {
            max_expansions: 3,
            ..GeneratorConfig::default()
        };
        assert!(matches!(generate(&config), Err(TableError::NoBracket { .. })));
    }

    #[test]
    fn test_invalid_bits_message() {
        for bits in [0, 17, 64, u32::MAX] {
            let err = generate(&GeneratorConfig::with_bits(bits)).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("table bits must be in 1..=16, got {}", bits)
            );
        }
    }
}
