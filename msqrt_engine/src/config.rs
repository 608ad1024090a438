//! Recurrence parameters and the register layouts derived from them
//!
//! A config is plain data that can be edited or deserialized freely. It is
//! only checked when it is turned into a layout with `layout()`, which every
//! engine does before creating any register.

use msqrt_core::ceil_div;

use crate::{ConfigError, IndexOverride, SrtTable};

/// The widest digit the engines handle, digits are loaded as `i64`
/// constants and stored in `u32` digit lists
const MAX_RADIX: usize = 32;

fn check_common(m: usize, n: usize) -> Result<(), ConfigError> {
    if m == 0 {
        return Err(ConfigError::ZeroRadix)
    }
    if n == 0 {
        return Err(ConfigError::ZeroDigits)
    }
    if m > MAX_RADIX {
        return Err(ConfigError::RadixTooWide(m))
    }
    if ((m * n) % 2) != 0 {
        return Err(ConfigError::OddProcessor(m * n))
    }
    Ok(())
}

/// Parameters of the basic verification recurrence, which replays the
/// precomputed digits of the root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde_support",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BasicConfig {
    /// radix exponent, digits are `m` bits wide
    pub m: usize,
    /// number of root digits
    pub n: usize,
    /// guard bits
    pub z: usize,
    /// extra residual bits on top of the minimal width. A residual of the
    /// minimal width overflows right after the `2m` shift in rare cases, which
    /// a single guard bit prevents.
    pub residual_guard_bits: usize,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            m: 9,
            n: 8,
            z: 11,
            residual_guard_bits: 1,
        }
    }
}

/// Widths and constants of a basic recurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasicLayout {
    pub m: usize,
    pub n: usize,
    pub z: usize,
    /// `ceil(z / m)`, the number of digits the guard bits occupy
    pub overhead: usize,
    /// padding that aligns the guard bits to a digit boundary
    pub excess: usize,
    /// operand width `m * n`
    pub processor: usize,
    pub root_width: usize,
    pub multiplicand_width: usize,
    pub residual_width: usize,
    /// width of the root padded with `excess` zero bits
    pub padded_root_width: usize,
    /// number of recurrence steps, one per padded root digit
    pub iterations: usize,
    /// left shift of the linear-quadratic term
    pub lq_shift: usize,
}

impl BasicConfig {
    pub fn new(m: usize, n: usize, z: usize) -> Self {
        Self {
            m,
            n,
            z,
            ..Default::default()
        }
    }

    /// Validates `self` and derives the register layout
    pub fn layout(&self) -> Result<BasicLayout, ConfigError> {
        let (m, n, z) = (self.m, self.n, self.z);
        check_common(m, n)?;
        let overhead = ceil_div(z, m);
        let excess = if (z % m) != 0 { m - (z % m) } else { 0 };
        Ok(BasicLayout {
            m,
            n,
            z,
            overhead,
            excess,
            processor: m * n,
            root_width: m * (n + ((excess > 0) as usize)),
            multiplicand_width: m * (2 * n + overhead - 1),
            residual_width: 2 * m * (n + 1) + 2 * z + excess + 1 + self.residual_guard_bits,
            padded_root_width: m * n + m * overhead,
            iterations: n + overhead,
            lq_shift: m * (n + 1) + 2 * z,
        })
    }
}

/// Parameters of the practical recurrence, which selects its own redundant
/// digits from a table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde_support",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PracticalConfig {
    pub m: usize,
    pub n: usize,
    pub z: usize,
    /// the digit set is `[-alpha, beta]`
    pub alpha: i32,
    pub beta: i32,
    /// root estimate bits
    pub ns: usize,
    /// residual sample bits, excluding the sign and loose bits
    pub np: usize,
    /// how many residual sample bits lie below the binary point
    pub np_fractional: usize,
    pub table: SrtTable,
    /// table row of residual region zero
    pub origin: isize,
    /// if only the nonnegative half of the residual regions is tabulated, with
    /// negative regions using the negated digit of their mirror
    pub symmetric: bool,
    pub overrides: Vec<IndexOverride>,
}

impl Default for PracticalConfig {
    /// Set 1, the radix 4 reference set
    fn default() -> Self {
        Self {
            m: 2,
            n: 10,
            z: 4,
            alpha: 3,
            beta: 3,
            ns: 3,
            np: 5,
            np_fractional: 2,
            table: SrtTable::set_one(),
            origin: 8 << 2,
            symmetric: true,
            overrides: vec![],
        }
    }
}

/// Widths and constants of a practical recurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PracticalLayout {
    pub m: usize,
    pub n: usize,
    pub z: usize,
    pub processor: usize,
    /// number of recurrence steps
    pub iterations: usize,
    /// the iteration that selects the first nonzero digit
    pub delta: usize,
    /// bits between the guard bits and the next digit boundary
    pub mb: usize,
    pub root_width: usize,
    pub multiplicand_width: usize,
    pub residual_width: usize,
    pub residual_sample_width: usize,
    pub root_sample_width: usize,
    pub operand_width: usize,
    pub padded_root_width: usize,
    /// initial position of the residual sample
    pub cursor: isize,
    pub lq_shift: usize,
    /// position of the 3 bit sample that selects the first digit
    pub leading_position: usize,
}

impl PracticalConfig {
    /// Validates `self` and derives the register layout
    pub fn layout(&self) -> Result<PracticalLayout, ConfigError> {
        let (m, n, z) = (self.m, self.n, self.z);
        check_common(m, n)?;
        if z < m {
            return Err(ConfigError::GuardBelowRadix { z, m })
        }
        if (self.ns < 2) || (self.np == 0) {
            return Err(ConfigError::SampleTooNarrow)
        }
        for o in &self.overrides {
            if o.from_column == 0 {
                return Err(ConfigError::OverrideColumn(o.from_column))
            }
            if o.to_column == 0 {
                return Err(ConfigError::OverrideColumn(o.to_column))
            }
        }
        let iterations = n + ceil_div(z + 2, m);
        let lq_shift = m * (n + 1) + 2 * z;
        let mb = m * ceil_div(z, m) - z;
        Ok(PracticalLayout {
            m,
            n,
            z,
            processor: m * n,
            iterations,
            delta: (z / m) + 1,
            mb,
            root_width: m * iterations - z,
            multiplicand_width: m * (iterations + n - 2),
            residual_width: m * (iterations + n + 2) + z + 1,
            residual_sample_width: self.np + 2,
            root_sample_width: self.ns + 1,
            operand_width: m * (n + 1),
            padded_root_width: z + m * n + mb,
            cursor: ((m * n + z) as isize) - (self.np_fractional as isize) - 1,
            lq_shift,
            leading_position: lq_shift - 3,
        })
    }
}
