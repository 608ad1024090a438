//! Table driven selection of redundant root digits

use msqrt_core::Register;

use crate::{EngineError, PracticalConfig};

/// The register windows a digit is selected from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Samples {
    /// signed `np + 2` bit window of the practical residual
    pub residual: Register,
    /// unsigned `ns + 1` bit window of the practical root
    pub root: Register,
    /// unsigned 3 bit window of the practical residual at its leading digit
    pub leading: Register,
}

fn bit(r: &Register, inx: usize) -> bool {
    r.get(inx) == Some(true)
}

/// Selects the root digit of `iteration`.
///
/// Before `delta` the digit is 0, and at `delta` it is 1, 2, or 3 depending
/// on the leading residual sample. After that the table is consulted:
///
/// - The top bit of the root sample is the loose bit, which decides whether
///   the column comes from bits `ns - 2..=0` or `ns - 1..=1`.
/// - The residual region is the two's complement value of bits
///   `np + loose..=loose` of the residual sample.
/// - With a symmetric table a negative region is looked up as its magnitude
///   and the digit negated.
/// - The row is `origin - region`, and overrides for this iteration rewrite
///   the column.
///
/// # Errors
///
/// `TableIndex` if the position is outside of the table, and
/// `DigitOutOfRange` if the entry is outside of `[-alpha, beta]`
pub fn select_digit(
    config: &PracticalConfig,
    delta: usize,
    iteration: usize,
    samples: &Samples,
) -> Result<i32, EngineError> {
    if iteration < delta {
        return Ok(0)
    }
    if iteration == delta {
        let lead = &samples.leading;
        return Ok(if lead.compare_i64(2).is_gt() {
            3
        } else if lead.compare_i64(0).is_gt() {
            2
        } else {
            1
        })
    }
    let (ns, np) = (config.ns, config.np);
    let loose = bit(&samples.root, ns) as usize;

    let mut col = 0usize;
    for i in (loose..=(ns - 2 + loose)).rev() {
        col = (col << 1) | (bit(&samples.root, i) as usize);
    }

    let top = np + loose;
    let mut region = 0isize;
    for i in (loose..=top).rev() {
        let b = bit(&samples.residual, i) as isize;
        region = (region << 1) + if i == top { -b } else { b };
    }
    let invert = config.symmetric && (region < 0);
    if invert {
        region = -region;
    }
    let row = config.origin - region;

    for o in &config.overrides {
        if (o.iteration == iteration) && (col + 1 == o.from_column) {
            col = o.to_column - 1;
        }
    }

    let entry = usize::try_from(row)
        .ok()
        .and_then(|r| config.table.get(r, col))
        .ok_or(EngineError::TableIndex {
            iteration,
            row,
            col,
        })?;
    let digit = if invert {
        -i32::from(entry)
    } else {
        i32::from(entry)
    };
    if (digit < -config.alpha) || (digit > config.beta) {
        return Err(EngineError::DigitOutOfRange { iteration, digit })
    }
    Ok(digit)
}

#[cfg(test)]
mod tests {
    use msqrt_core::bw;

    use super::*;

    fn samples(region: i128, root: u128, lead: u128) -> Samples {
        // place the region at bit 0, the loose bit of `root` must be clear
        Samples {
            residual: Register::from_i128(bw(7), region),
            root: Register::from_u128(bw(4), root),
            leading: Register::from_u128(bw(3), lead),
        }
    }

    #[test]
    fn phases() {
        let config = PracticalConfig::default();
        let s = samples(0, 0, 5);
        assert_eq!(select_digit(&config, 3, 1, &s), Ok(0));
        assert_eq!(select_digit(&config, 3, 3, &s), Ok(3));
        assert_eq!(select_digit(&config, 3, 3, &samples(0, 0, 2)), Ok(2));
        assert_eq!(select_digit(&config, 3, 3, &samples(0, 0, 0)), Ok(1));
        // region 0 is row 32
        assert_eq!(select_digit(&config, 3, 4, &s), Ok(0));
        // region 11 is row 21, column 0b11
        assert_eq!(select_digit(&config, 3, 4, &samples(11, 0b011, 0)), Ok(1));
        assert_eq!(select_digit(&config, 3, 4, &samples(-11, 0b011, 0)), Ok(-1));
    }

    #[test]
    fn loose_bit() {
        let config = PracticalConfig::default();
        // with the loose bit set everything moves up by one bit
        let s = Samples {
            residual: Register::from_i128(bw(7), 11 << 1),
            root: Register::from_u128(bw(4), 0b1110),
            leading: Register::from_u128(bw(3), 0),
        };
        assert_eq!(select_digit(&config, 3, 4, &s), Ok(1));
    }
}
