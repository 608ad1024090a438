use msqrt_core::Register;
use smallvec::SmallVec;

/// Something worth knowing about a run that did not stop it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// The padded root has a different number of digits than the practical
    /// recurrence iterates over. The surplus iterations append zero digits,
    /// which the final shift removes again.
    RootDigitCount { expected: usize, found: usize },
}

/// The terminal criteria of a recurrence driven by precomputed digits, which
/// a practical run carries along as an oracle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleReport {
    pub residual_zero: bool,
    pub root_recovered: bool,
    pub overflow: bool,
    pub underflow: bool,
    pub residual: Register,
    pub root: Register,
}

/// The outcome of a run. Numeric faults never abort a run, they show up here
/// in `overflow` and `underflow`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// if the final residual is zero
    pub residual_zero: bool,
    /// if the final root, with its padding shifted out, equals `S`
    pub root_recovered: bool,
    /// the flags of the final residual
    pub overflow: bool,
    pub underflow: bool,
    pub residual: Register,
    /// the final root with its padding shifted out
    pub root: Register,
    /// the criteria of the precomputed digit recurrence, only in practical runs
    pub oracle: Option<OracleReport>,
    /// the root digits of every iteration, selected ones in practical runs
    pub digits: SmallVec<[i32; 32]>,
    /// `A * B`
    pub product: Register,
    pub advisories: Vec<Advisory>,
}

impl RunReport {
    /// If both terminal criteria hold
    pub fn is_success(&self) -> bool {
        self.residual_zero && self.root_recovered
    }

    /// If the run converged but the residual latched a fault flag on the way
    pub fn is_degraded(&self) -> bool {
        self.is_success() && (self.overflow || self.underflow)
    }

    /// In practical runs, if the practical and oracle residuals are either
    /// both zero or both nonzero. `None` in basic runs.
    pub fn residuals_agree(&self) -> Option<bool> {
        self.oracle
            .as_ref()
            .map(|oracle| oracle.residual_zero == self.residual_zero)
    }
}

#[cfg(test)]
mod tests {
    use msqrt_core::bw;

    use super::*;

    fn report(residual_zero: bool, root_recovered: bool, overflow: bool) -> RunReport {
        RunReport {
            residual_zero,
            root_recovered,
            overflow,
            underflow: false,
            residual: Register::zero_signed(bw(8)),
            root: Register::zero(bw(4)),
            oracle: None,
            digits: SmallVec::new(),
            product: Register::zero(bw(8)),
            advisories: vec![],
        }
    }

    fn oracle(residual_zero: bool) -> OracleReport {
        OracleReport {
            residual_zero,
            root_recovered: residual_zero,
            overflow: false,
            underflow: false,
            residual: Register::zero_signed(bw(8)),
            root: Register::zero(bw(4)),
        }
    }

    #[test]
    fn criteria() {
        let r = report(true, true, false);
        assert!(r.is_success() && !r.is_degraded());
        assert_eq!(r.residuals_agree(), None);
        // converged with a latched flag
        let mut r = report(true, true, true);
        assert!(r.is_success() && r.is_degraded());
        r.overflow = false;
        r.underflow = true;
        assert!(r.is_degraded());
        // a failed run is never degraded
        let r = report(false, true, true);
        assert!(!r.is_success() && !r.is_degraded());
        assert!(!report(true, false, false).is_success());

        let mut r = report(true, true, false);
        r.oracle = Some(oracle(true));
        assert_eq!(r.residuals_agree(), Some(true));
        r.oracle = Some(oracle(false));
        assert_eq!(r.residuals_agree(), Some(false));
        let mut r = report(false, false, false);
        r.oracle = Some(oracle(false));
        assert_eq!(r.residuals_agree(), Some(true));
    }
}
