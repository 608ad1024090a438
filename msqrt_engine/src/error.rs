use msqrt_core::KernelError;

/// An invalid engine configuration, detected before any register is created
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum ConfigError {
    /// The radix exponent `m` is zero
    #[error("ZeroRadix")]
    ZeroRadix,
    /// The root digit count `n` is zero
    #[error("ZeroDigits")]
    ZeroDigits,
    /// `m * n` is odd, so the operands cannot be built from half width seeds
    #[error("OddProcessor({0})")]
    OddProcessor(usize),
    /// The practical recurrence needs at least `m` guard bits
    #[error("GuardBelowRadix {{ z: {z}, m: {m} }}")]
    GuardBelowRadix { z: usize, m: usize },
    /// Digits wider than what a `DigitList` holds
    #[error("RadixTooWide({0})")]
    RadixTooWide(usize),
    /// The residual or root samples are too narrow to index a table
    #[error("SampleTooNarrow")]
    SampleTooNarrow,
    /// A table with no rows or no columns
    #[error("EmptyTable")]
    EmptyTable,
    /// The entries of a table do not form a `rows` by `cols` rectangle
    #[error("TableShape {{ rows: {rows}, cols: {cols}, entries: {entries} }}")]
    TableShape {
        rows: usize,
        cols: usize,
        entries: usize,
    },
    /// Overrides use 1-based columns, so column 0 can never match
    #[error("OverrideColumn({0})")]
    OverrideColumn(usize),
}

/// An error that aborts a recurrence run. No partial report is produced when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum EngineError {
    #[error("{0}")]
    Kernel(#[from] KernelError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// The padded root has a different number of digits than the basic
    /// recurrence consumes
    #[error("RootDigitCount {{ expected: {expected}, found: {found} }}")]
    RootDigitCount { expected: usize, found: usize },
    /// The problem operands are wider than the configured processor
    #[error("OperandTooWide {{ processor: {processor}, found: {found} }}")]
    OperandTooWide { processor: usize, found: usize },
    /// Digit selection computed a table position outside of the table
    #[error("TableIndex {{ iteration: {iteration}, row: {row}, col: {col} }}")]
    TableIndex {
        iteration: usize,
        row: isize,
        col: usize,
    },
    /// The table entry that was selected is outside of `[-alpha, beta]`
    #[error("DigitOutOfRange {{ iteration: {iteration}, digit: {digit} }}")]
    DigitOutOfRange { iteration: usize, digit: i32 },
    /// Building the problem operands lost bits
    #[error("OperandOverflow")]
    OperandOverflow,
}
