/// A contract violation detected by a register operation. These are not
/// expected runtime conditions: whatever computation encounters one should be
/// aborted. Numeric faults (lost bits) are never reported through this type,
/// they are latched in the `overflow` and `underflow` flags of the register
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum KernelError {
    /// A register bitwidth of zero was requested
    #[error("ZeroWidth")]
    ZeroWidth,
    /// `load` between registers of different sign modes
    #[error("SignMismatch")]
    SignMismatch,
    /// A signed-only operation was called on an unsigned register
    #[error("Unsigned")]
    Unsigned,
    /// A product of operands with differing signs was directed into an
    /// unsigned register
    #[error("NegativeIntoUnsigned")]
    NegativeIntoUnsigned,
    /// A constant load asked for more bits than the literal has
    #[error("BitcountTooLarge({0})")]
    BitcountTooLarge(usize),
    /// A digit width of zero or above `MAX_RADIX_BITS`
    #[error("InvalidDigitWidth({0})")]
    InvalidDigitWidth(usize),
    /// A radix that is not a power of two in `2..=512`
    #[error("InvalidRadix({0})")]
    InvalidRadix(u32),
    /// A character that does not belong to the radix being parsed
    #[error("InvalidChar")]
    InvalidChar,
    /// `integer_sqrt` of a negative value
    #[error("NegativeRadicand")]
    NegativeRadicand,
    /// Signed registers need at least two bits to be randomized with distinct
    /// sign and leading bits
    #[error("DegenerateSigned")]
    DegenerateSigned,
}
