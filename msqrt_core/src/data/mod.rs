mod digit_list;
mod register;
#[cfg(feature = "serde_support")]
mod serde;

pub use digit_list::DigitList;
pub use register::Register;
