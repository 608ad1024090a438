mod bitwise;
mod casting;
mod cmp;
mod digits;
mod misc;
mod mul;
mod permute;
mod primitives;
mod rand;
mod sqrt;
mod sum;

pub use digits::trim_radix_string;
pub use rand::BitSource;
pub use sum::AddSign;
