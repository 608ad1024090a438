use core::fmt;

use msqrt_internals::*;
use serde::{
    de,
    de::{MapAccess, SeqAccess, Visitor},
    ser::{SerializeStruct, SerializeTuple},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::Register;

/// A `serde_support` impl
impl Serialize for Register {
    /// Serializes `self` in a platform independent way. In human readable form,
    /// it serializes into a struct named "Register" with the fields "bw",
    /// "signed", "overflow", "underflow", and "bits". "bits" is the unsigned
    /// lowercase hexadecimal string of the raw bits without leading zeros.
    /// Other forms use a tuple of the same fields in the same order.
    ///
    /// ```
    /// // Example using the `ron` crate. Note that it
    /// // omits the struct name which would be "Register".
    /// use msqrt_core::{bw, Register};
    /// use ron::to_string;
    ///
    /// let r = Register::from_i128(bw(12), -2);
    /// assert_eq!(
    ///     to_string(&r).unwrap(),
    ///     "(bw:12,signed:true,overflow:false,underflow:false,bits:\"ffe\")"
    /// );
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let str_buf: &str = &self.hex_string();
        if serializer.is_human_readable() {
            let mut s = serializer.serialize_struct("Register", 5)?;
            s.serialize_field("bw", &self.bw())?;
            s.serialize_field("signed", &self.is_signed())?;
            s.serialize_field("overflow", &self.overflow())?;
            s.serialize_field("underflow", &self.underflow())?;
            s.serialize_field("bits", str_buf)?;
            s.end()
        } else {
            let mut s = serializer.serialize_tuple(5)?;
            s.serialize_element(&self.bw())?;
            s.serialize_element(&self.is_signed())?;
            s.serialize_element(&self.overflow())?;
            s.serialize_element(&self.underflow())?;
            s.serialize_element(str_buf)?;
            s.end()
        }
    }
}

const FIELDS: &[&str] = &["bw", "signed", "overflow", "underflow", "bits"];

/// Helper for the deserialization impl
enum Field {
    Bw,
    Signed,
    Overflow,
    Underflow,
    Bits,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("`bw`, `signed`, `overflow`, `underflow`, or `bits`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Field, E>
            where
                E: de::Error,
            {
                match value {
                    "bw" => Ok(Field::Bw),
                    "signed" => Ok(Field::Signed),
                    "overflow" => Ok(Field::Overflow),
                    "underflow" => Ok(Field::Underflow),
                    "bits" => Ok(Field::Bits),
                    _ => Err(de::Error::unknown_field(value, FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

/// Reconstructs a register from its deserialized parts
fn assemble<E: de::Error>(
    w: usize,
    signed: bool,
    overflow: bool,
    underflow: bool,
    bits: &str,
) -> Result<Register, E> {
    let mut r = if signed {
        Register::try_zero_signed(w)
    } else {
        Register::try_zero(w)
    }
    .map_err(de::Error::custom)?;
    for (k, c) in bits.bytes().rev().enumerate() {
        let nibble = char_to_digit(c, 16).map_err(de::Error::custom)?;
        for j in 0..4 {
            let bit = ((nibble >> j) & 1) != 0;
            let inx = (k * 4) + j;
            if inx < w {
                r.set_bit(inx, bit);
            } else if bit {
                return Err(de::Error::custom("`bits` field does not fit in `bw`"))
            }
        }
    }
    r.latch_overflow(overflow);
    r.latch_underflow(underflow);
    Ok(r)
}

struct RegisterVisitor;

impl<'de> Visitor<'de> for RegisterVisitor {
    type Value = Register;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "struct Register consisting of a decimal bitwidth \"bw\", the flags \"signed\", \
             \"overflow\", and \"underflow\", and a hexadecimal unsigned integer \"bits\"",
        )
    }

    fn visit_map<V>(self, mut map: V) -> Result<Register, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut w: Option<usize> = None;
        let mut signed: Option<bool> = None;
        let mut overflow: Option<bool> = None;
        let mut underflow: Option<bool> = None;
        let mut bits: Option<&str> = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Bw => {
                    if w.is_some() {
                        return Err(de::Error::duplicate_field("bw"))
                    }
                    w = Some(map.next_value()?);
                }
                Field::Signed => {
                    if signed.is_some() {
                        return Err(de::Error::duplicate_field("signed"))
                    }
                    signed = Some(map.next_value()?);
                }
                Field::Overflow => {
                    if overflow.is_some() {
                        return Err(de::Error::duplicate_field("overflow"))
                    }
                    overflow = Some(map.next_value()?);
                }
                Field::Underflow => {
                    if underflow.is_some() {
                        return Err(de::Error::duplicate_field("underflow"))
                    }
                    underflow = Some(map.next_value()?);
                }
                Field::Bits => {
                    if bits.is_some() {
                        return Err(de::Error::duplicate_field("bits"))
                    }
                    bits = Some(map.next_value()?);
                }
            }
        }
        let w = w.ok_or_else(|| de::Error::missing_field("bw"))?;
        let bits = bits.ok_or_else(|| de::Error::missing_field("bits"))?;
        // flags default to clear so that hand written registers stay short
        assemble(
            w,
            signed.unwrap_or(false),
            overflow.unwrap_or(false),
            underflow.unwrap_or(false),
            bits,
        )
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<Register, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let w: usize = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let signed: bool = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let overflow: bool = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        let underflow: bool = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(3, &self))?;
        let bits: &str = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(4, &self))?;
        assemble(w, signed, overflow, underflow, bits)
    }
}

/// A `serde_support` impl
impl<'de> Deserialize<'de> for Register {
    /// Deserializes `self` in a platform independent way. Only "bw" and
    /// "bits" are required in the struct form, the flags default to `false`.
    ///
    /// ```
    /// use msqrt_core::{bw, Register};
    /// use ron::from_str;
    ///
    /// let r0 = Register::from_u128(bw(100), 0xfedcba9876543210);
    /// let r1: Register = from_str("(bw:100,bits:\"fedcba9876543210\")").unwrap();
    /// assert_eq!(r0, r1);
    /// ```
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Register", FIELDS, RegisterVisitor)
    }
}
