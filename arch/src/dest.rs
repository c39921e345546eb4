use num_enum::IntoPrimitive;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Destination field of a compute instruction. The discriminant is the
/// 3-bit encoding: bit 2 = A, bit 1 = D, bit 0 = M.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u16)]
pub enum Dest {
    #[default]
    #[strum(serialize = "null")]
    Null,
    M,
    D,
    MD,
    A,
    AM,
    AD,
    AMD,
}

impl Dest {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }
}
