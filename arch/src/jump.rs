use num_enum::IntoPrimitive;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Jump field of a compute instruction. The discriminant is the 3-bit
/// encoding: bit 2 = less, bit 1 = equal, bit 0 = greater.
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
pub enum Jump {
    #[default]
    #[strum(serialize = "null")]
    Null,
    JGT,
    JEQ,
    JGE,
    JLT,
    JNE,
    JLE,
    JMP,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Jump::parse("null"), Some(Jump::Null));
        assert_eq!(Jump::parse("JGE"), Some(Jump::JGE));
        assert_eq!(Jump::parse("JMP"), Some(Jump::JMP));
        assert_eq!(Jump::parse("jmp"), None);
        assert_eq!(Jump::parse("JXX"), None);
    }

    #[test]
    fn bits() {
        assert_eq!(u16::from(Jump::Null), 0b000);
        assert_eq!(u16::from(Jump::JGT), 0b001);
        assert_eq!(u16::from(Jump::JEQ), 0b010);
        assert_eq!(u16::from(Jump::JLT), 0b100);
        assert_eq!(u16::from(Jump::JMP), 0b111);
    }
}
