use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Computation field of a compute instruction. Every ALU mnemonic the
/// architecture defines, with its `M` variant where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
pub enum Comp {
    #[strum(serialize = "0")]
    Zero,
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "-1")]
    NegOne,
    #[strum(serialize = "D")]
    D,
    #[strum(serialize = "A")]
    A,
    #[strum(serialize = "M")]
    M,
    #[strum(serialize = "!D")]
    NotD,
    #[strum(serialize = "!A")]
    NotA,
    #[strum(serialize = "!M")]
    NotM,
    #[strum(serialize = "-D")]
    NegD,
    #[strum(serialize = "-A")]
    NegA,
    #[strum(serialize = "-M")]
    NegM,
    #[strum(serialize = "D+1")]
    DPlusOne,
    #[strum(serialize = "A+1")]
    APlusOne,
    #[strum(serialize = "M+1")]
    MPlusOne,
    #[strum(serialize = "D-1")]
    DMinusOne,
    #[strum(serialize = "A-1")]
    AMinusOne,
    #[strum(serialize = "M-1")]
    MMinusOne,
    #[strum(serialize = "D+A")]
    DPlusA,
    #[strum(serialize = "D+M")]
    DPlusM,
    #[strum(serialize = "D-A")]
    DMinusA,
    #[strum(serialize = "D-M")]
    DMinusM,
    #[strum(serialize = "A-D")]
    AMinusD,
    #[strum(serialize = "M-D")]
    MMinusD,
    #[strum(serialize = "D&A")]
    DAndA,
    #[strum(serialize = "D&M")]
    DAndM,
    #[strum(serialize = "D|A")]
    DOrA,
    #[strum(serialize = "D|M")]
    DOrM,
}

impl Comp {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    /// 7-bit field encoding: the address-or-register selector bit followed
    /// by the six ALU control bits.
    pub fn bits(self) -> u16 {
        use Comp::*;
        match self {
            Zero => 0b0101010,
            One => 0b0111111,
            NegOne => 0b0111010,
            D => 0b0001100,
            A => 0b0110000,
            M => 0b1110000,
            NotD => 0b0001101,
            NotA => 0b0110001,
            NotM => 0b1110001,
            NegD => 0b0001111,
            NegA => 0b0110011,
            NegM => 0b1110011,
            DPlusOne => 0b0011111,
            APlusOne => 0b0110111,
            MPlusOne => 0b1110111,
            DMinusOne => 0b0001110,
            AMinusOne => 0b0110010,
            MMinusOne => 0b1110010,
            DPlusA => 0b0000010,
            DPlusM => 0b1000010,
            DMinusA => 0b0010011,
            DMinusM => 0b1010011,
            AMinusD => 0b0000111,
            MMinusD => 0b1000111,
            DAndA => 0b0000000,
            DAndM => 0b1000000,
            DOrA => 0b0010101,
            DOrM => 0b1010101,
        }
    }
}
