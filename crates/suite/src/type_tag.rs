// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Primitive value types reported by the kernel test framework.

use crate::error::SuiteError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of the value compared by a single test assertion.
///
/// The discriminant is the numeric tag found in the `type` field of a test
/// item. The numbering is fixed by the kernel side and must not be reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TypeTag {
    Byte = 0,
    UByte = 1,
    Half = 2,
    UHalf = 3,
    Word = 4,
    UWord = 5,
    DWord = 6,
    UDWord = 7,
    Float = 8,
    Double = 9,
    RCode = 10,
}

impl TypeTag {
    pub const ALL: [TypeTag; 11] = [
        TypeTag::Byte,
        TypeTag::UByte,
        TypeTag::Half,
        TypeTag::UHalf,
        TypeTag::Word,
        TypeTag::UWord,
        TypeTag::DWord,
        TypeTag::UDWord,
        TypeTag::Float,
        TypeTag::Double,
        TypeTag::RCode,
    ];

    /// Label used in validation output.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Byte => "BYTE",
            TypeTag::UByte => "UBYTE",
            TypeTag::Half => "HALF",
            TypeTag::UHalf => "UHALF",
            TypeTag::Word => "WORD",
            TypeTag::UWord => "UWORD",
            TypeTag::DWord => "DWORD",
            TypeTag::UDWord => "UDWORD",
            TypeTag::Float => "FLOAT",
            TypeTag::Double => "DOUBLE",
            TypeTag::RCode => "RCODE",
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = SuiteError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(SuiteError::UnknownTypeTag(code))
    }
}

impl From<TypeTag> for u8 {
    fn from(tag: TypeTag) -> Self {
        tag.code()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "type_tag_tests.rs"]
mod tests;
