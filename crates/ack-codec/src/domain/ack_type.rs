//! # Ack Type
//!
//! The one-byte wire tag and the local classification derived from it.
//!
//! Only [`AckType`] ever crosses the wire. [`AckClass`] is computed locally
//! and has no byte representation, so a classification sentinel can never be
//! decoded as a received type.

use super::errors::AckError;
use std::fmt;

/// Number of end-of-minute markers per block.
pub const MINUTES_PER_BLOCK: u8 = 10;

/// Wire-level acknowledgment type.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AckType {
    /// Factoid transaction accepted
    FactoidTx = 0,
    EndMinute1 = 1,
    EndMinute2 = 2,
    EndMinute3 = 3,
    EndMinute4 = 4,
    EndMinute5 = 5,
    EndMinute6 = 6,
    EndMinute7 = 7,
    EndMinute8 = 8,
    EndMinute9 = 9,
    EndMinute10 = 10,
    /// Entry reveal accepted
    RevealEntry = 11,
    /// Chain commit accepted
    CommitChain = 12,
    /// Chain reveal accepted
    RevealChain = 13,
    /// Entry commit accepted
    CommitEntry = 14,
}

impl AckType {
    /// Every wire-level type, in tag order.
    pub const ALL: [AckType; 15] = [
        AckType::FactoidTx,
        AckType::EndMinute1,
        AckType::EndMinute2,
        AckType::EndMinute3,
        AckType::EndMinute4,
        AckType::EndMinute5,
        AckType::EndMinute6,
        AckType::EndMinute7,
        AckType::EndMinute8,
        AckType::EndMinute9,
        AckType::EndMinute10,
        AckType::RevealEntry,
        AckType::CommitChain,
        AckType::RevealChain,
        AckType::CommitEntry,
    ];

    /// The end-of-minute marker for `minute` (1..=10).
    #[must_use]
    pub fn end_of_minute(minute: u8) -> Option<Self> {
        if (1..=MINUTES_PER_BLOCK).contains(&minute) {
            Self::try_from(minute).ok()
        } else {
            None
        }
    }

    /// Wire byte.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// True for `EndMinute1` through `EndMinute10`.
    #[must_use]
    pub fn is_end_of_minute(self) -> bool {
        self.minute().is_some()
    }

    /// Minute number for end-of-minute markers.
    #[must_use]
    pub fn minute(self) -> Option<u8> {
        let tag = self.as_u8();
        (1..=MINUTES_PER_BLOCK).contains(&tag).then_some(tag)
    }
}

impl TryFrom<u8> for AckType {
    type Error = AckError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(AckError::UnknownAckType(tag))
    }
}

impl From<AckType> for u8 {
    fn from(ack_type: AckType) -> Self {
        ack_type.as_u8()
    }
}

impl fmt::Display for AckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AckType::FactoidTx => f.write_str("FactoidTx"),
            AckType::RevealEntry => f.write_str("RevealEntry"),
            AckType::CommitChain => f.write_str("CommitChain"),
            AckType::RevealChain => f.write_str("RevealChain"),
            AckType::CommitEntry => f.write_str("CommitEntry"),
            end_minute => write!(f, "EndMinute{}", end_minute.as_u8()),
        }
    }
}

/// Local classification of an acknowledgment. Never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AckClass {
    /// Minute-boundary marker
    EndMinute,
    /// Content acknowledgment
    NonEndMinute,
    /// Raw tag that is not a wire-level type
    Unknown,
}

impl AckClass {
    /// Classify a decoded type.
    #[must_use]
    pub fn of(ack_type: AckType) -> Self {
        if ack_type.is_end_of_minute() {
            AckClass::EndMinute
        } else {
            AckClass::NonEndMinute
        }
    }

    /// Classify a raw tag byte, e.g. one peeked from an undecoded frame.
    #[must_use]
    pub fn of_raw(tag: u8) -> Self {
        AckType::try_from(tag).map_or(AckClass::Unknown, Self::of)
    }
}
