//! Field layout model for 16-bit MDIO registers.
//!
//! A register is described by an ordered slice of [`FieldDescriptor`]s. Each
//! descriptor selects one bit or a contiguous bit range, names it, and maps the
//! extracted value to a human-readable meaning.

use std::fmt;

use bitvec::field::BitField;
use bitvec::order::Lsb0;
use bitvec::view::BitView;
use serde::Serialize;

/// Register width in bits. Clause 22 registers are always 16 bits wide.
pub const REG_BITS: u8 = 16;

/// Bit position(s) a field occupies inside the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BitSelector {
    Single(u8),
    Range { high: u8, low: u8 },
}

impl BitSelector {
    pub fn low(&self) -> u8 {
        match *self {
            BitSelector::Single(b) => b,
            BitSelector::Range { low, .. } => low,
        }
    }

    pub fn high(&self) -> u8 {
        match *self {
            BitSelector::Single(b) => b,
            BitSelector::Range { high, .. } => high,
        }
    }

    pub fn width(&self) -> u8 {
        self.high() - self.low() + 1
    }

    /// Mask of the selected bits in register position.
    pub fn mask(&self) -> u16 {
        let ones = if self.width() >= REG_BITS { u16::MAX } else { (1u16 << self.width()) - 1 };
        ones << self.low()
    }

    /// Pull the selected bits out of `raw`, shifted down to bit 0.
    pub fn extract(&self, raw: u16) -> u16 {
        let bits = raw.view_bits::<Lsb0>();
        bits[self.low() as usize..=self.high() as usize].load_le::<u16>()
    }

    /// Render an extracted value the way the report shows it: a bare digit for
    /// single bits, a zero-padded binary pattern for ranges.
    pub fn fmt_value(&self, value: u16) -> String {
        match self {
            BitSelector::Single(_) => format!("{value}"),
            BitSelector::Range { .. } => format!("{value:0width$b}", width = self.width() as usize),
        }
    }

    pub(crate) fn in_bounds(&self) -> bool {
        self.high() < REG_BITS && self.high() >= self.low()
    }

    pub(crate) fn overlaps(&self, other: &BitSelector) -> bool {
        self.mask() & other.mask() != 0
    }
}

impl fmt::Display for BitSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitSelector::Single(b) => write!(f, "{b:2}"),
            BitSelector::Range { high, low } => write!(f, "({high}:{low})"),
        }
    }
}

/// Meaning of the values a field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMeaning {
    /// One description per encoded value. Values not listed are undocumented.
    PerValue(&'static [(u16, &'static str)]),
    /// Same description whatever the value (counters, message fields, strap pins).
    Always(&'static str),
}

impl ValueMeaning {
    pub fn lookup(&self, value: u16) -> Option<&'static str> {
        match *self {
            ValueMeaning::Always(text) => Some(text),
            ValueMeaning::PerValue(table) => {
                table.iter().find(|(k, _)| *k == value).map(|(_, text)| *text)
            }
        }
    }
}

/// Access mode tag, informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Access {
    #[serde(rename = "RW")]
    Rw,
    #[serde(rename = "RO")]
    Ro,
    #[serde(rename = "RW/SC")]
    RwSc,
    #[serde(rename = "RO/LH")]
    RoLh,
    #[serde(rename = "RO/LL")]
    RoLl,
    #[serde(rename = "RO/SC")]
    RoSc,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Rw => "RW",
            Access::Ro => "RO",
            Access::RwSc => "RW/SC",
            Access::RoLh => "RO/LH",
            Access::RoLl => "RO/LL",
            Access::RoSc => "RO/SC",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width specifiers in the report apply
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub bits: BitSelector,
    pub label: &'static str,
    pub meaning: ValueMeaning,
    pub access: Access,
}

impl FieldDescriptor {
    pub const fn bit(
        bit: u8,
        label: &'static str,
        values: &'static [(u16, &'static str)],
        access: Access,
    ) -> Self {
        Self {
            bits: BitSelector::Single(bit),
            label,
            meaning: ValueMeaning::PerValue(values),
            access,
        }
    }

    pub const fn range(
        high: u8,
        low: u8,
        label: &'static str,
        values: &'static [(u16, &'static str)],
        access: Access,
    ) -> Self {
        Self {
            bits: BitSelector::Range { high, low },
            label,
            meaning: ValueMeaning::PerValue(values),
            access,
        }
    }

    pub const fn always(
        high: u8,
        low: u8,
        label: &'static str,
        text: &'static str,
        access: Access,
    ) -> Self {
        Self {
            bits: BitSelector::Range { high, low },
            label,
            meaning: ValueMeaning::Always(text),
            access,
        }
    }
}

/// Field layout of one register address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Fields(&'static [FieldDescriptor]),
    Undocumented,
}
