use std::fmt;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::catalog::PhyTables;
use crate::error::DecodeError;
use crate::field::{Access, BitSelector, FieldDescriptor, Layout};
use crate::phy::PhyModel;

/// Decode context bound to one PHY model's register tables.
#[derive(Debug, Clone, Copy)]
pub struct RegisterDecoder {
    model: PhyModel,
    tables: &'static PhyTables,
}

impl RegisterDecoder {
    pub fn new(model: PhyModel) -> Result<Self, DecodeError> {
        let tables = model.tables();
        tables.validate()?;
        Ok(Self { model, tables })
    }

    /// Build a decoder from a model name such as `ksz8081rnb`.
    pub fn for_phy(name: &str) -> Result<Self, DecodeError> {
        Self::new(name.parse()?)
    }

    pub fn model(&self) -> PhyModel {
        self.model
    }

    pub fn tables(&self) -> &'static PhyTables {
        self.tables
    }

    pub fn decode(&self, address: u8, raw: u16) -> Result<Report, DecodeError> {
        let name = self.tables.registers.name_of(address)?;
        debug!(phy = %self.model, address, raw, name, "decoding register");

        let body = match self.tables.fields.fields_for(address) {
            Layout::Undocumented => ReportBody::Undocumented,
            Layout::Fields(fields) => {
                ReportBody::Fields(fields.iter().map(|f| decode_field(f, raw)).collect())
            }
        };
        Ok(Report { address, value: raw, name, body })
    }
}

fn decode_field(f: &FieldDescriptor, raw: u16) -> FieldLine {
    let extracted = f.bits.extract(raw);
    trace!(label = f.label, bits = %f.bits, extracted, "field extracted");
    let meaning = f.meaning.lookup(extracted);
    if meaning.is_none() {
        warn!(label = f.label, value = %f.bits.fmt_value(extracted), "undocumented field value");
    }
    FieldLine {
        bits: f.bits,
        raw: extracted,
        value: f.bits.fmt_value(extracted),
        label: f.label,
        meaning,
        access: f.access,
    }
}

/// Decoded view of one register value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub address: u8,
    pub value: u16,
    pub name: &'static str,
    pub body: ReportBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportBody {
    Fields(Vec<FieldLine>),
    /// Register is known by name but has no field layout.
    Undocumented,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldLine {
    pub bits: BitSelector,
    /// Extracted field value shifted down to bit 0; `value` is its rendered form.
    #[serde(skip)]
    pub raw: u16,
    pub value: String,
    pub label: &'static str,
    /// `None` when the extracted value has no entry in the field's table.
    pub meaning: Option<&'static str>,
    pub access: Access,
}

impl Report {
    pub fn header(&self) -> String {
        format!("Register details of : '{}'", self.name)
    }

    /// Header line followed by one line per field, or the single "no details" line.
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![self.header()];
        match &self.body {
            ReportBody::Undocumented => out.push(format!(
                "No details for register number 0x{:02X} value 0x{:04X}",
                self.address, self.value
            )),
            ReportBody::Fields(fields) => out.extend(fields.iter().map(|l| l.to_string())),
        }
        out
    }

    pub fn fields(&self) -> &[FieldLine] {
        match &self.body {
            ReportBody::Fields(f) => f,
            ReportBody::Undocumented => &[],
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FieldLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meaning = self.meaning.unwrap_or("Undocumented value");
        let width = if self.meaning.is_some() { 30 } else { 0 };
        write!(
            f,
            "{}[{}] -> {:25} : {:width$} : ({:6})",
            self.bits, self.value, self.label, meaning, self.access
        )
    }
}
