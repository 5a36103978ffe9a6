use tracing::debug;

use crate::error::DecodeError;
use crate::field::{FieldDescriptor, Layout, ValueMeaning};

/// Bidirectional register name <-> address table.
#[derive(Debug, Clone, Copy)]
pub struct RegisterCatalog {
    entries: &'static [(u8, &'static str)],
}

impl RegisterCatalog {
    pub const fn new(entries: &'static [(u8, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn name_of(&self, address: u8) -> Result<&'static str, DecodeError> {
        self.entries
            .iter()
            .find(|(a, _)| *a == address)
            .map(|(_, name)| *name)
            .ok_or(DecodeError::UnknownRegister { address })
    }

    /// Exact name match wins; otherwise fall back to an ASCII case-insensitive match.
    pub fn address_of(&self, name: &str) -> Result<u8, DecodeError> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|(_, n)| *n == name)
            .or_else(|| self.entries.iter().find(|(_, n)| n.eq_ignore_ascii_case(name)))
            .map(|(a, _)| *a)
            .ok_or_else(|| DecodeError::UnknownRegisterName(name.to_string()))
    }

    /// `(address, name)` pairs in declaration order, which `PhyTables::validate`
    /// requires to be ascending by address.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

/// Register address -> ordered field layout.
///
/// `None` marks an address that is known to be reserved or whose content is
/// opaque (identifiers). Addresses absent from the table are treated the same.
#[derive(Debug, Clone, Copy)]
pub struct FieldCatalog {
    layouts: &'static [(u8, Option<&'static [FieldDescriptor]>)],
}

impl FieldCatalog {
    pub const fn new(layouts: &'static [(u8, Option<&'static [FieldDescriptor]>)]) -> Self {
        Self { layouts }
    }

    pub fn fields_for(&self, address: u8) -> Layout {
        match self.layouts.iter().find(|(a, _)| *a == address) {
            Some((_, Some(fields))) => Layout::Fields(fields),
            _ => Layout::Undocumented,
        }
    }

    fn documented(&self) -> impl Iterator<Item = (u8, &'static [FieldDescriptor])> + '_ {
        self.layouts.iter().filter_map(|(a, f)| f.map(|f| (*a, f)))
    }
}

/// Both catalogs for one PHY model.
#[derive(Debug, Clone, Copy)]
pub struct PhyTables {
    pub registers: RegisterCatalog,
    pub fields: FieldCatalog,
}

impl PhyTables {
    /// Check the data-integrity properties the renderer relies on.
    pub fn validate(&self) -> Result<(), DecodeError> {
        let regs = self.registers.entries;
        // strictly ascending also rules out duplicate addresses
        for pair in regs.windows(2) {
            let ((prev, prev_name), (addr, name)) = (pair[0], pair[1]);
            if addr <= prev {
                let reason = format!("'{name}' declared after '{prev_name}' ({prev:#04x})");
                return Err(invalid(addr, reason));
            }
        }
        for (i, (addr, name)) in regs.iter().enumerate() {
            if let Some((other, _)) = regs[i + 1..].iter().find(|(_, n)| n == name) {
                return Err(invalid(*addr, format!("name '{name}' also used by {other:#04x}")));
            }
        }

        let mut seen: Vec<u8> = Vec::new();
        for (addr, _) in self.fields.layouts {
            if seen.contains(addr) {
                return Err(invalid(*addr, "layout declared twice".into()));
            }
            seen.push(*addr);
        }

        for (addr, fields) in self.fields.documented() {
            self.registers
                .name_of(addr)
                .map_err(|_| invalid(addr, "layout for unnamed register".into()))?;
            validate_fields(addr, fields)?;
        }
        debug!(registers = regs.len(), "phy tables validated");
        Ok(())
    }
}

fn validate_fields(addr: u8, fields: &[FieldDescriptor]) -> Result<(), DecodeError> {
    for (i, f) in fields.iter().enumerate() {
        if !f.bits.in_bounds() {
            let reason = format!("field '{}' has bad bit range {}", f.label, f.bits);
            return Err(invalid(addr, reason));
        }
        for g in &fields[..i] {
            if f.bits.overlaps(&g.bits) {
                return Err(invalid(addr, format!("field '{}' overlaps '{}'", f.label, g.label)));
            }
        }
        if let ValueMeaning::PerValue(table) = f.meaning {
            let limit = 1u32 << f.bits.width();
            for (j, (key, _)) in table.iter().enumerate() {
                if u32::from(*key) >= limit {
                    let reason = format!("field '{}' key {key:#b} wider than field", f.label);
                    return Err(invalid(addr, reason));
                }
                if table[..j].iter().any(|(k, _)| k == key) {
                    let reason = format!("field '{}' key {key:#b} listed twice", f.label);
                    return Err(invalid(addr, reason));
                }
            }
        }
    }
    Ok(())
}

fn invalid(address: u8, reason: String) -> DecodeError {
    DecodeError::InvalidTable { address, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Access, BitSelector};

    static NAMES: &[(u8, &str)] = &[(0x00, "Control"), (0x01, "Status")];

    fn tables(fields: &'static [FieldDescriptor]) -> PhyTables {
        let layouts: Vec<(u8, Option<&'static [FieldDescriptor]>)> =
            vec![(0x00, Some(fields)), (0x01, None)];
        PhyTables {
            registers: RegisterCatalog::new(NAMES),
            fields: FieldCatalog::new(layouts.leak()),
        }
    }

    #[test]
    fn lookups() {
        let cat = RegisterCatalog::new(NAMES);
        assert_eq!(cat.name_of(0x01).unwrap(), "Status");
        assert_eq!(cat.address_of("Control").unwrap(), 0x00);
        assert_eq!(cat.address_of("control").unwrap(), 0x00);
        assert_eq!(cat.name_of(0x02), Err(DecodeError::UnknownRegister { address: 0x02 }));
        assert!(matches!(cat.address_of("Nope"), Err(DecodeError::UnknownRegisterName(_))));
        let order: Vec<u8> = cat.iter().map(|(a, _)| a).collect();
        assert_eq!(order, vec![0x00, 0x01]);
    }

    #[test]
    fn reserved_and_missing_are_undocumented() {
        let t = tables(&[]);
        assert_eq!(t.fields.fields_for(0x01), Layout::Undocumented);
        assert_eq!(t.fields.fields_for(0x1F), Layout::Undocumented);
        assert!(matches!(t.fields.fields_for(0x00), Layout::Fields(_)));
    }

    #[test]
    fn overlap_is_rejected() {
        static F: &[FieldDescriptor] = &[
            FieldDescriptor::range(11, 10, "Pause", &[(0b00, "none")], Access::Rw),
            FieldDescriptor::bit(10, "Clash", &[(0, "a"), (1, "b")], Access::Rw),
        ];
        let err = tables(F).validate().unwrap_err();
        assert!(matches!(err, DecodeError::InvalidTable { address: 0x00, .. }));
    }

    #[test]
    fn wide_key_is_rejected() {
        static F: &[FieldDescriptor] =
            &[FieldDescriptor::range(1, 0, "Mode", &[(0b100, "x")], Access::Ro)];
        assert!(tables(F).validate().is_err());
    }

    #[test]
    fn inverted_range_is_rejected() {
        static F: &[FieldDescriptor] = &[FieldDescriptor {
            bits: BitSelector::Range { high: 1, low: 4 },
            label: "Bad",
            meaning: ValueMeaning::Always("x"),
            access: Access::Ro,
        }];
        assert!(tables(F).validate().is_err());
    }

    #[test]
    fn duplicate_name_is_rejected() {
        static DUP: &[(u8, &str)] = &[(0x00, "Control"), (0x01, "Control")];
        let t = PhyTables { registers: RegisterCatalog::new(DUP), fields: FieldCatalog::new(&[]) };
        assert!(t.validate().is_err());
    }

    #[test]
    fn out_of_order_registers_are_rejected() {
        static UNSORTED: &[(u8, &str)] = &[(0x01, "Status"), (0x00, "Control")];
        let t = PhyTables {
            registers: RegisterCatalog::new(UNSORTED),
            fields: FieldCatalog::new(&[]),
        };
        let err = t.validate().unwrap_err();
        assert!(matches!(err, DecodeError::InvalidTable { address: 0x00, .. }));

        static REPEATED: &[(u8, &str)] = &[(0x00, "Control"), (0x00, "Control 2")];
        let t = PhyTables {
            registers: RegisterCatalog::new(REPEATED),
            fields: FieldCatalog::new(&[]),
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_tables_are_valid() {
        tables(&[]).validate().unwrap();
    }
}
