use pretty_assertions::assert_eq;

use mdioregs::{DecodeError, PhyModel, RegisterDecoder, ReportBody};

fn decoder() -> RegisterDecoder {
    RegisterDecoder::new(PhyModel::Ksz8081Rnb).unwrap()
}

#[test]
fn reset_bit_is_isolated() {
    let report = decoder().decode(0x00, 0x8000).unwrap();
    assert_eq!(report.name, "Basic Control");
    let fields = report.fields();
    assert_eq!(fields[0].label, "Reset");
    assert_eq!(fields[0].value, "1");
    assert_eq!(fields[0].meaning, Some("Software reset"));
    for f in &fields[1..] {
        assert_eq!(f.raw, 0, "{} should be clear", f.label);
    }
}

#[test]
fn each_single_bit_tracks_only_its_own_bit() {
    let dec = decoder();
    for addr in [0x00u8, 0x01, 0x1B, 0x1F] {
        let base = dec.decode(addr, 0).unwrap();
        for (i, f) in base.fields().iter().enumerate() {
            let bit = f.bits.low();
            if f.bits.width() != 1 {
                continue;
            }
            let set = dec.decode(addr, 1 << bit).unwrap();
            assert_eq!(set.fields()[i].raw, 1);
            let cleared = dec.decode(addr, !(1u16 << bit)).unwrap();
            assert_eq!(cleared.fields()[i].raw, 0);
        }
    }
}

#[test]
fn basic_control_full_report() {
    let report = decoder().decode(0x00, 0x3100).unwrap();
    let expected = "\
Register details of : 'Basic Control'
15[0] -> Reset                     : Normal operation               : (RW/SC )
14[0] -> Loopback                  : Normal operation               : (RW    )
13[1] -> Speed Select              : 100Mbps                        : (RW    )
12[1] -> Auto-Negotiation          : Enable                         : (RW    )
11[0] -> Power-Down                : Normal operation               : (RW    )
10[0] -> Isolate                   : Normal Operation               : (RW    )
 9[0] -> Restart Auto-Negotiation  : Normal Operation               : (RW/SC )
 8[1] -> Duplex Mode               : Full-duplex                    : (RW    )
 7[0] -> Collision Test            : Disable COL test               : (RW    )
";
    assert_eq!(report.to_string(), expected);
}

#[test]
fn pause_pattern_asymmetric() {
    let report = decoder().decode(0x04, 0x0801).unwrap();
    let pause = report.fields().iter().find(|f| f.label == "Pause").unwrap();
    assert_eq!(pause.value, "10");
    assert_eq!(pause.meaning, Some("Asymmetric pause"));
    assert_eq!(
        pause.to_string(),
        "(11:10)[10] -> Pause                     : Asymmetric pause               : (RW    )"
    );
}

#[test]
fn undocumented_register_has_single_line() {
    for value in [0x0000u16, 0x0022, 0xFFFF] {
        let report = decoder().decode(0x02, value).unwrap();
        assert_eq!(report.body, ReportBody::Undocumented);
        let lines = report.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Register details of : 'PHY Identifier 1'");
        assert_eq!(lines[1], format!("No details for register number 0x02 value 0x{value:04X}"));
    }
}

#[test]
fn unknown_register_fails_without_output() {
    for addr in [0x09u8, 0x1A, 0x20] {
        let err = DecodeError::UnknownRegister { address: addr };
        assert_eq!(decoder().decode(addr, 0x1234), Err(err));
    }
}

#[test]
fn missing_key_falls_back_and_continues() {
    // selector 00000 is not a defined encoding
    let report = decoder().decode(0x04, 0x01E0).unwrap();
    let fields = report.fields();
    let sel = fields.last().unwrap();
    assert_eq!(sel.label, "Selector Field");
    assert_eq!(sel.meaning, None);
    assert_eq!(
        sel.to_string(),
        "(4:0)[00000] -> Selector Field            : Undocumented value : (RW    )"
    );
    assert!(fields[..fields.len() - 1].iter().all(|f| f.meaning.is_some()));
}

#[test]
fn operation_mode_reserved_and_undocumented() {
    let dec = decoder();
    let report = dec.decode(0x1E, 0x0003).unwrap();
    let mode = report.fields().last().unwrap();
    assert_eq!(mode.value, "011");
    assert_eq!(mode.meaning, Some("Reserved0"));

    let report = dec.decode(0x1E, 0x0104).unwrap();
    let fields = report.fields();
    let mode = fields.last().unwrap();
    assert_eq!(mode.value, "100");
    assert_eq!(mode.meaning, None);
    assert!(mode.to_string().contains(": Undocumented value :"));
    // earlier fields still decode
    let link = fields.iter().find(|f| f.label == "Link Status").unwrap();
    assert_eq!(link.meaning, Some("Link is up"));
}

#[test]
fn always_meaning_ignores_value() {
    let dec = decoder();
    for value in [0x0000u16, 0x07FF, 0x0123] {
        let report = dec.decode(0x07, value).unwrap();
        let msg = report.fields().last().unwrap();
        assert_eq!(msg.label, "Message Field");
        assert_eq!(msg.value.len(), 11);
        assert_eq!(msg.meaning, Some("11-bit wide field encoding 2048 messages"));
    }
    let report = dec.decode(0x15, 0xBEEF).unwrap();
    assert_eq!(report.fields()[0].value, "1011111011101111");
}

#[test]
fn output_follows_declaration_order() {
    let dec = decoder();
    let tables = dec.tables();
    for (addr, _) in tables.registers.iter() {
        let report = dec.decode(addr, 0xA5A5).unwrap();
        if let mdioregs::Layout::Fields(decl) = tables.fields.fields_for(addr) {
            let got: Vec<&str> = report.fields().iter().map(|f| f.label).collect();
            let want: Vec<&str> = decl.iter().map(|f| f.label).collect();
            assert_eq!(got, want);
            assert_eq!(report.lines().len(), decl.len() + 1);
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let dec = decoder();
    for (addr, _) in dec.tables().registers.iter() {
        for value in [0x0000u16, 0xFFFF, 0x5A5A, 0x1234] {
            let a = dec.decode(addr, value).unwrap().to_string();
            let b = dec.decode(addr, value).unwrap().to_string();
            assert_eq!(a, b);
        }
    }
}
