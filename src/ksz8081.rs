//! KSZ8081RNB register map.
//!
//! Registers 0x00-0x08 follow IEEE 802.3 clause 22; 0x10-0x1F are vendor
//! specific. Reserved bits are left out of the layouts.

use crate::catalog::{FieldCatalog, PhyTables, RegisterCatalog};
use crate::field::{Access::*, FieldDescriptor as F};

pub static TABLES: PhyTables = PhyTables {
    registers: RegisterCatalog::new(REGISTERS),
    fields: FieldCatalog::new(LAYOUTS),
};

const REGISTERS: &[(u8, &str)] = &[
    (0x00, "Basic Control"),
    (0x01, "Basic Status"),
    (0x02, "PHY Identifier 1"),
    (0x03, "PHY Identifier 2"),
    (0x04, "Auto-Negotiation Advertisement"),
    (0x05, "Auto-Negotiation Link Partner Ability"),
    (0x06, "Auto-Negotiation Expansion"),
    (0x07, "Auto-Negotiation Next Page"),
    (0x08, "Link Partner Next Page Ability"),
    (0x10, "Digital Reserved Control"),
    (0x11, "AFE Control 1"),
    (0x15, "RXER Counter"),
    (0x16, "Operation Mode Strap Override"),
    (0x17, "Operation Mode Strap Status"),
    (0x18, "Expanded Control"),
    (0x1B, "Interrupt Control/Status"),
    (0x1D, "LinkMD Control/Status"),
    (0x1E, "PHY Control 1"),
    (0x1F, "PHY Control 2"),
];

const LAYOUTS: &[(u8, Option<&[F]>)] = &[
    (0x00, Some(BASIC_CONTROL)),
    (0x01, Some(BASIC_STATUS)),
    (0x02, None),
    (0x03, None),
    (0x04, Some(AN_ADVERTISEMENT)),
    (0x05, Some(AN_LINK_PARTNER)),
    (0x06, Some(AN_EXPANSION)),
    (0x07, Some(AN_NEXT_PAGE)),
    (0x08, Some(LP_NEXT_PAGE)),
    (0x09, None),
    (0x0A, None),
    (0x0B, None),
    (0x0C, None),
    (0x0D, None),
    (0x0E, None),
    (0x0F, None),
    (0x10, Some(DIGITAL_RESERVED)),
    (0x11, Some(AFE_CONTROL_1)),
    (0x15, Some(RXER_COUNTER)),
    (0x16, Some(STRAP_OVERRIDE)),
    (0x17, Some(STRAP_STATUS)),
    (0x18, Some(EXPANDED_CONTROL)),
    (0x1B, Some(INTERRUPT)),
    (0x1D, Some(LINKMD)),
    (0x1E, Some(PHY_CONTROL_1)),
    (0x1F, Some(PHY_CONTROL_2)),
];

const PAUSE: &[(u16, &str)] = &[
    (0b00, "No pause"),
    (0b10, "Asymmetric pause"),
    (0b01, "Symmetric pause"),
    (0b11, "Asymmetric and symmetric pause"),
];

const SELECTOR: &[(u16, &str)] = &[(0b00001, "IEEE 802.3")];

const MESSAGE_FIELD: &str = "11-bit wide field encoding 2048 messages";

const BASIC_CONTROL: &[F] = &[
    F::bit(15, "Reset", &[(1, "Software reset"), (0, "Normal operation")], RwSc),
    F::bit(14, "Loopback", &[(1, "Loopback mode"), (0, "Normal operation")], Rw),
    F::bit(13, "Speed Select", &[(1, "100Mbps"), (0, "10Mbps")], Rw),
    F::bit(12, "Auto-Negotiation", &[(1, "Enable"), (0, "Disable")], Rw),
    F::bit(11, "Power-Down", &[(1, "Power down mode"), (0, "Normal operation")], Rw),
    F::bit(
        10,
        "Isolate",
        &[(1, "Electrical isolation of PHY from RMII"), (0, "Normal Operation")],
        Rw,
    ),
    F::bit(
        9,
        "Restart Auto-Negotiation",
        &[(1, "Restart auto-Negotiation"), (0, "Normal Operation")],
        RwSc,
    ),
    F::bit(8, "Duplex Mode", &[(1, "Full-duplex"), (0, "Half-duplex")], Rw),
    F::bit(7, "Collision Test", &[(1, "Enable COL test"), (0, "Disable COL test")], Rw),
];

const BASIC_STATUS: &[F] = &[
    F::bit(15, "100BASE-T4", &[(1, "T4 capable"), (0, "Not T4 capable")], Ro),
    F::bit(
        14,
        "100BASE-TX Full-Duplex",
        &[(1, "Capable of 100 Mbps full-duplex"), (0, "Not capable of 100 Mbps full-duplex")],
        Ro,
    ),
    F::bit(
        13,
        "100BASE-TX Half-Duplex",
        &[(1, "Capable of 100 Mbps half-duplex"), (0, "Not capable of 100 Mbps half-duplex")],
        Ro,
    ),
    F::bit(
        12,
        "10BASE-T Full-Duplex",
        &[(1, "Capable of 10 Mbps full-duplex"), (0, "Not capable of 10 Mbps full-duplex")],
        Ro,
    ),
    F::bit(
        11,
        "10BASE-T Half-Duplex",
        &[(1, "Capable of 10 Mbps half-duplex"), (0, "Not capable of 10 Mbps half-duplex")],
        Ro,
    ),
    F::bit(6, "No Preamble", &[(1, "Preamble suppression"), (0, "Normal preamble")], Ro),
    F::bit(
        5,
        "Auto-Negotiation Complete",
        &[(1, "Auto-negotiation process Completed"), (0, "Auto-negotiation process not Completed")],
        Ro,
    ),
    F::bit(4, "Remote Fault", &[(1, "Remote Fault"), (0, "No Remote Fault")], RoLh),
    F::bit(
        3,
        "Auto-Negotiation Ability",
        &[(1, "Can perform auto-negotiation"), (0, "Cannot perform auto-negotiation")],
        Ro,
    ),
    F::bit(2, "Link Status", &[(1, "Link is up"), (0, "Link is down")], RoLl),
    F::bit(1, "Jabber Detect", &[(1, "Jabber detected"), (0, "Jabber not detected")], RoLh),
    F::bit(
        0,
        "Extended Capability",
        &[(1, "Support Extended Capability registers"), (0, "No support for Capability Registers")],
        Ro,
    ),
];

const AN_ADVERTISEMENT: &[F] = &[
    F::bit(15, "Next Page", &[(1, "Next page capable"), (0, "No next page capability")], Rw),
    F::bit(
        13,
        "Remote Fault",
        &[(1, "Remote fault supported"), (0, "No Remote Fault supported")],
        Rw,
    ),
    F::range(11, 10, "Pause", PAUSE, Rw),
    F::bit(9, "100BASE-T4", &[(1, "T4 capable"), (0, "No T4 capability")], Ro),
    F::bit(
        8,
        "100BASE-TX Full-Duplex",
        &[(1, "100 Mbps full-duplex capable"), (0, "No 100 Mbps full-duplex capability")],
        Rw,
    ),
    F::bit(
        7,
        "100BASE-TX Half-Duplex",
        &[(1, "100 Mbps half-duplex capable"), (0, "No 100 Mbps half-duplex capability")],
        Rw,
    ),
    F::bit(
        6,
        "10BASE-T Full-Duplex",
        &[(1, "10 Mbps full-duplex capable"), (0, "No 10 Mbps full-duplex capability")],
        Rw,
    ),
    F::bit(
        5,
        "10BASE-T Half-Duplex",
        &[(1, "10 Mbps half-duplex capable"), (0, "No 10 Mbps half-duplex capability")],
        Rw,
    ),
    F::range(4, 0, "Selector Field", SELECTOR, Rw),
];

const AN_LINK_PARTNER: &[F] = &[
    F::bit(15, "Next Page", &[(1, "Next page capable"), (0, "No next page capability")], Ro),
    F::bit(
        14,
        "Acknowledge",
        &[(1, "Link code word received"), (0, "Link code word not yet received")],
        Ro,
    ),
    F::bit(13, "Remote Fault", &[(1, "Remote fault detected"), (0, "No remote fault")], Ro),
    F::range(11, 10, "Pause", PAUSE, Ro),
    F::bit(9, "100BASE-T4", &[(1, "T4 capable"), (0, "No T4 capability")], Ro),
    F::bit(
        8,
        "100BASE-TX Full-Duplex",
        &[(1, "100 Mbps full-duplex capable"), (0, "No 100 Mbps full-duplex capability")],
        Ro,
    ),
    F::bit(
        7,
        "100BASE-TX Half-Duplex",
        &[(1, "100 Mbps half-duplex capable"), (0, "No 100 Mbps half-duplex capability")],
        Ro,
    ),
    F::bit(
        6,
        "10BASE-T Full-Duplex",
        &[(1, "10 Mbps full-duplex capable"), (0, "No 10 Mbps full-duplex capability")],
        Ro,
    ),
    F::bit(
        5,
        "10BASE-T Half-Duplex",
        &[(1, "10 Mbps half-duplex capable"), (0, "No 10 Mbps half-duplex capability")],
        Ro,
    ),
    F::range(4, 0, "Selector Field", SELECTOR, Ro),
];

const AN_EXPANSION: &[F] = &[
    F::bit(
        4,
        "Parallel Detection Fault",
        &[(1, "Fault detected by parallel detection"), (0, "No fault detected")],
        RoLh,
    ),
    F::bit(
        3,
        "Link Partner Next Page Able",
        &[(1, "Partner has next page capability"), (0, "Partner has no next page capability")],
        Ro,
    ),
    F::bit(
        2,
        "Next Page Able",
        &[(1, "Local next page capable"), (0, "No local next page capability")],
        Ro,
    ),
    F::bit(1, "Page Received", &[(1, "New page received"), (0, "New page not received yet")], RoLh),
    F::bit(
        0,
        "Link Partner AN Able",
        &[(1, "Partner is auto-negotiation able"), (0, "Partner not auto-negotiation able")],
        Ro,
    ),
];

const AN_NEXT_PAGE: &[F] = &[
    F::bit(15, "Next Page", &[(1, "Additional next pages follow"), (0, "Last page")], Rw),
    F::bit(13, "Message Page", &[(1, "Message page"), (0, "Unformatted page")], Rw),
    F::bit(
        12,
        "Acknowledge2",
        &[(1, "Will comply with message"), (0, "Cannot comply with message")],
        Rw,
    ),
    F::bit(
        11,
        "Toggle",
        &[(1, "Previous toggle value was 0"), (0, "Previous toggle value was 1")],
        Ro,
    ),
    F::always(10, 0, "Message Field", MESSAGE_FIELD, Rw),
];

const LP_NEXT_PAGE: &[F] = &[
    F::bit(15, "Next Page", &[(1, "Additional next pages follow"), (0, "Last page")], Ro),
    F::bit(14, "Acknowledge", &[(1, "Link word received"), (0, "Link word not received")], Ro),
    F::bit(13, "Message Page", &[(1, "Message page"), (0, "Unformatted page")], Ro),
    F::bit(
        12,
        "Acknowledge2",
        &[(1, "Able to act on information"), (0, "Not able to act on information")],
        Ro,
    ),
    F::bit(
        11,
        "Toggle",
        &[(1, "Previous toggle value was 0"), (0, "Previous toggle value was 1")],
        Ro,
    ),
    F::always(10, 0, "Message Field", MESSAGE_FIELD, Ro),
];

const DIGITAL_RESERVED: &[F] = &[
    F::bit(4, "PLL Off", &[(1, "PLL off in EDPD mode"), (0, "PLL kept on")], Rw),
];

const AFE_CONTROL_1: &[F] = &[
    F::bit(5, "Slow-Oscillator Mode", &[(1, "Enable"), (0, "Disable")], Rw),
];

const RXER_COUNTER: &[F] = &[
    F::always(15, 0, "RXER Counter", "Receive error counter for symbol errors", RoSc),
];

const STRAP_OVERRIDE: &[F] = &[
    F::bit(15, "Reserved Factory Mode", &[(1, "Factory test mode"), (0, "Normal operation")], Rw),
    F::bit(
        9,
        "B-CAST_OFF Override",
        &[(1, "Override strap-in for B-CAST_OFF"), (0, "No override")],
        Rw,
    ),
    F::bit(
        7,
        "RMII B-to-B Override",
        &[(1, "Override strap-in for RMII B-to-B"), (0, "No override")],
        Rw,
    ),
    F::bit(
        6,
        "NAND Tree Override",
        &[(1, "Override strap-in for NAND tree"), (0, "No override")],
        Rw,
    ),
    F::bit(1, "RMII Override", &[(1, "Override strap-in for RMII mode"), (0, "No override")], Rw),
];

const STRAP_STATUS: &[F] = &[
    F::always(15, 13, "PHYAD[2:0] Strap-In Status", "Strap-in value for PHY address", Ro),
    F::bit(9, "B-CAST_OFF Strap-In", &[(1, "Strap to B-CAST_OFF"), (0, "No strap")], Ro),
    F::bit(7, "NAND Tree Strap-In", &[(1, "Strap to NAND tree mode"), (0, "No strap")], Ro),
    F::bit(1, "RMII Strap-In", &[(1, "Strap to RMII mode"), (0, "No strap")], Ro),
];

const EXPANDED_CONTROL: &[F] = &[
    F::bit(
        11,
        "EDPD Disabled",
        &[(1, "Energy-detect power-down off"), (0, "Energy-detect power-down on")],
        Rw,
    ),
    F::bit(
        10,
        "100BASE-TX Latency",
        &[(1, "RX output has random latency"), (0, "RX output has fixed latency")],
        Rw,
    ),
    F::bit(
        6,
        "10BASE-T Preamble Restore",
        &[(1, "Restore received preamble"), (0, "Remove all 7 preamble bytes")],
        Rw,
    ),
];

const INTERRUPT: &[F] = &[
    F::bit(15, "Jabber Interrupt Enable", &[(1, "Enable"), (0, "Disable")], Rw),
    F::bit(14, "Receive Error Int Enable", &[(1, "Enable"), (0, "Disable")], Rw),
    F::bit(13, "Page Received Int Enable", &[(1, "Enable"), (0, "Disable")], Rw),
    F::bit(12, "Parallel Detect Int Enable", &[(1, "Enable"), (0, "Disable")], Rw),
    F::bit(11, "LP Acknowledge Int Enable", &[(1, "Enable"), (0, "Disable")], Rw),
    F::bit(10, "Link-Down Int Enable", &[(1, "Enable"), (0, "Disable")], Rw),
    F::bit(9, "Remote Fault Int Enable", &[(1, "Enable"), (0, "Disable")], Rw),
    F::bit(8, "Link-Up Int Enable", &[(1, "Enable"), (0, "Disable")], Rw),
    F::bit(7, "Jabber Interrupt", &[(1, "Occurred"), (0, "Did not occur")], RoSc),
    F::bit(6, "Receive Error Interrupt", &[(1, "Occurred"), (0, "Did not occur")], RoSc),
    F::bit(5, "Page Received Interrupt", &[(1, "Occurred"), (0, "Did not occur")], RoSc),
    F::bit(4, "Parallel Detect Interrupt", &[(1, "Occurred"), (0, "Did not occur")], RoSc),
    F::bit(3, "LP Acknowledge Interrupt", &[(1, "Occurred"), (0, "Did not occur")], RoSc),
    F::bit(2, "Link-Down Interrupt", &[(1, "Occurred"), (0, "Did not occur")], RoSc),
    F::bit(1, "Remote Fault Interrupt", &[(1, "Occurred"), (0, "Did not occur")], RoSc),
    F::bit(0, "Link-Up Interrupt", &[(1, "Occurred"), (0, "Did not occur")], RoSc),
];

const LINKMD: &[F] = &[
    F::bit(
        15,
        "Cable Diagnostic Test",
        &[(1, "Test enabled/running"), (0, "Test completed or idle")],
        RwSc,
    ),
    F::range(
        14,
        13,
        "Cable Diagnostic Result",
        &[
            (0b00, "Normal condition"),
            (0b01, "Open condition detected"),
            (0b10, "Short condition detected"),
            (0b11, "Cable diagnostic test failed"),
        ],
        Ro,
    ),
    F::bit(
        12,
        "Short Cable Indicator",
        &[(1, "Short cable (<10 m) detected"), (0, "No short cable")],
        Ro,
    ),
    F::always(8, 0, "Cable Fault Counter", "Distance to fault", Ro),
];

const PHY_CONTROL_1: &[F] = &[
    F::bit(
        9,
        "Enable Pause",
        &[(1, "Flow control capable"), (0, "No flow control capability")],
        Ro,
    ),
    F::bit(8, "Link Status", &[(1, "Link is up"), (0, "Link is down")], Ro),
    F::bit(
        7,
        "Polarity Status",
        &[(1, "Polarity is reversed"), (0, "Polarity is not reversed")],
        Ro,
    ),
    F::bit(5, "MDI/MDI-X State", &[(1, "MDI-X"), (0, "MDI")], Ro),
    F::bit(4, "Energy Detect", &[(1, "Signal present on RX pair"), (0, "No signal detected")], Ro),
    F::bit(3, "PHY Isolate", &[(1, "PHY in isolate mode"), (0, "PHY in normal operation")], Rw),
    // 100 is reserved by the datasheet without a name; it renders as undocumented
    F::range(
        2,
        0,
        "Operation Mode Indication",
        &[
            (0b000, "Still in auto-negotiation"),
            (0b001, "10BASE-T half-duplex"),
            (0b010, "100BASE-TX half-duplex"),
            (0b011, "Reserved0"),
            (0b101, "10BASE-T full-duplex"),
            (0b110, "100BASE-TX full-duplex"),
            (0b111, "Reserved1"),
        ],
        Ro,
    ),
];

const PHY_CONTROL_2: &[F] = &[
    F::bit(15, "HP_MDIX", &[(1, "HP Auto MDI/MDI-X mode"), (0, "Micrel Auto MDI/MDI-X mode")], Rw),
    F::bit(14, "MDI/MDI-X Select", &[(1, "MDI-X mode"), (0, "MDI mode")], Rw),
    F::bit(
        13,
        "Pair Swap Disable",
        &[(1, "Disable auto MDI/MDI-X"), (0, "Enable auto MDI/MDI-X")],
        Rw,
    ),
    F::bit(11, "Force Link", &[(1, "Force link pass"), (0, "Normal link operation")], Rw),
    F::bit(10, "Power Saving", &[(1, "Enable power saving"), (0, "Disable power saving")], Rw),
    F::bit(
        9,
        "Interrupt Level",
        &[(1, "Interrupt pin active high"), (0, "Interrupt pin active low")],
        Rw,
    ),
    F::bit(8, "Enable Jabber", &[(1, "Enable jabber counter"), (0, "Disable jabber counter")], Rw),
    F::bit(
        7,
        "RMII Reference Clock",
        &[(1, "50MHz clock on XI"), (0, "25MHz crystal/clock on XI")],
        Rw,
    ),
    F::range(
        5,
        4,
        "LED Mode",
        &[
            (0b00, "LED1: Speed, LED0: Link/Act"),
            (0b01, "LED1: Activity, LED0: Link"),
            (0b10, "Reserved"),
            (0b11, "Reserved"),
        ],
        Rw,
    ),
    F::bit(3, "Disable Transmitter", &[(1, "Disable transmitter"), (0, "Enable transmitter")], Rw),
    F::bit(2, "Remote Loopback", &[(1, "Remote (analog) loopback"), (0, "Normal mode")], Rw),
    F::bit(1, "Enable SQE Test", &[(1, "Enable SQE test"), (0, "Disable SQE test")], Rw),
    F::bit(0, "Disable Data Scrambling", &[(1, "Disable scrambler"), (0, "Enable scrambler")], Rw),
];
