pub mod catalog;
pub mod error;
pub mod field;
pub mod phy;
pub mod render;

pub mod ksz8081; // KSZ8081RNB register map

pub use catalog::{FieldCatalog, PhyTables, RegisterCatalog};
pub use error::DecodeError;
pub use field::{Access, BitSelector, FieldDescriptor, Layout, ValueMeaning};
pub use phy::PhyModel;
pub use render::{FieldLine, RegisterDecoder, Report, ReportBody};
