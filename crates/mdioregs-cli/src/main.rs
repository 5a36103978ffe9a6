use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mdioregs::{Layout, RegisterCatalog, RegisterDecoder};

/// Exit status for a missing `--reg`/`--value`.
const EXIT_INVALID_INVOCATION: u8 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "mdioregs",
    author,
    version,
    about = "Decode an Ethernet PHY MDIO register value",
    long_about = None
)]
struct Cli {
    /// Register number in hex (or a register name such as "Basic Status")
    #[arg(short, long, value_name = "REGNUM")]
    reg: Option<String>,
    /// Value of the register in hex
    #[arg(short, long, value_name = "VALUE", value_parser = parse_hex_u16)]
    value: Option<u16>,
    /// PHY model the register dump comes from
    #[arg(long, default_value = "ksz8081rnb")]
    phy: String,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// List the known registers and exit
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

#[derive(Debug, Clone, serde::Serialize)]
struct RegisterEntry { address: u8, name: &'static str, documented: bool }

fn parse_hex_u16(s: &str) -> Result<u16> {
    let s = s.trim();
    let hex = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    Ok(u16::from_str_radix(hex, 16)?)
}

/// Hex register number first, then a name lookup in the catalog.
fn parse_reg(catalog: &RegisterCatalog, s: &str) -> Result<u8> {
    let t = s.trim();
    let hex = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")).unwrap_or(t);
    if let Ok(v) = u8::from_str_radix(hex, 16) {
        return Ok(v);
    }
    Ok(catalog.address_of(t)?)
}

fn list<W: Write>(decoder: &RegisterDecoder, format: OutputFormat, out: &mut W) -> Result<()> {
    let tables = decoder.tables();
    let entries: Vec<RegisterEntry> = tables
        .registers
        .iter()
        .map(|(address, name)| RegisterEntry {
            address,
            name,
            documented: matches!(tables.fields.fields_for(address), Layout::Fields(_)),
        })
        .collect();
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?,
        OutputFormat::Text => {
            writeln!(out, "{:<6} {:<40} {}", "reg", "name", "fields")?;
            for e in &entries {
                let documented = if e.documented { "yes" } else { "-" };
                writeln!(out, "0x{:02X}   {:<40} {}", e.address, e.name, documented)?;
            }
        }
    }
    Ok(())
}

/// Everything after argument parsing. Returns the process exit status; a bad
/// `--reg` comes back as a `clap::Error` so `main` can exit with clap's code.
fn run<W: Write>(cli: Cli, out: &mut W) -> Result<u8> {
    let decoder = RegisterDecoder::for_phy(&cli.phy)?;
    debug!(phy = %decoder.model(), "decoder ready");

    if cli.list {
        list(&decoder, cli.format, out)?;
        return Ok(0);
    }

    let (Some(reg), Some(value)) = (cli.reg.as_deref(), cli.value) else {
        writeln!(out, "Please give a register number and value")?;
        write!(out, "{}", Cli::command().render_help())?;
        return Ok(EXIT_INVALID_INVOCATION);
    };

    let address = match parse_reg(&decoder.tables().registers, reg) {
        Ok(a) => a,
        Err(e) => {
            let msg = format!("invalid value '{reg}' for '--reg <REGNUM>': {e}");
            return Err(Cli::command().error(ErrorKind::ValueValidation, msg).into());
        }
    };

    let report = decoder.decode(address, value)?;
    match cli.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Text => {
            writeln!(out, "Register: {}", report.name)?;
            write!(out, "{report}")?;
        }
    }

    Ok(0)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli, &mut std::io::stdout().lock()) {
        Ok(code) => Ok(ExitCode::from(code)),
        Err(e) => match e.downcast::<clap::Error>() {
            Ok(usage) => usage.exit(),
            Err(e) => Err(e),
        },
    }
}
