use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ppplink_core::{
    LinkType, ProtocolRegistry, build_rewrite, format_header_with_length, unformat_header,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("PPPLINK_BUILD_COMMIT"),
    ", ",
    env!("PPPLINK_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "ppplink")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Inspect and build PPP link-layer framing headers.",
    long_about = None,
    after_help = "Examples:\n  ppplink protocols list --pretty\n  ppplink header build ip4\n  ppplink header decode ff030021\n  ppplink rewrite ip6"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on the protocol registry.
    Protocols {
        #[command(subcommand)]
        command: ProtocolsCommands,
    },
    /// Build or decode PPP framing headers.
    Header {
        #[command(subcommand)]
        command: HeaderCommands,
    },
    /// Print the static rewrite template for an upper-layer type.
    Rewrite {
        /// Upper-layer type: ip4, ip6, mpls-unicast, ethernet, arp
        link_type: String,
    },
}

#[derive(Subcommand, Debug)]
enum ProtocolsCommands {
    /// List the registered protocols as JSON.
    List {
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Subcommand, Debug)]
enum HeaderCommands {
    /// Build header bytes from a protocol spec (name, decimal, or 0x hex).
    Build {
        /// Protocol specification, e.g. "ip4", "0x21", "33"
        spec: String,
    },
    /// Decode header bytes given as hex and print the diagnostic text.
    Decode {
        /// Header bytes as hex, e.g. "ff030021" or "ff:03:00:21"
        hex: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Protocols { command } => match command {
            ProtocolsCommands::List { pretty } => cmd_protocols_list(pretty),
        },
        Commands::Header { command } => match command {
            HeaderCommands::Build { spec } => cmd_header_build(&spec),
            HeaderCommands::Decode { hex } => cmd_header_decode(&hex),
        },
        Commands::Rewrite { link_type } => cmd_rewrite(&link_type),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn default_registry() -> Result<ProtocolRegistry, CliError> {
    ProtocolRegistry::with_default_protocols()
        .map_err(|err| CliError::new(format!("registry initialization failed: {}", err), None))
}

fn cmd_protocols_list(pretty: bool) -> Result<(), CliError> {
    let registry = default_registry()?;
    let summaries = registry.summaries();
    let json = if pretty {
        serde_json::to_string_pretty(&summaries)
    } else {
        serde_json::to_string(&summaries)
    };
    let json: Result<String> = json.context("JSON serialization failed");
    println!("{}", json?);
    Ok(())
}

fn cmd_header_build(spec: &str) -> Result<(), CliError> {
    let registry = default_registry()?;
    let mut out = Vec::new();
    unformat_header(&registry, spec, &mut out).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("use a registered name, a decimal in 0..=65535, or 0x hex".to_string()),
        )
    })?;
    println!("{}", to_hex(&out));
    Ok(())
}

fn cmd_header_decode(hex: &str) -> Result<(), CliError> {
    let registry = default_registry()?;
    let bytes = parse_hex_bytes(hex)?;
    println!(
        "{}",
        format_header_with_length(&registry, &bytes, bytes.len())
    );
    Ok(())
}

fn cmd_rewrite(link_type: &str) -> Result<(), CliError> {
    let link = parse_link_type(link_type)?;
    let rewrite = build_rewrite(link).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("PPP encapsulates ip4, ip6, and mpls-unicast".to_string()),
        )
    })?;
    println!("{}", to_hex(&rewrite));
    Ok(())
}

fn parse_link_type(input: &str) -> Result<LinkType, CliError> {
    match input.to_ascii_lowercase().as_str() {
        "ip4" => Ok(LinkType::Ip4),
        "ip6" => Ok(LinkType::Ip6),
        "mpls-unicast" | "mpls_unicast" => Ok(LinkType::MplsUnicast),
        "ethernet" => Ok(LinkType::Ethernet),
        "arp" => Ok(LinkType::Arp),
        other => Err(CliError::new(
            format!("unknown link type '{}'", other),
            Some("expected ip4, ip6, mpls-unicast, ethernet, or arp".to_string()),
        )),
    }
}

fn parse_hex_bytes(input: &str) -> Result<Vec<u8>, CliError> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != ':')
        .collect();
    if !cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CliError::new(
            format!("invalid hex input '{}'", input),
            Some("expected hex digits only, optionally ':'-separated".to_string()),
        ));
    }
    if cleaned.is_empty() || cleaned.len() % 2 != 0 {
        return Err(CliError::new(
            format!("invalid hex input '{}'", input),
            Some("expected an even number of hex digits".to_string()),
        ));
    }

    let mut bytes = Vec::with_capacity(cleaned.len() / 2);
    for chunk in cleaned.as_bytes().chunks(2) {
        let high = (chunk[0] as char).to_digit(16).unwrap_or(0) as u8;
        let low = (chunk[1] as char).to_digit(16).unwrap_or(0) as u8;
        bytes.push(high << 4 | low);
    }
    Ok(bytes)
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
