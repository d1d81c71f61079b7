// src/bin/envelope.rs
//! envelope: encrypt and decrypt ecdh-envelope payloads from the shell
//!
//! Keys are hex. Missing `--private-key` / `--peer` fall back to the config
//! file (`--config`, `ECDH_ENVELOPE_CONFIG`, or the per-user default).

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ecdh_envelope::aliases::SecureConversionsExt;
use ecdh_envelope::config::{self, Config};
use ecdh_envelope::{decrypt, encrypt_with_version, generate_keypair, PrivateKey, PublicKey};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Versioned ECDH-derived encryption for text payloads
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new keypair
    Keygen,

    /// Print the compressed public key for a private key
    Pubkey {
        #[arg(short = 'k', long)]
        private_key: Option<String>,
    },

    /// Print the hex shared secret for a private key and a peer public key
    Derive {
        #[arg(short = 'k', long)]
        private_key: Option<String>,
        #[arg(short, long)]
        peer: Option<String>,
    },

    /// Encrypt a message for a peer (reads stdin when MESSAGE is omitted)
    Encrypt {
        #[arg(short = 'k', long)]
        private_key: Option<String>,
        #[arg(short, long)]
        peer: Option<String>,
        /// Payload version tag; defaults to the configured version
        #[arg(long)]
        version: Option<u64>,
        message: Option<String>,
    },

    /// Decrypt a payload from a peer (reads stdin when PAYLOAD is omitted)
    Decrypt {
        #[arg(short = 'k', long)]
        private_key: Option<String>,
        #[arg(short, long)]
        peer: Option<String>,
        payload: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level: tracing::Level = args.log_level.parse().unwrap_or(tracing::Level::WARN);
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    let config = config::load(args.config.as_deref()).context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    match args.command {
        Command::Keygen => {
            let keypair = generate_keypair();
            info!("generated new keypair");
            println!("private: {}", keypair.private.to_hex());
            println!("public:  {}", keypair.public.to_hex());
        }
        Command::Pubkey { private_key } => {
            let private = resolve_private(private_key.as_deref(), &config)?;
            println!("{}", private.public_key().to_hex());
        }
        Command::Derive { private_key, peer } => {
            let private = resolve_private(private_key.as_deref(), &config)?;
            let peer = resolve_peer(peer.as_deref(), &config)?;
            let secret = ecdh_envelope::derive_shared_secret(
                private.to_bytes().expose_secret(),
                peer.to_bytes(),
            )?;
            println!("{}", secret.expose_secret().to_hex());
        }
        Command::Encrypt {
            private_key,
            peer,
            version,
            message,
        } => {
            let private = resolve_private(private_key.as_deref(), &config)?;
            let peer = resolve_peer(peer.as_deref(), &config)?;
            let version = match version {
                Some(tag) => tag,
                None => config.version()?.tag(),
            };
            let message = read_arg_or_stdin(message).context("failed to read message")?;
            let payload = encrypt_with_version(
                private.to_bytes().expose_secret(),
                peer.to_bytes(),
                &message,
                version,
            )
            .context("encryption failed")?;
            println!("{payload}");
        }
        Command::Decrypt {
            private_key,
            peer,
            payload,
        } => {
            let private = resolve_private(private_key.as_deref(), &config)?;
            let peer = resolve_peer(peer.as_deref(), &config)?;
            let payload = read_arg_or_stdin(payload).context("failed to read payload")?;
            let plaintext = decrypt(
                private.to_bytes().expose_secret(),
                peer.to_bytes(),
                payload.trim(),
            )
            .context("decryption failed (v1 has no integrity check: check the keys)")?;
            println!("{plaintext}");
        }
    }

    Ok(())
}

fn resolve_private(flag: Option<&str>, config: &Config) -> Result<PrivateKey> {
    if let Some(hex) = flag {
        return PrivateKey::from_hex(hex).context("invalid --private-key");
    }
    match config.private_key()? {
        Some(key) => Ok(key),
        None => bail!("no private key: pass --private-key or set keys.private_key_file"),
    }
}

fn resolve_peer(flag: Option<&str>, config: &Config) -> Result<PublicKey> {
    if let Some(hex) = flag {
        return PublicKey::from_hex(hex).context("invalid --peer");
    }
    match config.peer_public_key()? {
        Some(key) => Ok(key),
        None => bail!("no peer public key: pass --peer or set keys.peer_public_key"),
    }
}

fn read_arg_or_stdin(arg: Option<String>) -> Result<String> {
    if let Some(value) = arg {
        return Ok(value);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.strip_suffix('\n').unwrap_or(&buffer).to_owned())
}
