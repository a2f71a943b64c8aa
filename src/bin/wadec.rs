//! wadec: decrypt a WhatsApp-style encrypted media file.

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info, metadata::LevelFilter};
use tracing_subscriber::EnvFilter;
use wamedia_rs::{decode_media_key, DecryptBuilder, MediaDecryptError, MediaType, PaddingPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "wadec",
    version,
    about = "Decrypt a WhatsApp-style encrypted media file (HKDF + AES-256-CBC + HMAC-SHA256)"
)]
struct Args {
    /// 32-byte media key, hex or base64 encoded.
    #[arg(long, visible_alias = "mediakey", value_name = "KEY")]
    key: String,

    /// Encrypted input file.
    #[arg(long = "in", visible_aliases = ["filename", "infilename"], value_name = "FILE")]
    input: PathBuf,

    /// Decrypted output file.
    #[arg(long = "out", visible_alias = "outfilename", value_name = "FILE")]
    output: PathBuf,

    /// image, video, audio or doc. Guessed from the output extension if omitted.
    #[arg(long = "type", visible_alias = "mediatype", value_name = "TYPE")]
    media_type: Option<String>,

    /// Accept out-of-range padding (drops the final block) instead of failing.
    #[arg(long)]
    permissive: bool,

    /// Do not print progress.
    #[arg(long, short)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = run(Args::parse()) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), MediaDecryptError> {
    let media_key = decode_media_key(&args.key)?;

    let media_type = match args.media_type.as_deref() {
        Some(name) => name.parse::<MediaType>()?,
        None => MediaType::from_path(&args.output),
    };
    if !media_type.is_known() {
        return Err(MediaDecryptError::InvalidContext);
    }
    info!(%media_type, input = %args.input.display(), "decrypting");

    let policy = if args.permissive {
        PaddingPolicy::Permissive
    } else {
        PaddingPolicy::Strict
    };

    let mut print_progress = |percent: u8| {
        let mut stderr = std::io::stderr().lock();
        let _ = write!(stderr, "\r{percent:3}%");
        if percent == 100 {
            let _ = writeln!(stderr);
        }
    };

    let mut builder = DecryptBuilder::new(media_key, media_type).with_padding_policy(policy);
    if !args.quiet {
        builder = builder.with_progress(&mut print_progress);
    }
    let summary = builder.decrypt_file(&args.input, &args.output)?;

    info!(
        bytes = summary.bytes_written,
        output = %args.output.display(),
        "done"
    );
    Ok(())
}
