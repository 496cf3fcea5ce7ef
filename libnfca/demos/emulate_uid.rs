//! Emulate an ISO14443-A tag with a chosen UID.
//!
//! No radio is attached here: the emulator is driven by a `MockTransport`
//! that plays an initiator selecting the tag twice. Swap in a real
//! `BitTransport` implementation to answer a physical reader.
//!
//! Usage:
//!   cargo run -p libnfca --example emulate_uid -- [-q] [UID]
//!
//! UID is 8 hex digits (default DEADBEAF). Frames are logged as `R:`/`T:`
//! lines at debug level unless `-q` is given.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use anyhow::{Context, bail};
use libnfca::prelude::*;
use libnfca::transport::MockTransport;

struct Args {
    quiet: bool,
    uid: Uid,
}

fn usage(program: &str) {
    println!("Usage: {} [OPTIONS] [UID]", program);
    println!("Options:");
    println!("\t-h\tShow this help message");
    println!("\t-q\tQuiet mode. Do not log exchanged frames");
    println!();
    println!("\t[UID]\tUID to emulate, 8 hex digits (default DEADBEAF)");
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut argv = std::env::args();
    let program = argv.next().unwrap_or_else(|| "emulate_uid".into());
    let mut args = Args {
        quiet: false,
        uid: Uid::default(),
    };

    for arg in argv {
        match arg.as_str() {
            "-h" => {
                usage(&program);
                return Ok(None);
            }
            "-q" => args.quiet = true,
            s if s.len() == 8 => {
                args.uid = s
                    .parse()
                    .with_context(|| format!("{} is not a valid UID", s))?;
            }
            other => {
                usage(&program);
                bail!("unexpected argument: {}", other);
            }
        }
    }
    Ok(Some(args))
}

/// Frames a reader would send: two full selections with a HLTA and an idle
/// poll in between.
fn initiator_script(uid: Uid, stop: Arc<AtomicBool>) -> MockTransport {
    let mut mock = MockTransport::new();
    mock.push_frame(Command::Wupa.encode());
    for _ in 0..2 {
        mock.push_frame(Command::Reqa.encode());
        mock.push_frame(Command::AntiCollision.encode());
        mock.push_frame(Command::Select(uid).encode());
        let mut hlta = vec![0x50, 0x00];
        append_crc_a(&mut hlta);
        mock.push_frame(BitFrame::from_bytes(&hlta));
        mock.push_timeout();
    }
    mock.stop_when_drained = Some(stop);
    mock
}

fn main() -> anyhow::Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    let default_level = if args.quiet { "info" } else { "debug" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let stop = Arc::new(AtomicBool::new(false));
    let transport = initiator_script(args.uid, stop.clone());

    println!("[+] Emulating UID {} ({})", args.uid, bytes_to_hex(&args.uid.with_bcc()));
    println!("[+] Waiting for initiator request...");

    let mut emulator = EmulatorBuilder::new()
        .with_transport(Box::new(transport))
        .with_uid(args.uid)
        .quiet(args.quiet)
        .build_uninitialized()?
        .initialize()
        .context("could not put device in target mode")?;

    println!("[+] Initiator request received. Emulation running.");
    let stats = emulator.run(&stop)?;

    println!(
        "[+] Done: {} frame(s) received, {} answered, {} ignored, {} polling round(s)",
        stats.frames_received, stats.replies_sent, stats.frames_ignored, stats.polling_rounds
    );
    Ok(())
}
