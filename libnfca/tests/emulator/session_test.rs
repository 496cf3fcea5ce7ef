use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use libnfca::emulator::{Emulator, EmulatorBuilder, EmulatorConfig, FrameKind, RxBuffer};
use libnfca::protocol::{Command, Response, parity_vec};
use libnfca::transport::{DeviceOption, MockTransport};
use libnfca::types::{Sak, TargetIdentity};
use libnfca::Error;
use log::Level;

use crate::common::log_capture::{capture_logs, lines_starting_with};
use crate::common::{SharedTransport, anticollision_script, fixtures, initialized_mock_emulator};

#[test]
fn run_answers_until_script_drains() {
    let stop = Arc::new(AtomicBool::new(false));
    let mut mock = MockTransport::new();
    mock.push_frame(fixtures::wupa());
    for _ in 0..2 {
        for f in anticollision_script(fixtures::default_uid()) {
            mock.push_frame(f);
        }
        mock.push_frame(fixtures::hlta());
        mock.push_timeout();
    }
    mock.stop_when_drained = Some(stop.clone());
    let shared = SharedTransport::new(mock);

    let mut emu = EmulatorBuilder::new()
        .with_transport(Box::new(shared.clone()))
        .quiet(true)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();
    let stats = emu.run(&stop).unwrap();

    assert!(stop.load(Ordering::SeqCst));
    assert_eq!(stats.frames_received, 8);
    assert_eq!(stats.replies_sent, 6);
    assert_eq!(stats.frames_ignored, 2);
    assert_eq!(stats.polling_rounds, 2);

    let inner = shared.inner.borrow();
    let bits: Vec<usize> = inner.sent.iter().map(|f| f.bit_len()).collect();
    assert_eq!(bits, vec![16, 40, 24, 16, 40, 24]);

    // Every reply passes the checks a reader applies (BCC, CRC_A)
    let identity = TargetIdentity::default();
    let expected = [
        Response::Atqa(identity.atqa),
        Response::UidBcc(identity.uid),
        Response::Sak(identity.sak),
    ];
    let commands = [
        Command::Reqa,
        Command::AntiCollision,
        Command::Select(identity.uid),
    ];
    for (i, frame) in inner.sent.iter().enumerate() {
        let decoded = Response::decode(&commands[i % 3], frame).unwrap();
        assert_eq!(decoded, expected[i % 3]);
    }
}

fn frame_lines_for(quiet: bool) -> Vec<(Level, String)> {
    let config = EmulatorConfig {
        quiet,
        ..EmulatorConfig::default()
    };
    let (_, records) = capture_logs(|| {
        let (mut emu, _shared) = initialized_mock_emulator(
            TargetIdentity::default(),
            config,
            anticollision_script(fixtures::default_uid()),
        )
        .unwrap();
        let mut rx = RxBuffer::new();
        for _ in 0..3 {
            emu.step(&mut rx).unwrap();
        }
    });
    records
}

#[test]
fn frames_are_logged_unless_quiet() {
    let records = frame_lines_for(false);
    assert_eq!(
        lines_starting_with(&records, "R: "),
        vec![
            "R: 26",
            "R: 93  20  ",
            "R: 93  70  de  ad  be  af  62  db  98  "
        ]
    );
    assert_eq!(
        lines_starting_with(&records, "T: "),
        vec!["T: 04  00  ", "T: de  ad  be  af  62  ", "T: 08  b6  dd  "]
    );
    assert!(
        records
            .iter()
            .filter(|(_, msg)| msg.starts_with("R: ") || msg.starts_with("T: "))
            .all(|(level, _)| *level == Level::Debug)
    );
}

#[test]
fn quiet_mode_suppresses_frame_lines() {
    let records = frame_lines_for(true);
    assert!(lines_starting_with(&records, "R: ").is_empty());
    assert!(lines_starting_with(&records, "T: ").is_empty());
    // Session milestones are still reported
    assert!(
        records
            .iter()
            .any(|(level, msg)| *level == Level::Info && msg.contains("initialized"))
    );
}

#[test]
fn incomplete_uid_identity_is_warned_about() {
    let cascading = TargetIdentity {
        sak: Sak::new(0x04),
        ..TargetIdentity::default()
    };
    for (identity, warned) in [(TargetIdentity::default(), false), (cascading, true)] {
        let (_, records) = capture_logs(|| {
            initialized_mock_emulator(identity, EmulatorConfig::default(), Vec::new()).unwrap()
        });
        let warnings = records
            .iter()
            .filter(|(level, msg)| *level == Level::Warn && msg.contains("single-size UID"))
            .count();
        assert_eq!(warnings, usize::from(warned), "identity {:?}", identity);
    }
}

#[test]
fn run_ends_on_disconnect() {
    let mut mock = MockTransport::new();
    mock.push_frame(fixtures::reqa());
    mock.push_frame(fixtures::reqa());
    mock.disconnect_when_drained = true;
    let mut emu = Emulator::new_with_transport(Box::new(mock), TargetIdentity::default())
        .initialize()
        .unwrap();

    let stop = AtomicBool::new(false);
    assert!(matches!(emu.run(&stop), Err(Error::Disconnected)));
    assert_eq!(emu.stats().replies_sent, 1);
}

#[test]
fn strict_session_ignores_foreign_select() {
    let config = EmulatorConfig {
        strict_select: true,
        ..EmulatorConfig::default()
    };
    let frames = vec![
        fixtures::reqa(),
        Command::Select(fixtures::sample_uid()).encode(),
        fixtures::select_default_uid(),
    ];
    let (mut emu, shared) =
        initialized_mock_emulator(TargetIdentity::default(), config, frames).unwrap();

    let mut rx = RxBuffer::new();
    assert_eq!(emu.step(&mut rx).unwrap(), FrameKind::Request);
    assert_eq!(emu.step(&mut rx).unwrap(), FrameKind::SelectTag);
    assert_eq!(emu.step(&mut rx).unwrap(), FrameKind::SelectTag);

    assert_eq!(emu.stats().frames_ignored, 1);
    let inner = shared.inner.borrow();
    assert_eq!(inner.sent.len(), 2);
    assert_eq!(inner.sent[1].as_bytes(), &[0x08, 0xb6, 0xdd]);
}

#[test]
fn software_parity_replies_carry_parity() {
    let config = EmulatorConfig {
        hardware_parity: false,
        quiet: true,
        ..EmulatorConfig::default()
    };
    let (mut emu, shared) = initialized_mock_emulator(
        fixtures::sample_identity(),
        config,
        anticollision_script(fixtures::sample_uid()),
    )
    .unwrap();

    let mut rx = RxBuffer::new();
    for _ in 0..3 {
        emu.step(&mut rx).unwrap();
    }

    let inner = shared.inner.borrow();
    assert!(inner.options.contains(&(DeviceOption::HandleParity, false)));
    assert!(inner.options.contains(&(DeviceOption::HandleCrc, false)));
    for frame in &inner.sent {
        assert_eq!(frame.parity(), Some(&parity_vec(frame.as_bytes())[..]));
    }
}

#[test]
fn timeouts_do_not_end_session() {
    let stop = Arc::new(AtomicBool::new(false));
    let mut mock = MockTransport::with_frames([fixtures::wupa()]);
    mock.push_timeout();
    mock.push_timeout();
    mock.push_frame(fixtures::reqa());
    mock.stop_when_drained = Some(stop.clone());

    let mut emu = Emulator::new_with_transport(Box::new(mock), TargetIdentity::default())
        .initialize()
        .unwrap();
    let stats = emu.run(&stop).unwrap();
    assert_eq!(stats.frames_received, 1);
    assert_eq!(stats.replies_sent, 1);
}
