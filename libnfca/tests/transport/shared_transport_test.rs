use libnfca::transport::{BitTransport, MockTransport};
use libnfca::Error;

use crate::common::{SharedTransport, fixtures, seed_init_and_frames};

#[test]
fn shared_handle_sees_transmissions() {
    let shared = SharedTransport::new(MockTransport::new());
    let mut owned: Box<dyn BitTransport> = Box::new(shared.clone());
    owned.transmit_bits(&[0x04, 0x00], 16).unwrap();
    assert_eq!(shared.inner.borrow().sent.len(), 1);
    assert_eq!(owned.name(), "shared mock");
}

#[test]
fn seeded_script_starts_with_wakeup() {
    let mut mock = MockTransport::new();
    seed_init_and_frames(&mut mock, vec![fixtures::anticollision()]);
    let mut shared = SharedTransport::new(mock);

    let mut rx = [0u8; 4];
    let identity = fixtures::sample_identity();
    assert_eq!(shared.target_init(&identity, &mut rx, None).unwrap(), 7);
    assert_eq!(rx[0], 0x52);
    assert_eq!(shared.receive_bits(&mut rx, None).unwrap(), 16);
    assert!(matches!(shared.receive_bits(&mut rx, None), Err(Error::Timeout)));
    assert_eq!(shared.inner.borrow().init_identities, vec![identity]);
}
