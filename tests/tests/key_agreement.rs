use p256m_api::{KeyMaterial, PsaError};
use p256m_driver::P256mDriver;
use p256m_tests::{vectors, Call, RecordingBackend};

fn key_pair(driver: &P256mDriver<&RecordingBackend>) -> ([u8; 32], [u8; 65]) {
    let mut private_key = [0u8; 32];
    driver.generate_key(&mut private_key).unwrap();
    let mut public_key = [0u8; 65];
    driver
        .export_public_key(KeyMaterial::KeyPair(&private_key), &mut public_key)
        .unwrap();
    (private_key, public_key)
}

#[test]
fn test_both_sides_agree() {
    let backend = RecordingBackend::new();
    let driver = P256mDriver::new(&backend);
    let (alice_private, alice_public) = key_pair(&driver);
    let (bob_private, bob_public) = key_pair(&driver);

    let mut alice_secret = [0u8; 32];
    let mut bob_secret = [0u8; 32];
    assert_eq!(driver.agree_key(&alice_private, &bob_public, &mut alice_secret), Ok(32));
    assert_eq!(driver.agree_key(&bob_private, &alice_public, &mut bob_secret), Ok(32));
    assert_eq!(alice_secret, bob_secret);
    assert_ne!(alice_secret, [0u8; 32]);
}

#[test]
fn test_larger_output_only_prefix_written() {
    let backend = RecordingBackend::new();
    let driver = P256mDriver::new(&backend);
    let (_, peer) = key_pair(&driver);

    let mut out = [0xeeu8; 80];
    assert_eq!(driver.agree_key(&vectors::private_key(), &peer, &mut out), Ok(32));
    assert!(out[32..].iter().all(|&b| b == 0xee));
    assert_eq!(&backend.peer_key().unwrap()[..], &peer[1..]);
}

#[test]
fn test_shape_rejections_skip_backend() {
    let backend = RecordingBackend::new();
    let driver = P256mDriver::new(&backend);
    let private_key = vectors::private_key();
    let peer = vectors::public_key();
    let mut compressed = peer;
    compressed[0] = 0x02;
    let mut out = [0u8; 32];

    let cases: [(&[u8], &[u8], usize); 5] = [
        (&private_key[..31], &peer, 32),
        (&[0x01u8; 33], &peer, 32),
        (&private_key, &peer[..64], 32),
        (&private_key, &compressed, 32),
        (&private_key, &peer, 31),
    ];
    for (key, peer_key, capacity) in cases {
        assert_eq!(
            driver.agree_key(key, peer_key, &mut out[..capacity.min(32)]),
            Err(PsaError::NotSupported),
            "key {} bytes, peer {} bytes, capacity {}",
            key.len(),
            peer_key.len(),
            capacity
        );
    }
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn test_invalid_peer_point_is_invalid_argument() {
    let backend = RecordingBackend::new();
    let driver = P256mDriver::new(&backend);
    let mut peer = vectors::public_key();
    peer[64] ^= 0x01;

    let mut out = [0u8; 32];
    assert_eq!(
        driver.agree_key(&vectors::private_key(), &peer, &mut out),
        Err(PsaError::InvalidArgument)
    );
    assert_eq!(backend.calls(), vec![Call::EcdhSharedSecret]);
    assert_eq!(out, [0u8; 32]);
}
