//! Cross-checks against the RustCrypto `p256` API used directly

use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{PublicKey, SecretKey};
use p256m_api::{Algorithm, KeyMaterial};
use p256m_driver::P256mDriver;
use p256m_tests::{vectors, RecordingBackend};

#[test]
fn test_driver_signature_verifies_with_p256() {
    let backend = RecordingBackend::new();
    let driver = P256mDriver::new(&backend);
    let hash = [0x24u8; 32];

    let mut signature = [0u8; 64];
    driver
        .sign_hash(&vectors::private_key(), Algorithm::ECDSA_SHA256, &hash, &mut signature)
        .unwrap();

    let public = PublicKey::from_sec1_bytes(&vectors::public_key()).unwrap();
    let verifying_key = VerifyingKey::from(public);
    let signature = Signature::from_slice(&signature).unwrap();
    assert!(verifying_key.verify_prehash(&hash, &signature).is_ok());
}

#[test]
fn test_p256_signature_verifies_with_driver() {
    let secret = SecretKey::from_slice(&vectors::private_key()).unwrap();
    let signing_key = SigningKey::from(&secret);
    let hash = [0x42u8; 32];
    let signature: Signature = signing_key.sign_prehash(&hash).unwrap();

    let backend = RecordingBackend::new();
    let driver = P256mDriver::new(&backend);
    let public_key = vectors::public_key();
    assert_eq!(
        driver.verify_hash(
            KeyMaterial::PublicOnly(&public_key),
            Algorithm::ECDSA_SHA256,
            &hash,
            &signature.to_bytes(),
        ),
        Ok(())
    );
}

#[test]
fn test_exported_point_matches_p256_encoding() {
    let backend = RecordingBackend::new();
    let driver = P256mDriver::new(&backend);
    let mut private_key = [0u8; 32];
    driver.generate_key(&mut private_key).unwrap();

    let mut exported = [0u8; 65];
    driver
        .export_public_key(KeyMaterial::KeyPair(&private_key), &mut exported)
        .unwrap();

    let secret = SecretKey::from_slice(&private_key).unwrap();
    let expected = secret.public_key().to_encoded_point(false);
    assert_eq!(&exported[..], expected.as_bytes());
}

#[test]
fn test_shared_secret_matches_p256_diffie_hellman() {
    let backend = RecordingBackend::new();
    let driver = P256mDriver::new(&backend);
    let mut peer_private = [0u8; 32];
    driver.generate_key(&mut peer_private).unwrap();
    let peer_secret = SecretKey::from_slice(&peer_private).unwrap();
    let peer_public = peer_secret.public_key().to_encoded_point(false);

    let mut shared = [0u8; 32];
    driver
        .agree_key(&vectors::private_key(), peer_public.as_bytes(), &mut shared)
        .unwrap();

    let own = SecretKey::from_slice(&vectors::private_key()).unwrap();
    let expected =
        p256::ecdh::diffie_hellman(own.to_nonzero_scalar(), peer_secret.public_key().as_affine());
    assert_eq!(&shared[..], &expected.raw_secret_bytes()[..]);
}
