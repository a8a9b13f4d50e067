//! Entropy for key generation

use rand::rngs::OsRng;
use rand::RngCore;

/// A source of random bytes that can report failure
///
/// Takes `&self` so a back-end can be shared without interior locking;
/// stateful generators need their own synchronisation.
pub trait EntropySource {
    fn try_fill(&self, dest: &mut [u8]) -> Result<(), rand::Error>;
}

impl EntropySource for OsRng {
    fn try_fill(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        OsRng.try_fill_bytes(dest)
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn try_fill(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        (**self).try_fill(dest)
    }
}
