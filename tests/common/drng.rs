//! Deterministic random generator for tests, reading bytes from SHAKE256
//! absorbed with a fixed seed. Implements the `rand_core` 0.6 traits that the
//! `fp2` field types sample with.

use rand_core::{CryptoRng, Error, RngCore};
use sha3::Shake256;
use sha3::digest::{ExtendableOutput, Update, XofReader};

pub struct DRNG {
    reader: <Shake256 as ExtendableOutput>::Reader,
}

impl DRNG {
    pub fn from_seed(seed: &[u8]) -> Self {
        let mut shake = Shake256::default();
        shake.update(seed);
        Self {
            reader: shake.finalize_xof(),
        }
    }
}

impl RngCore for DRNG {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.reader.read(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// Only used to drive test vectors.
impl CryptoRng for DRNG {}
