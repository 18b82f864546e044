//! # String hashing
//!
//! std's SipHash against the condensed wyhash over short random
//! alphanumeric keys, the shape string-keyed map benchmarks hash most.

pub mod bench;
pub mod code;
#[cfg(test)]
pub mod test;

pub use code::{siphash_bytes, wyhash_bytes, KEY_LEN};

use crate::random::engines::Sfc4;
use crate::registry::AlgorithmRunner;
use crate::utils::strings::alphanum_string;
use crate::utils::timer::Variant;

pub struct StringHashRunner;

impl AlgorithmRunner for StringHashRunner {
    fn name(&self) -> &'static str {
        "string_hash"
    }

    fn description(&self) -> &'static str {
        "SipHash vs wyhash over short alphanumeric keys"
    }

    fn category(&self) -> &'static str {
        "hash"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        vec!["std_siphash", "wyhash"]
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        let vectors: [(&[u8], u64); 3] = [
            (b"", 0x38f94c439ac36242),
            (b"hello world", 0x32c257998d073c59),
            (b"Fss7zbhbnM9ZanQ", 0x5366ac94ba27cab4),
        ];
        for (bytes, want) in vectors {
            let got = wyhash_bytes(bytes, 1);
            if got != want {
                return Err(format!(
                    "wyhash_bytes({:?}, 1) was {:#018x}, reference is {:#018x}",
                    String::from_utf8_lossy(bytes),
                    got,
                    want
                ));
            }
        }
        // Key generation must be reproducible or no run is comparable.
        let key = alphanum_string(&mut Sfc4::new(7), KEY_LEN);
        if key != "cbzzyiUXQM1vrL9" {
            return Err(format!("key stream drifted: {:?}", key));
        }
        Ok(())
    }
}
