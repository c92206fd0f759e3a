//! Text encoding for PlantUML rendering URLs.
//!
//! PlantUML servers accept the diagram source as a URL path segment: the text
//! is raw-deflated and the compressed bytes are encoded with PlantUML's own
//! 64-character alphabet (not the standard base64 one).

use crate::errors::Result;
use base64::alphabet::Alphabet;
use base64::engine::{general_purpose::NO_PAD, Engine, GeneralPurpose};
use flate2::write::DeflateEncoder;
use flate2::Compression;
use once_cell::sync::Lazy;
use std::io::Write;

/// Alphabet used by PlantUML servers for URL-safe encoding.
const PLANTUML_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

static PLANTUML_ENGINE: Lazy<GeneralPurpose> = Lazy::new(|| {
    let alphabet = Alphabet::new(PLANTUML_ALPHABET).expect("PlantUML alphabet is valid");
    GeneralPurpose::new(&alphabet, NO_PAD)
});

/// Encodes PlantUML source text into the URL form expected by a rendering
/// server: raw deflate followed by the PlantUML 64-character encoding.
pub fn encode_source(source: &str) -> Result<String> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(source.as_bytes())?;
    let deflated = encoder.finish()?;
    Ok(PLANTUML_ENGINE.encode(deflated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn decode(encoded: &str) -> String {
        let bytes = PLANTUML_ENGINE.decode(encoded).unwrap();
        let mut inflater = flate2::read::DeflateDecoder::new(&bytes[..]);
        let mut out = String::new();
        inflater.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn output_uses_only_the_plantuml_alphabet() {
        let encoded = encode_source("@startuml\nBob -> Alice : hello\n@enduml").unwrap();
        assert!(!encoded.is_empty());
        assert!(encoded.chars().all(|c| PLANTUML_ALPHABET.contains(c)));
        assert!(!encoded.contains('='));
    }

    #[test]
    fn encoding_is_deterministic_and_input_sensitive() {
        let a = encode_source("@startuml\nclass A\n@enduml").unwrap();
        let b = encode_source("@startuml\nclass B\n@enduml").unwrap();
        assert_eq!(a, encode_source("@startuml\nclass A\n@enduml").unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn round_trips_through_inflate() {
        let source = "@startuml\nclass Customer {\n  name : String\n}\n@enduml";
        let encoded = encode_source(source).unwrap();
        assert_eq!(decode(&encoded), source);
    }
}
