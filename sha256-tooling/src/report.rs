use serde::Serialize;
use sha256_core::Digest;

/// One hashed input, as printed by `sha256sum --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct HashReport<'a> {
    input: &'a str,
    input_bytes: usize,
    digest: String,
}

impl<'a> HashReport<'a> {
    pub fn new(input: &'a str, digest: &Digest) -> Self {
        HashReport {
            input,
            input_bytes: input.len(),
            digest: digest.to_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_json() {
        let digest = sha256_core::hash_str("abc").expect("hash failed");
        let json = serde_json::to_string(&HashReport::new("abc", &digest))
            .expect("failed to serialize report");

        assert_eq!(
            json,
            r#"{"input":"abc","input-bytes":3,"digest":"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"}"#
        );
    }
}
