//! Known-Answer Tests
//!
//! Records in the NIST KAT file format (blank-line separated records of
//! `Field = hex` lines), checked against the public API. Hash and XOF
//! records carry Msg and MD, CXOF records add the customization string Z,
//! and AEAD records carry Key, Nonce, PT, AD and CT where the CT field is
//! ciphertext followed by the tag.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

const HASH256_KAT: &str = "\
Msg =
MD = 0B3BE5850F2F6B98CAF29F8FDEA89B64A1FA70AA249B8F839BD53BAA304D92B2

Msg = 000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F
MD = BD9D3D60A66B53868EAB2A5C74539A518A1F60F01EB176C60E43DEE81680B33E
";

const XOF128_KAT: &str = "\
Msg =
MD = 473D5E6164F58B39DFD84AACDB8AE42EC2D91FED33388EE0D960D9B3993295C6

Msg = 000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F
MD = 2E5F3403F4171471CC7934B51982CECE8D6628435DB70E89880F3BE4E0B7B052
";

const CXOF128_KAT: &str = "\
Msg = 000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F
Z = DEDFE0E1E2E3E4E5
MD = E098F047A8ACA0317076E482E284F579BE173A2F0BD568D3319831BA3528C44D
";

const AEAD128_KAT: &str = "\
Key = 000102030405060708090A0B0C0D0E0F
Nonce = 101112131415161718191A1B1C1D1E1F
PT =
AD =
CT = 4F9C278211BEC9316BF68F46EE8B2EC6

Key = 000102030405060708090A0B0C0D0E0F
Nonce = 101112131415161718191A1B1C1D1E1F
PT = 000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F
AD =
CT = C8E3FECE044CE5CAC3C8521118B7829B1520FF79648F51124105CB5EB58EB4BEEB8E9EEA285F0070C753086A22E1E701
";

/// Splits KAT text into records of decoded `field -> bytes` maps. Empty
/// field values decode to empty byte strings.
fn parse_kat(text: &str) -> Vec<HashMap<String, Vec<u8>>> {
    let mut records = Vec::new();

    for chunk in text.split("\n\n") {
        let mut record = HashMap::new();
        for line in chunk.lines().filter(|line| !line.trim().is_empty()) {
            let (name, value) = line.split_once('=').unwrap();
            let bytes = hex::decode(value.trim()).unwrap();
            record.insert(name.trim().to_string(), bytes);
        }
        if !record.is_empty() {
            records.push(record);
        }
    }

    records
}

// =============================================================================
// HASH256 / XOF-128 / CXOF-128
// =============================================================================

#[test]
fn test_hash256_known_answers() {
    for record in &parse_kat(HASH256_KAT) {
        let digest = ascon::hash256(&record["Msg"]);
        assert_eq!(
            hex::encode(digest),
            hex::encode(&record["MD"]),
            "Hash256 mismatch for Msg = {}",
            hex::encode(&record["Msg"])
        );
    }
}

#[test]
fn test_xof128_known_answers() {
    for record in &parse_kat(XOF128_KAT) {
        let md = &record["MD"];
        let mut out = vec![0u8; md.len()];
        ascon::xof128(&record["Msg"], &mut out);

        assert_eq!(
            hex::encode(&out),
            hex::encode(md),
            "XOF mismatch for Msg = {}",
            hex::encode(&record["Msg"])
        );
    }
}

#[test]
fn test_cxof128_known_answers() {
    for record in &parse_kat(CXOF128_KAT) {
        let md = &record["MD"];
        let mut out = vec![0u8; md.len()];
        ascon::cxof128(&record["Z"], &record["Msg"], &mut out).unwrap();

        assert_eq!(
            hex::encode(&out),
            hex::encode(md),
            "CXOF mismatch for Z = {}",
            hex::encode(&record["Z"])
        );
    }
}

#[test]
fn test_xof128_known_answer_incremental() {
    // The published 32-byte-message vector, absorbed byte by byte and
    // squeezed in uneven slices.
    let msg: Vec<u8> = (0u8..32).collect();

    let mut xof = ascon::AsconXof128::new();
    for byte in &msg {
        xof.absorb(core::slice::from_ref(byte)).unwrap();
    }
    xof.finalize().unwrap();

    let mut out = [0u8; 32];
    xof.squeeze(&mut out[..1]).unwrap();
    xof.squeeze(&mut out[1..9]).unwrap();
    xof.squeeze(&mut out[9..]).unwrap();

    assert_eq!(
        hex::encode(out),
        "2e5f3403f4171471cc7934b51982cece8d6628435db70e89880f3be4e0b7b052"
    );
}

// =============================================================================
// AEAD-128
// =============================================================================

#[test]
fn test_aead128_known_answers() {
    for record in &parse_kat(AEAD128_KAT) {
        let key: [u8; 16] = record["Key"].as_slice().try_into().unwrap();
        let nonce: [u8; 16] = record["Nonce"].as_slice().try_into().unwrap();
        let pt = &record["PT"];
        let ad = &record["AD"];
        let ct_and_tag = &record["CT"];

        let (expected_ct, expected_tag) = ct_and_tag.split_at(ct_and_tag.len() - 16);

        let cipher = ascon::AsconAead128::new(&key);
        let mut ciphertext = vec![0u8; pt.len()];
        let tag = cipher.encrypt(&nonce, ad, pt, &mut ciphertext);

        assert_eq!(hex::encode(&ciphertext), hex::encode(expected_ct));
        assert_eq!(hex::encode(tag), hex::encode(expected_tag));

        // The same record must decrypt back.
        let tag: [u8; 16] = expected_tag.try_into().unwrap();
        let mut recovered = vec![0u8; pt.len()];
        cipher
            .decrypt(&nonce, ad, expected_ct, &tag, &mut recovered)
            .unwrap();
        assert_eq!(hex::encode(&recovered), hex::encode(pt));
    }
}
