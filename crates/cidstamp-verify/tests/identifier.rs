use cidstamp_verify::{ContentId, compute_identifier};
use proptest::prelude::*;

#[test]
fn multi_chunk_inputs() {
    // 300_000 zero bytes spans two 256 KiB chunks.
    assert_eq!(
        ContentId::of(&vec![0u8; 300_000]).as_str(),
        "QmXZSW216AmapthUD5r9LAoFg2LmkYY291aSKKi5cWUj6Y"
    );

    let patterned: Vec<u8> = (0..=255u8).cycle().take(256 * 1200).collect();
    assert_eq!(
        ContentId::of(&patterned).as_str(),
        "QmTTa89T7ra72oFqidWXGHTHopuErB56LFReHKYXU745hc"
    );
}

#[test]
fn identifiers_are_cidv0_shaped() {
    let id = compute_identifier(b"some bytes");
    assert_eq!(id.as_str().len(), 46);
    assert!(id.as_str().starts_with("Qm"));
}

#[test]
fn serde_uses_plain_string() {
    let id = ContentId::of(b"hello world\n");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5o\"");

    let back: ContentId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
    assert!(serde_json::from_str::<ContentId>("\"bogus\"").is_err());
}

proptest! {
    #[test]
    fn identifier_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..4096)) {
        prop_assert_eq!(ContentId::of(&bytes), ContentId::of(&bytes.clone()));
    }

    #[test]
    fn identifier_is_content_sensitive(
        bytes in proptest::collection::vec(any::<u8>(), 1..2048),
        index in any::<prop::sample::Index>(),
    ) {
        let mut changed = bytes.clone();
        let i = index.index(changed.len());
        changed[i] = changed[i].wrapping_add(1);
        prop_assert_ne!(ContentId::of(&bytes), ContentId::of(&changed));
    }
}
