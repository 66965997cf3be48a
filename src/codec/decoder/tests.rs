use super::*;
use crate::codec::encoder::encode_state;
use crate::codec::framing::{base64url_encode, frame, Compression, MAX_DECODED_BYTES};
use crate::core::marker_type::{CUSTOM_CODE, ROUTE1_CODE, ROUTE_CODE};

fn registry() -> MarkerTypeRegistry {
    MarkerTypeRegistry::with_default_catalog()
}

fn plain_token(json: &str) -> String {
    base64url_encode(json.as_bytes())
}

fn gzip_token(json: &str) -> String {
    frame(json.as_bytes(), Compression::Gzip)
}

#[test]
fn test_roundtrip_preserves_entries_and_order() {
    let registry = registry();
    let entries = vec![
        StateEntry::new(1, 12.5, 40.25),
        StateEntry::new(ROUTE_CODE, 0.0, 0.0),
        StateEntry::with_note(CUSTOM_CODE, -3.75, 8.1, "watch corner"),
        StateEntry::new(ROUTE_CODE, 10.0, 10.0),
        StateEntry::new(ROUTE1_CODE, 99.99, -0.01),
    ];

    let token = encode_state(&entries, Compression::Gzip);
    let decoded = decode_state(&token, &registry).expect("Decode erwartet");

    assert_eq!(decoded.entries, entries);
    assert_eq!(decoded.dropped, 0);
    assert_eq!(decoded.schema, WireSchema::FlatTuplesWithNotes);
    assert_eq!(decoded.map_id, None);
}

#[test]
fn test_empty_state_roundtrip_is_empty_not_absent() {
    let registry = registry();
    for compression in [Compression::Gzip, Compression::None] {
        let token = encode_state(&[], compression);
        let decoded = decode_state(&token, &registry).expect("Leerer State ist gueltig");
        assert!(decoded.entries.is_empty());
        assert_eq!(decoded.schema, WireSchema::FlatTuples);
    }
}

#[test]
fn test_uncompressed_token_is_accepted() {
    let registry = registry();
    let entries = vec![StateEntry::new(1, 1.5, 2.5), StateEntry::new(ROUTE_CODE, 3.0, 4.0)];
    let token = encode_state(&entries, Compression::None);
    let decoded = decode_state(&token, &registry).expect("Klartext-Token erwartet");
    assert_eq!(decoded.entries, entries);
}

#[test]
fn test_legacy_object_migration_scenario() {
    let registry = registry();
    let json = r#"{"m":"spaceport","p":[["spawn",12.5,40.25]],"r":[[0,0],[10,10]]}"#;

    for token in [plain_token(json), gzip_token(json)] {
        let decoded = decode_state(&token, &registry).expect("Legacy-Token erwartet");
        assert_eq!(decoded.schema, WireSchema::LegacyObject);
        assert_eq!(decoded.map_id.as_deref(), Some("spaceport"));
        assert_eq!(
            decoded.entries,
            vec![
                StateEntry::new(1, 12.5, 40.25),
                StateEntry::new(ROUTE_CODE, 0.0, 0.0),
                StateEntry::new(ROUTE_CODE, 10.0, 10.0),
            ]
        );
    }
}

#[test]
fn test_legacy_pins_accept_integer_codes() {
    let registry = registry();
    let token = plain_token(r#"{"p":[[0,1,2],[1,3,4]],"r":[]}"#);
    let decoded = decode_state(&token, &registry).expect("Legacy erwartet");
    assert_eq!(decoded.entries.len(), 2);
    assert_eq!(decoded.entries[0].type_code, CUSTOM_CODE);
    assert_eq!(decoded.map_id, None);
}

#[test]
fn test_symbolic_names_rejected_in_flat_schema() {
    let registry = registry();
    let token = gzip_token(r#"[["spawn",1,2],[1,1,2]]"#);
    let decoded = decode_state(&token, &registry).expect("Decode erwartet");
    assert_eq!(decoded.entries, vec![StateEntry::new(1, 1.0, 2.0)]);
    assert_eq!(decoded.dropped, 1);
}

#[test]
fn test_single_corrupt_entry_is_dropped_individually() {
    let registry = registry();
    let corruptions = [
        r#"[1,2]"#,
        r#"[1,"north",2]"#,
        r#"[1,2,3,4,5]"#,
        r#"[999,1,1]"#,
        r#"[1,1,1,42]"#,
        r#""garbage""#,
        r#"[-1,1,1]"#,
        r#"[1.5,1,1]"#,
    ];

    for bad in corruptions {
        let json = format!("[[1,0,0],{bad},[3,5,5],[3,6,6]]");
        let decoded = decode_state(&gzip_token(&json), &registry)
            .unwrap_or_else(|| panic!("Token mit {bad} muss lesbar bleiben"));
        assert_eq!(decoded.entries.len(), 3, "Korruption {bad}");
        assert_eq!(decoded.dropped, 1, "Korruption {bad}");
    }
}

#[test]
fn test_out_of_range_number_drops_only_its_entry() {
    let registry = registry();
    for json in [
        "[[1,0,0],[1,1e400,2],[3,5,5]]",
        "[[1,0,0],[1,1,-1e400],[3,5,5]]",
    ] {
        let decoded = decode_state(&plain_token(json), &registry)
            .unwrap_or_else(|| panic!("{json} muss lesbar bleiben"));
        assert_eq!(
            decoded.entries,
            vec![StateEntry::new(1, 0.0, 0.0), StateEntry::new(ROUTE_CODE, 5.0, 5.0)]
        );
        assert_eq!(decoded.dropped, 1);
    }
}

#[test]
fn test_legacy_route_with_out_of_range_number() {
    let registry = registry();
    let token = gzip_token(r#"{"p":[],"r":[[1e999,0],[2,2]]}"#);
    let decoded = decode_state(&token, &registry).expect("Legacy erwartet");
    assert_eq!(decoded.entries, vec![StateEntry::new(ROUTE_CODE, 2.0, 2.0)]);
    assert_eq!(decoded.dropped, 1);
}

#[test]
fn test_wire_notes_are_normalized_like_local_notes() {
    let registry = registry();
    let token = plain_token(r#"[[1,1,1,"  x "],[1,0,0," "],[1,2,2,""]]"#);
    let decoded = decode_state(&token, &registry).expect("Decode erwartet");

    assert_eq!(decoded.dropped, 0);
    assert_eq!(
        decoded.entries,
        vec![
            StateEntry::with_note(1, 1.0, 1.0, "x"),
            StateEntry::new(1, 0.0, 0.0),
            StateEntry::new(1, 2.0, 2.0),
        ]
    );
    assert_eq!(decoded.entries[0].note.as_deref(), Some("x"));
    assert_eq!(decoded.entries[1].arity(), 3);
}

#[test]
fn test_null_note_counts_as_absent_note() {
    let registry = registry();
    let token = plain_token(r#"[[1,1,1,null]]"#);
    let decoded = decode_state(&token, &registry).expect("Decode erwartet");
    assert_eq!(decoded.entries, vec![StateEntry::new(1, 1.0, 1.0)]);
    assert_eq!(decoded.entries[0].arity(), 3);
}

#[test]
fn test_integral_float_codes_are_accepted() {
    let registry = registry();
    let token = plain_token(r#"[[1.0,1,1]]"#);
    let decoded = decode_state(&token, &registry).expect("Decode erwartet");
    assert_eq!(decoded.entries[0].type_code, 1);
}

#[test]
fn test_malformed_tokens_are_absent() {
    let registry = registry();
    assert!(decode_state("!!not-base64!!", &registry).is_none());
    assert!(decode_state(&plain_token("{ broken"), &registry).is_none());
    assert!(decode_state(&plain_token("42"), &registry).is_none());
    assert!(decode_state(&plain_token("null"), &registry).is_none());
    assert!(decode_state(&plain_token(r#"{"x":1}"#), &registry).is_none());
    assert!(decode_state("", &registry).is_none());
}

#[test]
fn test_try_decode_reports_reason() {
    let registry = registry();
    let err = try_decode_state(&plain_token("\"just a string\""), &registry)
        .expect_err("Skalar muss abgelehnt werden");
    assert!(matches!(err, DecodeError::UnrecognizedShape));

    let err = try_decode_state("%%%", &registry).expect_err("base64 muss scheitern");
    assert!(matches!(err, DecodeError::Base64(_)));
}

#[test]
fn test_unknown_dynamic_codes_survive_once_registered() {
    let mut registry = MarkerTypeRegistry::new();
    let token = plain_token(r#"[[1,1,1],[0,2,2]]"#);

    let before = decode_state(&token, &registry).expect("Decode erwartet");
    assert_eq!(before.entries.len(), 1);
    assert_eq!(before.dropped, 1);

    registry
        .load_catalog(crate::core::marker_type::DEFAULT_MARKER_CATALOG)
        .expect("Katalog erwartet");
    let after = decode_state(&token, &registry).expect("Decode erwartet");
    assert_eq!(after.entries.len(), 2);
}

#[test]
fn test_payload_over_limit_is_too_large() {
    let registry = registry();
    let token = frame(&vec![b'['; MAX_DECODED_BYTES + 1], Compression::Gzip);
    let err = try_decode_state(&token, &registry).expect_err("Limit muss greifen");
    assert!(matches!(err, DecodeError::TooLarge(size) if size == MAX_DECODED_BYTES + 1));
}

#[test]
fn test_payload_at_limit_is_not_too_large() {
    let registry = registry();
    let token = frame(&vec![b'['; MAX_DECODED_BYTES], Compression::Gzip);
    // Ungültiges JSON, aber innerhalb des Limits
    let err = try_decode_state(&token, &registry).expect_err("kein gueltiges JSON");
    assert!(matches!(err, DecodeError::Json(_)));
}
