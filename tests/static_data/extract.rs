use livesale_rs::core::json as path;
use livesale_rs::sale::{extract_bidder_id, extract_jwt, extract_sale, extract_static_data};
use livesale_rs::{FetchError, LiveSale, parse_static_data};
use serde_json::json;

#[test]
fn json_lookup_tolerates_wrong_shapes() {
    let v = json!({ "data": { "me": "not-an-object", "list": [1, 2], "n": 3 } });

    assert_eq!(path::lookup(&v, &[]), Some(&v));
    assert!(path::lookup(&v, &["data", "me", "paddle_number"]).is_none());
    assert!(path::lookup(&v, &["data", "list", "0"]).is_none());
    assert!(path::string_at(&v, &["data", "n"]).is_none());
    assert!(path::object_at(&v, &["data", "list"]).is_none());
    assert_eq!(path::string_at(&v, &["data", "me"]), Some("not-an-object"));
    assert!(path::object_at(&json!(null), &["data"]).is_none());
}

#[test]
fn extracts_the_three_fields_from_a_full_payload() {
    let v = json!({
        "data": {
            "sale": { "id": "s1" },
            "causality_jwt": "abc",
            "me": { "paddle_number": "42" }
        }
    });

    let sale: LiveSale = extract_sale(&v).expect("sale");
    assert_eq!(sale.id, "s1");
    assert!(sale.name.is_none());
    assert!(sale.sale_artworks.is_empty());
    assert_eq!(extract_jwt(&v).as_deref(), Some("abc"));
    assert_eq!(extract_bidder_id(&v).as_deref(), Some("42"));

    let all = extract_static_data::<LiveSale>(&v).expect("all present");
    assert_eq!(all.sale.id, "s1");
    assert_eq!(all.jwt, "abc");
    assert_eq!(all.bidder_id, "42");
}

#[test]
fn wrong_types_read_as_absent() {
    let v = json!({
        "data": {
            "sale": ["s1"],
            "causality_jwt": 123,
            "me": { "paddle_number": 42 }
        }
    });

    assert!(extract_sale::<LiveSale>(&v).is_none());
    assert!(extract_jwt(&v).is_none());
    assert!(extract_bidder_id(&v).is_none());
}

#[test]
fn sale_that_fails_to_decode_reads_as_absent() {
    let missing_id = json!({ "data": { "sale": { "name": "No id" } } });
    let bad_date = json!({ "data": { "sale": { "id": "s1", "start_at": "tomorrow-ish" } } });

    assert!(extract_sale::<LiveSale>(&missing_id).is_none());
    assert!(extract_sale::<LiveSale>(&bad_date).is_none());
}

#[test]
fn missing_jwt_fails_the_whole_parse() {
    let body = r#"{"data":{"sale":{"id":"s1"},"me":{"paddle_number":"42"}}}"#;
    let err = parse_static_data::<LiveSale>(body).unwrap_err();
    assert!(matches!(err, FetchError::MalformedPayload));
}

#[test]
fn each_missing_field_collapses_to_the_same_error() {
    let bodies = [
        r#"{"data":{"causality_jwt":"abc","me":{"paddle_number":"42"}}}"#,
        r#"{"data":{"sale":{"id":"s1"},"me":{"paddle_number":"42"}}}"#,
        r#"{"data":{"sale":{"id":"s1"},"causality_jwt":"abc","me":null}}"#,
        r#"{"data":{"sale":{"id":"s1"},"causality_jwt":"abc","me":{}}}"#,
        r#"{"data":null}"#,
        r#"{}"#,
        "not json at all",
        "",
    ];

    for body in bodies {
        let err = parse_static_data::<LiveSale>(body).unwrap_err();
        assert!(err.is_malformed(), "expected malformed payload for {body:?}, got {err:?}");
        assert!(err.transport_cause().is_none());
    }
}

#[test]
fn custom_sale_types_decode_through_serde() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct SlimSale {
        id: String,
        #[serde(default)]
        currency: Option<String>,
    }

    let body = r#"{"data":{"sale":{"id":"s9","currency":"EUR","extra":true},"causality_jwt":"j","me":{"paddle_number":"7"}}}"#;
    let parsed = parse_static_data::<SlimSale>(body).unwrap();
    assert_eq!(
        parsed.sale,
        SlimSale {
            id: "s9".into(),
            currency: Some("EUR".into())
        }
    );
}
