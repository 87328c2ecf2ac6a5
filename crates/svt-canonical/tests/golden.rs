use svt_canonical::{
    encoding, CanonicalizationError, Canonicalizer, Digest, HashAlgorithm, IssuerId, TokenId,
};
use serde_json::json;

#[test]
fn canonicalizer_produces_ordered_bytes() {
    let canonicalizer = Canonicalizer::new();
    let value = json!({"b": 1, "a": {"nested": 2}});
    let bytes = canonicalizer.canonicalize_value(&value).unwrap();
    assert_eq!(bytes, br#"{"a":{"nested":2},"b":1}"#.to_vec());
}

#[test]
fn canonicalizer_is_stable_across_member_order() {
    let canonicalizer = Canonicalizer::new();
    let first = json!({"iss": "x", "aud": ["a", "b"], "iat": 1700000000});
    let second: serde_json::Value =
        serde_json::from_str(r#"{ "iat" : 1700000000, "aud":["a","b"], "iss":"x" }"#).unwrap();

    assert_eq!(
        canonicalizer.canonicalize_value(&first).unwrap(),
        canonicalizer.canonicalize_value(&second).unwrap()
    );
    assert_eq!(
        canonicalizer.canonicalize_value(&first).unwrap(),
        br#"{"aud":["a","b"],"iat":1700000000,"iss":"x"}"#.to_vec()
    );
}

#[test]
fn canonicalizer_serializes_structs_through_serde() {
    #[derive(serde::Serialize)]
    struct Header {
        typ: &'static str,
        alg: &'static str,
    }

    let bytes = Canonicalizer::new()
        .canonicalize(&Header {
            typ: "JWT",
            alg: "RS256",
        })
        .unwrap();
    assert_eq!(bytes, br#"{"alg":"RS256","typ":"JWT"}"#.to_vec());
}

#[test]
fn canonicalizer_rejects_deep_nesting() {
    let canonicalizer = Canonicalizer::new().with_max_depth(2);
    let value = json!({"a": {"b": {"c": 1}}});
    let err = canonicalizer.canonicalize_value(&value).unwrap_err();
    assert!(matches!(err, CanonicalizationError::TooDeep { max: 2, .. }));
}

#[test]
fn hash_algorithm_serializes_to_digest_method_uri() {
    assert_eq!(
        serde_json::to_string(&HashAlgorithm::Sha384).unwrap(),
        r#""http://www.w3.org/2001/04/xmldsig-more#sha384""#
    );
    assert_eq!(
        HashAlgorithm::from_uri("http://www.w3.org/2001/04/xmlenc#sha512").unwrap(),
        HashAlgorithm::Sha512
    );
    assert!(HashAlgorithm::from_uri("http://www.w3.org/2000/09/xmldsig#sha1").is_err());
}

#[test]
fn digest_matches_known_sha256_vector() {
    let digest = HashAlgorithm::Sha256.digest(b"abc");
    assert_eq!(
        hex::encode(digest.as_bytes()),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        digest.to_base64(),
        "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0="
    );
    assert_eq!(
        digest.to_base64url(),
        "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0"
    );
}

#[test]
fn digest_parts_equals_digest_of_concatenation() {
    let joined = HashAlgorithm::Sha512.digest(b"leafroot");
    let parts = HashAlgorithm::Sha512.digest_parts(&[b"leaf", b"root"]);
    assert_eq!(joined, parts);
}

#[test]
fn digest_rejects_wrong_length() {
    assert!(Digest::new(HashAlgorithm::Sha256, vec![0u8; 31]).is_err());
    assert!(Digest::new(HashAlgorithm::Sha384, vec![0u8; 48]).is_ok());
}

#[test]
fn base64_flavours_differ_only_in_alphabet_and_padding() {
    let data = [0xfbu8, 0xff, 0xbf];
    assert_eq!(encoding::b64_encode(&data), "+/+/");
    assert_eq!(encoding::b64url_encode(&data), "-_-_");
    assert_eq!(encoding::b64url_decode("-_-_").unwrap(), data.to_vec());
    assert_eq!(encoding::b64_decode("+/+/").unwrap(), data.to_vec());
}

#[test]
fn token_id_keeps_leading_zeros() {
    let id = TokenId::from_bytes(&[0x00, 0x0f, 0xff, 0x10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1])
        .unwrap();
    assert_eq!(id.as_str(), "000fff10000000000000000000000001");
    assert_eq!(id.significant_bits(), 116);
}

#[test]
fn token_id_significant_bits_with_high_bit_set() {
    let id = TokenId::from_bytes(&[0x80; 16]).unwrap();
    assert_eq!(id.significant_bits(), 128);
}

#[test]
fn token_id_rejects_non_hex() {
    assert!(TokenId::parse("not-a-token-id").is_err());
    assert!(TokenId::parse("ABCDEF0123456789ABCDEF0123456789").is_err());
}

#[test]
fn issuer_id_rejects_whitespace_and_empty() {
    assert!(IssuerId::parse("https://example.com/svt-issuer").is_ok());
    assert!(IssuerId::parse("").is_err());
    assert!(IssuerId::parse("svt issuer").is_err());
}

#[test]
fn identifiers_are_validated_on_deserialize() {
    let id: TokenId = serde_json::from_str(r#""000fff10000000000000000000000001""#).unwrap();
    assert_eq!(id.as_str(), "000fff10000000000000000000000001");
    assert_eq!(
        serde_json::to_string(&id).unwrap(),
        r#""000fff10000000000000000000000001""#
    );

    assert!(serde_json::from_str::<TokenId>(r#""not-a-token-id""#).is_err());
    assert!(serde_json::from_str::<TokenId>(r#""ABCDEF0123456789ABCDEF0123456789""#).is_err());
    assert!(serde_json::from_str::<IssuerId>(r#""svt issuer""#).is_err());
    assert!(serde_json::from_str::<IssuerId>(r#""""#).is_err());
}
