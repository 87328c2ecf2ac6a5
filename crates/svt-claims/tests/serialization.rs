use serde_json::json;
use svt_canonical::{Canonicalizer, HashAlgorithm, IssuerId, TokenId};
use svt_claims::{
    CertRef, CertRefType, CertReferenceClaims, PolicyValidationClaims, SigReferenceClaims,
    SignatureClaims, SignedDataClaims, SvtClaims, SvtProfile, TimeValidationClaims, TokenClaimSet,
    ValidationConclusion,
};

const CERT_HASH: &str =
    "NSuFM/vJ+beBlQtQTzmcYh5x7L8WC9E1KPHRA1ioNOlKVGbla9URzYcsisAx2bcsqOhkvVTc3mK9E6ag07hfaw==";

fn make_signature_claims(cert_ref: CertRef) -> SignatureClaims {
    SignatureClaims {
        sig_ref: SigReferenceClaims {
            id: None,
            sig_hash: "c2lnLWhhc2g=".to_string(),
            sb_hash: "c2ItaGFzaA==".to_string(),
        },
        sig_data_ref: vec![SignedDataClaims {
            reference: "0 74697 79699 37908".to_string(),
            hash: "c2QtaGFzaA==".to_string(),
        }],
        signer_cert_ref: cert_ref,
        sig_val: vec![PolicyValidationClaims::new(
            "http://id.swedenconnect.se/svt/sigval-policy/chain/01",
            ValidationConclusion::Passed,
        )
        .with_message("Passed basic validation")],
        time_val: vec![],
        ext: None,
    }
}

fn make_cert_ref() -> CertReferenceClaims {
    CertReferenceClaims {
        ref_type: CertRefType::ChainHash,
        refs: vec![CERT_HASH.to_string()],
    }
}

#[test]
fn signature_claims_match_expected_shape() {
    let claims = make_signature_claims(CertRef::Present(make_cert_ref()));
    let expected = json!({
        "sig_ref": { "sig_hash": "c2lnLWhhc2g=", "sb_hash": "c2ItaGFzaA==" },
        "sig_data_ref": [{ "ref": "0 74697 79699 37908", "hash": "c2QtaGFzaA==" }],
        "signer_cert_ref": { "type": "chain_hash", "ref": [CERT_HASH] },
        "sig_val": [{
            "pol": "http://id.swedenconnect.se/svt/sigval-policy/chain/01",
            "res": "PASSED",
            "msg": "Passed basic validation"
        }],
        "time_val": []
    });

    assert_eq!(serde_json::to_value(&claims).unwrap(), expected);
}

#[test]
fn absent_cert_ref_is_not_serialized() {
    for state in [
        CertRef::Disabled,
        CertRef::Unavailable {
            reason: "chain not found".to_string(),
        },
    ] {
        let value = serde_json::to_value(make_signature_claims(state)).unwrap();
        assert!(value.get("signer_cert_ref").is_none());
    }
}

#[test]
fn missing_or_null_cert_ref_deserializes_as_disabled() {
    let mut value = serde_json::to_value(make_signature_claims(CertRef::Disabled)).unwrap();
    let parsed: SignatureClaims = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(parsed.signer_cert_ref, CertRef::Disabled);

    value["signer_cert_ref"] = serde_json::Value::Null;
    let parsed: SignatureClaims = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.signer_cert_ref, CertRef::Disabled);
}

#[test]
fn conclusions_use_upper_case_names() {
    assert_eq!(
        serde_json::to_string(&ValidationConclusion::Indeterminate).unwrap(),
        r#""INDETERMINATE""#
    );
    assert_eq!(
        serde_json::from_str::<ValidationConclusion>(r#""FAILED""#).unwrap(),
        ValidationConclusion::Failed
    );
}

#[test]
fn chain_reference_encodes_each_certificate() {
    let chain = vec![b"leaf".to_vec(), b"root".to_vec()];
    let reference = CertReferenceClaims::chain(&chain);
    assert_eq!(reference.ref_type, CertRefType::Chain);
    assert_eq!(reference.refs, vec!["bGVhZg==", "cm9vdA=="]);
}

#[test]
fn chain_hash_reference_hashes_concatenated_chain() {
    let chain = vec![b"leaf".to_vec(), b"root".to_vec()];
    let reference = CertReferenceClaims::chain_hash(&chain, HashAlgorithm::Sha256);
    assert_eq!(reference.ref_type, CertRefType::ChainHash);
    assert_eq!(
        reference.refs,
        vec![HashAlgorithm::Sha256.digest(b"leafroot").to_base64()]
    );
}

#[test]
fn time_validation_claims_rename_type() {
    let time_val = TimeValidationClaims {
        time: 1_700_000_000,
        time_type: "http://id.swedenconnect.se/svt/timeval-type/time-stamp/01".to_string(),
        iss: "CN=Time Stamp Authority".to_string(),
        id: Some("1234".to_string()),
        hash: None,
        val: vec![],
        ext: None,
    };
    let value = serde_json::to_value(&time_val).unwrap();
    assert_eq!(
        value,
        json!({
            "time": 1_700_000_000,
            "type": "http://id.swedenconnect.se/svt/timeval-type/time-stamp/01",
            "iss": "CN=Time Stamp Authority",
            "id": "1234"
        })
    );
}

fn make_token_claims(exp: Option<i64>) -> TokenClaimSet {
    TokenClaimSet {
        jti: TokenId::parse("8f3a9c0d1e2f30415263748596a7b8c9").unwrap(),
        iss: IssuerId::parse("https://example.com/svt-issuer").unwrap(),
        sub: None,
        aud: vec!["http://example.com/audience1".to_string()],
        iat: 1_700_000_000,
        exp,
        sig_val_claims: SvtClaims::new(
            SvtProfile::Xml,
            HashAlgorithm::Sha256,
            vec![make_signature_claims(CertRef::Present(make_cert_ref()))],
        ),
    }
}

#[test]
fn token_claims_canonical_bytes_are_golden() {
    let claims = make_token_claims(Some(1_731_708_800));
    let bytes = Canonicalizer::new().canonicalize(&claims).unwrap();
    let expected = concat!(
        r#"{"aud":["http://example.com/audience1"],"exp":1731708800,"iat":1700000000,"#,
        r#""iss":"https://example.com/svt-issuer","jti":"8f3a9c0d1e2f30415263748596a7b8c9","#,
        r#""sig_val_claims":{"hash_algo":"http://www.w3.org/2001/04/xmlenc#sha256","profile":"XML","#,
        r#""sig":[{"sig_data_ref":[{"hash":"c2QtaGFzaA==","ref":"0 74697 79699 37908"}],"#,
        r#""sig_ref":{"sb_hash":"c2ItaGFzaA==","sig_hash":"c2lnLWhhc2g="},"#,
        r#""sig_val":[{"msg":"Passed basic validation","pol":"http://id.swedenconnect.se/svt/sigval-policy/chain/01","res":"PASSED"}],"#,
        r#""signer_cert_ref":{"ref":["NSuFM/vJ+beBlQtQTzmcYh5x7L8WC9E1KPHRA1ioNOlKVGbla9URzYcsisAx2bcsqOhkvVTc3mK9E6ag07hfaw=="],"type":"chain_hash"},"#,
        r#""time_val":[]}],"ver":"1.0"}}"#
    );
    assert_eq!(String::from_utf8(bytes).unwrap(), expected);
}

#[test]
fn token_without_period_has_no_exp_claim() {
    let claims = make_token_claims(None);
    let value = serde_json::to_value(&claims).unwrap();
    assert!(value.get("exp").is_none());
    assert!(!claims.is_expired_at(i64::MAX));
}

#[test]
fn token_claims_round_trip_through_canonical_bytes() {
    let claims = make_token_claims(Some(1_731_708_800));
    let canonicalizer = Canonicalizer::new();
    let bytes = canonicalizer.canonicalize(&claims).unwrap();
    let parsed: TokenClaimSet = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, claims);
    assert_eq!(canonicalizer.canonicalize(&parsed).unwrap(), bytes);
    assert_eq!(parsed.signature_count(), 1);
    assert!(parsed.is_expired_at(1_731_708_800));
    assert!(!parsed.is_expired_at(1_731_708_799));
}

#[test]
fn profile_parses_case_insensitively() {
    assert_eq!("pdf".parse::<SvtProfile>().unwrap(), SvtProfile::Pdf);
    assert_eq!(SvtProfile::Xml.as_str(), "XML");
    assert!("docx".parse::<SvtProfile>().is_err());
}
