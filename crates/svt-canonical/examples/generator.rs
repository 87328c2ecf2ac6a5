use serde_json::json;
use svt_canonical::Canonicalizer;

fn main() {
    let canonicalizer = Canonicalizer::new();
    let claims = json!({
        "iss": "https://example.com/svt-issuer",
        "aud": ["http://example.com/audience1"],
        "iat": 1700000000,
        "sig_val_claims": {
            "ver": "1.0",
            "profile": "XML",
            "hash_algo": "http://www.w3.org/2001/04/xmlenc#sha256",
            "sig": []
        }
    });

    match canonicalizer.canonicalize_value(&claims) {
        Ok(bytes) => {
            println!("{}", String::from_utf8_lossy(&bytes));
        }
        Err(err) => {
            eprintln!("canonicalization failed: {}", err);
            std::process::exit(1);
        }
    }
}
