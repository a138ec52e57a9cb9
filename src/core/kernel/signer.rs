use crate::core::errors::ClientError;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use serde_json::{Map, Value};
use sha2::Sha256;
use url::form_urlencoded;

type HmacSha256 = Hmac<Sha256>;

/// Signature generator trait for request authentication
///
/// The client hands the generator the canonical form-encoded request body
/// (see [`encode_body`]) and sends the result in the `X-A2reviews-Hmac`
/// header.
pub trait SignatureGenerator: Send + Sync {
    fn generate_signature(&self, payload: &str) -> Result<String, ClientError>;
}

/// HMAC-SHA256 signer keyed with the site API secret, hex encoded
pub struct HmacSignatureGenerator {
    secret: Secret<String>,
}

impl HmacSignatureGenerator {
    pub fn new(secret: String) -> Self {
        Self {
            secret: Secret::new(secret),
        }
    }
}

impl std::fmt::Debug for HmacSignatureGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSignatureGenerator")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl SignatureGenerator for HmacSignatureGenerator {
    fn generate_signature(&self, payload: &str) -> Result<String, ClientError> {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|e| ClientError::InvalidSignature(format!("Failed to create HMAC: {}", e)))?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

/// Form-encode a JSON object the way PHP's `http_build_query` does
///
/// Nested objects and arrays flatten to `outer[inner]=value` (arrays keyed by
/// index), booleans become `1`/`0` and `null` entries are dropped. Key order
/// is preserved.
pub fn encode_body(body: &Map<String, Value>) -> String {
    let mut pairs = Vec::new();
    for (key, value) in body {
        collect_pairs(key.clone(), value, &mut pairs);
    }

    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencode(k), urlencode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn collect_pairs(prefix: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((prefix, if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => {
            let text = match n.as_f64() {
                Some(float) if !n.is_i64() && !n.is_u64() => php_float(float),
                _ => n.to_string(),
            };
            pairs.push((prefix, text));
        }
        Value::String(s) => pairs.push((prefix, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect_pairs(format!("{}[{}]", prefix, index), item, pairs);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                collect_pairs(format!("{}[{}]", prefix, key), item, pairs);
            }
        }
    }
}

/// Format a float like PHP's `%.*G` with the default precision of 14:
/// 14 significant digits, trailing zeros dropped, exponent form (`1.0E+25`)
/// once the decimal exponent leaves `-5..14`.
fn php_float(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let sci = format!("{:.*e}", PHP_PRECISION - 1, value.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits = mantissa.replace('.', "");
    let digits = digits.trim_end_matches('0');
    let sign = if value < 0.0 { "-" } else { "" };
    // position of the decimal point relative to the first digit
    let decpt = exponent + 1;

    let body = if decpt < -3 || decpt > PHP_PRECISION as i32 {
        let (first, rest) = digits.split_at(1);
        format!(
            "{}.{}E{}{}",
            first,
            if rest.is_empty() { "0" } else { rest },
            if exponent < 0 { '-' } else { '+' },
            exponent.unsigned_abs()
        )
    } else if decpt <= 0 {
        format!("0.{}{}", "0".repeat(decpt.unsigned_abs() as usize), digits)
    } else {
        let decpt = decpt as usize;
        if digits.len() <= decpt {
            format!("{}{}", digits, "0".repeat(decpt - digits.len()))
        } else {
            format!("{}.{}", &digits[..decpt], &digits[decpt..])
        }
    };

    format!("{}{}", sign, body)
}

const PHP_PRECISION: usize = 14;

// RFC 1738 style: `form_urlencoded` leaves `*` literal, PHP does not.
fn urlencode(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes())
        .collect::<String>()
        .replace('*', "%2A")
}
