//! Transport and authentication kernel
//!
//! - `HttpTransport`: pluggable HTTP dispatch, `ReqwestTransport` by default
//! - `SignatureGenerator`: pluggable request signing, `HmacSignatureGenerator`
//!   (HMAC-SHA256 over the form-encoded body) by default
//!
//! ```rust,no_run
//! use a2reviews_client::core::kernel::*;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let signer = HmacSignatureGenerator::new("secret".to_string());
//! let signature = signer.generate_signature("timestamp=1700000000")?;
//! let transport = ReqwestTransport::new(TransportConfig::default().with_timeout(30))?;
//! # let _ = (signature, transport);
//! # Ok(())
//! # }
//! ```
pub mod rest;
pub mod signer;

pub use rest::{HttpTransport, ReqwestTransport, TransportConfig, TransportError};
pub use signer::{encode_body, HmacSignatureGenerator, SignatureGenerator};
