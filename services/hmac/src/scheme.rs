use apisign_core::hash;
use apisign_core::Error;
use std::fmt;
use std::str::FromStr;

/// Hash algorithm for the outer HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// HMAC-MD5.
    Md5,
    /// HMAC-SHA1.
    Sha1,
    /// HMAC-SHA256.
    Sha256,
    /// HMAC-SHA512.
    Sha512,
}

impl Algorithm {
    /// Canonical lowercase name of the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Compute the keyed HMAC of `content` under this algorithm.
    pub fn hmac(&self, key: &[u8], content: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Md5 => hash::hmac_md5(key, content),
            Algorithm::Sha1 => hash::hmac_sha1(key, content),
            Algorithm::Sha256 => hash::hmac_sha256(key, content),
            Algorithm::Sha512 => hash::hmac_sha512(key, content),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(Algorithm::Md5),
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha512" => Ok(Algorithm::Sha512),
            _ => Err(Error::config_invalid(format!(
                "invalid algorithm {s}: choices are md5, sha1, sha256, sha512"
            ))),
        }
    }
}

/// Textual representation for digest bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestEncoding {
    /// Lowercase hexadecimal.
    Hex,
    /// One code point per byte, Node's `latin1` rendering.
    Latin1,
    /// Standard base64 with padding.
    Base64,
}

impl DigestEncoding {
    /// Canonical lowercase name of the encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestEncoding::Hex => "hex",
            DigestEncoding::Latin1 => "latin1",
            DigestEncoding::Base64 => "base64",
        }
    }

    /// Render digest bytes with this encoding.
    pub fn encode(&self, content: &[u8]) -> String {
        match self {
            DigestEncoding::Hex => hex::encode(content),
            DigestEncoding::Latin1 => hash::latin1_encode(content),
            DigestEncoding::Base64 => hash::base64_encode(content),
        }
    }
}

impl fmt::Display for DigestEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(DigestEncoding::Hex),
            "latin1" => Ok(DigestEncoding::Latin1),
            "base64" => Ok(DigestEncoding::Base64),
            _ => Err(Error::encoding_invalid(format!(
                "invalid digest encoding {s}: choices are hex, latin1, base64"
            ))),
        }
    }
}
