//! Opaque identifiers: account addresses, function selectors, and role ids.
//!
//! All derived identifiers are BLAKE3 hashes wrapped in fixed-width
//! newtypes, hex-encoded for display and serialization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque account or collaborator identifier (32 bytes).
///
/// The engine never interprets an address; callers are authenticated
/// upstream and arrive as an already-established `Address`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; 32]);

impl Address {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Zero address — used as sentinel.
    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Hex-encode for display.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, IdParseError> {
        Ok(Self(bytes_from_hex::<32>(hex)?))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", &self.to_hex()[..12])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..12])
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Address::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// Identifier of a callable operation on a target collaborator (4 bytes).
///
/// Derived from the operation's human-readable signature, or read off the
/// leading bytes of a call payload.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Selector(pub [u8; 4]);

impl Selector {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Derive the selector from a canonical signature, e.g. `"setValue(uint256)"`.
    ///
    /// First 4 bytes of `blake3(signature)`. Deterministic: the same
    /// signature always yields the same selector.
    pub fn from_signature(signature: &str) -> Self {
        let hash = blake3::hash(signature.as_bytes());
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&hash.as_bytes()[..4]);
        Self(bytes)
    }

    /// Read the selector encoded in the leading 4 bytes of a call payload.
    pub fn from_payload(data: &[u8]) -> Option<Self> {
        if data.len() < 4 {
            return None;
        }
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&data[..4]);
        Some(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    pub fn from_hex(hex: &str) -> Result<Self, IdParseError> {
        Ok(Self(bytes_from_hex::<4>(hex)?))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({})", self.to_hex())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Selector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Selector::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// Opaque role identifier (32 bytes).
///
/// Structural roles are fixed hashes of well-known labels; derived roles
/// are computed from a (target, selector) pair and exist implicitly as
/// soon as any account is a member.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoleId(pub [u8; 32]);

impl RoleId {
    /// The un-assignable root administrator of the role hierarchy.
    ///
    /// No account ever holds it, which prevents any single actor from
    /// holding unconditional override power.
    pub const DEFAULT: RoleId = RoleId([0u8; 32]);

    /// Role held by the engine's admins.
    pub fn admin() -> Self {
        Self::of_label("ADMIN_ROLE")
    }

    /// Role whose holders may pause the engine.
    pub fn pause() -> Self {
        Self::of_label("PAUSE_ROLE")
    }

    /// Role held only by the engine over its own address; gates the
    /// self-call management path.
    pub fn own() -> Self {
        Self::of_label("SELF_ROLE")
    }

    fn of_label(label: &str) -> Self {
        Self(*blake3::hash(label.as_bytes()).as_bytes())
    }

    /// Derive the role governing one function of one target collaborator.
    ///
    /// `blake3(target ‖ selector)` — deterministic and collision-resistant,
    /// so distinct (target, selector) pairs yield distinct roles.
    pub fn of_function(target: &Address, selector: &Selector) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(target.as_bytes());
        hasher.update(selector.as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == [0u8; 32]
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    pub fn from_hex(hex: &str) -> Result<Self, IdParseError> {
        Ok(Self(bytes_from_hex::<32>(hex)?))
    }
}

impl fmt::Debug for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoleId({})", &self.to_hex()[..12])
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..12])
    }
}

impl Serialize for RoleId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RoleId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        RoleId::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid hex length: {0} (expected {1})")]
    InvalidLength(usize, usize),
    #[error("invalid hex character")]
    InvalidHex,
}

fn bytes_from_hex<const N: usize>(hex: &str) -> Result<[u8; N], IdParseError> {
    if hex.len() != N * 2 {
        return Err(IdParseError::InvalidLength(hex.len(), N * 2));
    }
    let mut bytes = [0u8; N];
    for i in 0..N {
        bytes[i] = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|_| IdParseError::InvalidHex)?;
    }
    Ok(bytes)
}
