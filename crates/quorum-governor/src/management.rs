//! The self-call management codec.
//!
//! The engine's own management functions can only be reached through the
//! propose/approve ritual targeting the engine's own address. Each call is
//! encoded as the 4-byte selector of its canonical signature followed by a
//! JSON body of the arguments; everything else about call payloads stays
//! opaque to the engine.

use serde::{Deserialize, Serialize};

use quorum_types::{Address, GovernorError, Selector};

pub const SET_REQUIRED_VOTES_SIG: &str = "setRequiredVotesOfFunction(address,string,uint8)";
pub const GRANT_ADMIN_SIG: &str = "grantAdminRole(address)";
pub const REVOKE_ADMIN_SIG: &str = "revokeAdminRole(address)";
pub const GRANT_PAUSE_SIG: &str = "grantPauseRole(address)";
pub const REVOKE_PAUSE_SIG: &str = "revokePauseRole(address)";
pub const UNPAUSE_SIG: &str = "unpause()";
pub const GRANT_ROLE_OF_FUNCTION_SIG: &str = "grantRoleOfFunction(address,string,address)";
pub const REVOKE_ROLE_OF_FUNCTION_SIG: &str = "revokeRoleOfFunction(address,string,address)";

/// A decoded management call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManagementCall {
    SetRequiredVotesOfFunction {
        target: Address,
        signature: String,
        required_votes: u32,
    },
    GrantAdminRole { account: Address },
    RevokeAdminRole { account: Address },
    GrantPauseRole { account: Address },
    RevokePauseRole { account: Address },
    Unpause,
    GrantRoleOfFunction {
        target: Address,
        signature: String,
        account: Address,
    },
    RevokeRoleOfFunction {
        target: Address,
        signature: String,
        account: Address,
    },
}

#[derive(Serialize, Deserialize)]
struct AccountArgs {
    account: Address,
}

#[derive(Serialize, Deserialize)]
struct FunctionVotesArgs {
    target: Address,
    signature: String,
    required_votes: u32,
}

#[derive(Serialize, Deserialize)]
struct FunctionAccountArgs {
    target: Address,
    signature: String,
    account: Address,
}

impl ManagementCall {
    /// Canonical signature of this call.
    pub fn signature(&self) -> &'static str {
        match self {
            Self::SetRequiredVotesOfFunction { .. } => SET_REQUIRED_VOTES_SIG,
            Self::GrantAdminRole { .. } => GRANT_ADMIN_SIG,
            Self::RevokeAdminRole { .. } => REVOKE_ADMIN_SIG,
            Self::GrantPauseRole { .. } => GRANT_PAUSE_SIG,
            Self::RevokePauseRole { .. } => REVOKE_PAUSE_SIG,
            Self::Unpause => UNPAUSE_SIG,
            Self::GrantRoleOfFunction { .. } => GRANT_ROLE_OF_FUNCTION_SIG,
            Self::RevokeRoleOfFunction { .. } => REVOKE_ROLE_OF_FUNCTION_SIG,
        }
    }

    pub fn selector(&self) -> Selector {
        Selector::from_signature(self.signature())
    }

    /// Encode as selector + JSON argument body.
    pub fn encode(&self) -> Vec<u8> {
        let mut data = self.selector().as_bytes().to_vec();
        let body = match self {
            Self::SetRequiredVotesOfFunction {
                target,
                signature,
                required_votes,
            } => serde_json::to_vec(&FunctionVotesArgs {
                target: *target,
                signature: signature.clone(),
                required_votes: *required_votes,
            }),
            Self::GrantAdminRole { account }
            | Self::RevokeAdminRole { account }
            | Self::GrantPauseRole { account }
            | Self::RevokePauseRole { account } => {
                serde_json::to_vec(&AccountArgs { account: *account })
            }
            Self::Unpause => Ok(Vec::new()),
            Self::GrantRoleOfFunction {
                target,
                signature,
                account,
            }
            | Self::RevokeRoleOfFunction {
                target,
                signature,
                account,
            } => serde_json::to_vec(&FunctionAccountArgs {
                target: *target,
                signature: signature.clone(),
                account: *account,
            }),
        };
        // Serializing plain structs of addresses and strings cannot fail.
        data.extend_from_slice(&body.unwrap_or_default());
        data
    }

    /// Decode a payload addressed to the engine itself.
    ///
    /// Fails with `NotFound` for an unknown selector and
    /// `MalformedPayload` for a short or unparsable body.
    pub fn decode(data: &[u8]) -> Result<Self, GovernorError> {
        let selector = Selector::from_payload(data).ok_or(GovernorError::MalformedPayload)?;
        let body = &data[4..];

        if selector == Selector::from_signature(SET_REQUIRED_VOTES_SIG) {
            let args: FunctionVotesArgs =
                serde_json::from_slice(body).map_err(|_| GovernorError::MalformedPayload)?;
            Ok(Self::SetRequiredVotesOfFunction {
                target: args.target,
                signature: args.signature,
                required_votes: args.required_votes,
            })
        } else if selector == Selector::from_signature(GRANT_ADMIN_SIG) {
            let args: AccountArgs =
                serde_json::from_slice(body).map_err(|_| GovernorError::MalformedPayload)?;
            Ok(Self::GrantAdminRole {
                account: args.account,
            })
        } else if selector == Selector::from_signature(REVOKE_ADMIN_SIG) {
            let args: AccountArgs =
                serde_json::from_slice(body).map_err(|_| GovernorError::MalformedPayload)?;
            Ok(Self::RevokeAdminRole {
                account: args.account,
            })
        } else if selector == Selector::from_signature(GRANT_PAUSE_SIG) {
            let args: AccountArgs =
                serde_json::from_slice(body).map_err(|_| GovernorError::MalformedPayload)?;
            Ok(Self::GrantPauseRole {
                account: args.account,
            })
        } else if selector == Selector::from_signature(REVOKE_PAUSE_SIG) {
            let args: AccountArgs =
                serde_json::from_slice(body).map_err(|_| GovernorError::MalformedPayload)?;
            Ok(Self::RevokePauseRole {
                account: args.account,
            })
        } else if selector == Selector::from_signature(UNPAUSE_SIG) {
            Ok(Self::Unpause)
        } else if selector == Selector::from_signature(GRANT_ROLE_OF_FUNCTION_SIG) {
            let args: FunctionAccountArgs =
                serde_json::from_slice(body).map_err(|_| GovernorError::MalformedPayload)?;
            Ok(Self::GrantRoleOfFunction {
                target: args.target,
                signature: args.signature,
                account: args.account,
            })
        } else if selector == Selector::from_signature(REVOKE_ROLE_OF_FUNCTION_SIG) {
            let args: FunctionAccountArgs =
                serde_json::from_slice(body).map_err(|_| GovernorError::MalformedPayload)?;
            Ok(Self::RevokeRoleOfFunction {
                target: args.target,
                signature: args.signature,
                account: args.account,
            })
        } else {
            Err(GovernorError::NotFound)
        }
    }

    /// The management functions registered on the engine's own address at
    /// construction, with the threshold each one requires.
    ///
    /// All use the governor-wide admin quorum except `revokeRoleOfFunction`,
    /// which takes effect with a single approval.
    pub fn registered_functions(admin_quorum: u32) -> [(&'static str, u32); 8] {
        [
            (SET_REQUIRED_VOTES_SIG, admin_quorum),
            (GRANT_ADMIN_SIG, admin_quorum),
            (REVOKE_ADMIN_SIG, admin_quorum),
            (GRANT_PAUSE_SIG, admin_quorum),
            (REVOKE_PAUSE_SIG, admin_quorum),
            (UNPAUSE_SIG, admin_quorum),
            (GRANT_ROLE_OF_FUNCTION_SIG, admin_quorum),
            (REVOKE_ROLE_OF_FUNCTION_SIG, 1),
        ]
    }
}
