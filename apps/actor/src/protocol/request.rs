//! Inbound decision requests.

use serde::{Deserialize, Serialize};

use crate::domain::GameSnapshot;

/// The request kinds the server may send. The tag set is closed: an
/// unrecognized tag fails decoding, which ends the session with a
/// protocol error instead of a silent non-answer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    GetAction,
    DropTokens,
    SelectNoble,
}

/// One decision request: a kind tag plus a fresh snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionRequest {
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub snapshot: GameSnapshot,
}
