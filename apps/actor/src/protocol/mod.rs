//! Wire types for the request/response protocol.
//!
//! Requests arrive as `{ "type": ..., "snapshot": ... }` JSON text
//! messages; responses are the bare encoded decision value with no
//! outer envelope — its shape alone identifies it, matching the
//! request that prompted it.

mod action;
mod request;

pub use action::{
    BuyCardAction, BuyCardSource, DropTokensAction, PlayerAction, ReserveCardAction,
    SelectNobleAction, TakeTokensAction,
};
pub use request::{ActionRequest, RequestKind};
