mod builder;
mod minter;
mod types;

pub use builder::{EventBuilder, IntoEventValue};
pub use minter::{
    emit_owner_transferred, emit_project_max_invocations_limited, emit_purchase,
    emit_purchase_failed,
};

pub const STANDARD: &str = "genart";
pub const VERSION: &str = "1.0.0";
pub const PREFIX: &str = "EVENT_JSON:";

pub const MINTER_FILTER: &str = "MINTER_FILTER_UPDATE";
pub const MINTER_CONFIG: &str = "MINTER_CONFIG_UPDATE";
pub const SALE: &str = "SALE_UPDATE";
pub const BID: &str = "BID_UPDATE";
