//! Shared plumbing for the minter-suite contracts: the error taxonomy, the
//! explicit authorization context, event emission, the cross-contract
//! interfaces between Core, the filter and minters, and the per-project sale
//! bookkeeping every minter keeps.

mod auth;
mod error;
mod macros;
pub mod events;
pub mod external;
mod project;
pub mod sale;

pub use auth::{AuthContext, ONE_YOCTO, check_one_yocto, require_predecessor};
pub use error::{ErrorCategory, MinterError};
pub use external::ProjectInfo;
pub use project::{CURRENCY_SYMBOL, PriceInfo, ProjectSaleState, ProjectSaleView};

pub type ProjectId = u64;
