use near_sdk::AccountId;
use near_sdk::json_types::U128;
use near_sdk_macros::NearSchema;

use minter_math::PricingError;

use crate::ProjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authorization,
    Configuration,
    State,
    ExternalCall,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authorization => write!(f, "AuthorizationError"),
            Self::Configuration => write!(f, "ConfigurationError"),
            Self::State => write!(f, "StateError"),
            Self::ExternalCall => write!(f, "ExternalCallError"),
        }
    }
}

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum MinterError {
    Unauthorized(String),
    NotApproved(AccountId),
    NotAssigned(ProjectId),
    InvalidProof(ProjectId),

    NoSuchProject(ProjectId),
    NotConfigured(ProjectId),
    InvalidInput(String),
    OutOfRange(String),
    PriceNotDecaying,
    AuctionStartInPast,

    AlreadyApproved(AccountId),
    OnlyUnused(AccountId),
    DuplicateProject(ProjectId),
    AuctionAlreadyStarted(ProjectId),
    AuctionNotStarted(ProjectId),
    AuctionEnded(ProjectId),
    AuctionNotEnded(ProjectId),
    MaxInvocationsReached(ProjectId),
    AddressLimitReached(ProjectId),
    InsufficientBidValue { minimum: U128 },
    InsufficientDeposit { required: U128, attached: U128 },
    InvalidState(String),

    MintFailed(ProjectId),
    RefundFailed(AccountId),
}

impl MinterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Unauthorized(_)
            | Self::NotApproved(_)
            | Self::NotAssigned(_)
            | Self::InvalidProof(_) => ErrorCategory::Authorization,
            Self::NoSuchProject(_)
            | Self::NotConfigured(_)
            | Self::InvalidInput(_)
            | Self::OutOfRange(_)
            | Self::PriceNotDecaying
            | Self::AuctionStartInPast => ErrorCategory::Configuration,
            Self::MintFailed(_) | Self::RefundFailed(_) => ErrorCategory::ExternalCall,
            _ => ErrorCategory::State,
        }
    }

    pub fn only(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }

    /// Maps a price-engine failure onto the project it was raised for.
    pub fn from_pricing(project_id: ProjectId, err: PricingError) -> Self {
        match err {
            PricingError::NotStarted => Self::AuctionNotStarted(project_id),
            PricingError::StartInPast => Self::AuctionStartInPast,
            PricingError::PriceNotDecaying => Self::PriceNotDecaying,
            PricingError::InvalidRange { .. } | PricingError::PeriodOutOfRange { .. } => {
                Self::OutOfRange(err.to_string())
            }
        }
    }
}

impl std::fmt::Display for MinterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", self.category())?;
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NotApproved(minter) => write!(f, "Minter {} is not approved", minter),
            Self::NotAssigned(id) => write!(f, "No minter assigned to project {}", id),
            Self::InvalidProof(id) => write!(f, "Invalid Merkle proof for project {}", id),
            Self::NoSuchProject(id) => write!(f, "Project {} does not exist", id),
            Self::NotConfigured(id) => write!(f, "Sale not configured for project {}", id),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::OutOfRange(msg) => write!(f, "Out of range: {}", msg),
            Self::PriceNotDecaying => write!(f, "Auction start price must exceed base price"),
            Self::AuctionStartInPast => write!(f, "Auction start must be in the future"),
            Self::AlreadyApproved(minter) => write!(f, "Minter {} is already approved", minter),
            Self::OnlyUnused(minter) => {
                write!(f, "Minter {} is still assigned to projects", minter)
            }
            Self::DuplicateProject(id) => write!(f, "Project {} listed more than once", id),
            Self::AuctionAlreadyStarted(id) => {
                write!(f, "Auction for project {} has already started", id)
            }
            Self::AuctionNotStarted(id) => {
                write!(f, "Auction for project {} has not started", id)
            }
            Self::AuctionEnded(id) => write!(f, "Auction for project {} has ended", id),
            Self::AuctionNotEnded(id) => write!(f, "Auction for project {} has not ended", id),
            Self::MaxInvocationsReached(id) => {
                write!(f, "Maximum invocations reached for project {}", id)
            }
            Self::AddressLimitReached(id) => {
                write!(f, "Address has reached its mint limit for project {}", id)
            }
            Self::InsufficientBidValue { minimum } => {
                write!(f, "Bid must be at least {}", minimum.0)
            }
            Self::InsufficientDeposit { required, attached } => write!(
                f,
                "Attached deposit {} is less than required {}",
                attached.0, required.0
            ),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::MintFailed(id) => write!(f, "Mint failed for project {}", id),
            Self::RefundFailed(account) => write!(f, "Refund to {} failed", account),
        }
    }
}
