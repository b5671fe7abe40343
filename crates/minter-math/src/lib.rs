//! Pricing, bid-queue and Merkle primitives for the generative-art minter suite.
//! No NEAR SDK dependency, so usable on-chain and off-chain.

pub mod bids;
pub mod merkle;
mod pricing;

pub use bids::{BidHeap, BidQueue, BidSlots, BidSlotsMut, FlatBidList, Offer, RankedBid};
pub use merkle::{Hash32, process_proof, verify_proof};
pub use pricing::{DurationRange, ExponentialDecay, LinearDecay, PricingError};
