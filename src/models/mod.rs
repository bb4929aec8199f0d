//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Pet`], [`PetParts`] and the part enums - Avatar composition
//! - [`WalletState`], [`WalletDescriptor`], [`KnownWallet`] - Wallet connection state
//! - [`Toast`], [`ToastKind`] - Transient notifications

mod notification;
mod pet;
mod wallet;

pub use notification::{Toast, ToastKind};
pub use pet::{
    BodyColor, DEFAULT_PET, EarStyle, FaceExpression, PartOption, Pet, PetId, PetParts,
};
pub use wallet::{
    DeviceContext, KnownWallet, RawWalletDescriptor, WalletDescriptor, WalletReadyState,
    WalletState,
};
