mod credentials;

pub use credentials::Clock;
pub use credentials::CredentialCache;
pub use credentials::CredentialExchanger;
pub use credentials::EXPIRY_MARGIN_SECS;
