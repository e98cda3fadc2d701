pub mod error;
pub mod storage;

pub use error::{AuthError, Result};
pub use storage::{
    ACCESS_TOKEN_KEY, FileTokenStorage, KeyringTokenStorage, MemoryTokenStorage, TokenStorage,
    TokenStorageKind, TokenStore,
};
