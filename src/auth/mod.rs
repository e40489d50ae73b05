pub mod ecdsa;
pub mod ed25519;
pub mod keygen;
pub mod verify;

pub use verify::{Authenticator, SignatureScheme};
