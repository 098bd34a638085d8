//! ECDH key agreement

pub mod p256;

pub use p256::{
    derive_session_key, EcdhP256, EcdhP256PublicKey, EcdhP256SecretKey, EcdhP256SharedSecret,
};
