// @generated
// This file wires up buf-generated protobuf code
// Note: The prost files already include!() the tonic files automatically

pub mod user {
    include!("user.rs");
    // user.tonic.rs is auto-included by user.rs
}
