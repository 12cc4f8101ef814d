//! Wire protocol definitions for the Axon backend services.
//!
//! This crate provides the protocol buffer message types and unary client
//! stubs for communication between the gateway and the game backend. The
//! bindings are committed and hand-maintained so the build does not depend
//! on a protoc toolchain; they follow the tonic-prost output shape.

pub mod economy {
    pub mod v1;
}

pub mod interface {
    pub mod v1;
}
