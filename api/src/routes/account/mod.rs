//! Account endpoints, all behind the rotation layer.
//!
//! Every request that lands here already carries an established session and
//! leaves with freshly rotated credentials, except deletion, which clears the
//! session cookie instead.

pub mod delete;
pub mod me;
