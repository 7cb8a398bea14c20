//! Account repository interface and in-memory implementation.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;


pub use mock::MockAccountRepository;
pub use r#trait::AccountRepository;
