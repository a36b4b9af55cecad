//! User prompting behind a swappable interface
//!
//! - `interface`: the abstract prompt trait
//! - `dialoguer`: terminal implementation
//! - `automatic_impl`: non-interactive implementation

pub mod automatic_impl;
pub mod dialoguer;
pub mod interface;

pub use self::automatic_impl::AutomaticPrompter;
pub use self::dialoguer::DialoguerPrompter;
pub use self::interface::{TextPromptConfig, TextPrompter};
