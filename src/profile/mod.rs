//! User profile data structures and loading

mod data;
pub mod loader;

pub use data::{MaritalStatus, RiskTolerance, UserProfile};
pub use loader::{load_profile_json, load_profiles_csv, load_profiles_from_reader};
