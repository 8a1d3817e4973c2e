pub mod home;
pub mod not_found;
pub mod rules;
pub mod staff;
pub mod vote;

pub use home::Home;
pub use not_found::NotFound;
pub use rules::Rules;
pub use staff::Staff;
pub use vote::Vote;
