mod feedback;
mod reel;
mod user;

pub use feedback::{Feedback, FeedbackChangeset};
pub use reel::{Reel, ReelChangeset};
pub use user::{User, UserChangeset};
