mod feedback;
mod reel;
mod user;

pub use feedback::FeedbackView;
pub use reel::ReelView;
pub use user::UserView;
