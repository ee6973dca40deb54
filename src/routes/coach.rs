pub mod feedback;
pub mod reels;
