pub mod reels;
