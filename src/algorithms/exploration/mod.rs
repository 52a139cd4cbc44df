mod wall_follower;

pub use wall_follower::{Hand, WallFollower};
