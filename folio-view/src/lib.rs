pub mod content;
pub mod scroll;
pub mod section;
pub mod visibility;
