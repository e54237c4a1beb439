pub mod discover;
pub mod filter;
pub mod scrub;

pub use discover::{is_scene_archive, scene_archives, SCENE_SUFFIX};
pub use filter::{strip_color_manager, StripOutcome};
pub use scrub::{scrub_file, ScrubReport};
