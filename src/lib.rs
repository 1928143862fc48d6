//! Profile widgets for the user portal: an avatar component that renders an
//! image, generated initials or a placeholder, and a "last modified" helper
//! that humanizes timestamps.

pub mod components;
pub mod errors;
pub mod libs;
pub mod state;
pub mod utils;

pub use components::last_modified::LastModified;
pub use components::ui::user_image::UserImage;
pub use errors::{ PortalError, PortalResult };
pub use libs::avatar::{ generate_initials, UserImageOptions, UserImageView };
pub use utils::time::{ humanize_date_difference, humanize_duration, Locale };
