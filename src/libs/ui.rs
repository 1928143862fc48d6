use crate::components::profile_card::ProfileCard;
use crate::components::ui::user_image::UserImage;
use crate::libs::avatar::UserImageSize;
use crate::utils::config::use_fresh_config;
use crate::utils::constants::APP_NAME;
use crate::debug_print;
use dioxus::prelude::*;

/// Minimal Semantic-UI-like rules for the avatar classes
const USER_IMAGE_CSS: &str = r#"
.ui.image { position: relative; display: inline-block; vertical-align: middle; max-width: 100%; }
.ui.image img { display: block; width: 100%; height: 100%; }
.ui.circular.image, .ui.circular.image img { border-radius: 500rem; overflow: hidden; }
.ui.bordered.image { border: 1px solid rgba(0, 0, 0, 0.1); }
.ui.left.floated.image { float: left; margin-right: 1em; }
.ui.right.floated.image { float: right; margin-left: 1em; }
.ui.centered.image { display: block; margin-left: auto; margin-right: auto; }
.user-image.user-avatar { display: flex; align-items: center; justify-content: center; background: #e0e1e2; }
.user-image .initials { font-weight: 600; color: #333; }
.user-image.inline { display: inline-flex; }
.user-image.transparent { background: transparent; }
.user-image.spaced-left { margin-left: 0.5em; }
.user-image.spaced-right { margin-right: 0.5em; }
.user-image.relaxed { margin: 0.5em; }
.user-image.relaxed.very { margin: 1em; }
.user-image.mini { width: 35px; height: 35px; font-size: 0.8em; }
.user-image.little { width: 50px; height: 50px; font-size: 1em; }
.user-image.tiny { width: 80px; height: 80px; font-size: 1.5em; }
.user-image.small { width: 150px; height: 150px; font-size: 2.5em; }
.user-image.medium { width: 300px; height: 300px; font-size: 4em; }
.user-image.large { width: 450px; height: 450px; font-size: 6em; }
.user-image.big { width: 600px; height: 600px; font-size: 8em; }
.user-image.huge { width: 800px; height: 800px; font-size: 10em; }
.user-image.massive { width: 960px; height: 960px; font-size: 12em; }
"#;

/// Sizes shown in the gallery; the larger ones do not fit the window
const GALLERY_SIZES: [UserImageSize; 4] = [
    UserImageSize::Mini,
    UserImageSize::Little,
    UserImageSize::Tiny,
    UserImageSize::Small,
];

pub fn app() -> Element {
    let config = use_fresh_config();
    let config_value = config();
    let avatar = config_value.avatar_options();
    let profile = config_value.profile.clone();
    let name = avatar.name.clone();

    use_effect(move || {
        debug_print!("🖼️ {} window rendered", APP_NAME);
    });

    rsx! {
      style { {USER_IMAGE_CSS} }
      div { class: "p-8 space-y-6",
        h1 { class: "text-2xl font-bold", "{APP_NAME}" }
        ProfileCard {
          avatar,
          display_name: profile.display_name,
          email: profile.email,
          last_modified: profile.last_modified,
          locale: config_value.locale,
        }
        div { class: "flex items-end gap-4",
          for size in GALLERY_SIZES {
            UserImage {
              key: "{size}",
              avatar: true,
              name: name.clone(),
              size,
              inline: true,
            }
          }
          UserImage { avatar: true, size: UserImageSize::Little, inline: true }
        }
      }
    }
}
