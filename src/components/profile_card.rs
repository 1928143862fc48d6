use crate::components::last_modified::LastModified;
use crate::components::ui::user_image::UserImage;
use crate::libs::avatar::UserImageOptions;
use crate::utils::time::Locale;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ProfileCardProps {
    pub avatar: UserImageOptions,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub last_modified: Option<String>,
    #[props(default)]
    pub locale: Locale,
}

/// Avatar, name and "last modified" line of a user profile
#[component]
pub fn ProfileCard(props: ProfileCardProps) -> Element {
    let avatar = props.avatar.clone();

    rsx! {
      div { class: "profile-card flex items-center gap-4 p-4 rounded-box bg-base-200",
        UserImage {
          avatar: avatar.avatar,
          bordered: avatar.bordered,
          class: avatar.class,
          floated: avatar.floated,
          image: avatar.image,
          inline: avatar.inline,
          name: avatar.name,
          relaxed: avatar.relaxed,
          size: avatar.size,
          spaced: avatar.spaced,
          style: avatar.style,
          transparent: avatar.transparent,
        }
        div { class: "flex-1",
          if let Some(name) = &props.display_name {
            div { class: "text-lg font-semibold text-base-content", "{name}" }
          }
          if let Some(email) = &props.email {
            div { class: "text-sm text-base-content/70", "{email}" }
          }
          if let Some(date) = &props.last_modified {
            LastModified { date: date.clone(), locale: props.locale }
          }
        }
      }
    }
}
