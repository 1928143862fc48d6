use crate::libs::avatar::{
    element_classes,
    style_attribute,
    Floated,
    Relaxed,
    Spaced,
    UserImageOptions,
    UserImageSize,
    UserImageView,
    USER_IMAGE_DUMMY,
};
use crate::utils::constants::AVATAR_ALT;
use dioxus::prelude::*;
use std::collections::BTreeMap;

#[derive(Props, Clone, PartialEq)]
pub struct UserImageProps {
    /// Render an avatar (initials or placeholder) when no image is given
    #[props(default = false)]
    pub avatar: bool,
    #[props(default = true)]
    pub bordered: bool,
    /// Extra CSS classes appended after the generated ones
    #[props(default)]
    pub class: String,
    pub floated: Option<Floated>,
    /// Image URL or data URI. Takes precedence over the avatar.
    pub image: Option<String>,
    #[props(default = false)]
    pub inline: bool,
    /// Display name used to build the initials
    pub name: Option<String>,
    #[props(default)]
    pub relaxed: Relaxed,
    #[props(default)]
    pub size: UserImageSize,
    pub spaced: Option<Spaced>,
    /// Inline style map
    #[props(default)]
    pub style: BTreeMap<String, String>,
    #[props(default = false)]
    pub transparent: bool,
}

impl UserImageProps {
    pub fn options(&self) -> UserImageOptions {
        UserImageOptions {
            avatar: self.avatar,
            bordered: self.bordered,
            class: self.class.clone(),
            floated: self.floated,
            image: self.image.clone(),
            inline: self.inline,
            name: self.name.clone(),
            relaxed: self.relaxed,
            size: self.size,
            spaced: self.spaced,
            style: self.style.clone(),
            transparent: self.transparent,
        }
    }
}

#[component]
pub fn UserImage(props: UserImageProps) -> Element {
    let options = props.options();
    let view = UserImageView::resolve(&options);
    let class = element_classes(&options, &view).to_string();
    let style = style_attribute(&options.style);
    let style = if style.is_empty() { None } else { Some(style) };

    match view {
        UserImageView::Image { src } =>
            rsx! {
              div { class: "{class}", style,
                img { alt: AVATAR_ALT, src: "{src}" }
              }
            },
        UserImageView::Initials(initials) =>
            rsx! {
              div { class: "{class}", style,
                span { class: "initials", "{initials}" }
              }
            },
        UserImageView::Placeholder => {
            let src = USER_IMAGE_DUMMY.as_str();
            rsx! {
              div { class: "{class}", style,
                img { alt: AVATAR_ALT, src: "{src}" }
              }
            }
        }
        UserImageView::Empty => rsx! {},
    }
}
