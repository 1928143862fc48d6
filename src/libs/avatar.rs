//! Display options, render branch selection and class composition for user avatars.
//!
//! Everything here is a pure function of [`UserImageOptions`]; the Dioxus
//! component in `components::ui::user_image` only turns the result into markup.

use base64::{ engine::general_purpose::STANDARD, Engine as _ };
use once_cell::sync::Lazy;
use serde::{ de, Deserialize, Deserializer, Serialize };
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum::{ AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator };

use crate::errors::{ PortalError, PortalResult };

/// Circular silhouette shown when an avatar is requested without a name
const USER_IMAGE_DUMMY_SVG: &str =
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" fill="#e0e1e2"/><circle cx="32" cy="24" r="12" fill="#a0a4a8"/><path d="M10 58c2-12 11-19 22-19s20 7 22 19z" fill="#a0a4a8"/></svg>"##;

/// Placeholder image as a `data:` URI
pub static USER_IMAGE_DUMMY: Lazy<String> = Lazy::new(|| {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(USER_IMAGE_DUMMY_SVG))
});

/// Avatar sizes. Everything but `Little` mirrors the Semantic UI scale.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserImageSize {
    #[default]
    Mini,
    Tiny,
    Small,
    Medium,
    Large,
    Big,
    Huge,
    Massive,
    /// Custom size between mini and tiny
    Little,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Floated {
    Left,
    Right,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Spaced {
    Left,
    Right,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Relaxed {
    #[default]
    No,
    Relaxed,
    Very,
}

fn parse_token<T: FromStr>(kind: &'static str, value: &str) -> PortalResult<T> {
    T::from_str(value.trim()).map_err(|_| PortalError::UnknownToken {
        kind,
        value: value.to_string(),
    })
}

impl UserImageSize {
    pub fn parse(value: &str) -> PortalResult<Self> {
        parse_token("size", value)
    }

    /// Get all available sizes
    pub fn all() -> Vec<UserImageSize> {
        UserImageSize::iter().collect()
    }
}

impl Floated {
    pub fn parse(value: &str) -> PortalResult<Self> {
        parse_token("floated", value)
    }
}

impl Spaced {
    pub fn parse(value: &str) -> PortalResult<Self> {
        parse_token("spaced", value)
    }
}

impl Relaxed {
    pub fn parse(value: &str) -> PortalResult<Self> {
        parse_token("relaxed", value)
    }
}

/// `relaxed` is written either as a flag or as a level name
#[derive(Deserialize)]
#[serde(untagged)]
enum RelaxedRepr {
    Flag(bool),
    Level(String),
}

impl<'de> Deserialize<'de> for Relaxed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        match RelaxedRepr::deserialize(deserializer)? {
            RelaxedRepr::Flag(true) => Ok(Relaxed::Relaxed),
            RelaxedRepr::Flag(false) => Ok(Relaxed::No),
            RelaxedRepr::Level(level) => Relaxed::parse(&level).map_err(de::Error::custom),
        }
    }
}

/// Display options for a user avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserImageOptions {
    pub avatar: bool,
    pub bordered: bool,
    pub class: String,
    pub floated: Option<Floated>,
    pub image: Option<String>,
    pub inline: bool,
    pub name: Option<String>,
    pub relaxed: Relaxed,
    pub size: UserImageSize,
    pub spaced: Option<Spaced>,
    pub style: BTreeMap<String, String>,
    pub transparent: bool,
}

impl Default for UserImageOptions {
    fn default() -> Self {
        Self {
            avatar: false,
            bordered: true,
            class: String::new(),
            floated: None,
            image: None,
            inline: false,
            name: None,
            relaxed: Relaxed::No,
            size: UserImageSize::Mini,
            spaced: None,
            style: BTreeMap::new(),
            transparent: false,
        }
    }
}

/// Which of the mutually exclusive outputs an avatar renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserImageView {
    Image {
        src: String,
    },
    Initials(String),
    Placeholder,
    Empty,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl UserImageView {
    /// Image beats avatar; an avatar shows initials when named, the placeholder otherwise.
    pub fn resolve(options: &UserImageOptions) -> Self {
        if let Some(src) = non_blank(options.image.as_deref()) {
            return UserImageView::Image { src: src.to_string() };
        }
        if !options.avatar {
            return UserImageView::Empty;
        }
        match non_blank(options.name.as_deref()) {
            Some(name) => UserImageView::Initials(generate_initials(Some(name))),
            None => UserImageView::Placeholder,
        }
    }

    /// Badge and placeholder are centered and middle aligned, plain images are not
    pub fn is_badge(&self) -> bool {
        matches!(self, UserImageView::Initials(_) | UserImageView::Placeholder)
    }
}

/// Generates avatar initials from a display name.
///
/// Two or more words give a two letter initial from the first two words,
/// i.e. "Brion Silva" gives "BS". A single word gives one letter, i.e.
/// "Brion" gives "B". A missing or blank name gives an empty string.
pub fn generate_initials(name: Option<&str>) -> String {
    let Some(name) = name else {
        return String::new();
    };
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Ordered, de-duplicated set of CSS class tokens
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates `(condition, classes)` pairs in order
    pub fn from_pairs<I, S>(pairs: I) -> Self where I: IntoIterator<Item = (bool, S)>, S: AsRef<str> {
        let mut list = Self::new();
        for (condition, classes) in pairs {
            list.push_if(condition, classes.as_ref());
        }
        list
    }

    /// Adds every whitespace separated token of `classes` when `condition` holds
    pub fn push_if(&mut self, condition: bool, classes: &str) -> &mut Self {
        if condition {
            for token in classes.split_whitespace() {
                if !self.contains(token) {
                    self.0.push(token.to_string());
                }
            }
        }
        self
    }

    pub fn extend(&mut self, other: &ClassList) -> &mut Self {
        for token in &other.0 {
            self.push_if(true, token);
        }
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Modifier classes derived from the flags, in a fixed order
pub fn user_image_classes(options: &UserImageOptions) -> ClassList {
    let floated = options.floated.map(|f| format!("floated-{}", f)).unwrap_or_default();
    let spaced = options.spaced.map(|s| format!("spaced-{}", s)).unwrap_or_default();

    ClassList::from_pairs([
        (options.bordered, "bordered".to_string()),
        (options.floated.is_some(), floated),
        (options.inline, "inline".to_string()),
        (options.relaxed != Relaxed::No, "relaxed".to_string()),
        // Size is used as a class to support the custom size "little"
        (true, options.size.to_string()),
        (options.spaced.is_some(), spaced),
        (options.transparent, "transparent".to_string()),
        (options.avatar, "user-avatar".to_string()),
        (options.relaxed == Relaxed::Very, "very".to_string()),
        (!options.class.trim().is_empty(), options.class.clone()),
    ])
}

/// Full class attribute: Semantic UI image modifiers, then `user-image`, then [`user_image_classes`]
pub fn element_classes(options: &UserImageOptions, view: &UserImageView) -> ClassList {
    let floated = options.floated.map(|f| format!("{} floated", f)).unwrap_or_default();

    let mut classes = ClassList::from_pairs([
        (true, "ui circular".to_string()),
        (options.bordered, "bordered".to_string()),
        (options.floated.is_some(), floated),
        (view.is_badge(), "middle aligned centered".to_string()),
        (true, "image user-image".to_string()),
    ]);
    classes.extend(&user_image_classes(options));
    classes
}

/// Renders the style map as an inline `style` attribute, keys in sorted order
pub fn style_attribute(style: &BTreeMap<String, String>) -> String {
    style
        .iter()
        .filter(|(key, value)| !key.trim().is_empty() && !value.trim().is_empty())
        .map(|(key, value)| format!("{}: {};", key.trim(), value.trim()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn named_avatar(name: &str) -> UserImageOptions {
        UserImageOptions {
            avatar: true,
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn initials_from_two_words() {
        assert_eq!(generate_initials(Some("Brion Silva")), "BS");
        assert_eq!(generate_initials(Some("ada lovelace byron")), "AL");
    }

    #[test]
    fn initials_from_one_word() {
        assert_eq!(generate_initials(Some("Brion")), "B");
        assert_eq!(generate_initials(Some("  brion  ")), "B");
    }

    #[test]
    fn initials_guard_missing_or_blank_names() {
        assert_eq!(generate_initials(None), "");
        assert_eq!(generate_initials(Some("")), "");
        assert_eq!(generate_initials(Some("   ")), "");
    }

    #[test]
    fn initials_handle_non_ascii() {
        assert_eq!(generate_initials(Some("émile zola")), "ÉZ");
        assert_eq!(generate_initials(Some("ßen")), "SS");
    }

    #[test]
    fn image_wins_over_avatar_and_name() {
        let options = UserImageOptions {
            image: Some("https://example.com/me.png".to_string()),
            ..named_avatar("Brion Silva")
        };
        assert_eq!(UserImageView::resolve(&options), UserImageView::Image {
            src: "https://example.com/me.png".to_string(),
        });
    }

    #[test]
    fn image_wins_without_avatar_flag() {
        let options = UserImageOptions {
            avatar: false,
            image: Some("me.png".to_string()),
            ..Default::default()
        };
        assert_eq!(UserImageView::resolve(&options), UserImageView::Image { src: "me.png".to_string() });

        let named = UserImageOptions {
            name: Some("Brion Silva".to_string()),
            ..options
        };
        assert_eq!(UserImageView::resolve(&named), UserImageView::Image { src: "me.png".to_string() });
    }

    #[test]
    fn named_avatar_shows_initials() {
        assert_eq!(
            UserImageView::resolve(&named_avatar("Brion Silva")),
            UserImageView::Initials("BS".to_string())
        );
    }

    #[test]
    fn unnamed_avatar_falls_back_to_placeholder() {
        let options = UserImageOptions { avatar: true, ..Default::default() };
        assert_eq!(UserImageView::resolve(&options), UserImageView::Placeholder);
        assert_eq!(UserImageView::resolve(&named_avatar("  ")), UserImageView::Placeholder);
    }

    #[test]
    fn blank_image_is_ignored() {
        let options = UserImageOptions {
            image: Some(" ".to_string()),
            ..named_avatar("Brion")
        };
        assert_eq!(UserImageView::resolve(&options), UserImageView::Initials("B".to_string()));
    }

    #[test]
    fn nothing_without_image_or_avatar() {
        let options = UserImageOptions {
            name: Some("Brion".to_string()),
            ..Default::default()
        };
        assert_eq!(UserImageView::resolve(&options), UserImageView::Empty);
    }

    #[test]
    fn default_classes_are_bordered_mini() {
        let classes = user_image_classes(&UserImageOptions::default());
        assert_eq!(classes.to_string(), "bordered mini");
    }

    #[test]
    fn class_order_is_stable() {
        let options = UserImageOptions {
            avatar: true,
            floated: Some(Floated::Right),
            inline: true,
            relaxed: Relaxed::Very,
            size: UserImageSize::Little,
            spaced: Some(Spaced::Left),
            transparent: true,
            class: "profile-pic  mini".to_string(),
            ..Default::default()
        };
        assert_eq!(
            user_image_classes(&options).to_string(),
            "bordered floated-right inline relaxed little spaced-left transparent user-avatar very profile-pic mini"
        );
    }

    #[test]
    fn plain_relaxed_has_no_level_class() {
        let options = UserImageOptions {
            relaxed: Relaxed::Relaxed,
            bordered: false,
            ..Default::default()
        };
        let classes = user_image_classes(&options);
        assert!(classes.contains("relaxed"));
        assert!(!classes.contains("very"));
        assert!(!classes.contains("bordered"));
    }

    #[test]
    fn element_classes_add_semantic_modifiers() {
        let options = UserImageOptions {
            floated: Some(Floated::Left),
            ..named_avatar("Brion Silva")
        };
        let view = UserImageView::resolve(&options);
        assert_eq!(
            element_classes(&options, &view).to_string(),
            "ui circular bordered left floated middle aligned centered image user-image floated-left mini user-avatar"
        );

        let image = UserImageOptions {
            image: Some("me.png".to_string()),
            ..Default::default()
        };
        let view = UserImageView::resolve(&image);
        assert_eq!(element_classes(&image, &view).to_string(), "ui circular bordered image user-image mini");
    }

    #[test]
    fn style_map_renders_in_key_order() {
        let mut style = BTreeMap::new();
        style.insert("width".to_string(), "40px".to_string());
        style.insert("border-color".to_string(), "red".to_string());
        style.insert("height".to_string(), " ".to_string());
        assert_eq!(style_attribute(&style), "border-color: red; width: 40px;");
        assert_eq!(style_attribute(&BTreeMap::new()), "");
    }

    #[test]
    fn tokens_parse_case_insensitively() {
        assert_eq!(UserImageSize::parse("Little").unwrap(), UserImageSize::Little);
        assert_eq!(Floated::parse(" right ").unwrap(), Floated::Right);
        assert_eq!(Spaced::parse("left").unwrap(), Spaced::Left);
        assert_eq!(Relaxed::parse("very").unwrap(), Relaxed::Very);
        assert_eq!(UserImageSize::all().len(), 9);

        let err = UserImageSize::parse("gigantic").unwrap_err();
        assert!(matches!(err, PortalError::UnknownToken { kind: "size", .. }));
    }

    #[test]
    fn placeholder_is_a_data_uri() {
        assert!(USER_IMAGE_DUMMY.starts_with("data:image/svg+xml;base64,"));
        let encoded = USER_IMAGE_DUMMY.trim_start_matches("data:image/svg+xml;base64,");
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, USER_IMAGE_DUMMY_SVG.as_bytes());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: UserImageOptions =
            serde_json::from_str(r#"{ "avatar": true, "name": "Brion Silva", "size": "little" }"#).unwrap();
        assert!(options.bordered);
        assert_eq!(options.size, UserImageSize::Little);
        assert_eq!(options.relaxed, Relaxed::No);
    }

    #[test]
    fn relaxed_accepts_flags_and_levels() {
        let parse = |json: &str| serde_json::from_str::<UserImageOptions>(json).map(|o| o.relaxed);
        assert_eq!(parse(r#"{ "relaxed": true }"#).unwrap(), Relaxed::Relaxed);
        assert_eq!(parse(r#"{ "relaxed": false }"#).unwrap(), Relaxed::No);
        assert_eq!(parse(r#"{ "relaxed": "very" }"#).unwrap(), Relaxed::Very);
        assert_eq!(parse(r#"{ "relaxed": "Relaxed" }"#).unwrap(), Relaxed::Relaxed);
        assert!(parse(r#"{ "relaxed": "loose" }"#).is_err());
        assert!(parse(r#"{ "relaxed": 1 }"#).is_err());

        let written = serde_json::to_string(&Relaxed::Very).unwrap();
        assert_eq!(written, r#""very""#);
        assert_eq!(serde_json::from_str::<Relaxed>(&written).unwrap(), Relaxed::Very);
    }
}
