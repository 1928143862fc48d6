pub mod user_image;
