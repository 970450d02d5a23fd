pub mod envelope;
pub mod inquiry;
pub mod moderation;
