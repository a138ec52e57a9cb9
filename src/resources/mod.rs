pub mod review;
pub mod setting;

pub use review::Review;
pub use setting::Setting;

/// A resource client looked up by name
#[derive(Debug)]
pub enum Resource<'a> {
    Review(Review<'a>),
    Setting(Setting<'a>),
}
