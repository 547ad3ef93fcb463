pub mod divar;
pub mod traits;
pub mod types;

pub use divar::DivarClient;
pub use traits::ListingApi;
