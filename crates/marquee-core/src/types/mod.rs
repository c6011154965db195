pub mod episode;
pub mod result;

pub use episode::TvInfo;
pub use result::ExtractionResult;
