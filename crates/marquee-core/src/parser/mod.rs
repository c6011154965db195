pub mod boundary;
pub mod cascade;
pub mod cleaner;
pub mod display;
pub mod junk;
pub mod normalize;
pub mod path;
pub(crate) mod patterns;
pub mod tokenizer;
pub mod year;

pub use cascade::{
    AnimeDash, CascadeMatch, CrossNotation, EpisodeRule, ExplicitSeasonEpisode, LooseAbsolute,
    PatternCascade, WordEpisode,
};
pub use cleaner::{CleanerConfig, FilenameCleaner};
pub use display::{DisplayInfo, DisplayTitleFormatter};
pub use junk::JunkTagStripper;
pub use normalize::FinalNormalizer;
pub use path::PathDecoder;
pub use tokenizer::TitleTokenizer;
pub use year::{YearExtractor, YearMatch, DEFAULT_YEAR_RANGE};
