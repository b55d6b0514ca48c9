//! Text normalization applied before counting.

mod normalize;
mod stopwords;

pub use normalize::{normalize, remove_stopwords};
pub use stopwords::is_stopword;
