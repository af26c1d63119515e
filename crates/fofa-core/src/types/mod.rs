mod mapping;
mod record;
mod search;

pub use mapping::*;
pub use record::*;
pub use search::*;
