pub mod fit;
pub mod shortlist;
