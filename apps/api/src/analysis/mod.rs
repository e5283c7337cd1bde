// Scoring engine: career recommendations, learning paths, ATS keyword overlap.
// Pure functions over request inputs and the read-only registry; the only
// suspension point is delegated advice inside recommend_roles.

pub mod ats;
pub mod handlers;
pub mod learning;
pub mod recommend;
