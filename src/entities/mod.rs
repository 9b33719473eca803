mod location;
mod member;
mod place;

pub use location::Coordinates;
pub use member::Member;
pub use place::{Place, PlaceDraft, PlacePatch};
