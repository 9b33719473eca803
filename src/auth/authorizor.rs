use oso::{Oso, PolarClass};

use crate::auth::{Platform, User};
use crate::entities::Place;

pub fn new() -> Oso {
    let mut o = Oso::new();

    o.register_class(Platform::get_polar_class()).unwrap();
    o.register_class(User::get_polar_class()).unwrap();
    o.register_class(Place::get_polar_class()).unwrap();

    o.load_str(include_str!("rules.polar")).unwrap();

    o
}

#[cfg(test)]
mod tests {
    use super::*;

    use uuid::Uuid;

    use crate::entities::{Coordinates, PlaceDraft};

    fn place_created_by(creator: Uuid) -> Place {
        let draft = PlaceDraft {
            title: "Empire State Building".into(),
            description: "One of the most famous sky scrapers in the world".into(),
            address: "20 W 34th St, New York, NY 10001".into(),
            image: "uploads/images/empire.jpeg".into(),
        };

        Place::new(
            draft,
            Coordinates {
                lat: 40.748_441_7,
                lng: -73.985_664_3,
            },
            creator,
        )
    }

    #[test]
    fn anyone_may_read_and_create() {
        let authorizor = new();

        let stranger = User::new(Uuid::new_v4());
        let place = place_created_by(Uuid::new_v4());

        let result = authorizor.is_allowed(stranger.clone(), "read", place.clone());
        assert_eq!(result.unwrap(), true);

        let result = authorizor.is_allowed(stranger, "create_place", Platform::default());
        assert_eq!(result.unwrap(), true);
    }

    #[test]
    fn only_the_creator_may_update_and_delete() {
        let authorizor = new();

        let owner = User::new(Uuid::new_v4());
        let stranger = User::new(Uuid::new_v4());
        let place = place_created_by(owner.id);

        let result = authorizor.is_allowed(owner.clone(), "update", place.clone());
        assert_eq!(result.unwrap(), true);

        let result = authorizor.is_allowed(owner, "delete", place.clone());
        assert_eq!(result.unwrap(), true);

        let result = authorizor.is_allowed(stranger.clone(), "update", place.clone());
        assert_eq!(result.unwrap(), false);

        let result = authorizor.is_allowed(stranger, "delete", place);
        assert_eq!(result.unwrap(), false);
    }

    #[test]
    fn admins_may_mutate_any_place() {
        let authorizor = new();

        let admin = User {
            id: Uuid::new_v4(),
            roles: vec!["admin".into()],
        };
        let place = place_created_by(Uuid::new_v4());

        let result = authorizor.is_allowed(admin.clone(), "update", place.clone());
        assert_eq!(result.unwrap(), true);

        let result = authorizor.is_allowed(admin, "delete", place);
        assert_eq!(result.unwrap(), true);
    }
}
