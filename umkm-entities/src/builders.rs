pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::point_builder::*;

pub mod point_builder {

    use super::*;
    use crate::{category::*, image::*, mood::*, point::*, time::*};

    #[derive(Debug)]
    pub struct PointBuild {
        point: Point,
    }

    impl PointBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.point.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.point.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.point.description = Some(desc.into());
            self
        }
        pub fn category(mut self, category: Category) -> Self {
            self.point.category = Some(category);
            self
        }
        pub fn coordinates(mut self, coordinates: &str) -> Self {
            self.point.coordinates = coordinates.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.point.coordinates = format!("{lat},{lng}");
            self
        }
        pub fn mood(mut self, mood: Mood) -> Self {
            self.point.mood = Some(mood);
            self
        }
        pub fn image_uri(mut self, uri: &str) -> Self {
            self.point.image.uri = Some(uri.into());
            self
        }
        pub fn image_local(mut self, key: &str) -> Self {
            self.point.image.local = Some(key.into());
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.point.created_at = Some(TimestampMs::from_millis(millis));
            self
        }
        pub fn finish(self) -> Point {
            self.point
        }
    }

    impl Builder for Point {
        type Build = PointBuild;
        fn build() -> Self::Build {
            Self::Build {
                point: Point {
                    id: Default::default(),
                    name: "".into(),
                    description: None,
                    category: None,
                    tags: vec![Point::DEFAULT_TAG.into()],
                    coordinates: "".into(),
                    image: ImageRef::default(),
                    mood: None,
                    created_at: None,
                },
            }
        }
    }
}
