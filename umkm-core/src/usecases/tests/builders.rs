pub use self::new_point_builder::*;
pub use umkm_entities::builders::Builder;

pub mod new_point_builder {

    use super::*;
    use crate::usecases::NewPoint;

    #[derive(Debug)]
    pub struct NewPointBuild {
        new_point: NewPoint,
    }

    impl NewPointBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.new_point.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.new_point.description = desc.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.new_point.category = category.into();
            self
        }
        pub fn lat(mut self, lat: &str) -> Self {
            self.new_point.lat = lat.into();
            self
        }
        pub fn lng(mut self, lng: &str) -> Self {
            self.new_point.lng = lng.into();
            self
        }
        pub fn image_uri(mut self, uri: &str) -> Self {
            self.new_point.image_uri = Some(uri.into());
            self
        }
        pub fn finish(self) -> NewPoint {
            self.new_point
        }
    }

    impl Builder for NewPoint {
        type Build = NewPointBuild;
        fn build() -> Self::Build {
            Self::Build {
                new_point: NewPoint {
                    name: "".into(),
                    description: "".into(),
                    category: "batik".into(),
                    lat: "0".into(),
                    lng: "0".into(),
                    image_uri: None,
                },
            }
        }
    }
}
