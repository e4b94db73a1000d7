use super::prelude::*;
use crate::util::validate::{self, AutoCorrect};

/// Input of the "add point" form.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPoint {
    pub name        : String,
    pub description : String,
    pub category    : String,
    pub lat         : String,
    pub lng         : String,
    pub image_uri   : Option<String>,
}

impl AutoCorrect for NewPoint {
    fn auto_correct(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.description = self.description.trim().to_owned();
        self.image_uri = self
            .image_uri
            .map(|uri| uri.trim().to_owned())
            .filter(|uri| !uri.is_empty());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidPoint {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub pos: MapPoint,
    pub image_uri: Option<String>,
}

impl ValidPoint {
    pub fn coordinates(&self) -> String {
        let (lat, lng) = self.pos.to_lat_lng_deg();
        format!("{lat},{lng}")
    }
}

pub(crate) fn validate_new_point(new_point: NewPoint) -> Result<ValidPoint> {
    let NewPoint {
        name,
        description,
        category,
        lat,
        lng,
        image_uri,
    } = new_point.auto_correct();
    if name.is_empty() {
        return Err(Error::Name);
    }
    if description.is_empty() {
        return Err(Error::Description);
    }
    let pos = validate::parse_lat_lng(&lat, &lng)?;
    let category = category.parse::<Category>()?;
    Ok(ValidPoint {
        name,
        description,
        category,
        pos,
        image_uri,
    })
}

pub fn create_point<R>(repo: &R, new_point: NewPoint) -> Result<Point>
where
    R: PointRepo,
{
    let valid = validate_new_point(new_point)?;
    let id = repo.new_point_id()?;
    let coordinates = valid.coordinates();
    let ValidPoint {
        name,
        description,
        category,
        image_uri,
        ..
    } = valid;
    let point = Point {
        id,
        name,
        description: Some(description),
        category: Some(category),
        tags: vec![Point::DEFAULT_TAG.to_owned()],
        coordinates,
        image: ImageRef {
            uri: image_uri,
            local: None,
        },
        mood: None,
        created_at: Some(TimestampMs::now()),
    };
    log::debug!("Creating point {} ({})", point.id, point.name);
    repo.create_or_replace_point(&point)?;
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{prelude::*, MockDb};
    use super::*;

    fn new_point() -> NewPoint {
        NewPoint::build()
            .name("Kerajinan Kulit Manding")
            .description("Tas dan dompet kulit")
            .category("kulit")
            .lat("-7.9452")
            .lng("110.3390")
            .finish()
    }

    #[test]
    fn create_valid_point() {
        let db = MockDb::default();
        let point = create_point(&db, new_point()).unwrap();
        assert!(point.id.is_valid());
        assert_eq!(vec!["artisan".to_string()], point.tags);
        assert_eq!("-7.9452,110.339", point.coordinates);
        assert_eq!(Some(Category::Kulit), point.category);
        assert_eq!(None, point.mood);
        assert!(point.created_at.is_some());
        assert!(point.has_valid_pos());
        assert_eq!(vec![point], db.points.borrow().clone());
    }

    #[test]
    fn clean_coordinate_input() {
        let db = MockDb::default();
        let mut x = new_point();
        x.lat = " -7.9452° ".into();
        x.lng = "110.3390 E".into();
        let point = create_point(&db, x).unwrap();
        assert_eq!("-7.9452,110.339", point.coordinates);
    }

    #[test]
    fn trim_text_input() {
        let db = MockDb::default();
        let mut x = new_point();
        x.name = "  Gerabah Kasongan ".into();
        x.image_uri = Some("   ".into());
        let point = create_point(&db, x).unwrap();
        assert_eq!("Gerabah Kasongan", point.name);
        assert_eq!(None, point.image.uri);
    }

    #[test]
    fn reject_blank_name_and_description() {
        let db = MockDb::default();
        let mut x = new_point();
        x.name = " ".into();
        assert!(matches!(create_point(&db, x), Err(Error::Name)));
        let mut x = new_point();
        x.description = "".into();
        assert!(matches!(create_point(&db, x), Err(Error::Description)));
        assert!(db.points.borrow().is_empty());
    }

    #[test]
    fn reject_invalid_coordinates() {
        let db = MockDb::default();
        for (lat, lng) in [("", "110"), ("abc", "110"), ("1.2.3", "110"), ("-7", "200")] {
            let mut x = new_point();
            x.lat = lat.into();
            x.lng = lng.into();
            assert!(
                matches!(create_point(&db, x), Err(Error::InvalidCoordinates(_))),
                "{lat:?},{lng:?}"
            );
        }
        assert!(db.points.borrow().is_empty());
    }

    #[test]
    fn reject_unknown_category() {
        let db = MockDb::default();
        let mut x = new_point();
        x.category = "tenun".into();
        assert!(matches!(
            create_point(&db, x),
            Err(Error::UnknownCategory(c)) if c == "tenun"
        ));
    }

    #[test]
    fn allocate_distinct_ids() {
        let db = MockDb::default();
        let a = create_point(&db, new_point()).unwrap();
        let b = create_point(&db, new_point()).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(2, db.count_points().unwrap());
    }
}
