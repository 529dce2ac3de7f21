use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sampler::{sample, SampleError};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One image listed by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
}

impl CatalogEntry {
    pub fn image_url(&self, base: &str) -> String {
        format!(
            "{}/{}/{}?image={}",
            base.trim_end_matches('/'),
            self.width,
            self.height,
            self.id
        )
    }
}

pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Picks `count` distinct entries, returned in catalog order.
pub fn pick_wallpapers<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &[CatalogEntry],
    count: usize,
) -> Result<Vec<CatalogEntry>, SampleError> {
    let upper = catalog.len() as i64 - 1;

    let picked = sample(rng, count, 0, upper)?
        .into_iter()
        .sorted()
        .map(|idx| catalog[idx as usize].clone())
        .collect();

    Ok(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn entry(id: u64) -> CatalogEntry {
        CatalogEntry {
            id,
            width: 5616,
            height: 3744,
            author: format!("Author {id}"),
            format: None,
            filename: None,
            author_url: None,
            post_url: None,
        }
    }

    #[test]
    fn parses_catalog_listing() {
        let json = r#"[
            {"format":"jpeg","width":5616,"height":3744,"filename":"0000_yC-Yzbqy7PY.jpeg",
             "id":0,"author":"Alejandro Escamilla",
             "author_url":"https://unsplash.com/@alejandroescamilla",
             "post_url":"https://unsplash.com/photos/yC-Yzbqy7PY"},
            {"width":800,"height":600,"id":7,"author":"Someone"}
        ]"#;

        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].author, "Alejandro Escamilla");
        assert_eq!(catalog[0].format.as_deref(), Some("jpeg"));
        assert_eq!(catalog[1].id, 7);
        assert_eq!(catalog[1].post_url, None);
    }

    #[test]
    fn rejects_non_array() {
        assert!(matches!(
            parse_catalog(r#"{"id": 1}"#),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn image_url() {
        assert_eq!(
            entry(12).image_url("https://unsplash.it"),
            "https://unsplash.it/5616/3744?image=12"
        );
        assert_eq!(
            entry(12).image_url("https://unsplash.it/"),
            "https://unsplash.it/5616/3744?image=12"
        );
    }

    #[test]
    fn picks_distinct_entries_in_catalog_order() {
        let catalog: Vec<_> = (0..50).map(entry).collect();
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);

        for _ in 0..100 {
            let picked = pick_wallpapers(&mut rng, &catalog, 5).unwrap();
            assert_eq!(picked.len(), 5);
            assert!(picked.windows(2).all(|w| w[0].id < w[1].id));
        }
    }

    #[test]
    fn whole_catalog() {
        let catalog: Vec<_> = (0..3).map(entry).collect();
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);

        assert_eq!(pick_wallpapers(&mut rng, &catalog, 3).unwrap(), catalog);
    }

    #[test]
    fn never_indexes_past_the_end() {
        let catalog = vec![entry(0)];
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(pick_wallpapers(&mut rng, &catalog, 1).unwrap(), catalog);
        }
    }

    #[test]
    fn too_few_entries() {
        let catalog: Vec<_> = (0..2).map(entry).collect();
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);

        assert_eq!(
            pick_wallpapers(&mut rng, &catalog, 3),
            Err(SampleError::InvalidSampleSize {
                count: 3,
                lower: 0,
                upper: 1
            })
        );
        assert!(pick_wallpapers(&mut rng, &[], 1).is_err());
        assert_eq!(pick_wallpapers(&mut rng, &[], 0), Ok(Vec::new()));
    }
}
