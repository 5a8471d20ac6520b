//! Canned collaborator responses shared by the integration tests.

use grandpy_core::kernel::{MockEncyclopedia, MockGeocoder, TestDependencies};

pub const EIFFEL_ADDRESS: &str = "Champ de Mars, Paris";
pub const EIFFEL_LATITUDE: f64 = 48.858;
pub const EIFFEL_LONGITUDE: f64 = 2.294;
pub const EIFFEL_PAGE_ID: u64 = 1359783;
pub const EIFFEL_TITLE: &str = "Tour Eiffel";
pub const EIFFEL_SUMMARY: &str = "La tour Eiffel est une tour de fer puddlé de 330 m de hauteur...";
pub const EIFFEL_URL: &str = "https://fr.wikipedia.org/wiki/Tour_Eiffel";

/// Geocoder and encyclopedia that both know the Eiffel Tower
pub fn eiffel_tower_deps() -> TestDependencies {
    TestDependencies::new()
        .mock_geocoder(MockGeocoder::new().with_place(
            EIFFEL_ADDRESS,
            EIFFEL_LATITUDE,
            EIFFEL_LONGITUDE,
        ))
        .mock_encyclopedia(
            MockEncyclopedia::new()
                .with_articles(&[EIFFEL_PAGE_ID])
                .with_content(EIFFEL_PAGE_ID, EIFFEL_TITLE, EIFFEL_SUMMARY, EIFFEL_URL),
        )
}
