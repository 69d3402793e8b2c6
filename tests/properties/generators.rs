//! Property tests for the artifact generators.

use proptest::prelude::*;

use checkcites_build::{create_man_page, create_script, LAUNCHER_SCRIPT, MAN_PAGE_PLACEHOLDER};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the man page content never depends on the version string.
    #[test]
    fn property_man_page_ignores_version(version in "(?s).{0,64}") {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checkcites.1");

        create_man_page(&path, &version).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        prop_assert_eq!(written.as_str(), MAN_PAGE_PLACEHOLDER);
        prop_assert!(written.ends_with('\n'));
        prop_assert!(!written.ends_with("\n\n"));
    }

    /// PROPERTY: regenerating over any previous content gives the same bytes.
    #[test]
    fn property_generators_overwrite(previous in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("checkcites");
        let man = dir.path().join("checkcites.1");
        std::fs::write(&script, &previous).unwrap();
        std::fs::write(&man, &previous).unwrap();

        create_script(&script).unwrap();
        create_man_page(&man, "2.7").unwrap();

        prop_assert_eq!(std::fs::read(&script).unwrap(), LAUNCHER_SCRIPT.as_bytes());
        prop_assert_eq!(std::fs::read(&man).unwrap(), MAN_PAGE_PLACEHOLDER.as_bytes());
    }
}
