//! Property tests for `CommandLine` construction.

use proptest::prelude::*;

use checkcites_build::CommandLine;

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._=-]{1,16}").unwrap()
}

proptest! {
    /// PROPERTY: a non-empty vector always converts, keeping program and order.
    #[test]
    fn property_vec_round_trip(parts in proptest::collection::vec(word(), 1..8)) {
        let call = CommandLine::try_from(parts.clone()).unwrap();

        prop_assert_eq!(call.program(), parts[0].as_str());
        prop_assert_eq!(call.arguments(), &parts[1..]);
        prop_assert_eq!(call.to_vec(), parts.clone());
        prop_assert_eq!(call.to_string(), parts.join(" "));
    }

    /// PROPERTY: builder and vector conversion agree.
    #[test]
    fn property_builder_matches_vec(program in word(), args in proptest::collection::vec(word(), 0..6)) {
        let built = CommandLine::new(program.clone()).args(args.clone());

        let mut parts = vec![program];
        parts.extend(args);
        prop_assert_eq!(built, CommandLine::try_from(parts).unwrap());
    }
}
