//! Property tests for the exclude list codec.

use filters::{FilterAction, FilterList, FilterRule};
use proptest::prelude::*;
use protocol::{ProtocolVersion, read_exclude_list, recv_exclude_list, write_exclude_list};

fn pattern() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z*?/.]{1,12}/?",
        "(\\+ |- ){0,2}[a-c*/ !+-]{0,8}/?",
        Just("!".to_owned()),
        Just("- !".to_owned()),
    ]
}

fn rule() -> impl Strategy<Value = (bool, String)> {
    (any::<bool>(), pattern())
}

proptest! {
    #[test]
    fn round_trip_is_lossless(rules in prop::collection::vec(rule(), 0..16)) {
        let mut sent = FilterList::new();
        for (include, text) in &rules {
            let action = if *include { FilterAction::Include } else { FilterAction::Exclude };
            sent.push(FilterRule::compile(text, action));
        }

        let mut wire = Vec::new();
        write_exclude_list(&mut wire, &sent, ProtocolVersion::NEWEST).unwrap();

        let mut received = FilterList::new();
        recv_exclude_list(&mut wire.as_slice(), &mut received).unwrap();

        let expected: Vec<_> = sent
            .iter()
            .filter(|rule| !rule.display_pattern().is_empty())
            .map(|rule| (rule.display_pattern(), rule.is_include()))
            .collect();
        let actual: Vec<_> = received
            .iter()
            .map(|rule| (rule.display_pattern(), rule.is_include()))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = read_exclude_list(&mut bytes.as_slice());
    }
}
