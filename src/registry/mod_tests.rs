//! Tests for the hosts registry.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::hosts::{AddressFamily, HostEntry, Insertion};
use crate::path::FixedPath;
use crate::registry::{Hosts, HostsError};
use crate::storage::mock::MemoryStore;

const HOSTS_PATH: &str = "/path/to/hosts";

const TWO_ENTRIES: &str = "127.0.0.1 local\n10.0.0.1 example1.com example2.com\n";

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn ipv4(address: &str, values: &[&str]) -> HostEntry {
    HostEntry::for_address(AddressFamily::Ipv4, address, names(values))
}

/// Creates a registry loaded from in-memory content.
fn hosts(content: &str) -> Hosts<FixedPath, MemoryStore> {
    Hosts::new(FixedPath::new(HOSTS_PATH), MemoryStore::with_content(content)).unwrap()
}

mod loading {
    use super::*;

    #[test]
    fn populates_entries_on_construction() {
        let hosts = hosts("127.0.0.1 local\n# comment\n10.0.0.1 example.com\n");

        assert_eq!(hosts.count(), 3);
        assert_eq!(
            hosts.entries(),
            &[
                ipv4("127.0.0.1", &["local"]),
                HostEntry::for_comment("comment"),
                ipv4("10.0.0.1", &["example.com"]),
            ]
        );
    }

    #[test]
    fn missing_file_is_file_not_exists() {
        let result = Hosts::new(FixedPath::new(HOSTS_PATH), MemoryStore::missing());

        match result {
            Err(HostsError::FileNotExists { path }) => assert_eq!(path, Path::new(HOSTS_PATH)),
            other => panic!("Expected FileNotExists, got {other:?}"),
        }
    }

    #[test]
    fn reload_discards_in_memory_changes() {
        let mut hosts = hosts(TWO_ENTRIES);
        hosts.add(ipv4("192.168.1.1", &["new"]));
        hosts.remove_by_ip("127.0.0.1");

        hosts.load().unwrap();

        assert_eq!(
            hosts.entries(),
            &[
                ipv4("127.0.0.1", &["local"]),
                ipv4("10.0.0.1", &["example1.com", "example2.com"]),
            ]
        );
    }

    #[test]
    fn reload_picks_up_external_edits() {
        let store = MemoryStore::with_content(TWO_ENTRIES);
        let mut hosts = Hosts::new(FixedPath::new(HOSTS_PATH), store).unwrap();

        hosts.store.set_content("# only a comment\n");
        hosts.load().unwrap();

        assert_eq!(hosts.entries(), &[HostEntry::for_comment("only a comment")]);
    }

    #[test]
    fn empty_does_not_read() {
        let hosts = Hosts::empty(FixedPath::new(HOSTS_PATH), MemoryStore::missing());

        assert_eq!(hosts.count(), 0);
        assert_eq!(hosts.path(), PathBuf::from(HOSTS_PATH));
    }
}

mod lookup {
    use super::*;

    #[test]
    fn exists_by_name_true_for_any_listed_name() {
        let hosts = hosts(TWO_ENTRIES);

        assert!(hosts.exists_by_name("example2.com"));
        assert!(hosts.exists_by_name("local"));
    }

    #[test]
    fn exists_by_name_false_for_unknown_name() {
        let hosts = hosts(TWO_ENTRIES);

        assert!(!hosts.exists_by_name("non-exists.com"));
    }

    #[test]
    fn exists_by_ip() {
        let hosts = hosts(TWO_ENTRIES);

        assert!(hosts.exists_by_ip("127.0.0.1"));
        assert!(!hosts.exists_by_ip("192.168.1.1"));
    }

    #[test]
    fn find_by_name_returns_entry() {
        let hosts = hosts(TWO_ENTRIES);

        assert_eq!(
            hosts.find_by_name("example1.com"),
            Some(&ipv4("10.0.0.1", &["example1.com", "example2.com"]))
        );
        assert_eq!(hosts.find_by_name("non-exists.com"), None);
    }

    #[test]
    fn find_by_name_returns_first_match() {
        let hosts = hosts("10.0.0.1 shared\n10.0.0.2 shared other\n");

        assert_eq!(
            hosts.find_by_name("shared").and_then(HostEntry::address),
            Some("10.0.0.1")
        );
    }

    #[test]
    fn find_by_ip_returns_entry() {
        let hosts = hosts(TWO_ENTRIES);

        assert_eq!(
            hosts.find_by_ip("10.0.0.1"),
            Some(&ipv4("10.0.0.1", &["example1.com", "example2.com"]))
        );
        assert_eq!(hosts.find_by_ip("192.168.1.1"), None);
    }

    #[test]
    fn find_by_ip_matches_literal_only() {
        let hosts = hosts("::1 localhost\nnot-an-ip odd\n");

        assert!(hosts.find_by_ip("0:0:0:0:0:0:0:1").is_none());
        assert_eq!(
            hosts.find_by_ip("not-an-ip").and_then(HostEntry::family),
            Some(AddressFamily::Unknown)
        );
    }

    #[test]
    fn comments_never_match() {
        let hosts = hosts("# 127.0.0.1 local\n");

        assert!(!hosts.exists_by_name("local"));
        assert!(!hosts.exists_by_name("127.0.0.1 local"));
        assert!(!hosts.exists_by_ip("127.0.0.1"));
        assert!(hosts.find_by_name("local").is_none());
        assert!(hosts.find_by_ip("127.0.0.1").is_none());
    }
}

mod adding {
    use super::*;

    #[test]
    fn new_address_is_appended() {
        let mut hosts = hosts(TWO_ENTRIES);

        let insertion = hosts.add(ipv4("192.168.1.1", &[]));

        assert_eq!(insertion, Insertion::Appended);
        assert_eq!(hosts.count(), 3);
        assert_eq!(hosts.entries()[2], ipv4("192.168.1.1", &[]));
    }

    #[test]
    fn same_address_is_merged() {
        let mut hosts = hosts(TWO_ENTRIES);

        let insertion = hosts.add(ipv4(
            "127.0.0.1",
            &["new-name.example.com", "second-new-name.example.com"],
        ));

        assert_eq!(insertion, Insertion::Merged(0));
        assert_eq!(hosts.count(), 2);
        assert_eq!(
            hosts.find_by_ip("127.0.0.1").map(HostEntry::names),
            Some(
                names(&["local", "new-name.example.com", "second-new-name.example.com"])
                    .as_slice()
            )
        );
    }

    #[test]
    fn merge_ignores_family() {
        let mut hosts = hosts("127.0.0.1 local\n");

        hosts.add(HostEntry::for_address(
            AddressFamily::Unknown,
            "127.0.0.1",
            names(&["new"]),
        ));

        assert_eq!(hosts.entries(), &[ipv4("127.0.0.1", &["local", "new"])]);
    }

    #[test]
    fn comments_are_always_appended() {
        let mut hosts = hosts("# note\n");

        hosts.add(HostEntry::for_comment("note"));

        assert_eq!(hosts.count(), 2);
    }

    #[test]
    fn add_all_into_empty_registry() {
        let mut hosts = Hosts::empty(FixedPath::new(HOSTS_PATH), MemoryStore::missing());

        hosts.add_all([
            ipv4("127.0.0.1", &["local"]),
            ipv4("10.0.0.1", &["example1.com", "example2.com"]),
        ]);

        assert_eq!(hosts.count(), 2);
        assert_eq!(
            hosts.entries(),
            &[
                ipv4("127.0.0.1", &["local"]),
                ipv4("10.0.0.1", &["example1.com", "example2.com"]),
            ]
        );
    }

    #[test]
    fn add_all_merges_within_the_same_call() {
        let mut hosts = hosts("# header\n");

        hosts.add_all([
            ipv4("10.0.0.1", &["a"]),
            HostEntry::for_comment("between"),
            ipv4("10.0.0.1", &["b"]),
        ]);

        assert_eq!(
            hosts.entries(),
            &[
                HostEntry::for_comment("header"),
                ipv4("10.0.0.1", &["a", "b"]),
                HostEntry::for_comment("between"),
            ]
        );
    }
}

mod removing {
    use super::*;

    #[test]
    fn remove_by_ip() {
        let mut hosts = hosts(TWO_ENTRIES);

        let removed = hosts.remove_by_ip("10.0.0.1");

        assert_eq!(removed, 1);
        assert_eq!(hosts.entries(), &[ipv4("127.0.0.1", &["local"])]);
    }

    #[test]
    fn remove_by_name_drops_whole_entry() {
        let mut hosts = hosts("127.0.0.1 local\n10.0.0.1 x y\n");

        let removed = hosts.remove_by_name("x");

        assert_eq!(removed, 1);
        assert_eq!(hosts.entries(), &[ipv4("127.0.0.1", &["local"])]);
    }

    #[test]
    fn removal_keeps_comments() {
        let mut hosts = hosts("# top\n127.0.0.1 local\n# bottom\n10.0.0.1 x\n");

        hosts.remove_by_name("local");
        hosts.remove_by_ip("10.0.0.1");

        assert_eq!(
            hosts.entries(),
            &[
                HostEntry::for_comment("top"),
                HostEntry::for_comment("bottom"),
            ]
        );
    }

    #[test]
    fn miss_is_a_no_op() {
        let mut hosts = hosts(TWO_ENTRIES);

        assert_eq!(hosts.remove_by_ip("192.168.1.1"), 0);
        assert_eq!(hosts.remove_by_name("non-exists.com"), 0);
        assert_eq!(hosts.count(), 2);
    }

    #[test]
    fn comment_text_is_not_a_removal_key() {
        let mut hosts = hosts("# 10.0.0.1\n10.0.0.2 other\n");

        assert_eq!(hosts.remove_by_ip("10.0.0.1"), 0);
        assert_eq!(hosts.count(), 2);
    }
}

mod saving {
    use super::*;

    #[test]
    fn writes_rendered_entries_to_path() {
        let hosts = hosts(
            "127.0.0.1   local\n# some fancy comment\n\n10.0.0.1 example1.com example2.com",
        );

        hosts.save().unwrap();

        assert_eq!(
            hosts.store.writes(),
            vec![(
                PathBuf::from(HOSTS_PATH),
                "127.0.0.1\tlocal\n# some fancy comment\n10.0.0.1\texample1.com example2.com\n"
                    .to_string()
            )]
        );
    }

    #[test]
    fn save_after_mutation() {
        let mut hosts = hosts(TWO_ENTRIES);
        hosts.add(ipv4("127.0.0.1", &["new"]));
        hosts.remove_by_name("example1.com");

        hosts.save().unwrap();

        assert_eq!(hosts.render(), "127.0.0.1\tlocal new\n");
        assert_eq!(hosts.store.writes()[0].1, "127.0.0.1\tlocal new\n");
    }

    #[test]
    fn write_failure_is_propagated() {
        let hosts =
            Hosts::new(FixedPath::new(HOSTS_PATH), MemoryStore::read_only(TWO_ENTRIES)).unwrap();

        match hosts.save() {
            Err(HostsError::Write { path, source }) => {
                assert_eq!(path, Path::new(HOSTS_PATH));
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("Expected Write error, got {other:?}"),
        }
    }
}

mod file_system {
    use super::*;

    #[test]
    fn import_missing_file_fails_before_reading() {
        let result = Hosts::import("/not/exists/path/hosts");

        match result {
            Err(e @ HostsError::FileNotExists { .. }) => {
                assert_eq!(e.to_string(), "Hosts file '/not/exists/path/hosts' not exists.");
            }
            other => panic!("Expected FileNotExists, got {other:?}"),
        }
    }

    #[test]
    fn import_load_modify_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hosts");
        std::fs::write(&path, "127.0.0.1 localhost\r\n\r\n# lan\r\n10.0.0.1 nas\r\n").unwrap();

        let mut hosts = Hosts::import(&path).unwrap();
        hosts.add(HostEntry::classified("10.0.0.1", names(&["backup"])));
        hosts.add(HostEntry::classified("fe80::1", names(&["router"])));
        hosts.save().unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "127.0.0.1\tlocalhost\n# lan\n10.0.0.1\tnas backup\nfe80::1\trouter\n"
        );

        let reloaded = Hosts::import(&path).unwrap();
        assert_eq!(reloaded.entries(), hosts.entries());
    }

    #[test]
    fn read_error_other_than_missing_is_read_error() {
        let dir = TempDir::new().unwrap();

        // A directory exists but cannot be read as a file.
        let result = Hosts::import(dir.path());

        assert!(matches!(result, Err(HostsError::Read { .. })));
    }
}
