use ssh_uri::descriptor::{validate, ConnectionInfo, ConnectionKind, ValidationVerdict};

fn host(host: &str) -> ValidationVerdict {
    validate(&ConnectionInfo::new(host))
}

fn mosh(from: u16, to: u16) -> ValidationVerdict {
    let mut info = ConnectionInfo::new("h");
    info.kind = ConnectionKind::Mosh { from, to };
    validate(&info)
}

#[test]
fn test_valid_hosts() {
    assert_eq!(host("example.com"), ValidationVerdict::Valid);
    assert_eq!(host("10.0.0.1"), ValidationVerdict::Valid);
    assert_eq!(host("[::1]"), ValidationVerdict::Valid);
}

#[test]
fn test_empty_host() {
    assert_eq!(host(""), ValidationVerdict::HostEmpty);
}

#[test]
fn test_invalid_hosts() {
    for bad in [
        "bad host", "a@b", "a/b", "a?b", "a#b", "a;b", "a%41b", "::1", "[::1", "[[::1]]", "h:22",
    ] {
        assert_eq!(host(bad), ValidationVerdict::HostInvalid, "{bad}");
    }
}

#[test]
fn test_port_zero() {
    let mut info = ConnectionInfo::new("h");
    info.port = 0;
    assert_eq!(validate(&info), ValidationVerdict::PortZero);
}

#[test]
fn test_empty_username_is_valid() {
    assert!(validate(&ConnectionInfo::new("h")).is_valid());
}

#[test]
fn test_mosh_ranges() {
    assert_eq!(mosh(60000, 61000), ValidationVerdict::Valid);
    assert_eq!(mosh(5, 5), ValidationVerdict::Valid);
    assert_eq!(mosh(0, 5), ValidationVerdict::MoshPortZero);
    assert_eq!(mosh(5, 0), ValidationVerdict::MoshPortZero);
    assert_eq!(mosh(10, 5), ValidationVerdict::MoshRangeInverted);
}

#[test]
fn test_first_failure_wins() {
    let mut info = ConnectionInfo::new("");
    info.port = 0;
    assert_eq!(validate(&info), ValidationVerdict::HostEmpty);
}

#[test]
fn test_verdict_message() {
    assert_eq!(ValidationVerdict::HostEmpty.to_string(), "host is empty");
}
