use pretty_assertions::assert_eq;
use ssh_uri::descriptor::{
    decode, encode, is_recognized_scheme, ConnectionInfo, ConnectionKind, SshOption, SshOptions,
    ValidationVerdict, DEFAULT_MOSH_PORTS,
};
use ssh_uri::error::{ArgumentError, FormatError};

fn info(user: &str, host: &str) -> ConnectionInfo {
    let mut info = ConnectionInfo::new(host);
    info.username = user.to_string();
    info
}

// ── decode ──────────────────────────────────────────────────────────

#[test]
fn test_decode_simple() {
    let decoded = decode("ssh://bob@example.com").unwrap();
    assert_eq!(decoded, info("bob", "example.com"));
}

#[test]
fn test_decode_scheme_is_case_insensitive() {
    let decoded = decode("SSH://Host").unwrap();
    assert_eq!(decoded.host, "Host");
    assert_eq!(decoded.username, "");
    assert_eq!(decoded.kind, ConnectionKind::Ssh);
}

#[test]
fn test_decode_port() {
    assert_eq!(decode("ssh://u@host:2222").unwrap().port, 2222);
    assert_eq!(decode("ssh://u@host").unwrap().port, 22);
    assert_eq!(decode("ssh://u@host:").unwrap().port, 22);
}

#[test]
fn test_decode_invalid_port() {
    assert_eq!(
        decode("ssh://u@host:abc").unwrap_err(),
        FormatError::InvalidPort { port: "abc".into() }
    );
    assert!(matches!(
        decode("ssh://u@host:70000"),
        Err(FormatError::InvalidPort { .. })
    ));
    assert_eq!(
        decode("ssh://u@host:+2222").unwrap_err(),
        FormatError::InvalidPort {
            port: "+2222".into()
        }
    );
    assert!(matches!(
        decode("ssh://u@[::1]:-22"),
        Err(FormatError::InvalidPort { .. })
    ));
}

#[test]
fn test_decode_ipv6_host_keeps_brackets() {
    let decoded = decode("ssh://u@[::1]:2200").unwrap();
    assert_eq!(decoded.host, "[::1]");
    assert_eq!(decoded.port, 2200);
}

#[test]
fn test_decode_ignores_path_and_fragment() {
    let decoded = decode("ssh://bob@host/some/path#frag").unwrap();
    assert_eq!(decoded, info("bob", "host"));
}

#[test]
fn test_decode_percent_encoded_username() {
    let decoded = decode("ssh://jos%C3%A9%40corp@host").unwrap();
    assert_eq!(decoded.username, "josé@corp");
}

#[test]
fn test_decode_missing_host() {
    assert!(matches!(
        decode("ssh://u@"),
        Err(FormatError::MissingHost { .. })
    ));
    assert!(matches!(
        decode("ssh://u@:2222"),
        Err(FormatError::MissingHost { .. })
    ));
}

#[test]
fn test_decode_unrecognized_scheme() {
    assert!(matches!(
        decode("http://host"),
        Err(FormatError::UnrecognizedScheme { .. })
    ));
}

#[test]
fn test_recognized_schemes() {
    assert!(is_recognized_scheme("ssh://host"));
    assert!(is_recognized_scheme("MOSH://host"));
    assert!(!is_recognized_scheme("sftp://host"));
    assert!(!is_recognized_scheme("ssh:/host"));
    assert!(!is_recognized_scheme("host"));
}

#[test]
fn test_decode_options() {
    let decoded = decode("ssh://u;Compression=yes,ProxyJump=jump%3A22@host").unwrap();
    let options: Vec<SshOption> = decoded.options.iter().cloned().collect();
    assert_eq!(
        options,
        vec![
            SshOption::new("Compression", "yes"),
            SshOption::new("ProxyJump", "jump:22"),
        ]
    );
    assert_eq!(decoded.identity_file, None);
}

#[test]
fn test_decode_duplicate_option() {
    assert_eq!(
        decode("ssh://u;A=1,A=2@host").unwrap_err(),
        FormatError::DuplicateOption { name: "A".into() }
    );
    assert_eq!(
        decode("ssh://u;A=1,a=2@host").unwrap_err(),
        FormatError::DuplicateOption { name: "a".into() }
    );
}

#[test]
fn test_decode_lifts_identity_file() {
    let decoded = decode("ssh://u;IdentityFile=%2Fhome%2Fk@host").unwrap();
    assert_eq!(decoded.username, "u");
    assert_eq!(decoded.identity_file.as_deref(), Some("/home/k"));
    assert!(decoded.options.is_empty());
}

#[test]
fn test_decode_identity_file_name_is_case_insensitive() {
    let decoded = decode("ssh://u;identityfile=k.pem,Compression=yes@host").unwrap();
    assert_eq!(decoded.identity_file.as_deref(), Some("k.pem"));
    assert_eq!(decoded.options.len(), 1);
}

#[test]
fn test_decode_too_many_user_info_segments() {
    assert!(matches!(
        decode("ssh://a;B=1;C=2@host"),
        Err(FormatError::TooManyUserInfoSegments { .. })
    ));
}

#[test]
fn test_decode_malformed_option_tokens() {
    assert_eq!(
        decode("ssh://u;noequals@host").unwrap_err(),
        FormatError::MalformedOption {
            token: "noequals".into()
        }
    );
    assert_eq!(
        decode("ssh://u;=value@host").unwrap_err(),
        FormatError::MalformedOption {
            token: "=value".into()
        }
    );
}

#[test]
fn test_decode_query_rejected_for_ssh() {
    assert!(matches!(
        decode("ssh://u@host?mosh_ports=60-61"),
        Err(FormatError::QueryNotSupported { .. })
    ));
}

#[test]
fn test_decode_empty_query_is_no_query() {
    assert_eq!(decode("ssh://u@host?").unwrap(), info("u", "host"));
}

#[test]
fn test_decode_mosh_ports() {
    let decoded = decode("mosh://u@host?mosh_ports=60-61").unwrap();
    assert_eq!(decoded.kind, ConnectionKind::Mosh { from: 60, to: 61 });
}

#[test]
fn test_decode_mosh_ports_alias_and_colon() {
    let decoded = decode("mosh://u@host?MOSH-PORTS=1:2").unwrap();
    assert_eq!(decoded.kind, ConnectionKind::Mosh { from: 1, to: 2 });
}

#[test]
fn test_decode_mosh_without_query_uses_default_range() {
    let (from, to) = DEFAULT_MOSH_PORTS;
    let decoded = decode("mosh://u@host").unwrap();
    assert_eq!(decoded.kind, ConnectionKind::Mosh { from, to });
}

#[test]
fn test_decode_unknown_query_parameter() {
    assert_eq!(
        decode("mosh://u@host?bogus=1").unwrap_err(),
        FormatError::UnknownQueryParameter {
            name: "bogus".into()
        }
    );
}

#[test]
fn test_decode_invalid_mosh_ranges() {
    for uri in [
        "mosh://u@host?mosh_ports=1-",
        "mosh://u@host?mosh_ports=60001",
        "mosh://u@host?mosh_ports=1_2",
        "mosh://u@host?mosh_ports=123456-1",
        "mosh://u@host?mosh_ports=99999-1",
    ] {
        assert!(
            matches!(decode(uri), Err(FormatError::InvalidMoshPorts { .. })),
            "{uri} should be rejected"
        );
    }
}

// ── encode ──────────────────────────────────────────────────────────

#[test]
fn test_encode_default_port_omitted() {
    assert_eq!(encode(&info("bob", "h")).unwrap(), "ssh://bob@h");
}

#[test]
fn test_encode_custom_port() {
    let mut info = info("bob", "h");
    info.port = 2222;
    assert_eq!(encode(&info).unwrap(), "ssh://bob@h:2222");
}

#[test]
fn test_encode_without_user_info() {
    assert_eq!(encode(&ConnectionInfo::new("h")).unwrap(), "ssh://h");
}

#[test]
fn test_encode_identity_file_comes_first() {
    let mut info = info("bob", "h");
    info.identity_file = Some("/home/bob/.ssh/id key".into());
    info.options = SshOptions::try_from(vec![
        SshOption::new("Compression", "yes"),
        SshOption::new("ProxyJump", "jump:22"),
    ])
    .unwrap();
    assert_eq!(
        encode(&info).unwrap(),
        "ssh://bob;IdentityFile=%2Fhome%2Fbob%2F.ssh%2Fid%20key,Compression=yes,ProxyJump=jump%3A22@h"
    );
}

#[test]
fn test_encode_options_without_username() {
    let mut info = ConnectionInfo::new("h");
    info.options = SshOptions::try_from(vec![SshOption::new("Compression", "yes")]).unwrap();
    assert_eq!(encode(&info).unwrap(), "ssh://;Compression=yes@h");
}

#[test]
fn test_encode_empty_identity_file_is_omitted() {
    let mut info = info("bob", "h");
    info.identity_file = Some(String::new());
    assert_eq!(encode(&info).unwrap(), "ssh://bob@h");
}

#[test]
fn test_encode_mosh() {
    let mut info = info("bob", "h");
    info.port = 2222;
    info.kind = ConnectionKind::Mosh {
        from: 60001,
        to: 60010,
    };
    assert_eq!(
        encode(&info).unwrap(),
        "mosh://bob@h:2222?mosh_ports=60001-60010"
    );
}

#[test]
fn test_encode_rejects_invalid_info() {
    assert_eq!(
        encode(&ConnectionInfo::new("")).unwrap_err(),
        ArgumentError::Invalid(ValidationVerdict::HostEmpty)
    );
    let mut info = info("bob", "h");
    info.kind = ConnectionKind::Mosh { from: 10, to: 5 };
    assert_eq!(
        encode(&info).unwrap_err(),
        ArgumentError::Invalid(ValidationVerdict::MoshRangeInverted)
    );
}

// ── round trip ──────────────────────────────────────────────────────

#[test]
fn test_roundtrip_full_record() {
    let mut info = info("josé;admin@corp", "build-01.example.com");
    info.port = 2200;
    info.identity_file = Some(r"C:\Users\José\.ssh\id_ed25519".into());
    info.options = SshOptions::try_from(vec![
        SshOption::new("ProxyCommand", "ssh -W %h:%p bastion"),
        SshOption::new("SendEnv", "LANG,LC_*"),
        SshOption::new("Empty", ""),
        SshOption::new("Weird=&?#", "a+b"),
    ])
    .unwrap();
    info.kind = ConnectionKind::Mosh {
        from: 60001,
        to: 60999,
    };

    let uri = encode(&info).unwrap();
    assert_eq!(decode(&uri).unwrap(), info);
}

#[test]
fn test_roundtrip_ipv6_host() {
    let mut info = info("root", "[fe80::1]");
    info.port = 8022;
    let uri = encode(&info).unwrap();
    assert_eq!(uri, "ssh://root@[fe80::1]:8022");
    assert_eq!(decode(&uri).unwrap(), info);
}

#[test]
fn test_encode_rejects_percent_in_host() {
    let mut info = info("u", "a%41b");
    assert_eq!(
        encode(&info).unwrap_err(),
        ArgumentError::Invalid(ValidationVerdict::HostInvalid)
    );

    info.host = "aAb".into();
    assert_eq!(decode(&encode(&info).unwrap()).unwrap(), info);
}

#[test]
fn test_alternate_mosh_formatting_reencodes_canonically() {
    let decoded = decode("mosh://u@host?mosh-ports=5:6").unwrap();
    assert_eq!(encode(&decoded).unwrap(), "mosh://u@host?mosh_ports=5-6");
}
