use netobj_core::{AddressError, AddressLiteral, Name};

fn norm(value: &str) -> String {
    AddressLiteral::normalize(value)
        .expect("valid address")
        .to_string()
}

#[test]
fn bare_addresses_gain_host_prefix() {
    for addr in ["0.0.0.0", "10.0.0.1", "192.168.255.255", "255.255.255.255"] {
        assert_eq!(norm(addr), format!("{addr}/32"));
    }
    for addr in ["::", "::1", "2001:db8::1", "fe80::1:2", "::ffff:192.0.2.1"] {
        assert_eq!(norm(addr), format!("{addr}/128"));
    }
}

#[test]
fn networks_reduce_to_network_address() {
    let cases = [
        ("10.0.0.1/8", "10.0.0.0/8"),
        ("192.168.1.130/25", "192.168.1.128/25"),
        ("192.168.1.130/32", "192.168.1.130/32"),
        ("2001:db8:1:2::5/48", "2001:db8:1::/48"),
        ("2001:db8::1/128", "2001:db8::1/128"),
    ];
    for (input, expected) in cases {
        assert_eq!(norm(input), expected, "input {input}");
        assert_eq!(norm(expected), expected, "idempotent for {expected}");
    }
}

#[test]
fn invalid_address_keeps_original_text() {
    let err = AddressLiteral::normalize(" 300.1.1.1 ").expect_err("octet out of range");
    assert_eq!(err, AddressError::Invalid(" 300.1.1.1 ".to_string()));
    assert_eq!(err.to_string(), "invalid IP address: \" 300.1.1.1 \"");
}

#[test]
fn names_and_addresses_compose() {
    let name = Name::parse("web1").expect("name");
    let addr = AddressLiteral::normalize("10.0.0.1").expect("addr");
    assert_eq!(format!("{name} {addr}"), "web1 10.0.0.1/32");
    assert!(Name::parse("web 1").is_err());
    assert!(Name::parse("web/1").is_err());
}
