use super::*;

#[test]
fn contact_failed_message_formats_status() {
    assert_eq!(contact_failed_message(429), "contact request failed: 429");
}

#[test]
fn contact_endpoint_is_api_path() {
    assert!(CONTACT_ENDPOINT.starts_with("/api/"));
}
