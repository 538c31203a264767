use std::net::Ipv4Addr;

use super::*;

fn limiter(max_requests: usize, window_secs: u64) -> RateLimiter {
    RateLimiter::new(ContactLimits { max_requests, window: Duration::from_secs(window_secs) })
}

fn ip(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
}

#[test]
fn allows_up_to_limit() {
    let rl = limiter(3, 60);
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at(ip(1), now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at(ip(1), now),
        Err(RateLimitError::Exceeded { limit: 3, window_secs: 60 })
    );
}

#[test]
fn clients_are_independent() {
    let rl = limiter(1, 60);
    let now = Instant::now();

    assert!(rl.check_and_record_at(ip(1), now).is_ok());
    assert!(rl.check_and_record_at(ip(1), now).is_err());
    assert!(rl.check_and_record_at(ip(2), now).is_ok());
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter(2, 60);
    let start = Instant::now();

    rl.check_and_record_at(ip(1), start).unwrap();
    rl.check_and_record_at(ip(1), start).unwrap();
    assert!(rl.check_and_record_at(ip(1), start).is_err());

    let later = start + Duration::from_secs(61);
    assert!(rl.check_and_record_at(ip(1), later).is_ok());
}

#[test]
fn expired_clients_are_forgotten() {
    let rl = limiter(5, 10);
    let start = Instant::now();

    rl.check_and_record_at(ip(1), start).unwrap();
    rl.check_and_record_at(ip(2), start).unwrap();
    assert_eq!(rl.tracked_clients(), 2);

    rl.check_and_record_at(ip(3), start + Duration::from_secs(11)).unwrap();
    assert_eq!(rl.tracked_clients(), 1);
}

#[test]
fn error_message_names_limit() {
    let err = RateLimitError::Exceeded { limit: 5, window_secs: 600 };
    assert_eq!(err.to_string(), "rate limit exceeded (max 5 requests/600s)");
}
