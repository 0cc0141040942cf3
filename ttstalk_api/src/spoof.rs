//! Randomized forwarded-IP values attached to outbound requests.

use rand::Rng;

/// Returns an IPv4-shaped string with each octet uniform over 0..255.
///
/// Reserved ranges are not excluded. The value only varies the
/// `X-Forwarded-For` / `X-Real-IP` headers between requests and has no
/// correctness implication; tests can substitute a fixed string.
pub fn random_ipv4() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{}.{}.{}.{}",
        rng.gen_range(0..255),
        rng.gen_range(0..255),
        rng.gen_range(0..255),
        rng.gen_range(0..255)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_valid_octets() {
        for _ in 0..100 {
            let ip = random_ipv4();
            let octets: Vec<&str> = ip.split('.').collect();
            assert_eq!(octets.len(), 4, "not dotted quad: {}", ip);
            for octet in octets {
                let value: u16 = octet.parse().expect("octet not numeric");
                assert!(value < 255, "octet out of range in {}", ip);
            }
        }
    }
}
