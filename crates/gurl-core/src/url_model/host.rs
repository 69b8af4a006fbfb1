//! Hostname helpers.

/// Returns every label except the last two, joined with `.`.
///
/// Hostnames with two or fewer labels have no subdomain and yield `""`; no
/// public-suffix lookup is done, so `www.example.co.uk` gives `www.example`.
pub fn subdomain_of(hostname: &str) -> String {
    let labels: Vec<&str> = hostname.split('.').collect();
    if labels.len() > 2 {
        labels[..labels.len() - 2].join(".")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_subdomain() {
        assert_eq!(subdomain_of("www.example.com"), "www");
    }

    #[test]
    fn nested_subdomains() {
        assert_eq!(subdomain_of("a.b.c.example.com"), "a.b.c");
    }

    #[test]
    fn registrable_domain_has_none() {
        assert_eq!(subdomain_of("example.com"), "");
        assert_eq!(subdomain_of("localhost"), "");
        assert_eq!(subdomain_of(""), "");
    }
}
