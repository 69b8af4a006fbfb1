//! The directive table: one variant per `%` letter.

use crate::url_model::DecomposedUrl;

/// A recognized `%x` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Scheme,
    SchemeDelimiter,
    Auth,
    AuthDelimiter,
    Username,
    Password,
    Host,
    Domain,
    Subdomain,
    Port,
    Path,
    Base,
    Query,
    QueryDelimiter,
    Fragment,
    FragmentDelimiter,
}

impl Directive {
    /// Every directive, in help-text order.
    pub const ALL: [Directive; 16] = [
        Directive::Scheme,
        Directive::SchemeDelimiter,
        Directive::Auth,
        Directive::AuthDelimiter,
        Directive::Username,
        Directive::Password,
        Directive::Host,
        Directive::Domain,
        Directive::Subdomain,
        Directive::Port,
        Directive::Path,
        Directive::Base,
        Directive::Query,
        Directive::QueryDelimiter,
        Directive::Fragment,
        Directive::FragmentDelimiter,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        let directive = match c {
            's' => Directive::Scheme,
            'S' => Directive::SchemeDelimiter,
            'a' => Directive::Auth,
            'A' => Directive::AuthDelimiter,
            'u' => Directive::Username,
            'U' => Directive::Password,
            'H' => Directive::Host,
            'D' => Directive::Domain,
            'd' => Directive::Subdomain,
            'P' => Directive::Port,
            'p' => Directive::Path,
            'b' => Directive::Base,
            'q' => Directive::Query,
            'Q' => Directive::QueryDelimiter,
            'f' => Directive::Fragment,
            'F' => Directive::FragmentDelimiter,
            _ => return None,
        };
        Some(directive)
    }

    pub fn letter(self) -> char {
        match self {
            Directive::Scheme => 's',
            Directive::SchemeDelimiter => 'S',
            Directive::Auth => 'a',
            Directive::AuthDelimiter => 'A',
            Directive::Username => 'u',
            Directive::Password => 'U',
            Directive::Host => 'H',
            Directive::Domain => 'D',
            Directive::Subdomain => 'd',
            Directive::Port => 'P',
            Directive::Path => 'p',
            Directive::Base => 'b',
            Directive::Query => 'q',
            Directive::QueryDelimiter => 'Q',
            Directive::Fragment => 'f',
            Directive::FragmentDelimiter => 'F',
        }
    }

    /// Short name shown in usage text.
    pub fn description(self) -> &'static str {
        match self {
            Directive::Scheme => "scheme",
            Directive::SchemeDelimiter => "scheme delimiter",
            Directive::Auth => "auth",
            Directive::AuthDelimiter => "auth with delimiter",
            Directive::Username => "username",
            Directive::Password => "password",
            Directive::Host => "host",
            Directive::Domain => "domain",
            Directive::Subdomain => "subdomain",
            Directive::Port => "port",
            Directive::Path => "path",
            Directive::Base => "base",
            Directive::Query => "query",
            Directive::QueryDelimiter => "query with delimiter",
            Directive::Fragment => "fragment",
            Directive::FragmentDelimiter => "fragment with delimiter",
        }
    }

    /// Append this directive's value for `url` to `out`.
    ///
    /// `%Q` and `%F` always write their delimiter; `%S` and `%A` only write
    /// theirs when there is a scheme / userinfo to delimit.
    pub fn expand(self, url: &DecomposedUrl, out: &mut String) {
        match self {
            Directive::Scheme => out.push_str(&url.scheme),
            Directive::SchemeDelimiter => {
                if !url.scheme.is_empty() {
                    out.push_str("://");
                }
            }
            Directive::Auth => {
                if let Some(creds) = &url.credentials {
                    out.push_str(&creds.userinfo());
                }
            }
            Directive::AuthDelimiter => {
                if let Some(creds) = &url.credentials {
                    out.push_str(&creds.userinfo());
                    out.push('@');
                }
            }
            Directive::Username => {
                if let Some(creds) = &url.credentials {
                    out.push_str(&creds.username);
                }
            }
            Directive::Password => {
                if let Some(password) = url
                    .credentials
                    .as_ref()
                    .and_then(|c| c.password.as_deref())
                {
                    out.push_str(password);
                }
            }
            Directive::Host => out.push_str(&url.host),
            Directive::Domain => out.push_str(&url.hostname),
            Directive::Subdomain => out.push_str(&url.subdomain()),
            Directive::Port => out.push_str(&url.port),
            Directive::Path => out.push_str(&url.path),
            Directive::Base => out.push_str(&url.basename()),
            Directive::Query => out.push_str(&url.raw_query),
            Directive::QueryDelimiter => {
                out.push('?');
                out.push_str(&url.raw_query);
            }
            Directive::Fragment => out.push_str(&url.fragment),
            Directive::FragmentDelimiter => {
                out.push('#');
                out.push_str(&url.fragment);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip_through_lookup() {
        for directive in Directive::ALL {
            assert_eq!(Directive::from_char(directive.letter()), Some(directive));
        }
    }

    #[test]
    fn letters_are_unique() {
        let mut letters: Vec<char> = Directive::ALL.iter().map(|d| d.letter()).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), Directive::ALL.len());
    }

    #[test]
    fn unknown_letters_have_no_directive() {
        for c in ['x', 'Z', '%', '1', ' '] {
            assert_eq!(Directive::from_char(c), None);
        }
    }
}
