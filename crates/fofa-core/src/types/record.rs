use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// One matched asset from a FOFA search
///
/// Attributes that were not requested, or were missing from the reply row,
/// are left as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Domain name
    #[serde(default)]
    pub domain: String,

    /// Host as reported by FOFA (often `ip:port` or a URL)
    #[serde(default)]
    pub host: String,

    /// IP address as text
    #[serde(default)]
    pub ip: String,

    /// Port as text; the service does not format it consistently
    #[serde(default)]
    pub port: String,

    /// Page title
    #[serde(default)]
    pub title: String,

    /// Country
    #[serde(default)]
    pub country: String,

    /// City
    #[serde(default)]
    pub city: String,
}

impl Record {
    /// Store `value` into the attribute named by `field`.
    ///
    /// Returns false for fields that have no matching attribute.
    pub fn set(&mut self, field: &Field, value: impl Into<String>) -> bool {
        let slot = match field {
            Field::Domain => &mut self.domain,
            Field::Host => &mut self.host,
            Field::Ip => &mut self.ip,
            Field::Port => &mut self.port,
            Field::Title => &mut self.title,
            Field::Country => &mut self.country,
            Field::City => &mut self.city,
            Field::Other(_) => return false,
        };
        *slot = value.into();
        true
    }

    /// Read the attribute named by `field`
    #[must_use]
    pub fn get(&self, field: &Field) -> Option<&str> {
        match field {
            Field::Domain => Some(&self.domain),
            Field::Host => Some(&self.host),
            Field::Ip => Some(&self.ip),
            Field::Port => Some(&self.port),
            Field::Title => Some(&self.title),
            Field::Country => Some(&self.country),
            Field::City => Some(&self.city),
            Field::Other(_) => None,
        }
    }

    /// Returns the IP address, if the text parses as one
    #[must_use]
    pub fn ip_addr(&self) -> Option<IpAddr> {
        self.ip.parse().ok()
    }

    /// Returns the port number, if the text parses as one
    #[must_use]
    pub fn port_number(&self) -> Option<u16> {
        self.port.trim().parse().ok()
    }
}

/// A column name that can be requested from the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Field {
    /// `domain`
    Domain,
    /// `host`
    Host,
    /// `ip`
    Ip,
    /// `port`
    Port,
    /// `title`
    Title,
    /// `country`
    Country,
    /// `city`
    City,
    /// Any other column FOFA knows about; sent along but never stored
    Other(String),
}

impl Field {
    /// The default column set, in the order FOFA returns it
    pub const DEFAULTS: [Self; 7] = [
        Self::Domain,
        Self::Host,
        Self::Ip,
        Self::Port,
        Self::Title,
        Self::Country,
        Self::City,
    ];

    /// The name used in the `fields` query parameter
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Domain => "domain",
            Self::Host => "host",
            Self::Ip => "ip",
            Self::Port => "port",
            Self::Title => "title",
            Self::Country => "country",
            Self::City => "city",
            Self::Other(name) => name,
        }
    }

    /// Returns true if values for this field land in a [`Record`] attribute
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        match s.trim() {
            "domain" => Self::Domain,
            "host" => Self::Host,
            "ip" => Self::Ip,
            "port" => Self::Port,
            "title" => Self::Title,
            "country" => Self::Country,
            "city" => Self::City,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Field> for String {
    fn from(field: Field) -> Self {
        field.as_str().to_string()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::DEFAULTS {
            assert_eq!(Field::from(field.as_str()), field);
        }
        assert_eq!(Field::from(" ip "), Field::Ip);
        assert_eq!(Field::from("header"), Field::Other("header".into()));
        assert!(!Field::from("header").is_known());
    }

    #[test]
    fn test_set_ignores_unknown_fields() {
        let mut record = Record::default();
        assert!(record.set(&Field::Title, "Example"));
        assert!(!record.set(&Field::Other("server".into()), "nginx"));
        assert_eq!(record.title, "Example");
        assert_eq!(record, Record { title: "Example".into(), ..Record::default() });
    }

    #[test]
    fn test_typed_accessors() {
        let record = Record {
            ip: "1.2.3.4".into(),
            port: "80".into(),
            ..Record::default()
        };
        assert_eq!(record.ip_addr(), Some("1.2.3.4".parse().unwrap()));
        assert_eq!(record.port_number(), Some(80));
        assert_eq!(Record::default().port_number(), None);
    }
}
